//! The contract every nullable value type implements.
//!
//! ## Summary
//! Each type wraps a primitive and agrees on how its zero value crosses an
//! encoding boundary. Non-null types always encode their zero value
//! explicitly. Null types treat it as absent: `""` in text, `null` in JSON
//! and [`DbValue::Null`] towards the database.

use chrono::TimeDelta;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};

/// A value as exchanged with a database driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbValue {
    /// SQL `NULL`.
    Null,
    /// A text column value.
    Text(String),
    /// Raw bytes, expected to hold UTF-8 text.
    Bytes(Vec<u8>),
    /// A fixed-unit duration.
    Duration(TimeDelta),
}

impl DbValue {
    /// Short name of the variant, used in scan errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Duration(_) => "duration",
        }
    }

    /// True for [`DbValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<String> for DbValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DbValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<u8>> for DbValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<TimeDelta> for DbValue {
    fn from(value: TimeDelta) -> Self {
        Self::Duration(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for DbValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Uniform encode/decode surface shared by every value type.
pub trait NullableValue: Sized + Default + DeserializeOwned {
    /// Human-readable type name embedded in error messages.
    const TYPE_NAME: &'static str;

    /// True for the all-zero value.
    fn is_zero(&self) -> bool;

    /// True when the value encodes as absent. Always `false` for non-null types.
    fn is_null(&self) -> bool;

    /// Parses the type's text form.
    ///
    /// ## Errors
    /// Returns an error if the text is not a valid representation.
    fn parse_text(src: &str) -> CoreResult<Self>;

    /// Canonical text form.
    fn to_text(&self) -> String;

    /// Canonical JSON value.
    fn to_json(&self) -> serde_json::Value;

    /// Converts to the value handed to a database driver.
    fn to_db_value(&self) -> DbValue;

    /// Converts a value read from a database driver.
    ///
    /// ## Errors
    /// Returns an error if the input kind is not accepted or fails to parse.
    fn from_db_value(value: DbValue) -> CoreResult<Self>;

    /// Zeroes the receiver in place.
    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Decodes a JSON value.
    ///
    /// ## Errors
    /// Returns [`CoreError::DecodeError`] naming the input and the type.
    fn from_json(value: serde_json::Value) -> CoreResult<Self> {
        let input = value.to_string();
        serde_json::from_value(value).map_err(|err| CoreError::DecodeError {
            type_name: Self::TYPE_NAME,
            input,
            reason: err.to_string(),
        })
    }

    /// Same as [`NullableValue::from_db_value`], assigning into the receiver.
    ///
    /// ## Panics
    /// Panics if the value can't be converted. Only for trusted input.
    fn set(&mut self, value: DbValue) {
        match Self::from_db_value(value) {
            Ok(val) => *self = val,
            Err(err) => panic!("{err}"),
        }
    }
}
