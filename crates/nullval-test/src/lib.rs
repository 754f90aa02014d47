//! nullval - integration test support.
//!
//! Re-exports the workspace crates under one path and provides shared
//! checks that every nullable value type must pass.

use nullval_core::{DbValue, NullableValue};

pub mod component {
    pub use nullval_core::*;
    pub use nullval_interval::*;
}

/// Checks the encodings of a value that is not zero.
///
/// ## Panics
/// Panics if any encoding fails to round-trip.
pub fn assert_non_zero_round_trip<T>(value: &T)
where
    T: NullableValue + PartialEq + std::fmt::Debug,
{
    assert!(!value.is_zero(), "{value:?} must not be zero");
    assert!(!value.is_null());

    let text = value.to_text();
    tracing::debug!(type_name = T::TYPE_NAME, %text, "Checking round trip");
    assert_eq!(&T::parse_text(&text).expect("text round trip"), value);
    assert_eq!(
        &T::from_json(value.to_json()).expect("json round trip"),
        value
    );
    assert_eq!(
        &T::from_db_value(value.to_db_value()).expect("db round trip"),
        value
    );
}

/// Checks how the zero value of `T` encodes, given whether `T` treats zero
/// as absent.
///
/// ## Panics
/// Panics if the zero value encodes inconsistently.
pub fn assert_zero_encoding<T>(nullable: bool)
where
    T: NullableValue + PartialEq + std::fmt::Debug,
{
    let zero = T::default();
    assert!(zero.is_zero());
    assert_eq!(zero.is_null(), nullable);

    if nullable {
        assert_eq!(zero.to_text(), "");
        assert_eq!(zero.to_json(), serde_json::Value::Null);
        assert_eq!(zero.to_db_value(), DbValue::Null);
        assert_eq!(T::from_db_value(DbValue::Null).expect("null scan"), zero);
        assert_eq!(T::parse_text("").expect("empty text"), zero);
    } else {
        assert!(!zero.to_text().is_empty());
        assert!(zero.to_json().is_string());
        assert!(T::from_db_value(DbValue::Null).is_err());
        assert!(T::parse_text("").is_err());
    }

    assert_eq!(T::from_json(zero.to_json()).expect("zero json"), zero);
}
