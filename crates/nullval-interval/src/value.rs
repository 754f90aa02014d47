//! Nullable-value contract for both interval types.

use nullval_core::{CoreError, CoreResult, DbValue, NullableValue};

use crate::error::IntervalError;
use crate::interval::Interval;
use crate::null::NullInterval;

/// Text or bytes from a driver, as UTF-8.
fn db_text(value: &DbValue) -> CoreResult<Option<&str>> {
    match value {
        DbValue::Text(text) => Ok(Some(text)),
        DbValue::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Some(text)),
            Err(_) => Err(IntervalError::InvalidUtf8.into()),
        },
        DbValue::Null | DbValue::Duration(_) => Ok(None),
    }
}

impl NullableValue for Interval {
    const TYPE_NAME: &'static str = Self::TYPE_NAME;

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }

    fn is_null(&self) -> bool {
        false
    }

    fn parse_text(src: &str) -> CoreResult<Self> {
        Ok(Self::parse(src)?)
    }

    fn to_text(&self) -> String {
        self.to_iso_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::String(self.to_iso_string())
    }

    fn to_db_value(&self) -> DbValue {
        DbValue::Text(self.to_iso_string())
    }

    fn from_db_value(value: DbValue) -> CoreResult<Self> {
        if let Some(text) = db_text(&value)? {
            return Self::parse_text(text);
        }
        match value {
            DbValue::Duration(duration) => Ok(Self::from_duration(duration)),
            other => Err(CoreError::ScanError {
                type_name: Self::TYPE_NAME,
                found: other.kind(),
            }),
        }
    }
}

impl NullableValue for NullInterval {
    const TYPE_NAME: &'static str = Self::TYPE_NAME;

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }

    fn is_null(&self) -> bool {
        Self::is_null(self)
    }

    fn parse_text(src: &str) -> CoreResult<Self> {
        Ok(Self::parse(src)?)
    }

    fn to_text(&self) -> String {
        self.to_iso_string()
    }

    fn to_json(&self) -> serde_json::Value {
        if self.is_null() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(self.to_iso_string())
        }
    }

    fn to_db_value(&self) -> DbValue {
        if self.is_null() {
            DbValue::Null
        } else {
            DbValue::Text(self.to_iso_string())
        }
    }

    fn from_db_value(value: DbValue) -> CoreResult<Self> {
        if let Some(text) = db_text(&value)? {
            return Self::parse_text(text);
        }
        match value {
            DbValue::Duration(duration) => Ok(Self::from_duration(duration)),
            _ => Ok(Self::NULL),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use serde_json::json;

    use super::*;

    #[test]
    fn interval_contract_basics() {
        assert_eq!(<Interval as NullableValue>::TYPE_NAME, "interval");
        assert!(NullableValue::is_zero(&Interval::ZERO));
        assert!(!NullableValue::is_null(&Interval::ZERO));
        assert_eq!(Interval::ZERO.to_text(), "PT0S");
        assert_eq!(Interval::ZERO.to_json(), json!("PT0S"));
        assert_eq!(
            Interval::ZERO.to_db_value(),
            DbValue::Text("PT0S".to_owned())
        );
    }

    #[test]
    fn null_interval_contract_basics() {
        assert_eq!(<NullInterval as NullableValue>::TYPE_NAME, "null interval");
        assert!(NullableValue::is_null(&NullInterval::NULL));
        assert_eq!(NullInterval::NULL.to_text(), "");
        assert_eq!(NullInterval::NULL.to_json(), serde_json::Value::Null);
        assert_eq!(NullInterval::NULL.to_db_value(), DbValue::Null);

        let val = NullInterval::date(0, 0, 1);
        assert_eq!(val.to_json(), json!("P1D"));
        assert_eq!(val.to_db_value(), DbValue::Text("P1D".to_owned()));
    }

    #[test]
    fn interval_from_db_value() {
        assert_eq!(
            Interval::from_db_value(DbValue::from("PT1H")).unwrap(),
            Interval::time(1, 0, 0)
        );
        assert_eq!(
            Interval::from_db_value(DbValue::from(b"P2D".to_vec())).unwrap(),
            Interval::date(0, 0, 2)
        );
        assert_eq!(
            Interval::from_db_value(DbValue::from(TimeDelta::seconds(3661))).unwrap(),
            Interval::time(1, 1, 1)
        );
    }

    #[test]
    fn interval_from_db_value_rejects_null() {
        let err = Interval::from_db_value(DbValue::Null).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ScanError {
                type_name: "interval",
                found: "null"
            }
        ));
    }

    #[test]
    fn from_db_value_rejects_invalid_bytes() {
        let err = Interval::from_db_value(DbValue::Bytes(vec![0xff])).unwrap_err();
        assert!(matches!(err, CoreError::ConversionError(_)));
        assert!(NullInterval::from_db_value(DbValue::Bytes(vec![0xff])).is_err());
    }

    #[test]
    fn from_db_value_parse_error_names_type() {
        let err = NullInterval::from_db_value(DbValue::from("P1")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ParseError {
                type_name: "null interval",
                ..
            }
        ));
    }

    #[test]
    fn null_interval_from_db_value() {
        assert_eq!(
            NullInterval::from_db_value(DbValue::Null).unwrap(),
            NullInterval::NULL
        );
        assert_eq!(
            NullInterval::from_db_value(DbValue::from("")).unwrap(),
            NullInterval::NULL
        );
        assert_eq!(
            NullInterval::from_db_value(DbValue::from(TimeDelta::minutes(-2))).unwrap(),
            NullInterval::time(0, -2, 0)
        );
    }

    #[test]
    fn from_json_decodes_and_names_type() {
        assert_eq!(
            Interval::from_json(json!("P1M")).unwrap(),
            Interval::date(0, 1, 0)
        );
        assert_eq!(
            NullInterval::from_json(serde_json::Value::Null).unwrap(),
            NullInterval::NULL
        );

        let err = Interval::from_json(json!(5)).unwrap_err();
        assert!(matches!(
            &err,
            CoreError::DecodeError { type_name: "interval", input, .. } if input == "5"
        ));
        assert!(err.to_string().contains("expected"), "{err}");
    }

    #[test]
    fn set_assigns() {
        let mut val = Interval::ZERO;
        val.set(DbValue::from("PT5S"));
        assert_eq!(val, Interval::time(0, 0, 5));

        let mut val = NullInterval::time(0, 0, 5);
        val.set(DbValue::Null);
        assert!(val.is_null());
    }

    #[test]
    #[should_panic(expected = "Unrecognized input for type interval: null")]
    fn set_panics_on_null_for_interval() {
        let mut val = Interval::ZERO;
        val.set(DbValue::Null);
    }

    #[test]
    fn clear_zeroes() {
        let mut val = Interval::time(1, 0, 0);
        NullableValue::clear(&mut val);
        assert!(val.is_zero());
    }
}
