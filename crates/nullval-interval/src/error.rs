use nullval_core::CoreError;
use thiserror::Error;

use crate::interval::Interval;
use crate::parse::ParseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Can't convert interval {interval} with a date part to a fixed duration")]
    InvalidDateConversion { interval: Interval },

    #[error("Interval {interval} does not fit a fixed duration")]
    DurationOverflow { interval: Interval },

    #[error("Interval field {field} = {value} is out of range for the target encoding")]
    FieldOverflow { field: &'static str, value: i64 },

    #[error("Interval text is not valid UTF-8")]
    InvalidUtf8,

    #[error("Binary interval must be 16 bytes, got {len}")]
    InvalidPgInterval { len: usize },
}

pub type IntervalResult<T> = std::result::Result<T, IntervalError>;

impl From<ParseError> for CoreError {
    fn from(err: ParseError) -> Self {
        Self::ParseError {
            type_name: err.type_name,
            reason: format!("{} at position {}", err.kind, err.position),
            input: err.input,
        }
    }
}

impl From<IntervalError> for CoreError {
    fn from(err: IntervalError) -> Self {
        match err {
            IntervalError::Parse(err) => err.into(),
            other => Self::ConversionError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseErrorKind;

    #[test]
    fn parse_error_into_core() {
        let err = Interval::parse("P1X").unwrap_err();
        let core = CoreError::from(err);
        assert!(matches!(
            &core,
            CoreError::ParseError { type_name: "interval", input, .. } if input == "P1X"
        ));
        assert_eq!(
            core.to_string(),
            r#"Failed to parse "P1X" into interval: format mismatch at position 2"#
        );
    }

    #[test]
    fn interval_error_parse_is_transparent() {
        let err = IntervalError::from(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            "P",
            "interval",
            1,
        ));
        assert_eq!(
            err.to_string(),
            r#"failed to parse "P" into interval: unexpected end of input at position 1"#
        );
        assert!(matches!(CoreError::from(err), CoreError::ParseError { .. }));
    }

    #[test]
    fn conversion_errors_into_core() {
        let err = IntervalError::InvalidDateConversion {
            interval: Interval::date(0, 0, 1),
        };
        assert_eq!(
            err.to_string(),
            "Can't convert interval P1D with a date part to a fixed duration"
        );
        assert!(matches!(
            CoreError::from(err),
            CoreError::ConversionError(msg) if msg.contains("P1D")
        ));

        let err = IntervalError::FieldOverflow {
            field: "days",
            value: i64::MAX,
        };
        assert!(err.to_string().contains("days"));
    }
}
