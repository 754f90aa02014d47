//! ISO 8601 duration parsing.
//!
//! ## Usage
//!
//! ```rust
//! use nullval_interval::{Interval, ParseErrorKind, ParseOptions};
//!
//! let val = Interval::parse("P1Y2M3DT4H5M6S").unwrap();
//! assert_eq!(val, Interval::new(1, 2, 3, 4, 5, 6));
//!
//! let err = Interval::parse("P1Y-").unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
//!
//! // A trailing `T` is accepted unless disabled
//! assert!(Interval::parse("P1YT").is_ok());
//! assert!(Interval::parse_with("P1YT", ParseOptions::STRICT).is_err());
//! ```
//!
//! The grammar is recognised by a hand-written state machine equivalent to
//! `^P(?:(-?\d+)Y)?(?:(-?\d+)M)?(?:(-?\d+)D)?(?:T(?:(-?\d+)H)?(?:(-?\d+)M)?(?:(-?\d+)S)?)?$`
//! minus the bare `P`. It runs in one pass and allocates only on failure.

mod error;
mod machine;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;


use nullval_core::config::IntervalConfig;

use crate::interval::Interval;

pub use error::{ParseError, ParseErrorKind, ParseResult};

/// Parser behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept a `T` with no time components after it (`P1YT`, `PT`).
    pub allow_empty_time: bool,
}

impl ParseOptions {
    /// Accepts a trailing empty time section.
    pub const LENIENT: Self = Self {
        allow_empty_time: true,
    };

    /// Rejects a trailing empty time section.
    pub const STRICT: Self = Self {
        allow_empty_time: false,
    };
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::from(&IntervalConfig::default())
    }
}

impl From<&IntervalConfig> for ParseOptions {
    fn from(config: &IntervalConfig) -> Self {
        Self {
            allow_empty_time: config.allow_empty_time,
        }
    }
}

/// Parses `src`, naming `type_name` in any error.
pub(crate) fn parse(
    src: &str,
    options: ParseOptions,
    type_name: &'static str,
) -> ParseResult<Interval> {
    machine::run(src.as_bytes(), options).map_err(|failure| {
        tracing::trace!(
            input = src,
            kind = ?failure.kind,
            position = failure.position,
            "Rejected duration"
        );
        ParseError::new(failure.kind, src, type_name, failure.position)
    })
}
