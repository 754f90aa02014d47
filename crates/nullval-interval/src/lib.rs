//! ISO 8601 durations as nullable value types.
//!
//! ## Overview
//!
//! [`Interval`] is an unanchored calendar/clock duration made of six
//! independently signed fields. It encodes to and from the machine-readable
//! ISO 8601 form `P[nY][nM][nD][T[nH][nM][nS]]`, to JSON as that string, and
//! to `PostgreSQL` either as text or as a native `interval`.
//!
//! [`NullInterval`] has the same layout but treats the zero value as absent:
//! empty text, JSON `null`, SQL `NULL`.
//!
//! ## Usage
//!
//! ```rust
//! use nullval_interval::{Interval, NullInterval};
//!
//! let interval: Interval = "P1Y2M3DT4H5M6S".parse().unwrap();
//! assert_eq!(interval, Interval::new(1, 2, 3, 4, 5, 6));
//! assert_eq!(interval.to_string(), "P1Y2M3DT4H5M6S");
//!
//! assert_eq!(Interval::ZERO.to_string(), "PT0S");
//! assert_eq!(NullInterval::NULL.to_string(), "");
//! assert_eq!(NullInterval::parse("").unwrap(), NullInterval::NULL);
//! ```
//!
//! Fields are never normalised: `PT90S` stays 90 seconds, and adding two
//! intervals adds each field separately.
//!
//! ## Submodules
//!
//! - [`parse`] - State-machine parser, options and error types
//! - [`pg`] - `PostgreSQL` bindings for diesel

mod error;
mod format;
mod interval;
mod json;
mod null;
pub mod parse;
pub mod pg;
mod value;

#[cfg(test)]
mod tests;

pub use error::{IntervalError, IntervalResult};
pub use interval::Interval;
pub use null::NullInterval;
pub use parse::{ParseError, ParseErrorKind, ParseOptions};
