//! ISO 8601 duration value.

mod arith;

use diesel::sql_types::{Interval as SqlInterval, Text};
use diesel::{AsExpression, FromSqlRow};

use crate::parse::{self, ParseError, ParseOptions};

/// Duration value (ISO 8601, machine-readable form).
///
/// Represents an unanchored duration as six independent, signed fields.
/// Fields may mix signs and are never normalised across units: 90 seconds
/// stays 90 seconds rather than becoming 1 minute 30 seconds.
///
/// Text form: `P[nY][nM][nD][T[nH][nM][nS]]`, zero fields omitted, the zero
/// value written as `PT0S`. Decimal fractions and the week designator are
/// not supported.
///
/// For a variant whose zero value encodes as null, see
/// [`NullInterval`](crate::NullInterval).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[diesel(sql_type = SqlInterval)]
pub struct Interval {
    /// Number of years.
    pub years: i64,
    /// Number of months.
    pub months: i64,
    /// Number of days.
    pub days: i64,
    /// Number of hours.
    pub hours: i64,
    /// Number of minutes.
    pub minutes: i64,
    /// Number of seconds.
    pub seconds: i64,
}

impl Interval {
    /// The zero duration.
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0);

    /// Type name used in error messages.
    pub const TYPE_NAME: &'static str = "interval";

    /// Creates an interval from all six fields.
    #[must_use]
    pub const fn new(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Creates an interval without a time part.
    #[must_use]
    pub const fn date(years: i64, months: i64, days: i64) -> Self {
        Self::new(years, months, days, 0, 0, 0)
    }

    /// Creates an interval without a date part.
    #[must_use]
    pub const fn time(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self::new(0, 0, 0, hours, minutes, seconds)
    }

    /// Parses the machine-readable ISO 8601 form with default options.
    ///
    /// ## Errors
    /// Returns an error if `src` does not match the grammar.
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        Self::parse_with(src, ParseOptions::default())
    }

    /// Parses the machine-readable ISO 8601 form.
    ///
    /// ## Errors
    /// Returns an error if `src` does not match the grammar.
    pub fn parse_with(src: &str, options: ParseOptions) -> Result<Self, ParseError> {
        parse::parse(src, options, Self::TYPE_NAME)
    }

    /// Parses successfully or panics.
    ///
    /// Only for literals known to be valid (constants, fixtures). Use
    /// [`Interval::parse`] for anything externally supplied.
    ///
    /// ## Panics
    /// Panics if `src` is not a valid duration.
    #[must_use]
    pub fn parse_or_panic(src: &str) -> Self {
        match Self::parse(src) {
            Ok(val) => val,
            Err(err) => panic!("{err}"),
        }
    }

    /// True if every field is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }

    /// True if the interval has years, months, or days.
    #[must_use]
    pub const fn has_date(&self) -> bool {
        self.years != 0 || self.months != 0 || self.days != 0
    }

    /// True if the interval has hours, minutes, or seconds.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0
    }

    /// Returns `(years, months, days)`, disregarding the time part.
    #[must_use]
    pub const fn date_parts(&self) -> (i64, i64, i64) {
        (self.years, self.months, self.days)
    }

    /// Returns `(hours, minutes, seconds)`, disregarding the date part.
    #[must_use]
    pub const fn time_parts(&self) -> (i64, i64, i64) {
        (self.hours, self.minutes, self.seconds)
    }

    /// Returns only the date part, with the time fields zeroed.
    #[must_use]
    pub const fn only_date(&self) -> Self {
        Self::date(self.years, self.months, self.days)
    }

    /// Returns only the time part, with the date fields zeroed.
    #[must_use]
    pub const fn only_time(&self) -> Self {
        Self::time(self.hours, self.minutes, self.seconds)
    }

    /// Zeroes the receiver.
    pub const fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Returns a copy with `years` replaced.
    #[must_use]
    pub const fn with_years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    /// Returns a copy with `months` replaced.
    #[must_use]
    pub const fn with_months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }

    /// Returns a copy with `days` replaced.
    #[must_use]
    pub const fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Returns a copy with `hours` replaced.
    #[must_use]
    pub const fn with_hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    /// Returns a copy with `minutes` replaced.
    #[must_use]
    pub const fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Returns a copy with `seconds` replaced.
    #[must_use]
    pub const fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
