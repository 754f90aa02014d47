//! Interval whose zero value encodes as absent.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use chrono::TimeDelta;
use diesel::sql_types::{Interval as SqlInterval, Text};
use diesel::{AsExpression, FromSqlRow};

use crate::error::IntervalResult;
use crate::interval::Interval;
use crate::parse::{ParseError, ParseOptions};

/// Nullable duration.
///
/// Same fields and behaviour as [`Interval`], except the zero value is null:
/// it formats as `""`, serializes as JSON `null`, and binds as SQL `NULL`.
/// Empty text, JSON `null` and SQL `NULL` decode back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[diesel(sql_type = SqlInterval)]
#[repr(transparent)]
pub struct NullInterval(pub Interval);

impl NullInterval {
    /// The null (zero) value.
    pub const NULL: Self = Self(Interval::ZERO);

    /// Type name used in error messages.
    pub const TYPE_NAME: &'static str = "null interval";

    /// Creates a value from all six fields; all zero is null.
    #[must_use]
    pub const fn new(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Self {
        Self(Interval::new(years, months, days, hours, minutes, seconds))
    }

    /// Creates a value without a time part.
    #[must_use]
    pub const fn date(years: i64, months: i64, days: i64) -> Self {
        Self(Interval::date(years, months, days))
    }

    /// Creates a value without a date part.
    #[must_use]
    pub const fn time(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self(Interval::time(hours, minutes, seconds))
    }

    /// See [`Interval::from_duration`].
    #[must_use]
    pub fn from_duration(duration: TimeDelta) -> Self {
        Self(Interval::from_duration(duration))
    }

    /// Parses the ISO 8601 form with default options. Empty input is null.
    ///
    /// ## Errors
    /// Returns an error if non-empty `src` does not match the grammar.
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        Self::parse_with(src, ParseOptions::default())
    }

    /// Parses the ISO 8601 form. Empty input is null.
    ///
    /// ## Errors
    /// Returns an error if non-empty `src` does not match the grammar.
    pub fn parse_with(src: &str, options: ParseOptions) -> Result<Self, ParseError> {
        if src.is_empty() {
            return Ok(Self::NULL);
        }
        crate::parse::parse(src, options, Self::TYPE_NAME).map(Self)
    }

    /// Parses successfully or panics.
    ///
    /// ## Panics
    /// Panics if `src` is neither empty nor a valid duration.
    #[must_use]
    pub fn parse_or_panic(src: &str) -> Self {
        match Self::parse(src) {
            Ok(val) => val,
            Err(err) => panic!("{err}"),
        }
    }

    /// True for the zero value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.0.is_zero()
    }

    /// True if every field is zero; same as [`NullInterval::is_null`].
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// See [`Interval::has_date`].
    #[must_use]
    pub const fn has_date(&self) -> bool {
        self.0.has_date()
    }

    /// See [`Interval::has_time`].
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.0.has_time()
    }

    /// Returns `(years, months, days)`.
    #[must_use]
    pub const fn date_parts(&self) -> (i64, i64, i64) {
        self.0.date_parts()
    }

    /// Returns `(hours, minutes, seconds)`.
    #[must_use]
    pub const fn time_parts(&self) -> (i64, i64, i64) {
        self.0.time_parts()
    }

    /// Returns only the date part; null if there is none.
    #[must_use]
    pub const fn only_date(&self) -> Self {
        Self(self.0.only_date())
    }

    /// Returns only the time part; null if there is none.
    #[must_use]
    pub const fn only_time(&self) -> Self {
        Self(self.0.only_time())
    }

    /// See [`Interval::to_duration`]. Null converts to a zero duration.
    ///
    /// ## Errors
    /// Same as [`Interval::to_duration`].
    pub fn to_duration(&self) -> IntervalResult<TimeDelta> {
        self.0.to_duration()
    }

    /// Borrows the non-null view.
    #[must_use]
    pub const fn interval(&self) -> &Interval {
        &self.0
    }

    /// Unwraps into the non-null view.
    #[must_use]
    pub const fn into_inner(self) -> Interval {
        self.0
    }

    /// `None` when null.
    #[must_use]
    pub const fn into_option(self) -> Option<Interval> {
        if self.is_null() { None } else { Some(self.0) }
    }

    /// Sets the receiver to null.
    pub const fn clear(&mut self) {
        self.0.clear();
    }

    /// Exact byte length of the text form; 0 when null.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        if self.is_null() {
            0
        } else {
            self.0.encoded_len()
        }
    }

    /// Appends the text form to `buf`; appends nothing when null.
    pub fn append_to(&self, buf: &mut String) {
        if !self.is_null() {
            self.0.append_to(buf);
        }
    }

    /// Text form as an owned string, `""` when null.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        if self.is_null() {
            String::new()
        } else {
            self.0.to_iso_string()
        }
    }

    /// Returns a copy with `years` replaced.
    #[must_use]
    pub const fn with_years(self, years: i64) -> Self {
        Self(self.0.with_years(years))
    }

    /// Returns a copy with `months` replaced.
    #[must_use]
    pub const fn with_months(self, months: i64) -> Self {
        Self(self.0.with_months(months))
    }

    /// Returns a copy with `days` replaced.
    #[must_use]
    pub const fn with_days(self, days: i64) -> Self {
        Self(self.0.with_days(days))
    }

    /// Returns a copy with `hours` replaced.
    #[must_use]
    pub const fn with_hours(self, hours: i64) -> Self {
        Self(self.0.with_hours(hours))
    }

    /// Returns a copy with `minutes` replaced.
    #[must_use]
    pub const fn with_minutes(self, minutes: i64) -> Self {
        Self(self.0.with_minutes(minutes))
    }

    /// Returns a copy with `seconds` replaced.
    #[must_use]
    pub const fn with_seconds(self, seconds: i64) -> Self {
        Self(self.0.with_seconds(seconds))
    }

    /// Returns a copy with `years` added, wrapping on overflow.
    #[must_use]
    pub const fn add_years(self, years: i64) -> Self {
        Self(self.0.add_years(years))
    }

    /// Returns a copy with `months` added, wrapping on overflow.
    #[must_use]
    pub const fn add_months(self, months: i64) -> Self {
        Self(self.0.add_months(months))
    }

    /// Returns a copy with `days` added, wrapping on overflow.
    #[must_use]
    pub const fn add_days(self, days: i64) -> Self {
        Self(self.0.add_days(days))
    }

    /// Returns a copy with `hours` added, wrapping on overflow.
    #[must_use]
    pub const fn add_hours(self, hours: i64) -> Self {
        Self(self.0.add_hours(hours))
    }

    /// Returns a copy with `minutes` added, wrapping on overflow.
    #[must_use]
    pub const fn add_minutes(self, minutes: i64) -> Self {
        Self(self.0.add_minutes(minutes))
    }

    /// Returns a copy with `seconds` added, wrapping on overflow.
    #[must_use]
    pub const fn add_seconds(self, seconds: i64) -> Self {
        Self(self.0.add_seconds(seconds))
    }
}

impl fmt::Display for NullInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return Ok(());
        }
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for NullInterval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Interval> for NullInterval {
    fn from(value: Interval) -> Self {
        Self(value)
    }
}

impl From<NullInterval> for Interval {
    fn from(value: NullInterval) -> Self {
        value.0
    }
}

impl From<Option<Interval>> for NullInterval {
    fn from(value: Option<Interval>) -> Self {
        Self(value.unwrap_or_default())
    }
}

impl From<NullInterval> for Option<Interval> {
    fn from(value: NullInterval) -> Self {
        value.into_option()
    }
}

impl From<TimeDelta> for NullInterval {
    fn from(value: TimeDelta) -> Self {
        Self::from_duration(value)
    }
}

impl Add for NullInterval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for NullInterval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for NullInterval {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl AddAssign for NullInterval {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for NullInterval {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
