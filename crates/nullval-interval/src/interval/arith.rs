//! Field-wise arithmetic and fixed-unit conversion.
//!
//! Arithmetic never carries between units. Field overflow wraps, so
//! add/sub/neg are total.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use chrono::TimeDelta;

use super::Interval;
use crate::error::{IntervalError, IntervalResult};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const MINUTES_PER_HOUR: i64 = 60;

impl Interval {
    /// Returns a copy with `years` added, wrapping on overflow.
    #[must_use]
    pub const fn add_years(mut self, years: i64) -> Self {
        self.years = self.years.wrapping_add(years);
        self
    }

    /// Returns a copy with `months` added, wrapping on overflow.
    #[must_use]
    pub const fn add_months(mut self, months: i64) -> Self {
        self.months = self.months.wrapping_add(months);
        self
    }

    /// Returns a copy with `days` added, wrapping on overflow.
    #[must_use]
    pub const fn add_days(mut self, days: i64) -> Self {
        self.days = self.days.wrapping_add(days);
        self
    }

    /// Returns a copy with `hours` added, wrapping on overflow.
    #[must_use]
    pub const fn add_hours(mut self, hours: i64) -> Self {
        self.hours = self.hours.wrapping_add(hours);
        self
    }

    /// Returns a copy with `minutes` added, wrapping on overflow.
    #[must_use]
    pub const fn add_minutes(mut self, minutes: i64) -> Self {
        self.minutes = self.minutes.wrapping_add(minutes);
        self
    }

    /// Returns a copy with `seconds` added, wrapping on overflow.
    #[must_use]
    pub const fn add_seconds(mut self, seconds: i64) -> Self {
        self.seconds = self.seconds.wrapping_add(seconds);
        self
    }

    /// Converts a fixed-unit duration into hours, minutes and seconds.
    ///
    /// Each step truncates toward zero; the sub-second remainder is dropped.
    /// Years, months and days are always zero in the result.
    #[must_use]
    pub fn from_duration(duration: TimeDelta) -> Self {
        let total_minutes = duration.num_minutes();
        let hours = duration.num_hours();

        Self::time(
            hours,
            total_minutes - hours * MINUTES_PER_HOUR,
            duration.num_seconds() - total_minutes * SECS_PER_MINUTE,
        )
    }

    /// Converts the time part into a fixed-unit duration.
    ///
    /// Only valid for intervals without a date part: days, months and years
    /// have no fixed length without a reference instant. Call
    /// [`Interval::only_time`] first to drop the date part explicitly.
    ///
    /// ## Errors
    /// Returns [`IntervalError::InvalidDateConversion`] if the interval has a
    /// date part, or [`IntervalError::DurationOverflow`] if the total does not
    /// fit a [`TimeDelta`].
    pub fn to_duration(&self) -> IntervalResult<TimeDelta> {
        if self.has_date() {
            tracing::debug!(interval = %self, "Refusing to convert date part to a fixed duration");
            return Err(IntervalError::InvalidDateConversion { interval: *self });
        }

        self.hours
            .checked_mul(SECS_PER_HOUR)
            .zip(self.minutes.checked_mul(SECS_PER_MINUTE))
            .and_then(|(hours, minutes)| hours.checked_add(minutes))
            .and_then(|secs| secs.checked_add(self.seconds))
            .and_then(TimeDelta::try_seconds)
            .ok_or(IntervalError::DurationOverflow { interval: *self })
    }
}

impl From<TimeDelta> for Interval {
    fn from(value: TimeDelta) -> Self {
        Self::from_duration(value)
    }
}

impl TryFrom<Interval> for TimeDelta {
    type Error = IntervalError;

    fn try_from(value: Interval) -> Result<Self, Self::Error> {
        value.to_duration()
    }
}

/// Adds every field of `rhs` to the matching field of `self`.
///
/// Does NOT convert between units: `PT45S + PT30S` is `PT75S`.
impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            years: self.years.wrapping_add(rhs.years),
            months: self.months.wrapping_add(rhs.months),
            days: self.days.wrapping_add(rhs.days),
            hours: self.hours.wrapping_add(rhs.hours),
            minutes: self.minutes.wrapping_add(rhs.minutes),
            seconds: self.seconds.wrapping_add(rhs.seconds),
        }
    }
}

impl Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

/// Flips the sign of every field.
impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            years: self.years.wrapping_neg(),
            months: self.months.wrapping_neg(),
            days: self.days.wrapping_neg(),
            hours: self.hours.wrapping_neg(),
            minutes: self.minutes.wrapping_neg(),
            seconds: self.seconds.wrapping_neg(),
        }
    }
}

impl AddAssign for Interval {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Interval {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
