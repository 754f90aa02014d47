//! `PostgreSQL` mappings for diesel.
//!
//! Both value types bind as `text` (the ISO 8601 form) or as the native
//! `interval`. Reading an `interval` column as text requires
//! `SET intervalstyle = iso_8601` on the session.
//!
//! The native binary form is 16 bytes, big-endian:
//! - 8 bytes: microseconds (i64)
//! - 4 bytes: days (i32)
//! - 4 bytes: months (i32)

use std::io::Write;

use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{Interval as SqlInterval, Nullable, Text};

use crate::error::{IntervalError, IntervalResult};
use crate::interval::Interval;
use crate::null::NullInterval;

const MICROS_PER_SECOND: i64 = 1_000_000;
const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const MONTHS_PER_YEAR: i64 = 12;

/// Size of the binary `interval` representation.
pub const PG_INTERVAL_LEN: usize = 16;

/// The `PostgreSQL` `interval` wire layout.
///
/// Months and days are kept apart from the clock part because their length
/// varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PgInterval {
    /// Clock part in microseconds
    pub microseconds: i64,
    /// Whole days
    pub days: i32,
    /// Years folded in at 12 months each
    pub months: i32,
}

impl PgInterval {
    /// Creates an interval from its wire fields.
    #[must_use]
    pub const fn new(months: i32, days: i32, microseconds: i64) -> Self {
        Self {
            microseconds,
            days,
            months,
        }
    }

    /// Decodes the 16-byte binary form.
    ///
    /// ## Errors
    /// Returns [`IntervalError::InvalidPgInterval`] if `bytes` has the wrong length.
    pub fn from_bytes(bytes: &[u8]) -> IntervalResult<Self> {
        let bytes: &[u8; PG_INTERVAL_LEN] = bytes
            .try_into()
            .ok()
            .ok_or(IntervalError::InvalidPgInterval { len: bytes.len() })?;

        let [m0, m1, m2, m3, m4, m5, m6, m7, d0, d1, d2, d3, n0, n1, n2, n3] = *bytes;
        Ok(Self {
            microseconds: i64::from_be_bytes([m0, m1, m2, m3, m4, m5, m6, m7]),
            days: i32::from_be_bytes([d0, d1, d2, d3]),
            months: i32::from_be_bytes([n0, n1, n2, n3]),
        })
    }

    /// Encodes the 16-byte binary form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; PG_INTERVAL_LEN] {
        let mut out = [0u8; PG_INTERVAL_LEN];
        out[..8].copy_from_slice(&self.microseconds.to_be_bytes());
        out[8..12].copy_from_slice(&self.days.to_be_bytes());
        out[12..].copy_from_slice(&self.months.to_be_bytes());
        out
    }
}

fn field_overflow(field: &'static str, value: i64) -> IntervalError {
    IntervalError::FieldOverflow { field, value }
}

impl TryFrom<Interval> for PgInterval {
    type Error = IntervalError;

    fn try_from(value: Interval) -> Result<Self, Self::Error> {
        let months = value
            .years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or_else(|| field_overflow("years", value.years))?
            .checked_add(value.months)
            .and_then(|months| i32::try_from(months).ok())
            .ok_or_else(|| field_overflow("months", value.months))?;

        let days = i32::try_from(value.days)
            .ok()
            .ok_or_else(|| field_overflow("days", value.days))?;

        let hours = value
            .hours
            .checked_mul(SECS_PER_HOUR)
            .ok_or_else(|| field_overflow("hours", value.hours))?;
        let minutes = value
            .minutes
            .checked_mul(SECS_PER_MINUTE)
            .ok_or_else(|| field_overflow("minutes", value.minutes))?;
        let microseconds = hours
            .checked_add(minutes)
            .and_then(|secs| secs.checked_add(value.seconds))
            .and_then(|secs| secs.checked_mul(MICROS_PER_SECOND))
            .ok_or_else(|| field_overflow("seconds", value.seconds))?;

        Ok(Self {
            microseconds,
            days,
            months,
        })
    }
}

/// Folds months into years and the clock part into hours, minutes and
/// seconds. Every field keeps the sign of its source; sub-second precision
/// is dropped.
impl From<PgInterval> for Interval {
    fn from(value: PgInterval) -> Self {
        let months = i64::from(value.months);
        let secs = value.microseconds / MICROS_PER_SECOND;

        Self::new(
            months / MONTHS_PER_YEAR,
            months % MONTHS_PER_YEAR,
            i64::from(value.days),
            secs / SECS_PER_HOUR,
            secs % SECS_PER_HOUR / SECS_PER_MINUTE,
            secs % SECS_PER_MINUTE,
        )
    }
}

/// Decodes a text column value.
///
/// ## Errors
/// Returns an error if `bytes` is not UTF-8 or not a valid duration.
pub fn decode_text(bytes: &[u8]) -> IntervalResult<Interval> {
    let text = std::str::from_utf8(bytes)
        .ok()
        .ok_or(IntervalError::InvalidUtf8)?;
    Ok(Interval::parse(text)?)
}

/// Decodes a text column value; empty text is null.
///
/// ## Errors
/// Returns an error if `bytes` is not UTF-8 or neither empty nor a valid duration.
pub fn decode_null_text(bytes: &[u8]) -> IntervalResult<NullInterval> {
    let text = std::str::from_utf8(bytes)
        .ok()
        .ok_or(IntervalError::InvalidUtf8)?;
    Ok(NullInterval::parse(text)?)
}

/// Decodes a binary `interval` column value.
///
/// ## Errors
/// Returns an error if `bytes` is not 16 bytes long.
pub fn decode_binary(bytes: &[u8]) -> IntervalResult<Interval> {
    PgInterval::from_bytes(bytes).map(Interval::from)
}

fn logged<T>(sql_type: &'static str, result: IntervalResult<T>) -> deserialize::Result<T> {
    result.map_err(|err| {
        tracing::warn!(sql_type, error = %err, "Failed to decode interval column");
        err.into()
    })
}

/// Writes the ISO 8601 text form.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn encode_text<W: Write + ?Sized>(value: &Interval, out: &mut W) -> serialize::Result {
    write!(out, "{value}")?;
    Ok(IsNull::No)
}

/// Writes the 16-byte binary form.
///
/// ## Errors
/// Returns an error if a field does not fit the wire layout or writing fails.
pub fn encode_binary<W: Write + ?Sized>(value: &Interval, out: &mut W) -> serialize::Result {
    let pg = PgInterval::try_from(*value)?;
    out.write_all(&pg.to_bytes())?;
    Ok(IsNull::No)
}

/// Writes the text form, or reports SQL `NULL` without writing when null.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn encode_null_text<W: Write + ?Sized>(
    value: &NullInterval,
    out: &mut W,
) -> serialize::Result {
    if value.is_null() {
        return Ok(IsNull::Yes);
    }
    encode_text(&value.0, out)
}

/// Writes the binary form, or reports SQL `NULL` without writing when null.
///
/// ## Errors
/// Returns an error if a field does not fit the wire layout or writing fails.
pub fn encode_null_binary<W: Write + ?Sized>(
    value: &NullInterval,
    out: &mut W,
) -> serialize::Result {
    if value.is_null() {
        return Ok(IsNull::Yes);
    }
    encode_binary(&value.0, out)
}

impl ToSql<Text, Pg> for Interval {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        encode_text(self, out)
    }
}

impl FromSql<Text, Pg> for Interval {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        logged("text", decode_text(bytes.as_bytes()))
    }
}

impl ToSql<SqlInterval, Pg> for Interval {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        encode_binary(self, out)
    }
}

impl FromSql<SqlInterval, Pg> for Interval {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        logged("interval", decode_binary(bytes.as_bytes()))
    }
}

impl ToSql<Text, Pg> for NullInterval {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        encode_null_text(self, out)
    }
}

impl ToSql<SqlInterval, Pg> for NullInterval {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        encode_null_binary(self, out)
    }
}

impl FromSql<Text, Pg> for NullInterval {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        logged("text", decode_null_text(bytes.as_bytes()))
    }

    fn from_nullable_sql(bytes: Option<PgValue<'_>>) -> deserialize::Result<Self> {
        bytes.map_or(Ok(Self::NULL), <Self as FromSql<Text, Pg>>::from_sql)
    }
}

impl FromSql<SqlInterval, Pg> for NullInterval {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        <Interval as FromSql<SqlInterval, Pg>>::from_sql(bytes).map(Self)
    }

    fn from_nullable_sql(bytes: Option<PgValue<'_>>) -> deserialize::Result<Self> {
        bytes.map_or(Ok(Self::NULL), <Self as FromSql<SqlInterval, Pg>>::from_sql)
    }
}

impl FromSql<Nullable<Text>, Pg> for NullInterval {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        <Self as FromSql<Text, Pg>>::from_sql(bytes)
    }

    fn from_nullable_sql(bytes: Option<PgValue<'_>>) -> deserialize::Result<Self> {
        <Self as FromSql<Text, Pg>>::from_nullable_sql(bytes)
    }
}

impl FromSql<Nullable<SqlInterval>, Pg> for NullInterval {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        <Self as FromSql<SqlInterval, Pg>>::from_sql(bytes)
    }

    fn from_nullable_sql(bytes: Option<PgValue<'_>>) -> deserialize::Result<Self> {
        <Self as FromSql<SqlInterval, Pg>>::from_nullable_sql(bytes)
    }
}
