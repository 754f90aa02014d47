//! Canonical ISO 8601 serialization.
//!
//! The output length is computed before writing so owned output is
//! allocated exactly once.

use std::fmt;

use nullval_core::constants::ZERO_INTERVAL_TEXT;

use crate::interval::Interval;

/// Enough for `i64::MIN` (19 digits and a sign).
const INT_BUF_LEN: usize = 20;

/// Number of bytes `n` takes in decimal, sign included.
const fn int_len(n: i64) -> usize {
    let digits = match n.unsigned_abs().checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    };
    if n < 0 { digits + 1 } else { digits }
}

/// Length of one `<n><unit>` part, or 0 when the field is omitted.
const fn part_len(n: i64) -> usize {
    if n == 0 { 0 } else { int_len(n) + 1 }
}

/// Writes `n` right-aligned into `buf`, returning the written slice.
fn int_str(n: i64, buf: &mut [u8; INT_BUF_LEN]) -> Result<&str, fmt::Error> {
    let mut pos = buf.len();
    let mut rest = n.unsigned_abs();
    loop {
        pos -= 1;
        #[expect(clippy::cast_possible_truncation, reason = "remainder is below 10")]
        let digit = (rest % 10) as u8;
        buf[pos] = b'0' + digit;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    if n < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }
    std::str::from_utf8(&buf[pos..]).ok().ok_or(fmt::Error)
}

/// Emits `<n><unit>`, or nothing for a zero field.
fn put_part(put: &mut impl FnMut(&str) -> fmt::Result, n: i64, unit: &str) -> fmt::Result {
    if n == 0 {
        return Ok(());
    }
    let mut digits = [0u8; INT_BUF_LEN];
    put(int_str(n, &mut digits)?)?;
    put(unit)
}

impl Interval {
    /// Exact byte length of the canonical text form.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        if self.is_zero() {
            return ZERO_INTERVAL_TEXT.len();
        }

        let mut len = 1
            + part_len(self.years)
            + part_len(self.months)
            + part_len(self.days)
            + part_len(self.hours)
            + part_len(self.minutes)
            + part_len(self.seconds);
        if self.has_time() {
            len += 1;
        }
        len
    }

    /// Appends the canonical text form to `buf`, growing it at most once.
    pub fn append_to(&self, buf: &mut String) {
        buf.reserve(self.encoded_len());
        let written = self.emit(|chunk| {
            buf.push_str(chunk);
            Ok(())
        });
        debug_assert!(written.is_ok(), "canonical form is always ASCII");
    }

    /// Canonical text form in a buffer of exactly [`Interval::encoded_len`] bytes.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        let mut buf = String::with_capacity(self.encoded_len());
        self.append_to(&mut buf);
        buf
    }

    /// Feeds the canonical text form to `put`, chunk by chunk.
    fn emit(&self, mut put: impl FnMut(&str) -> fmt::Result) -> fmt::Result {
        if self.is_zero() {
            return put(ZERO_INTERVAL_TEXT);
        }

        put("P")?;
        put_part(&mut put, self.years, "Y")?;
        put_part(&mut put, self.months, "M")?;
        put_part(&mut put, self.days, "D")?;

        if self.has_time() {
            put("T")?;
            put_part(&mut put, self.hours, "H")?;
            put_part(&mut put, self.minutes, "M")?;
            put_part(&mut put, self.seconds, "S")?;
        }
        Ok(())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.emit(|chunk| f.write_str(chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_len_counts_sign_and_digits() {
        assert_eq!(int_len(0), 1);
        assert_eq!(int_len(9), 1);
        assert_eq!(int_len(10), 2);
        assert_eq!(int_len(-1), 2);
        assert_eq!(int_len(-10), 3);
        assert_eq!(int_len(i64::MAX), 19);
        assert_eq!(int_len(i64::MIN), 20);
    }

    #[test]
    fn int_str_writes_decimal() {
        let mut buf = [0u8; INT_BUF_LEN];
        assert_eq!(int_str(0, &mut buf), Ok("0"));
        assert_eq!(int_str(1234, &mut buf), Ok("1234"));
        assert_eq!(int_str(-56, &mut buf), Ok("-56"));
        assert_eq!(int_str(i64::MIN, &mut buf), Ok("-9223372036854775808"));
        assert_eq!(int_str(i64::MAX, &mut buf), Ok("9223372036854775807"));
    }

    #[test]
    fn display_zero() {
        assert_eq!(Interval::ZERO.to_string(), "PT0S");
        assert_eq!(Interval::ZERO.to_iso_string(), "PT0S");
    }

    #[test]
    fn display_omits_zero_fields() {
        let cases = [
            (Interval::new(1, 2, 3, 4, 5, 6), "P1Y2M3DT4H5M6S"),
            (Interval::date(1, 0, 0), "P1Y"),
            (Interval::date(0, 2, 0), "P2M"),
            (Interval::date(0, 0, 3), "P3D"),
            (Interval::time(1, 0, 0), "PT1H"),
            (Interval::time(0, 5, 0), "PT5M"),
            (Interval::time(0, 0, 6), "PT6S"),
            (Interval::new(1, 0, 3, 0, 5, 0), "P1Y3DT5M"),
            (Interval::date(-1, 0, 0), "P-1Y"),
            (Interval::new(0, 0, -3, 4, 0, -6), "P-3DT4H-6S"),
            (Interval::new(12, 23, 34, 45, 56, 67), "P12Y23M34DT45H56M67S"),
        ];

        for (val, expected) in cases {
            assert_eq!(val.to_string(), expected);
            assert_eq!(val.to_iso_string(), expected);
        }
    }

    #[test]
    fn encoded_len_is_exact() {
        for val in [
            Interval::ZERO,
            Interval::new(1, 2, 3, 4, 5, 6),
            Interval::new(-10, 200, -3000, 40_000, -500_000, 6_000_000),
            Interval::time(0, 0, -1),
            Interval::date(i64::MIN, i64::MAX, 0),
            Interval::new(i64::MIN, i64::MIN, i64::MIN, i64::MIN, i64::MIN, i64::MIN),
        ] {
            let text = val.to_iso_string();
            assert_eq!(val.encoded_len(), text.len(), "{text}");
            assert_eq!(text.capacity(), text.len(), "{text}");
        }
    }

    #[test]
    fn append_to_keeps_prefix() {
        let mut buf = String::from("duration=");
        Interval::time(1, 30, 0).append_to(&mut buf);
        assert_eq!(buf, "duration=PT1H30M");
    }

    #[test]
    fn append_to_matches_display_at_extremes() {
        for val in [
            Interval::new(i64::MIN, i64::MIN, i64::MIN, i64::MIN, i64::MIN, i64::MIN),
            Interval::new(i64::MAX, i64::MAX, i64::MAX, i64::MAX, i64::MAX, i64::MAX),
            Interval::time(0, 0, -1),
        ] {
            let mut buf = String::new();
            val.append_to(&mut buf);
            assert!(!buf.is_empty());
            assert_eq!(buf, val.to_string());
            assert_eq!(buf.len(), val.encoded_len());
        }
    }
}
