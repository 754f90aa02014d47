use crate::Interval;

/// Values covering zero, single fields, mixed signs and the i64 extremes.
pub fn sample_intervals() -> Vec<Interval> {
    let mut out = vec![
        Interval::ZERO,
        Interval::new(1, 2, 3, 4, 5, 6),
        Interval::new(12, 23, 34, 45, 56, 67),
        Interval::new(-1, 2, -3, 4, -5, 6),
        Interval::new(i64::MIN, i64::MAX, 0, 0, 0, i64::MIN),
        Interval::new(i64::MAX, i64::MAX, i64::MAX, i64::MAX, i64::MAX, i64::MAX),
        Interval::new(i64::MIN, i64::MIN, i64::MIN, i64::MIN, i64::MIN, i64::MIN),
    ];
    for value in [1, -1, 10, -300, 9_999] {
        out.extend([
            Interval::ZERO.with_years(value),
            Interval::ZERO.with_months(value),
            Interval::ZERO.with_days(value),
            Interval::ZERO.with_hours(value),
            Interval::ZERO.with_minutes(value),
            Interval::ZERO.with_seconds(value),
        ]);
    }
    out
}
