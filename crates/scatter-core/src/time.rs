// File: crates/scatter-core/src/time.rs
// Summary: Time points, calendar intervals (floor/offset/range), tick interval selection and tick formats.
// Notes:
// - Years and race durations share one representation: a naive date-time. Race times
//   sit on 1900-01-01 so only their clock component matters.
// - Scale math works in f64 milliseconds since the Unix epoch.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike};

/// A point on the time axis (year start or race time of day).
pub type TimePoint = NaiveDateTime;

pub const DURATION_SECOND: f64 = 1_000.0;
pub const DURATION_MINUTE: f64 = DURATION_SECOND * 60.0;
pub const DURATION_HOUR: f64 = DURATION_MINUTE * 60.0;
pub const DURATION_DAY: f64 = DURATION_HOUR * 24.0;
pub const DURATION_WEEK: f64 = DURATION_DAY * 7.0;
pub const DURATION_MONTH: f64 = DURATION_DAY * 30.0;
pub const DURATION_YEAR: f64 = DURATION_DAY * 365.0;

// chrono's representable range is narrower than f64 milliseconds.
const MAX_ABS_MILLIS: f64 = 8.0e15;

#[inline]
pub fn to_millis(t: TimePoint) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

pub fn from_millis(ms: f64) -> TimePoint {
    let ms = if ms.is_finite() { ms.clamp(-MAX_ABS_MILLIS, MAX_ABS_MILLIS) } else { 0.0 };
    DateTime::from_timestamp_millis(ms.round() as i64)
        .map(|d| d.naive_utc())
        .unwrap_or_default()
}

/// Parse a race time `MM:SS` onto the 1900-01-01 reference date.
pub fn parse_race_time(s: &str) -> Option<TimePoint> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let t = NaiveDateTime::parse_from_str(&format!("1900-01-01 00:{s}"), "%Y-%m-%d %H:%M:%S").ok()?;
    // reject leap-second spellings such as 36:60
    (t.nanosecond() == 0).then_some(t)
}

/// January 1st, midnight, of a 4-digit year.
pub fn year_start(year: i64) -> Option<TimePoint> {
    if !(1000..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, 1, 1)?.and_hms_opt(0, 0, 0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    /// Sunday-based weeks.
    Week,
    Month,
    Year,
}

/// A calendar interval: `step` units, aligned within the parent unit
/// (every 15 seconds lands on :00, :15, :30, :45 of each minute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    pub unit: TimeUnit,
    pub step: u32,
}

impl TimeInterval {
    pub const fn every(unit: TimeUnit, step: u32) -> Self {
        Self { unit, step: if step == 0 { 1 } else { step } }
    }

    pub const fn of(unit: TimeUnit) -> Self {
        Self::every(unit, 1)
    }

    /// Greatest aligned point not after `t`.
    pub fn floor(&self, t: TimePoint) -> TimePoint {
        let k = self.step;
        let date = t.date();
        let aligned = match self.unit {
            TimeUnit::Millisecond => {
                let ms = to_millis(t);
                return from_millis((ms / k as f64).floor() * k as f64);
            }
            TimeUnit::Second => {
                let s = t.second();
                date.and_hms_opt(t.hour(), t.minute(), s - s % k)
            }
            TimeUnit::Minute => {
                let m = t.minute();
                date.and_hms_opt(t.hour(), m - m % k, 0)
            }
            TimeUnit::Hour => {
                let h = t.hour();
                date.and_hms_opt(h - h % k, 0, 0)
            }
            TimeUnit::Day => {
                let d0 = t.day0();
                date.with_day0(d0 - d0 % k).and_then(|d| d.and_hms_opt(0, 0, 0))
            }
            TimeUnit::Week => {
                let back = date.weekday().num_days_from_sunday() as i64;
                date.checked_sub_signed(Duration::days(back))
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            }
            TimeUnit::Month => {
                let m0 = t.month0();
                NaiveDate::from_ymd_opt(t.year(), m0 - m0 % k + 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
            }
            TimeUnit::Year => {
                let y = t.year().div_euclid(k as i32) * k as i32;
                NaiveDate::from_ymd_opt(y, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
            }
        };
        aligned.unwrap_or(t)
    }

    /// Move `t` by `n` steps of this interval (no re-alignment).
    pub fn offset(&self, t: TimePoint, n: i64) -> TimePoint {
        let amount = n * self.step as i64;
        let moved = match self.unit {
            TimeUnit::Millisecond => t.checked_add_signed(Duration::milliseconds(amount)),
            TimeUnit::Second => t.checked_add_signed(Duration::seconds(amount)),
            TimeUnit::Minute => t.checked_add_signed(Duration::minutes(amount)),
            TimeUnit::Hour => t.checked_add_signed(Duration::hours(amount)),
            TimeUnit::Day => t.checked_add_signed(Duration::days(amount)),
            TimeUnit::Week => t.checked_add_signed(Duration::weeks(amount)),
            TimeUnit::Month => shift_months(t, amount),
            TimeUnit::Year => shift_months(t, amount * 12),
        };
        moved.unwrap_or(t)
    }

    /// Least aligned point not before `t`.
    pub fn ceil(&self, t: TimePoint) -> TimePoint {
        let f = self.floor(t);
        if f == t { t } else { self.floor(self.offset(f, 1)) }
    }

    /// Aligned points in `[start, stop]`, ascending.
    pub fn range(&self, start: TimePoint, stop: TimePoint) -> Vec<TimePoint> {
        const MAX_POINTS: usize = 10_000;
        let mut out = Vec::new();
        let mut cur = self.ceil(start);
        while cur <= stop && out.len() < MAX_POINTS {
            out.push(cur);
            let next = self.floor(self.offset(cur, 1));
            if next <= cur {
                break;
            }
            cur = next;
        }
        out
    }
}

fn shift_months(t: TimePoint, months: i64) -> Option<TimePoint> {
    let m = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 { t.checked_add_months(m) } else { t.checked_sub_months(m) }
}

/// Candidate tick intervals, ascending by approximate duration.
const TICK_LADDER: [(TimeUnit, u32, f64); 18] = [
    (TimeUnit::Second, 1, DURATION_SECOND),
    (TimeUnit::Second, 5, 5.0 * DURATION_SECOND),
    (TimeUnit::Second, 15, 15.0 * DURATION_SECOND),
    (TimeUnit::Second, 30, 30.0 * DURATION_SECOND),
    (TimeUnit::Minute, 1, DURATION_MINUTE),
    (TimeUnit::Minute, 5, 5.0 * DURATION_MINUTE),
    (TimeUnit::Minute, 15, 15.0 * DURATION_MINUTE),
    (TimeUnit::Minute, 30, 30.0 * DURATION_MINUTE),
    (TimeUnit::Hour, 1, DURATION_HOUR),
    (TimeUnit::Hour, 3, 3.0 * DURATION_HOUR),
    (TimeUnit::Hour, 6, 6.0 * DURATION_HOUR),
    (TimeUnit::Hour, 12, 12.0 * DURATION_HOUR),
    (TimeUnit::Day, 1, DURATION_DAY),
    (TimeUnit::Day, 2, 2.0 * DURATION_DAY),
    (TimeUnit::Week, 1, DURATION_WEEK),
    (TimeUnit::Month, 1, DURATION_MONTH),
    (TimeUnit::Month, 3, 3.0 * DURATION_MONTH),
    (TimeUnit::Year, 1, DURATION_YEAR),
];

/// Pick the interval giving roughly `count` ticks between `start` and `stop` (milliseconds).
/// Past one year per tick the step is a round number of years.
pub fn tick_interval(start: f64, stop: f64, count: usize) -> TimeInterval {
    let count = count.max(1) as f64;
    let target = (stop - start).abs() / count;
    let i = TICK_LADDER.partition_point(|&(_, _, d)| d <= target);
    if i == TICK_LADDER.len() {
        let step = tick_step(start / DURATION_YEAR, stop / DURATION_YEAR, count);
        return TimeInterval::every(TimeUnit::Year, step.max(1.0) as u32);
    }
    if i == 0 {
        let step = tick_step(start, stop, count).max(1.0);
        return TimeInterval::every(TimeUnit::Millisecond, step as u32);
    }
    let (lo_unit, lo_step, lo_d) = TICK_LADDER[i - 1];
    let (hi_unit, hi_step, hi_d) = TICK_LADDER[i];
    if target / lo_d < hi_d / target {
        TimeInterval::every(lo_unit, lo_step)
    } else {
        TimeInterval::every(hi_unit, hi_step)
    }
}

/// Round step (1, 2 or 5 × 10ⁿ) splitting `[start, stop]` into about `count` pieces.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let raw = (stop - start).abs() / count.max(0.0);
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Default multi-scale label: the coarsest unit at which `t` is not aligned decides the format.
pub fn format_multi(t: TimePoint) -> String {
    let below = |unit| TimeInterval::of(unit).floor(t) < t;
    let pattern = if below(TimeUnit::Second) {
        ".%3f"
    } else if below(TimeUnit::Minute) {
        ":%S"
    } else if below(TimeUnit::Hour) {
        "%I:%M"
    } else if below(TimeUnit::Day) {
        "%I %p"
    } else if below(TimeUnit::Month) {
        if below(TimeUnit::Week) { "%a %d" } else { "%b %d" }
    } else if below(TimeUnit::Year) {
        "%B"
    } else {
        "%Y"
    };
    t.format(pattern).to_string()
}

/// Race-time label, e.g. `36:50`.
pub fn format_race_time(t: TimePoint) -> String {
    t.format("%M:%S").to_string()
}
