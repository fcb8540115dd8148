// File: crates/scatter-core/tests/scale.rs
// Purpose: Time scale mapping, nice rounding, interval alignment and tick selection.

use chrono::NaiveDate;
use scatter_core::time::{format_multi, parse_race_time, tick_interval, tick_step, to_millis, year_start};
use scatter_core::{ScaleTransform, TimeInterval, TimePoint, TimeScale, TimeUnit};

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> TimePoint {
    NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(h, mi, s)).expect("valid date")
}

fn rt(s: &str) -> TimePoint {
    parse_race_time(s).expect("race time")
}

#[test]
fn maps_domain_endpoints_to_range_endpoints() {
    let a = year_start(1990).expect("year");
    let b = year_start(2010).expect("year");
    let s = TimeScale::new([a, b], [80.0, 980.0]);
    assert!((s.to_px(a) - 80.0).abs() < 1e-3);
    assert!((s.to_px(b) - 980.0).abs() < 1e-3);
    let mid = s.to_px(year_start(2000).expect("year"));
    assert!(mid > 80.0 && mid < 980.0);
}

#[test]
fn inverse_round_trips_within_a_second() {
    let s = TimeScale::new([rt("39:50"), rt("36:50")], [480.0, 20.0]);
    let t = rt("38:00");
    let back = s.from_px(s.to_px(t));
    assert!((to_millis(back) - to_millis(t)).abs() <= 1_000.0);
}

#[test]
fn reversed_domain_puts_fast_times_on_top() {
    let s = TimeScale::new([rt("39:50"), rt("36:50")], [480.0, 20.0]);
    assert!((s.to_px(rt("39:50")) - 480.0).abs() < 1e-3);
    assert!((s.to_px(rt("36:50")) - 20.0).abs() < 1e-3);
    assert!(s.to_px(rt("37:00")) < s.to_px(rt("39:00")));
}

#[test]
fn zero_span_domain_maps_to_range_midpoint() {
    let t = rt("36:50");
    let s = TimeScale::new([t, t], [480.0, 20.0]);
    assert!((s.to_px(t) - 250.0).abs() < 1e-3);
}

#[test]
fn nice_to_whole_years() {
    let s = TimeScale::new([at(1988, 7, 5, 0, 0, 0), year_start(2008).expect("year")], [80.0, 980.0])
        .nice_with(TimeInterval::of(TimeUnit::Year));
    assert_eq!(s.domain(), [year_start(1988).expect("year"), year_start(2008).expect("year")]);
}

#[test]
fn default_nice_on_reversed_race_times_keeps_orientation() {
    let s = TimeScale::new([rt("39:50"), rt("36:50")], [480.0, 20.0]).nice();
    assert_eq!(s.domain(), [rt("40:00"), rt("36:45")]);
}

#[test]
fn race_time_ticks_every_fifteen_seconds_in_domain_order() {
    let s = TimeScale::new([rt("39:50"), rt("36:50")], [480.0, 20.0]).nice();
    let ticks = s.ticks(10);
    assert_eq!(ticks.len(), 14);
    assert_eq!(ticks.first(), Some(&rt("40:00")));
    assert_eq!(ticks.last(), Some(&rt("36:45")));
    assert!(ticks.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn tick_interval_picks_the_closer_ladder_rung() {
    let span = |secs: f64| (0.0, secs * 1_000.0);
    let (a, b) = span(180.0);
    assert_eq!(tick_interval(a, b, 10), TimeInterval::every(TimeUnit::Second, 15));
    let (a, b) = span(3_600.0);
    assert_eq!(tick_interval(a, b, 10), TimeInterval::every(TimeUnit::Minute, 5));
    let (a, b) = span(0.5);
    assert_eq!(tick_interval(a, b, 10), TimeInterval::every(TimeUnit::Millisecond, 50));
}

#[test]
fn multi_year_spans_step_by_whole_years() {
    let a = to_millis(year_start(1993).expect("year"));
    let b = to_millis(year_start(2006).expect("year"));
    assert_eq!(tick_interval(a, b, 10), TimeInterval::every(TimeUnit::Year, 1));
    let b = to_millis(year_start(2033).expect("year"));
    assert_eq!(tick_interval(a, b, 10), TimeInterval::every(TimeUnit::Year, 5));
}

#[test]
fn three_year_span_ticks_quarterly() {
    let a = year_start(1994).expect("year");
    let b = year_start(1997).expect("year");
    assert_eq!(tick_interval(to_millis(a), to_millis(b), 10), TimeInterval::every(TimeUnit::Month, 3));

    let s = TimeScale::new([a, b], [80.0, 980.0]);
    let labels: Vec<String> = s.ticks(10).into_iter().map(format_multi).collect();
    assert_eq!(labels.len(), 13);
    assert_eq!(&labels[..5], ["1994", "April", "July", "October", "1995"]);
    assert_eq!(labels.last().map(String::as_str), Some("1997"));
}

#[test]
fn year_rung_wins_when_closer_than_three_months() {
    // ~292 days per tick: 365 / 292 < 292 / 90
    let a = year_start(1990).expect("year");
    let b = year_start(1998).expect("year");
    assert_eq!(tick_interval(to_millis(a), to_millis(b), 10), TimeInterval::every(TimeUnit::Year, 1));
}

#[test]
fn tick_step_is_one_two_or_five_times_power_of_ten() {
    assert_eq!(tick_step(0.0, 10.0, 10.0), 1.0);
    assert_eq!(tick_step(0.0, 100.0, 10.0), 10.0);
    assert_eq!(tick_step(0.0, 25.0, 10.0), 2.0);
    assert_eq!(tick_step(0.0, 40.0, 10.0), 5.0);
    assert_eq!(tick_step(5.0, 5.0, 10.0), 0.0);
}

#[test]
fn interval_floor_aligns_within_parent_unit() {
    let t = at(2024, 5, 17, 13, 37, 52);
    assert_eq!(TimeInterval::every(TimeUnit::Second, 15).floor(t), at(2024, 5, 17, 13, 37, 45));
    assert_eq!(TimeInterval::every(TimeUnit::Minute, 5).floor(t), at(2024, 5, 17, 13, 35, 0));
    assert_eq!(TimeInterval::every(TimeUnit::Hour, 6).floor(t), at(2024, 5, 17, 12, 0, 0));
    assert_eq!(TimeInterval::every(TimeUnit::Month, 3).floor(t), at(2024, 4, 1, 0, 0, 0));
    assert_eq!(TimeInterval::every(TimeUnit::Year, 2).floor(at(1995, 6, 1, 0, 0, 0)), at(1994, 1, 1, 0, 0, 0));
    // 2024-01-03 is a Wednesday
    assert_eq!(TimeInterval::of(TimeUnit::Week).floor(at(2024, 1, 3, 9, 0, 0)), at(2023, 12, 31, 0, 0, 0));
}

#[test]
fn interval_ceil_is_identity_on_aligned_points() {
    let i = TimeInterval::every(TimeUnit::Second, 15);
    assert_eq!(i.ceil(rt("36:45")), rt("36:45"));
    assert_eq!(i.ceil(rt("36:46")), rt("37:00"));
    assert_eq!(TimeInterval::of(TimeUnit::Year).ceil(at(2005, 3, 1, 0, 0, 0)), at(2006, 1, 1, 0, 0, 0));
}

#[test]
fn interval_range_is_inclusive() {
    let got = TimeInterval::of(TimeUnit::Year).range(at(1993, 7, 5, 0, 0, 0), at(1996, 1, 1, 0, 0, 0));
    assert_eq!(got, vec![at(1994, 1, 1, 0, 0, 0), at(1995, 1, 1, 0, 0, 0), at(1996, 1, 1, 0, 0, 0)]);
}

#[test]
fn multi_format_uses_coarsest_unaligned_unit() {
    assert_eq!(format_multi(at(1995, 1, 1, 0, 0, 0)), "1995");
    assert_eq!(format_multi(at(1995, 3, 1, 0, 0, 0)), "March");
    // 1995-03-05 is a Sunday, 1995-03-08 a Wednesday
    assert_eq!(format_multi(at(1995, 3, 5, 0, 0, 0)), "Mar 05");
    assert_eq!(format_multi(at(1995, 3, 8, 0, 0, 0)), "Wed 08");
    assert_eq!(format_multi(rt("36:00")), "12:36");
    assert_eq!(format_multi(rt("36:50")), ":50");
}
