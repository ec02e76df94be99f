use super::*;

#[test]
fn format_clock_renders_midnight() {
    assert_eq!(format_clock(0.0), "00:00");
}

#[test]
fn format_clock_renders_afternoon() {
    // 13:45:30 UTC on some day.
    let ms = ((13 * 3600 + 45 * 60 + 30) * 1000) as f64;
    assert_eq!(format_clock(ms), "13:45");
}

#[test]
fn format_clock_wraps_past_one_day() {
    let one_day = 86_400_000.0;
    let ms = one_day * 3.0 + 60_000.0;
    assert_eq!(format_clock(ms), "00:01");
}

#[test]
fn clocks_are_zero_off_the_browser() {
    assert!((now_ms() - 0.0).abs() < f64::EPSILON);
    assert!((perf_now_ms() - 0.0).abs() < f64::EPSILON);
}
