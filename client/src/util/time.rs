//! Clocks for message timestamps and reaction measurement.
//!
//! Wall-clock timestamps are display-only (message bubbles); the reaction
//! game reads the monotonic high-resolution clock instead. Both return
//! zero on the server so SSR output stays deterministic.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Wall-clock milliseconds since the epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// High-resolution monotonic milliseconds (`performance.now()`).
#[must_use]
pub fn perf_now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Format epoch milliseconds as a `HH:MM` clock reading (UTC).
#[must_use]
pub fn format_clock(ms: f64) -> String {
    let seconds_of_day = ((ms / 1000.0) as i64).rem_euclid(86_400);
    let hours = seconds_of_day / 3600;
    let minutes = (seconds_of_day % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}
