//! One-shot timer scheduling.
//!
//! Callers pair every scheduled callback with a generation check (or a
//! `try_*` signal access) so a timer that outlives a restart or unmount
//! lands on nothing. The scheduler itself cannot cancel; invalidation is
//! the caller's contract.

/// Run `f` after `delay_ms` in the browser. On the server this drops the
/// callback: nothing is interactive during SSR.
pub fn schedule(delay_ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
        let _ = f;
    }
}
