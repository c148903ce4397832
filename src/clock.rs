//! Wall-clock stopwatch.
//!
//! `std::time::Instant` is unavailable on `wasm32-unknown-unknown`; in the
//! browser build the stopwatch reads `Date.now()` instead.

use std::time::Duration;

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stopwatch {
    started: std::time::Instant,
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
impl Stopwatch {
    pub(crate) fn start() -> Self {
        Self {
            started: std::time::Instant::now(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stopwatch {
    started_ms: f64,
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
impl Stopwatch {
    pub(crate) fn start() -> Self {
        Self {
            started_ms: js_sys::Date::now(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        let ms = (js_sys::Date::now() - self.started_ms).max(0.0);
        Duration::from_secs_f64(ms / 1000.0)
    }
}

impl Stopwatch {
    /// Whether at least `budget` has passed since [`Stopwatch::start`].
    pub(crate) fn expired(&self, budget: Duration) -> bool {
        self.elapsed() >= budget
    }
}
