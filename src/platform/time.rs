//! Time sources
//!
//! The engine never reads a system clock directly; it samples one of these.
//! `MonotonicClock` backs real sessions, `ManualClock` backs tests that
//! script time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond timestamp source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

/// Wall clock, measured from construction.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for deterministic tests. Clones share one timeline.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute timestamp.
    pub fn set(&self, ms: f64) {
        self.now_ms.set(ms);
    }

    /// Move the clock forward.
    pub fn advance(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0.0);

        clock.set(100.0);
        assert_eq!(clock.now_ms(), 100.0);

        clock.advance(16.0);
        clock.advance(16.0);
        assert_eq!(clock.now_ms(), 132.0);
    }

    #[test]
    fn test_manual_clock_clones_share_timeline() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(250.0);
        assert_eq!(clock.now_ms(), 250.0);
    }

    #[test]
    fn test_monotonic_clock_never_goes_backward() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
