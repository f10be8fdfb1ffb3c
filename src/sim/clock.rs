//! Run-time accounting with pause compensation
//!
//! Tracks play time from monotonic millisecond timestamps supplied by the
//! caller. Paused intervals are excluded from the total; the clock never
//! reads time itself.

/// Elapsed-time tracker for a single run.
///
/// All timestamps must come from the same monotonic source.
#[derive(Debug, Clone, Default)]
pub struct RunClock {
    running: bool,
    paused: bool,
    start_ms: f64,
    paused_at_ms: f64,
    paused_total_ms: f64,
}

impl RunClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh run at `now`, discarding any previous state.
    pub fn start(&mut self, now: f64) {
        self.running = true;
        self.paused = false;
        self.start_ms = now;
        self.paused_at_ms = 0.0;
        self.paused_total_ms = 0.0;
    }

    /// End the run. Elapsed time reads zero afterwards and the run cannot
    /// be resumed.
    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
    }

    /// Flip the paused state. No-op when not running.
    pub fn toggle_pause(&mut self, now: f64) {
        if !self.running {
            return;
        }
        self.paused = !self.paused;
        if self.paused {
            self.paused_at_ms = now;
        } else {
            self.paused_total_ms += now - self.paused_at_ms;
            self.paused_at_ms = 0.0;
        }
    }

    /// Play time in seconds at `now`, excluding every paused interval.
    ///
    /// While paused the result is frozen at the instant the pause began.
    pub fn elapsed_seconds(&self, now: f64) -> f64 {
        if !self.running {
            return 0.0;
        }
        let effective_now = if self.paused { self.paused_at_ms } else { now };
        let elapsed_ms = effective_now - self.start_ms - self.paused_total_ms;
        (elapsed_ms / 1000.0).max(0.0)
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_zero_before_start() {
        let clock = RunClock::new();
        assert!(!clock.running());
        assert_eq!(clock.elapsed_seconds(5000.0), 0.0);
    }

    #[test]
    fn test_elapsed_counts_while_running() {
        let mut clock = RunClock::new();
        clock.start(1000.0);
        assert_eq!(clock.elapsed_seconds(1000.0), 0.0);
        assert_eq!(clock.elapsed_seconds(3500.0), 2.5);
        assert_eq!(clock.elapsed_seconds(11_000.0), 10.0);
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut clock = RunClock::new();
        clock.start(0.0);
        clock.toggle_pause(5000.0);
        assert!(clock.paused());

        // Frozen at the pause instant no matter how far `now` advances
        assert_eq!(clock.elapsed_seconds(5000.0), 5.0);
        assert_eq!(clock.elapsed_seconds(8000.0), 5.0);
        assert_eq!(clock.elapsed_seconds(1_000_000.0), 5.0);
    }

    #[test]
    fn test_resume_excludes_paused_interval() {
        let mut clock = RunClock::new();
        clock.start(0.0);
        clock.toggle_pause(5000.0);
        clock.toggle_pause(8000.0);
        assert!(!clock.paused());

        // 3 seconds spent paused never count
        assert_eq!(clock.elapsed_seconds(8000.0), 5.0);
        assert_eq!(clock.elapsed_seconds(9000.0), 6.0);
    }

    #[test]
    fn test_multiple_pause_cycles_accumulate() {
        let mut clock = RunClock::new();
        clock.start(0.0);
        clock.toggle_pause(1000.0);
        clock.toggle_pause(2000.0);
        clock.toggle_pause(4000.0);
        clock.toggle_pause(7000.0);
        // 4 seconds paused in total out of 10
        assert_eq!(clock.elapsed_seconds(10_000.0), 6.0);
    }

    #[test]
    fn test_stop_zeroes_elapsed_and_disables_pause() {
        let mut clock = RunClock::new();
        clock.start(0.0);
        clock.stop();
        assert_eq!(clock.elapsed_seconds(9000.0), 0.0);
        assert!(!clock.running());

        clock.toggle_pause(9500.0);
        assert!(!clock.paused());
    }

    #[test]
    fn test_elapsed_never_negative() {
        let mut clock = RunClock::new();
        clock.start(5000.0);
        assert_eq!(clock.elapsed_seconds(4000.0), 0.0);
    }

    #[test]
    fn test_restart_resets_pause_debt() {
        let mut clock = RunClock::new();
        clock.start(0.0);
        clock.toggle_pause(1000.0);
        clock.start(10_000.0);
        assert!(!clock.paused());
        assert_eq!(clock.elapsed_seconds(12_000.0), 2.0);
    }
}
