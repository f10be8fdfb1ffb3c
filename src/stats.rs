//! Run scorekeeping
//!
//! `RunStats` counts events while a run is live; `finalize` freezes it into
//! a `RunSummary` that the host can display or persist.

use serde::{Deserialize, Serialize};

/// Live counters for the current run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    destroyed: u32,
    misses: u32,
    clicks: u32,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter for a fresh run.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_destroyed(&mut self) {
        self.destroyed += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_click(&mut self) {
        self.clicks += 1;
    }

    pub fn destroyed(&self) -> u32 {
        self.destroyed
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Freeze the counters into a summary stamped with the run duration.
    pub fn finalize(&self, time_secs: f64) -> RunSummary {
        RunSummary {
            destroyed: self.destroyed,
            misses: self.misses,
            clicks: self.clicks,
            time_secs,
        }
    }
}

/// Immutable record of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub destroyed: u32,
    pub misses: u32,
    pub clicks: u32,
    pub time_secs: f64,
}

impl RunSummary {
    /// Hit percentage, rounded to the nearest whole point. Zero clicks
    /// scores zero rather than dividing by zero.
    pub fn accuracy(&self) -> u32 {
        if self.clicks == 0 {
            return 0;
        }
        (self.destroyed as f64 / self.clicks as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = RunStats::new();
        stats.record_click();
        stats.record_destroyed();
        stats.record_click();
        stats.record_miss();
        stats.record_miss();

        assert_eq!(stats.destroyed(), 1);
        assert_eq!(stats.misses(), 2);
        assert_eq!(stats.clicks(), 2);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = RunStats::new();
        stats.record_click();
        stats.record_destroyed();
        stats.reset();

        assert_eq!(stats.destroyed(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.clicks(), 0);
    }

    #[test]
    fn test_finalize_captures_counters_and_time() {
        let mut stats = RunStats::new();
        stats.record_click();
        stats.record_click();
        stats.record_destroyed();
        stats.record_miss();

        let summary = stats.finalize(42.5);
        assert_eq!(summary.destroyed, 1);
        assert_eq!(summary.misses, 1);
        assert_eq!(summary.clicks, 2);
        assert_eq!(summary.time_secs, 42.5);
    }

    #[test]
    fn test_accuracy_rounds_to_whole_percent() {
        let summary = RunSummary {
            destroyed: 2,
            misses: 0,
            clicks: 3,
            time_secs: 1.0,
        };
        assert_eq!(summary.accuracy(), 67);

        let perfect = RunSummary {
            destroyed: 5,
            misses: 0,
            clicks: 5,
            time_secs: 1.0,
        };
        assert_eq!(perfect.accuracy(), 100);
    }

    #[test]
    fn test_accuracy_with_no_clicks_is_zero() {
        let summary = RunSummary {
            destroyed: 0,
            misses: 3,
            clicks: 0,
            time_secs: 9.0,
        };
        assert_eq!(summary.accuracy(), 0);
    }
}
