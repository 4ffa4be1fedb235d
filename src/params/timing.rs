//! Match timing parameters and the fixed pair roster.

use std::time::Duration;

use crate::error::TimerError;

/// Fixed pair roster indexed by round. Entries 1 and 2 are both "C-D".
pub const PAIR_ROSTER: [&str; 4] = ["A-B", "C-D", "C-D", "A-B"];

/// Longest phase the three-digit countdown can show (seconds)
pub const MAX_PHASE_SECS: u64 = 999;

/// Durations driving the prepare/action cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTiming {
    /// Prepare phase length per half (seconds), indexed by half
    pub prepare_secs: [u64; 2],

    /// Action (shooting) phase length (seconds)
    pub action_secs: u64,

    /// Remaining time at which the warning window opens (seconds)
    /// Must be below `action_secs`
    pub warn_secs: u64,
}

impl Default for MatchTiming {
    fn default() -> Self {
        Self {
            prepare_secs: [10, 20],
            action_secs: 180,
            warn_secs: 30,
        }
    }
}

impl MatchTiming {
    /// Prepare phase duration for the given half (0 or 1)
    pub fn prepare(&self, half: usize) -> Duration {
        Duration::from_secs(self.prepare_secs[half.min(1)])
    }

    /// Action phase duration
    pub fn action(&self) -> Duration {
        Duration::from_secs(self.action_secs)
    }

    /// Validate configuration (non-zero phases, warn window inside action phase)
    pub fn validate(&self) -> Result<(), TimerError> {
        if let Some(half) = self.prepare_secs.iter().position(|&secs| secs == 0) {
            return Err(TimerError::InvalidTiming(format!(
                "prepare duration for half {} must be > 0",
                half + 1
            )));
        }
        if self.action_secs == 0 {
            return Err(TimerError::InvalidTiming(
                "action duration must be > 0".to_string(),
            ));
        }
        if let Some(half) = self
            .prepare_secs
            .iter()
            .position(|&secs| secs > MAX_PHASE_SECS)
        {
            return Err(TimerError::InvalidTiming(format!(
                "prepare duration for half {} must be <= {}s",
                half + 1,
                MAX_PHASE_SECS
            )));
        }
        if self.action_secs > MAX_PHASE_SECS {
            return Err(TimerError::InvalidTiming(format!(
                "action duration must be <= {}s, got {}s",
                MAX_PHASE_SECS, self.action_secs
            )));
        }
        if self.warn_secs >= self.action_secs {
            return Err(TimerError::InvalidTiming(format!(
                "warn threshold ({}s) must be below action duration ({}s)",
                self.warn_secs, self.action_secs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_is_valid() {
        let timing = MatchTiming::default();
        assert!(timing.validate().is_ok());
        assert_eq!(timing.prepare(0), Duration::from_secs(10));
        assert_eq!(timing.prepare(1), Duration::from_secs(20));
        assert_eq!(timing.action(), Duration::from_secs(180));
    }

    #[test]
    fn test_warn_threshold_must_fit_in_action_phase() {
        let timing = MatchTiming {
            warn_secs: 180,
            ..MatchTiming::default()
        };
        assert!(matches!(
            timing.validate(),
            Err(TimerError::InvalidTiming(_))
        ));
    }

    #[test]
    fn test_zero_prepare_rejected() {
        let timing = MatchTiming {
            prepare_secs: [10, 0],
            ..MatchTiming::default()
        };
        let err = timing.validate().unwrap_err();
        assert!(err.to_string().contains("half 2"));
    }

    #[test]
    fn test_oversized_durations_rejected() {
        let timing = MatchTiming {
            action_secs: u64::MAX,
            ..MatchTiming::default()
        };
        let err = timing.validate().unwrap_err();
        assert!(err.to_string().contains("action duration"));

        let timing = MatchTiming {
            prepare_secs: [MAX_PHASE_SECS + 1, 20],
            ..MatchTiming::default()
        };
        let err = timing.validate().unwrap_err();
        assert!(err.to_string().contains("half 1"));

        let timing = MatchTiming {
            prepare_secs: [MAX_PHASE_SECS, MAX_PHASE_SECS],
            action_secs: MAX_PHASE_SECS,
            ..MatchTiming::default()
        };
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_roster_repeats_middle_pair() {
        assert_eq!(PAIR_ROSTER[0], "A-B");
        assert_eq!(PAIR_ROSTER[1], PAIR_ROSTER[2]);
        assert_eq!(PAIR_ROSTER[3], "A-B");
    }
}
