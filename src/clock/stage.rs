//! Match stages.

use std::fmt;
use std::time::Instant;

/// Stage of the prepare/action cycle.
///
/// The timed stages carry their deadline, so an end time only exists while
/// a countdown is actually running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for the operator to start the next half
    Idle,
    /// Prepare phase requested, deadline set on the next tick
    PrepareInit,
    /// Prepare countdown running
    Preparing { ends_at: Instant },
    /// Prepare phase over, action deadline set on the next tick
    ActionInit,
    /// Shooting window running
    Acting { ends_at: Instant },
}

impl Stage {
    pub fn is_idle(&self) -> bool {
        matches!(self, Stage::Idle)
    }

    pub fn is_acting(&self) -> bool {
        matches!(self, Stage::Acting { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::PrepareInit => "prepare-init",
            Stage::Preparing { .. } => "preparing",
            Stage::ActionInit => "action-init",
            Stage::Acting { .. } => "acting",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_stage_predicates_and_names() {
        let t = Instant::now() + Duration::from_secs(5);
        assert!(Stage::Idle.is_idle());
        assert!(!Stage::PrepareInit.is_idle());
        assert!(Stage::Acting { ends_at: t }.is_acting());
        assert!(!Stage::Preparing { ends_at: t }.is_acting());
        assert_eq!(Stage::ActionInit.to_string(), "action-init");
        assert_eq!(Stage::Preparing { ends_at: t }.to_string(), "preparing");
    }
}
