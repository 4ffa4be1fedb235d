//! Signal-light colors, countdown colors and audio cue ids.

/// Traffic-light state shown next to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalColor {
    Red,
    Green,
    Yellow,
}

/// Countdown digit coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownColor {
    Normal,
    /// Inside the final warning window of the action phase
    Warning,
}

/// Audio cue requested at a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Neutral test horn, available at any time
    Test,
    /// Prepare phase begins
    Prepare,
    /// Prepare phase over, shooting starts
    PrepareEnd,
    /// Shooting over, pause for the operator
    ActionEnd,
    /// Full reset
    Reset,
}

impl Cue {
    pub const COUNT: usize = 5;

    pub const ALL: [Cue; Cue::COUNT] = [
        Cue::Test,
        Cue::Prepare,
        Cue::PrepareEnd,
        Cue::ActionEnd,
        Cue::Reset,
    ];

    /// Dense index for per-cue tables
    pub fn index(self) -> usize {
        match self {
            Cue::Test => 0,
            Cue::Prepare => 1,
            Cue::PrepareEnd => 2,
            Cue::ActionEnd => 3,
            Cue::Reset => 4,
        }
    }

    /// File stem used for WAV overrides and exports
    pub fn file_stem(self) -> &'static str {
        match self {
            Cue::Test => "test",
            Cue::Prepare => "prepare",
            Cue::PrepareEnd => "prepare_end",
            Cue::ActionEnd => "action_end",
            Cue::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_indices_are_dense() {
        for (i, cue) in Cue::ALL.iter().enumerate() {
            assert_eq!(cue.index(), i);
        }
    }
}
