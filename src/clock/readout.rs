//! Per-tick display readout.

use super::{CountdownColor, Cue, SignalColor, Stage};

/// Everything the renderer and audio player need after a tick.
///
/// Pure data derived from the clock fields; building it has no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub stage: Stage,
    /// Whole seconds left in the running phase, never negative
    pub remaining_secs: u64,
    pub signal: SignalColor,
    pub countdown_color: CountdownColor,
    pub pair: &'static str,
    /// 1-based round number (1..=4)
    pub round_number: usize,
    /// 1-based half number (1..=2)
    pub half_number: usize,
    /// Tournament view shown (otherwise the menu screen)
    pub show_tournament: bool,
    /// Cues requested since the previous tick, in request order
    pub cues: Vec<Cue>,
}

impl Readout {
    /// Countdown right-aligned in three columns, e.g. `" 42"`
    pub fn countdown_text(&self) -> String {
        format!("{:>3}", self.remaining_secs)
    }
}
