//! Match clock: the prepare/action cycle across rounds and halves.

use std::time::{Duration, Instant};

use log::{debug, info};

use super::{CountdownColor, Cue, Readout, SignalColor, Stage};
use crate::params::{MatchTiming, MAX_PHASE_SECS, PAIR_ROSTER};

/// Operator commands for one tick, already resolved by the input layer.
///
/// All flags are edge-triggered except `hide_tournament`, which is set on
/// every tick its key is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockInput {
    pub start: bool,
    pub cancel: bool,
    pub reset: bool,
    pub test_sound: bool,
    pub show_tournament: bool,
    pub hide_tournament: bool,
}

impl ClockInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Tick-driven match clock
pub struct MatchClock {
    timing: MatchTiming,
    stage: Stage,
    half: usize,
    round: usize,
    remaining_secs: u64,
    signal: SignalColor,
    countdown_color: CountdownColor,
    show_tournament: bool,
    cancel_requested: bool,
    /// Set when a phase end already requested the Prepare cue for the
    /// PrepareInit it scheduled
    prepare_announced: bool,
    pending_cues: Vec<Cue>,
}

impl MatchClock {
    /// Create an idle clock at round 1, half 1, showing the menu screen
    pub fn new(timing: MatchTiming) -> Self {
        Self {
            timing,
            stage: Stage::Idle,
            half: 0,
            round: 0,
            remaining_secs: 0,
            signal: SignalColor::Red,
            countdown_color: CountdownColor::Normal,
            show_tournament: false,
            cancel_requested: false,
            prepare_announced: false,
            pending_cues: Vec::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current half (0-based)
    pub fn half(&self) -> usize {
        self.half
    }

    /// Current round (0-based)
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn signal(&self) -> SignalColor {
        self.signal
    }

    pub fn countdown_color(&self) -> CountdownColor {
        self.countdown_color
    }

    pub fn show_tournament(&self) -> bool {
        self.show_tournament
    }

    pub fn timing(&self) -> &MatchTiming {
        &self.timing
    }

    /// Apply this tick's operator commands. Call once per tick before `tick`.
    pub fn handle_input(&mut self, input: &ClockInput) {
        if input.hide_tournament {
            self.show_tournament = false;
        } else if input.show_tournament {
            self.show_tournament = true;
        }

        if input.reset {
            self.reset();
        }

        if input.start {
            if input.reset {
                debug!("Start ignored, reset in the same tick");
            } else if self.stage.is_idle() && self.show_tournament {
                info!(
                    "Start: round {} half {} ({})",
                    self.round + 1,
                    self.half + 1,
                    PAIR_ROSTER[self.round]
                );
                self.stage = Stage::PrepareInit;
                self.countdown_color = CountdownColor::Normal;
            } else {
                debug!("Start ignored in stage {}", self.stage);
            }
        }

        if input.cancel {
            if self.stage.is_acting() {
                info!("Action phase cancelled by operator");
                self.cancel_requested = true;
            } else {
                debug!("Cancel ignored in stage {}", self.stage);
            }
        }

        if input.test_sound {
            self.request(Cue::Test);
        }
    }

    /// Evaluate one transition at `now` and return the readout.
    pub fn tick(&mut self, now: Instant) -> Readout {
        match self.stage {
            Stage::Idle => {}
            Stage::PrepareInit => {
                self.signal = SignalColor::Red;
                let duration = self.timing.prepare(self.half);
                self.stage = Stage::Preparing {
                    ends_at: deadline(now, duration),
                };
                self.remaining_secs = duration.as_secs();
                if !self.prepare_announced {
                    self.request(Cue::Prepare);
                }
                self.prepare_announced = false;
                info!(
                    "Prepare phase: {}s (round {}, half {})",
                    self.remaining_secs,
                    self.round + 1,
                    self.half + 1
                );
            }
            Stage::Preparing { ends_at } => {
                if now < ends_at {
                    let full = self.timing.prepare(self.half).as_secs();
                    self.remaining_secs = secs_until(ends_at, now).min(full);
                } else {
                    self.remaining_secs = 0;
                    self.request(Cue::PrepareEnd);
                    self.stage = Stage::ActionInit;
                }
            }
            Stage::ActionInit => {
                self.signal = SignalColor::Green;
                self.countdown_color = CountdownColor::Normal;
                let duration = self.timing.action();
                self.stage = Stage::Acting {
                    ends_at: deadline(now, duration),
                };
                self.remaining_secs = duration.as_secs();
                info!(
                    "Action phase: {}s for pair {}",
                    self.remaining_secs, PAIR_ROSTER[self.round]
                );
            }
            Stage::Acting { ends_at } => {
                self.remaining_secs = secs_until(ends_at, now).min(self.timing.action_secs);
                if self.remaining_secs == 0 || self.cancel_requested {
                    self.finish_action();
                } else if self.remaining_secs <= self.timing.warn_secs {
                    if self.countdown_color == CountdownColor::Normal {
                        info!("Warning window: {}s left", self.remaining_secs);
                    }
                    self.countdown_color = CountdownColor::Warning;
                    self.signal = SignalColor::Yellow;
                } else {
                    self.signal = SignalColor::Green;
                }
            }
        }

        let cues = std::mem::take(&mut self.pending_cues);
        self.readout(cues)
    }

    /// Phase-end policy after an action phase expires or is cancelled
    fn finish_action(&mut self) {
        self.remaining_secs = 0;
        self.cancel_requested = false;
        self.countdown_color = CountdownColor::Normal;
        self.signal = SignalColor::Red;

        if self.round % 2 == 0 {
            // First sub-round of the pair: roll straight into the next prepare phase
            self.half = 1;
            self.request(Cue::Prepare);
            self.prepare_announced = true;
            self.stage = Stage::PrepareInit;
        } else {
            self.half = 0;
            self.request(Cue::ActionEnd);
            self.stage = Stage::Idle;
        }

        self.round += 1;
        if self.round >= PAIR_ROSTER.len() {
            self.round = 0;
            self.half = 0;
        }

        info!(
            "Action phase over, next: {} (round {}, half {})",
            self.stage,
            self.round + 1,
            self.half + 1
        );
    }

    /// Full reset back to round 1, half 1
    fn reset(&mut self) {
        info!("Full reset");
        self.round = 0;
        self.half = 0;
        self.stage = Stage::Idle;
        self.signal = SignalColor::Red;
        self.countdown_color = CountdownColor::Normal;
        self.remaining_secs = 0;
        self.cancel_requested = false;
        self.prepare_announced = false;
        self.request(Cue::Reset);
    }

    fn request(&mut self, cue: Cue) {
        debug!("Cue requested: {:?}", cue);
        self.pending_cues.push(cue);
    }

    fn readout(&self, cues: Vec<Cue>) -> Readout {
        Readout {
            stage: self.stage,
            remaining_secs: self.remaining_secs,
            signal: self.signal,
            countdown_color: self.countdown_color,
            pair: PAIR_ROSTER[self.round],
            round_number: self.round + 1,
            half_number: self.half + 1,
            show_tournament: self.show_tournament,
            cues,
        }
    }
}

/// `now + duration`, saturating instead of overflowing the platform clock
fn deadline(now: Instant, duration: Duration) -> Instant {
    now.checked_add(duration)
        .or_else(|| now.checked_add(Duration::from_secs(MAX_PHASE_SECS)))
        .unwrap_or(now)
}

/// Whole seconds until `ends_at`, rounded up and saturating at zero
fn secs_until(ends_at: Instant, now: Instant) -> u64 {
    let left = ends_at.saturating_duration_since(now);
    left.as_secs() + u64::from(left.subsec_nanos() > 0)
}
