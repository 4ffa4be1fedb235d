//! Round/stage timing state machine.
//!
//! `MatchClock` advances through the prepare → action cycle for each round and
//! half, one transition per `tick`. Rendering and audio only read the
//! `Readout` it returns.

mod machine;
mod readout;
mod signal;
mod stage;

// Re-export public types
pub use machine::{ClockInput, MatchClock};
pub use readout::Readout;
pub use signal::{CountdownColor, Cue, SignalColor};
pub use stage::Stage;
