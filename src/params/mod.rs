//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers are collected here with:
//! - Units (seconds, milliseconds, Hz, pixels)
//! - Documented ranges and meanings
//! - Defaults matching the club's tournament setup

mod audio;
mod render;
mod timing;

// Re-export all types
pub use audio::{audio_constants, CueConfig};
pub use render::{Palette, RenderConfig, Rgb};
pub use timing::{MatchTiming, MAX_PHASE_SECS, PAIR_ROSTER};
