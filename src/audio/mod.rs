//! Audio cue synthesis and playback.
//!
//! Cues are rendered once at startup (glicol horns, or WAV overrides) and
//! mixed into a cpal output stream on request.

mod cues;
mod mixer;
mod synthesis;
mod system;

// Re-export public types
pub use cues::{mix_to_mono, read_wav, resample_linear, CueBank};
pub use mixer::CueMixer;
pub use synthesis::{render_pattern, CuePattern};
pub use system::AudioSystem;
