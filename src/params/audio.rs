//! Audio cue configuration and constants.

use std::path::PathBuf;

/// Audio cue playback and synthesis configuration
#[derive(Debug, Clone)]
pub struct CueConfig {
    /// Sample rate used when no output device dictates one (Hz)
    /// Only relevant for `--export-cues`
    pub sample_rate_hz: usize,

    /// Output volume (linear gain, 0.0 = silent, 1.0 = unity)
    pub volume: f32,

    /// Horn pitch for the test/prepare/end cues (Hz)
    pub horn_pitch_hz: f32,

    /// Pitch of the reset tone (Hz), kept low so it cannot be mistaken for a horn
    pub reset_pitch_hz: f32,

    /// Length of one short horn blast (milliseconds)
    pub blast_ms: u64,

    /// Silence between consecutive blasts (milliseconds)
    pub gap_ms: u64,

    /// Length of the long test and reset tones (milliseconds)
    pub long_blast_ms: u64,

    /// Directory with WAV files replacing the synthesized cues
    pub sound_dir: Option<PathBuf>,

    /// Skip opening an audio device entirely
    pub muted: bool,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 48000,
            volume: 0.8,
            horn_pitch_hz: 415.0,
            reset_pitch_hz: 196.0,
            blast_ms: 600,
            gap_ms: 250,
            long_blast_ms: 1500,
            sound_dir: None,
            muted: false,
        }
    }
}

impl CueConfig {
    /// Convert milliseconds to a sample count at the given rate
    pub fn ms_to_samples(ms: u64, sample_rate_hz: usize) -> usize {
        (ms as usize * sample_rate_hz) / 1000
    }

    /// Validate configuration (volume range, audible pitches)
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(format!("Volume must be within 0.0..=1.0, got {}", self.volume));
        }
        if self.horn_pitch_hz <= 0.0 || self.reset_pitch_hz <= 0.0 {
            return Err("Cue pitches must be > 0 Hz".to_string());
        }
        if self.sample_rate_hz == 0 {
            return Err("Sample rate must be > 0".to_string());
        }
        Ok(())
    }
}

/// Audio constants (compile-time, match Glicol engine setup)
pub mod audio_constants {
    /// Audio block size (samples per buffer)
    /// 128 samples = 2.7ms @ 48kHz
    pub const BLOCK_SIZE: usize = 128;

    /// Attack/release ramp applied to each blast (milliseconds)
    pub const RAMP_MS: u64 = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_samples() {
        assert_eq!(CueConfig::ms_to_samples(1000, 48000), 48000);
        assert_eq!(CueConfig::ms_to_samples(250, 44100), 11025);
        assert_eq!(CueConfig::ms_to_samples(0, 48000), 0);
    }

    #[test]
    fn test_volume_out_of_range() {
        let config = CueConfig {
            volume: 1.5,
            ..CueConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(CueConfig::default().validate().is_ok());
    }
}
