//! Horn cue synthesis.
//!
//! A glicol patch renders a continuous horn tone; the blast pattern (how many
//! blasts, how long, what gap) is applied afterwards by gating that tone.

use glicol::Engine;

use crate::clock::Cue;
use crate::params::{
    audio_constants::{BLOCK_SIZE, RAMP_MS},
    CueConfig,
};

/// Blast pattern for one cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuePattern {
    pub pitch_hz: f32,
    pub blasts: usize,
    pub blast_ms: u64,
    pub gap_ms: u64,
}

impl CuePattern {
    /// Single long horn for test, double for prepare, single for prepare end,
    /// triple for action end, one long low tone for reset
    pub fn for_cue(cue: Cue, config: &CueConfig) -> Self {
        let horn = |blasts, blast_ms| Self {
            pitch_hz: config.horn_pitch_hz,
            blasts,
            blast_ms,
            gap_ms: config.gap_ms,
        };

        match cue {
            Cue::Test => horn(1, config.long_blast_ms),
            Cue::Prepare => horn(2, config.blast_ms),
            Cue::PrepareEnd => horn(1, config.blast_ms),
            Cue::ActionEnd => horn(3, config.blast_ms),
            Cue::Reset => Self {
                pitch_hz: config.reset_pitch_hz,
                blasts: 1,
                blast_ms: config.long_blast_ms,
                gap_ms: config.gap_ms,
            },
        }
    }

    /// Total length including gaps (milliseconds)
    pub fn total_ms(&self) -> u64 {
        if self.blasts == 0 {
            return 0;
        }
        self.blasts as u64 * self.blast_ms + (self.blasts as u64 - 1) * self.gap_ms
    }
}

/// Glicol patch for a single horn tone
fn horn_patch(pitch_hz: f32) -> String {
    format!(
        "~horn: saw {:.2} >> lpf 1800.0 1.0\no: ~horn >> mul 0.4\n",
        pitch_hz
    )
}

/// Render `samples` samples of a continuous horn tone
pub fn render_tone(pitch_hz: f32, sample_rate_hz: usize, samples: usize) -> Result<Vec<f32>, String> {
    let mut engine = Engine::<BLOCK_SIZE>::new();
    engine.set_sr(sample_rate_hz);
    engine.update_with_code(&horn_patch(pitch_hz));

    let mut tone = Vec::with_capacity(samples);
    while tone.len() < samples {
        let (buffers, _) = engine.next_block(vec![]);
        let samples_to_copy = (samples - tone.len()).min(BLOCK_SIZE);
        for i in 0..samples_to_copy {
            tone.push(buffers[0][i]);
        }
    }

    // A patch glicol rejects renders as silence
    if samples > 0 && tone.iter().all(|s| *s == 0.0) {
        return Err(format!("Glicol produced no signal for {:.1} Hz horn", pitch_hz));
    }
    if tone.iter().any(|s| !s.is_finite()) {
        return Err(format!("Glicol produced non-finite samples for {:.1} Hz horn", pitch_hz));
    }

    Ok(tone)
}

/// Render a full cue: gated blasts separated by silence
pub fn render_pattern(pattern: &CuePattern, sample_rate_hz: usize) -> Result<Vec<f32>, String> {
    let blast_len = CueConfig::ms_to_samples(pattern.blast_ms, sample_rate_hz);
    let gap_len = CueConfig::ms_to_samples(pattern.gap_ms, sample_rate_hz);
    let ramp_len = CueConfig::ms_to_samples(RAMP_MS, sample_rate_hz);

    let mut blast = render_tone(pattern.pitch_hz, sample_rate_hz, blast_len)?;
    apply_ramp(&mut blast, ramp_len);

    let mut out = Vec::with_capacity(CueConfig::ms_to_samples(pattern.total_ms(), sample_rate_hz));
    for i in 0..pattern.blasts {
        if i > 0 {
            out.resize(out.len() + gap_len, 0.0);
        }
        out.extend_from_slice(&blast);
    }

    Ok(out)
}

/// Linear fade-in/fade-out so blasts start and stop without clicks
pub fn apply_ramp(samples: &mut [f32], ramp_len: usize) {
    let len = samples.len();
    let ramp_len = ramp_len.min(len / 2);
    for i in 0..ramp_len {
        let gain = i as f32 / ramp_len as f32;
        samples[i] *= gain;
        samples[len - 1 - i] *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_follow_horn_counts() {
        let config = CueConfig::default();
        assert_eq!(CuePattern::for_cue(Cue::PrepareEnd, &config).blasts, 1);
        assert_eq!(CuePattern::for_cue(Cue::Prepare, &config).blasts, 2);
        assert_eq!(CuePattern::for_cue(Cue::ActionEnd, &config).blasts, 3);

        let reset = CuePattern::for_cue(Cue::Reset, &config);
        let test = CuePattern::for_cue(Cue::Test, &config);
        assert_eq!(reset.blast_ms, test.blast_ms);
        assert!(reset.pitch_hz < test.pitch_hz);
    }

    #[test]
    fn test_total_ms_includes_gaps() {
        let pattern = CuePattern {
            pitch_hz: 400.0,
            blasts: 3,
            blast_ms: 500,
            gap_ms: 200,
        };
        assert_eq!(pattern.total_ms(), 1900);
    }

    #[test]
    fn test_ramp_silences_edges() {
        let mut samples = vec![1.0; 100];
        apply_ramp(&mut samples, 10);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[99], 0.0);
        assert!((samples[5] - 0.5).abs() < 1e-6);
        assert_eq!(samples[50], 1.0);
    }

    #[test]
    fn test_ramp_on_short_buffer() {
        let mut samples = vec![1.0; 4];
        apply_ramp(&mut samples, 100);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[3], 0.0);
    }

    #[test]
    fn test_render_pattern_length() {
        let sample_rate = 8000;
        let pattern = CuePattern {
            pitch_hz: 415.0,
            blasts: 2,
            blast_ms: 100,
            gap_ms: 50,
        };
        let samples = render_pattern(&pattern, sample_rate).unwrap();
        assert_eq!(samples.len(), 800 + 400 + 800);
        assert!(samples.iter().all(|s| s.is_finite()));

        // Gap between the blasts is silent
        assert!(samples[800..1200].iter().all(|&s| s == 0.0));
    }
}
