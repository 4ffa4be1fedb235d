//! Cue mixer shared between the tick loop and the audio callback.

use std::sync::Arc;

use super::cues::CueBank;
use crate::clock::Cue;

/// One cue's samples and playback position
struct Voice {
    samples: Arc<[f32]>,
    cursor: Option<usize>,
}

/// Mixes active cue voices into the output stream.
///
/// Each cue has exactly one voice, so a cue that is still sounding cannot be
/// restarted or stacked on itself.
pub struct CueMixer {
    voices: Vec<Voice>,
    volume: f32,
}

impl CueMixer {
    pub fn new(bank: &CueBank, volume: f32) -> Self {
        let voices = Cue::ALL
            .iter()
            .map(|&cue| Voice {
                samples: Arc::clone(bank.get(cue)),
                cursor: None,
            })
            .collect();

        Self { voices, volume }
    }

    /// Start `cue` from the beginning unless it is already playing.
    ///
    /// Returns whether playback started.
    pub fn trigger(&mut self, cue: Cue) -> bool {
        let voice = &mut self.voices[cue.index()];
        if voice.cursor.is_some() || voice.samples.is_empty() {
            return false;
        }
        voice.cursor = Some(0);
        true
    }

    /// Fill an interleaved output buffer, duplicating the mono mix to every channel
    pub fn fill(&mut self, out: &mut [f32], channels: usize) {
        let channels = channels.max(1);

        for frame in out.chunks_mut(channels) {
            let mut mix = 0.0;
            for voice in &mut self.voices {
                if let Some(pos) = voice.cursor {
                    mix += voice.samples[pos];
                    let next = pos + 1;
                    voice.cursor = (next < voice.samples.len()).then_some(next);
                }
            }

            // Overlapping horns must not wrap around
            let sample = (mix * self.volume).clamp(-1.0, 1.0);
            frame.fill(sample);
        }
    }
}
