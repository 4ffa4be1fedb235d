//! Cue sound bank: synthesized horns with optional WAV overrides.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;

use super::synthesis::{render_pattern, CuePattern};
use crate::clock::Cue;
use crate::error::TimerError;
use crate::params::CueConfig;

/// Mono sample buffers for every cue at one sample rate
#[derive(Debug, Clone)]
pub struct CueBank {
    sample_rate_hz: usize,
    sounds: Vec<Arc<[f32]>>,
}

impl CueBank {
    /// Synthesize every cue, then replace those with a WAV in `sound_dir`
    pub fn load(config: &CueConfig, sample_rate_hz: usize) -> Result<Self, TimerError> {
        let mut bank = Self::synthesize(config, sample_rate_hz)?;

        if let Some(dir) = &config.sound_dir {
            for cue in Cue::ALL {
                let path = dir.join(format!("{}.wav", cue.file_stem()));
                if path.is_file() {
                    let samples = read_wav(&path, sample_rate_hz)?;
                    info!("Cue {:?}: {} ({} samples)", cue, path.display(), samples.len());
                    bank.sounds[cue.index()] = samples.into();
                }
            }
        }

        Ok(bank)
    }

    /// Synthesize every cue with glicol
    pub fn synthesize(config: &CueConfig, sample_rate_hz: usize) -> Result<Self, TimerError> {
        let sounds: Vec<Arc<[f32]>> = Cue::ALL
            .iter()
            .map(|&cue| {
                let pattern = CuePattern::for_cue(cue, config);
                render_pattern(&pattern, sample_rate_hz)
                    .map(Arc::from)
                    .map_err(TimerError::Synthesis)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sample_rate_hz,
            sounds,
        })
    }

    pub fn sample_rate_hz(&self) -> usize {
        self.sample_rate_hz
    }

    pub fn get(&self, cue: Cue) -> &Arc<[f32]> {
        &self.sounds[cue.index()]
    }

    /// Write every cue as a 16-bit mono WAV into `dir`
    pub fn export(&self, dir: &Path) -> Result<Vec<PathBuf>, TimerError> {
        std::fs::create_dir_all(dir)?;

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate_hz as u32,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut written = Vec::with_capacity(Cue::COUNT);
        for cue in Cue::ALL {
            let path = dir.join(format!("{}.wav", cue.file_stem()));
            let sound_err = |source| TimerError::Sound {
                path: path.clone(),
                source,
            };

            let mut writer = hound::WavWriter::create(&path, spec).map_err(sound_err)?;
            for &sample in self.get(cue).iter() {
                let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
                writer.write_sample(value).map_err(sound_err)?;
            }
            writer.finalize().map_err(sound_err)?;
            written.push(path);
        }

        Ok(written)
    }
}

/// Decode a WAV file to mono f32 at `target_rate_hz`
pub fn read_wav(path: &Path, target_rate_hz: usize) -> Result<Vec<f32>, TimerError> {
    let sound_err = |source| TimerError::Sound {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = hound::WavReader::open(path).map_err(sound_err)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(sound_err)?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .map_err(sound_err)?
        }
    };

    let mono = mix_to_mono(&interleaved, spec.channels as usize);
    Ok(resample_linear(&mono, spec.sample_rate as usize, target_rate_hz))
}

/// Average interleaved channels down to one
pub fn mix_to_mono(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Linear-interpolation resampler (good enough for horn cues)
pub fn resample_linear(samples: &[f32], from_hz: usize, to_hz: usize) -> Vec<f32> {
    if from_hz == to_hz || samples.is_empty() || from_hz == 0 {
        return samples.to_vec();
    }

    let out_len = (samples.len() as u64 * to_hz as u64 / from_hz as u64) as usize;
    let step = from_hz as f64 / to_hz as f64;
    let last = samples.len() - 1;

    (0..out_len)
        .map(|i| {
            let pos = i as f64 * step;
            let idx = (pos.floor() as usize).min(last);
            let frac = (pos - idx as f64) as f32;
            let a = samples[idx];
            let b = samples[(idx + 1).min(last)];
            a + (b - a) * frac
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tournament-timer-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_mix_to_mono_averages() {
        let stereo = [1.0, 0.0, 0.5, 0.5, -1.0, 1.0];
        assert_eq!(mix_to_mono(&stereo, 2), vec![0.5, 0.5, 0.0]);
        assert_eq!(mix_to_mono(&[0.25, 0.5], 1), vec![0.25, 0.5]);
    }

    #[test]
    fn test_resample_doubles_length() {
        let samples = [0.0, 1.0, 0.0, -1.0];
        let up = resample_linear(&samples, 24000, 48000);
        assert_eq!(up.len(), 8);
        assert_eq!(up[0], 0.0);
        assert!((up[1] - 0.5).abs() < 1e-6);
        assert_eq!(up[2], 1.0);

        let same = resample_linear(&samples, 48000, 48000);
        assert_eq!(same, samples.to_vec());
    }

    #[test]
    fn test_read_wav_override_is_mono_at_target_rate() {
        let dir = temp_dir("wav");
        let path = dir.join("prepare.wav");

        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 24000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for _ in 0..100 {
            writer.write_sample(i16::MAX / 2).unwrap();
            writer.write_sample(i16::MAX / 2).unwrap();
        }
        writer.finalize().unwrap();

        let samples = read_wav(&path, 48000).unwrap();
        assert_eq!(samples.len(), 200);
        assert!((samples[10] - 0.5).abs() < 0.01);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_override_dir_entries_keep_synth() {
        let dir = temp_dir("partial");
        let config = CueConfig {
            sound_dir: Some(dir.clone()),
            blast_ms: 50,
            long_blast_ms: 100,
            gap_ms: 20,
            ..CueConfig::default()
        };

        let bank = CueBank::load(&config, 8000).unwrap();
        assert_eq!(bank.get(Cue::PrepareEnd).len(), 400);
        assert_eq!(bank.get(Cue::Prepare).len(), 400 + 160 + 400);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_export_writes_every_cue() {
        let dir = temp_dir("export");
        let config = CueConfig {
            blast_ms: 50,
            long_blast_ms: 100,
            gap_ms: 20,
            ..CueConfig::default()
        };

        let bank = CueBank::synthesize(&config, 8000).unwrap();
        let written = bank.export(&dir).unwrap();
        assert_eq!(written.len(), Cue::COUNT);
        assert!(written.iter().all(|p| p.is_file()));

        let reread = read_wav(&dir.join("action_end.wav"), 8000).unwrap();
        assert_eq!(reread.len(), bank.get(Cue::ActionEnd).len());

        std::fs::remove_dir_all(&dir).ok();
    }
}
