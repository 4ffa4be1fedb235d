//! Audio system: cpal output stream playing cue requests.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{debug, error, info};
use std::sync::{Arc, Mutex};

use super::cues::CueBank;
use super::mixer::CueMixer;
use crate::clock::Cue;
use crate::error::TimerError;
use crate::params::CueConfig;

/// Audio system owning the output stream and the shared cue mixer
pub struct AudioSystem {
    /// Shared with the audio callback
    mixer: Arc<Mutex<CueMixer>>,

    /// Audio output stream (kept alive)
    _stream: cpal::Stream,
}

impl AudioSystem {
    /// Open the default output device and prepare every cue at its sample rate
    pub fn new(config: &CueConfig) -> Result<Self, TimerError> {
        config.validate().map_err(TimerError::InvalidAudio)?;

        // Setup audio output device
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| TimerError::Audio("No audio output device found".to_string()))?;

        let supported = device
            .default_output_config()
            .map_err(|e| TimerError::Audio(format!("Failed to get audio config: {}", e)))?;

        let sample_rate_hz = supported.sample_rate().0 as usize;
        let channels = supported.channels() as usize;

        info!(
            "Audio: {} @ {}Hz, {} channels",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            sample_rate_hz,
            channels
        );

        let bank = CueBank::load(config, sample_rate_hz)?;
        let mixer = Arc::new(Mutex::new(CueMixer::new(&bank, config.volume)));
        let mixer_clone = Arc::clone(&mixer);

        // Build audio output stream
        let stream = device
            .build_output_stream(
                &supported.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| match mixer_clone.lock() {
                    Ok(mut mixer) => mixer.fill(data, channels),
                    Err(_) => data.fill(0.0),
                },
                |err| error!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| TimerError::Audio(format!("Failed to build audio stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| TimerError::Audio(format!("Failed to start audio stream: {}", e)))?;

        Ok(Self {
            mixer,
            _stream: stream,
        })
    }

    /// Play `cue` unless it is already sounding (fire-and-forget)
    pub fn play_cue(&self, cue: Cue) {
        let Ok(mut mixer) = self.mixer.lock() else {
            error!("Cue mixer poisoned, dropping {:?}", cue);
            return;
        };

        if mixer.trigger(cue) {
            info!("Playing cue {:?}", cue);
        } else {
            debug!("Cue {:?} already playing", cue);
        }
    }
}
