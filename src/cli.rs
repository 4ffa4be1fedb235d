//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{CueConfig, MatchTiming, RenderConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "tournament-timer")]
#[command(about = "Archery tournament countdown display", long_about = None)]
pub struct Args {
    /// Prepare phase of the first half (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    pub prepare_first: u64,

    /// Prepare phase of the second half (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 20)]
    pub prepare_second: u64,

    /// Shooting (action) phase (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 180)]
    pub action: u64,

    /// Countdown turns red at or below this many seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub warn: u64,

    /// Run in a window instead of borderless fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Disable audio output entirely
    #[arg(long)]
    pub mute: bool,

    /// Cue volume (0.0 - 1.0)
    #[arg(long, value_name = "GAIN", default_value_t = 0.8)]
    pub volume: f32,

    /// Directory with WAV overrides (test.wav, prepare.wav, prepare_end.wav, action_end.wav, reset.wav)
    #[arg(long, value_name = "DIR")]
    pub sounds: Option<PathBuf>,

    /// Directory with signal bitmaps (red.png, green.png, yellow.png)
    #[arg(long, value_name = "DIR")]
    pub lights: Option<PathBuf>,

    /// Logo shown on the menu screen
    #[arg(long, value_name = "FILE")]
    pub logo: Option<PathBuf>,

    /// Menu screen heading
    #[arg(long)]
    pub title: Option<String>,

    /// Menu screen sub-heading
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Write the cue sounds as WAV files into DIR and exit
    #[arg(long, value_name = "DIR")]
    pub export_cues: Option<PathBuf>,
}

impl Args {
    pub fn match_timing(&self) -> MatchTiming {
        MatchTiming {
            prepare_secs: [self.prepare_first, self.prepare_second],
            action_secs: self.action,
            warn_secs: self.warn,
        }
    }

    pub fn cue_config(&self) -> CueConfig {
        CueConfig {
            volume: self.volume,
            sound_dir: self.sounds.clone(),
            muted: self.mute,
            ..CueConfig::default()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            fullscreen: !self.windowed,
            title: self.title.clone().unwrap_or(defaults.title.clone()),
            subtitle: self.subtitle.clone().unwrap_or(defaults.subtitle.clone()),
            logo_path: self.logo.clone(),
            lights_dir: self.lights.clone(),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let args = Args::parse_from(["tournament-timer"]);
        assert_eq!(args.match_timing(), MatchTiming::default());

        let render = args.render_config();
        assert!(render.fullscreen);
        assert_eq!(render.title, RenderConfig::default().title);

        let cues = args.cue_config();
        assert!(!cues.muted);
        assert!(cues.sound_dir.is_none());
    }

    #[test]
    fn test_flags_flow_into_configs() {
        let args = Args::parse_from([
            "tournament-timer",
            "--prepare-first",
            "15",
            "--action",
            "120",
            "--warn",
            "20",
            "--windowed",
            "--mute",
            "--title",
            "Hallenturnier",
            "--sounds",
            "/tmp/sounds",
        ]);

        let timing = args.match_timing();
        assert_eq!(timing.prepare_secs, [15, 20]);
        assert_eq!(timing.action_secs, 120);
        assert_eq!(timing.warn_secs, 20);

        let render = args.render_config();
        assert!(!render.fullscreen);
        assert_eq!(render.title, "Hallenturnier");

        let cues = args.cue_config();
        assert!(cues.muted);
        assert_eq!(cues.sound_dir, Some(PathBuf::from("/tmp/sounds")));
    }
}
