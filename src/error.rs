//! Error types for the tournament timer

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or starting the timer.
///
/// The match clock itself never fails; everything here belongs to startup
/// (configuration, assets, devices) or to the window/event loop.
#[derive(Error, Debug)]
pub enum TimerError {
    #[error("Invalid timing: {0}")]
    InvalidTiming(String),

    #[error("Invalid audio configuration: {0}")]
    InvalidAudio(String),

    #[error("Audio device error: {0}")]
    Audio(String),

    #[error("Cue synthesis failed: {0}")]
    Synthesis(String),

    #[error("Failed to read sound {path}: {source}")]
    Sound {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to load image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Render setup failed: {0}")]
    Render(String),

    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
