//! Tournament timer library - archery match clock, cues and display

pub mod audio;
pub mod cli;
pub mod clock;
pub mod error;
pub mod input;
pub mod params;
pub mod rendering;
