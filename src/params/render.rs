//! Rendering and display configuration.

use std::path::PathBuf;

/// 8-bit sRGB color as authored in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Convert to linear RGBA for an sRGB render target
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_channel_to_linear(self.0),
            srgb_channel_to_linear(self.1),
            srgb_channel_to_linear(self.2),
            1.0,
        ]
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }

    /// Scale brightness (used for unlit/shaded bitmap regions)
    pub fn dimmed(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self(scale(self.0), scale(self.1), scale(self.2))
    }
}

fn srgb_channel_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Display colors
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Rgb,
    /// Unlit countdown segments drawn under the live digits
    pub template: Rgb,
    /// Countdown digits outside the warning window
    pub countdown_normal: Rgb,
    /// Countdown digits inside the warning window
    pub countdown_warning: Rgb,
    pub label: Rgb,
    pub signal_red: Rgb,
    pub signal_green: Rgb,
    pub signal_yellow: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            template: Rgb(50, 50, 50),
            countdown_normal: Rgb(255, 255, 0),
            countdown_warning: Rgb(255, 0, 0),
            label: Rgb(255, 255, 255),
            signal_red: Rgb(255, 0, 0),
            signal_green: Rgb(0, 255, 0),
            signal_yellow: Rgb(255, 255, 0),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Logical canvas width (pixels), letterboxed into the window
    pub canvas_width: u32,

    /// Logical canvas height (pixels)
    pub canvas_height: u32,

    /// Start in borderless fullscreen
    pub fullscreen: bool,

    /// Menu screen heading
    pub title: String,

    /// Menu screen sub-heading (club name)
    pub subtitle: String,

    /// PNG shown on the menu screen
    pub logo_path: Option<PathBuf>,

    /// Directory with `red.png`, `green.png`, `yellow.png` signal bitmaps
    pub lights_dir: Option<PathBuf>,

    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1024,
            canvas_height: 768,
            fullscreen: true,
            title: "Turnier Timer".to_string(),
            subtitle: "BSV Eppinghoven 1743 e.V.".to_string(),
            logo_path: None,
            lights_dir: None,
            palette: Palette::default(),
        }
    }
}
