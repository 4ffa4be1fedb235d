//! Signal-light and logo bitmaps.

use std::path::Path;

use image::{Rgba, RgbaImage};
use log::info;

use super::geometry::ImageId;
use crate::error::TimerError;
use crate::params::{RenderConfig, Rgb};

/// Size of a generated signal-light bitmap (pixels)
pub const SIGNAL_SIZE: (u32, u32) = (35, 84);

const HOUSING: Rgb = Rgb(30, 30, 30);
const HOUSING_RADIUS: f32 = 6.0;
const LENS_INSET: f32 = 4.0;
const LENS_RADIUS: f32 = 4.0;

/// Generate a lit signal panel: dark rounded housing with a shaded lens
pub fn signal_light(color: Rgb) -> RgbaImage {
    let (width, height) = SIGNAL_SIZE;
    let (w, h) = (width as f32, height as f32);

    RgbaImage::from_fn(width, height, |x, y| {
        // Sample at pixel centers
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        if inside_rounded(px, py, w, h, LENS_INSET, LENS_RADIUS) {
            // Brighter towards the top
            let shade = 1.0 - 0.35 * (py / h);
            Rgba(color.dimmed(shade).to_rgba8())
        } else if inside_rounded(px, py, w, h, 0.0, HOUSING_RADIUS) {
            Rgba(HOUSING.to_rgba8())
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Point inside a `w`x`h` rectangle shrunk by `inset`, with rounded corners of `radius`
fn inside_rounded(px: f32, py: f32, w: f32, h: f32, inset: f32, radius: f32) -> bool {
    let (left, top) = (inset, inset);
    let (right, bottom) = (w - inset, h - inset);
    if px < left || px > right || py < top || py > bottom {
        return false;
    }

    // Distance to the nearest corner circle center, only relevant in corner zones
    let cx = px.clamp(left + radius, right - radius);
    let cy = py.clamp(top + radius, bottom - radius);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= radius * radius
}

/// Load any format the `image` crate decodes, as RGBA8
pub fn load_image(path: &Path) -> Result<RgbaImage, TimerError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| TimerError::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Every bitmap the display needs: signal lights (loaded or generated) and the optional logo
pub fn load_images(config: &RenderConfig) -> Result<Vec<(ImageId, RgbaImage)>, TimerError> {
    let palette = &config.palette;
    let signals = [
        (ImageId::SignalRed, "red.png", palette.signal_red),
        (ImageId::SignalGreen, "green.png", palette.signal_green),
        (ImageId::SignalYellow, "yellow.png", palette.signal_yellow),
    ];

    let mut images = Vec::with_capacity(signals.len() + 1);
    for (id, file, color) in signals {
        let image = match &config.lights_dir {
            Some(dir) => {
                let path = dir.join(file);
                info!("Signal {:?}: {}", id, path.display());
                load_image(&path)?
            }
            None => signal_light(color),
        };
        images.push((id, image));
    }

    if let Some(path) = &config.logo_path {
        info!("Logo: {}", path.display());
        images.push((ImageId::Logo, load_image(path)?));
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_signal_light_regions() {
        let img = signal_light(Rgb(0, 255, 0));
        assert_eq!(img.dimensions(), SIGNAL_SIZE);

        // Corner outside the rounded housing is transparent
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        // Border is housing
        assert_eq!(img.get_pixel(1, 40).0, HOUSING.to_rgba8());
        // Lens top is brighter than lens bottom
        let top = img.get_pixel(17, 6)[1];
        let bottom = img.get_pixel(17, 78)[1];
        assert!(top > bottom);
        assert_eq!(img.get_pixel(17, 40)[0], 0);
    }

    #[test]
    fn test_generated_set_without_logo() {
        let images = load_images(&RenderConfig::default()).unwrap();
        let ids: Vec<ImageId> = images.iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec![ImageId::SignalRed, ImageId::SignalGreen, ImageId::SignalYellow]
        );
    }

    #[test]
    fn test_lights_dir_round_trip_and_missing_logo() {
        let dir = std::env::temp_dir().join(format!("tournament-timer-lights-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        for name in ["red.png", "green.png", "yellow.png"] {
            RgbaImage::from_pixel(4, 8, Rgba([9, 9, 9, 255]))
                .save(dir.join(name))
                .unwrap();
        }

        let config = RenderConfig {
            lights_dir: Some(dir.clone()),
            ..RenderConfig::default()
        };
        let images = load_images(&config).unwrap();
        assert!(images.iter().all(|(_, img)| img.dimensions() == (4, 8)));

        let config = RenderConfig {
            logo_path: Some(PathBuf::from("/nonexistent/logo.png")),
            ..RenderConfig::default()
        };
        assert!(matches!(
            load_images(&config),
            Err(TimerError::Image { .. })
        ));

        std::fs::remove_dir_all(&dir).ok();
    }
}
