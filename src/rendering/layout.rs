//! Screen composition: readout → frame.

use glam::Vec2;

use super::font;
use super::geometry::{Frame, ImageId, Rect};
use crate::clock::{CountdownColor, Readout, SignalColor};
use crate::params::RenderConfig;

// Tournament view (canvas pixels)
const SIGNAL_RECT: (f32, f32, f32, f32) = (40.0, 48.0, 240.0, 576.0);
const DIGIT_ORIGIN: (f32, f32) = (330.0, 96.0);
const DIGIT_CELL: (f32, f32) = (190.0, 330.0);
const DIGIT_GAP: f32 = 30.0;
const PAIR_SCALE: f32 = 16.0;
const PAIR_TOP: f32 = 490.0;
const ROUND_SCALE: f32 = 4.0;
const ROUND_TOP: f32 = 32.0;

// Menu view
const LOGO_RECT: (f32, f32, f32, f32) = (40.0, 40.0, 180.0, 180.0);
const TITLE_SCALE: f32 = 8.0;
const SUBTITLE_SCALE: f32 = 4.0;
const LEGEND_SCALE: f32 = 5.0;
const LEGEND_TOP: f32 = 280.0;
const LEGEND_STEP: f32 = 60.0;

// Both views
const CLOCK_SCALE: f32 = 4.0;
const MARGIN: f32 = 24.0;

/// Template digits drawn under the countdown
const TEMPLATE: &str = "888";

/// Build the frame for the current readout.
///
/// `wall_clock` is the preformatted time of day; `legend` lists the key bindings
/// shown on the menu screen.
pub fn compose(
    readout: &Readout,
    wall_clock: &str,
    legend: &[String],
    config: &RenderConfig,
    has_logo: bool,
) -> Frame {
    let mut frame = Frame::new(config.palette.background);

    if readout.show_tournament {
        compose_tournament(&mut frame, readout, config);
    } else {
        compose_menu(&mut frame, legend, config, has_logo);
    }

    // Clock of day, bottom right
    let width = config.canvas_width as f32;
    let height = config.canvas_height as f32;
    let clock_origin = Vec2::new(
        width - MARGIN - font::text_width(wall_clock, CLOCK_SCALE),
        height - MARGIN - font::GLYPH_HEIGHT as f32 * CLOCK_SCALE,
    );
    frame.draw_text(wall_clock, clock_origin, CLOCK_SCALE, config.palette.label);

    frame
}

fn compose_tournament(frame: &mut Frame, readout: &Readout, config: &RenderConfig) {
    let palette = &config.palette;

    let (x, y, w, h) = SIGNAL_RECT;
    frame.draw_image(signal_image(readout.signal), Rect::new(x, y, w, h));

    let digit_origin = Vec2::from(DIGIT_ORIGIN);
    let cell = Vec2::from(DIGIT_CELL);
    frame.draw_digits(TEMPLATE, digit_origin, cell, DIGIT_GAP, palette.template);

    let digit_color = match readout.countdown_color {
        CountdownColor::Normal => palette.countdown_normal,
        CountdownColor::Warning => palette.countdown_warning,
    };
    frame.draw_digits(
        &readout.countdown_text(),
        digit_origin,
        cell,
        DIGIT_GAP,
        digit_color,
    );

    // Pair label centered under the digits
    let digits_width = 3.0 * cell.x + 2.0 * DIGIT_GAP;
    let pair_x = digit_origin.x + (digits_width - font::text_width(readout.pair, PAIR_SCALE)) / 2.0;
    frame.draw_text(
        readout.pair,
        Vec2::new(pair_x, PAIR_TOP),
        PAIR_SCALE,
        palette.label,
    );

    let round_text = format!(
        "ROUND {}  HALF {}",
        readout.round_number, readout.half_number
    );
    frame.draw_text(
        &round_text,
        Vec2::new(digit_origin.x, ROUND_TOP),
        ROUND_SCALE,
        palette.label,
    );
}

fn compose_menu(frame: &mut Frame, legend: &[String], config: &RenderConfig, has_logo: bool) {
    let palette = &config.palette;

    let text_left = if has_logo {
        let (x, y, w, h) = LOGO_RECT;
        frame.draw_image(ImageId::Logo, Rect::new(x, y, w, h));
        x + w + MARGIN
    } else {
        LOGO_RECT.0
    };

    frame.draw_text(
        &config.title,
        Vec2::new(text_left, 60.0),
        TITLE_SCALE,
        palette.label,
    );
    frame.draw_text(
        &config.subtitle,
        Vec2::new(text_left, 60.0 + (font::LINE_HEIGHT as f32 + 2.0) * TITLE_SCALE),
        SUBTITLE_SCALE,
        palette.label,
    );

    for (i, line) in legend.iter().enumerate() {
        frame.draw_text(
            line,
            Vec2::new(LOGO_RECT.0, LEGEND_TOP + i as f32 * LEGEND_STEP),
            LEGEND_SCALE,
            palette.label,
        );
    }
}

fn signal_image(signal: SignalColor) -> ImageId {
    match signal {
        SignalColor::Red => ImageId::SignalRed,
        SignalColor::Green => ImageId::SignalGreen,
        SignalColor::Yellow => ImageId::SignalYellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Stage;
    use crate::input::KeyBindings;

    fn readout(show: bool) -> Readout {
        Readout {
            stage: Stage::Idle,
            remaining_secs: 25,
            signal: SignalColor::Yellow,
            countdown_color: CountdownColor::Warning,
            pair: "C-D",
            round_number: 2,
            half_number: 1,
            show_tournament: show,
            cues: Vec::new(),
        }
    }

    fn has_color(frame: &Frame, color: crate::params::Rgb) -> bool {
        let linear = color.to_linear();
        frame.solids.iter().any(|v| v.color == linear)
    }

    #[test]
    fn test_tournament_view() {
        let config = RenderConfig::default();
        let frame = compose(&readout(true), "12:00:00", &[], &config, false);

        assert_eq!(frame.images.len(), 1);
        assert_eq!(frame.images[0].id, ImageId::SignalYellow);
        assert!(has_color(&frame, config.palette.template));
        assert!(has_color(&frame, config.palette.countdown_warning));
        assert!(!has_color(&frame, config.palette.countdown_normal));
    }

    #[test]
    fn test_normal_countdown_color() {
        let config = RenderConfig::default();
        let mut r = readout(true);
        r.countdown_color = CountdownColor::Normal;
        let frame = compose(&r, "12:00:00", &[], &config, false);
        assert!(has_color(&frame, config.palette.countdown_normal));
        assert!(!has_color(&frame, config.palette.countdown_warning));
    }

    #[test]
    fn test_menu_view_shows_logo_and_no_signal() {
        let config = RenderConfig::default();
        let legend = KeyBindings::default().legend();
        let frame = compose(&readout(false), "08:15:00", &legend, &config, true);

        assert_eq!(frame.images.len(), 1);
        assert_eq!(frame.images[0].id, ImageId::Logo);
        assert!(!has_color(&frame, config.palette.template));

        let without_logo = compose(&readout(false), "08:15:00", &legend, &config, false);
        assert!(without_logo.images.is_empty());
    }

    #[test]
    fn test_everything_inside_canvas() {
        let config = RenderConfig::default();
        let legend = KeyBindings::default().legend();
        let (w, h) = (config.canvas_width as f32, config.canvas_height as f32);

        for show in [true, false] {
            let frame = compose(&readout(show), "23:59:59", &legend, &config, true);
            for v in &frame.solids {
                assert!(v.position[0] >= 0.0 && v.position[0] <= w, "{:?}", v.position);
                assert!(v.position[1] >= 0.0 && v.position[1] <= h, "{:?}", v.position);
            }
        }
    }
}
