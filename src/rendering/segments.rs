//! Seven-segment digit geometry for the countdown.
//!
//! Segment bits: a=0 (top), b=1 (top right), c=2 (bottom right),
//! d=3 (bottom), e=4 (bottom left), f=5 (top left), g=6 (middle).

use super::geometry::Rect;

/// Segment thickness relative to cell width
pub const THICKNESS_RATIO: f32 = 0.16;

/// Segment mask for `c`; `None` leaves the cell blank
pub fn mask(c: char) -> Option<u8> {
    let mask = match c {
        '0' => 0b011_1111,
        '1' => 0b000_0110,
        '2' => 0b101_1011,
        '3' => 0b100_1111,
        '4' => 0b110_0110,
        '5' => 0b110_1101,
        '6' => 0b111_1101,
        '7' => 0b000_0111,
        '8' => 0b111_1111,
        '9' => 0b110_1111,
        '-' => 0b100_0000,
        _ => return None,
    };
    Some(mask)
}

/// Rectangles for segments a..g inside `cell`
pub fn segment_rects(cell: Rect, thickness: f32) -> [Rect; 7] {
    let (x, y) = (cell.min.x, cell.min.y);
    let (w, h) = (cell.width(), cell.height());
    let t = thickness;
    let half = (h - t) / 2.0;
    let upper = half - t;
    let lower = h - half - 2.0 * t;

    [
        // a
        Rect::new(x + t, y, w - 2.0 * t, t),
        // b
        Rect::new(x + w - t, y + t, t, upper),
        // c
        Rect::new(x + w - t, y + half + t, t, lower),
        // d
        Rect::new(x + t, y + h - t, w - 2.0 * t, t),
        // e
        Rect::new(x, y + half + t, t, lower),
        // f
        Rect::new(x, y + t, t, upper),
        // g
        Rect::new(x + t, y + half, w - 2.0 * t, t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks() {
        assert_eq!(mask('8').map(u8::count_ones), Some(7));
        assert_eq!(mask('1').map(u8::count_ones), Some(2));
        assert_eq!(mask('-'), Some(1 << 6));
        assert_eq!(mask(' '), None);
    }

    #[test]
    fn test_segments_stay_inside_cell() {
        let cell = Rect::new(100.0, 50.0, 200.0, 340.0);
        for rect in segment_rects(cell, 32.0) {
            assert!(rect.min.x >= cell.min.x && rect.max.x <= cell.max.x);
            assert!(rect.min.y >= cell.min.y && rect.max.y <= cell.max.y);
            assert!(rect.width() > 0.0 && rect.height() > 0.0);
        }
    }

    #[test]
    fn test_middle_segment_centered() {
        let cell = Rect::new(0.0, 0.0, 200.0, 340.0);
        let g = segment_rects(cell, 32.0)[6];
        let center = (g.min.y + g.max.y) / 2.0;
        assert!((center - 170.0).abs() < 1e-4);
    }
}
