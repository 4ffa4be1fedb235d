//! 5x7 pixel font for labels, legend and wall clock.
//!
//! Each glyph is seven rows; bit 4 of a row is the leftmost pixel.

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// Horizontal pen advance per character (glyph + 1px spacing)
pub const ADVANCE: usize = 6;
/// Vertical pen advance per line
pub const LINE_HEIGHT: usize = 9;

/// A horizontal run of lit pixels within a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub row: usize,
    pub col: usize,
    pub len: usize,
}

/// Row bitmap for `c`, or `None` if the font lacks it. Lowercase maps to uppercase.
pub fn glyph(c: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match c.to_ascii_uppercase() {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '[' => [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E],
        ']' => [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E],
        _ => return None,
    };
    Some(rows)
}

/// Lit pixels of `c` merged into horizontal runs; unknown characters render blank
pub fn glyph_runs(c: char) -> Vec<Run> {
    let Some(rows) = glyph(c) else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    for (row, bits) in rows.iter().enumerate() {
        let mut col = 0;
        while col < GLYPH_WIDTH {
            if !lit(*bits, col) {
                col += 1;
                continue;
            }
            let start = col;
            while col < GLYPH_WIDTH && lit(*bits, col) {
                col += 1;
            }
            runs.push(Run {
                row,
                col: start,
                len: col - start,
            });
        }
    }
    runs
}

fn lit(bits: u8, col: usize) -> bool {
    bits & (0x10 >> col) != 0
}

/// Width in canvas pixels of the longest line of `text` at `scale`
pub fn text_width(text: &str, scale: f32) -> f32 {
    text.lines()
        .map(|line| line.chars().count())
        .max()
        .filter(|&n| n > 0)
        .map_or(0.0, |n| (n * ADVANCE - 1) as f32 * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_row_is_single_run() {
        let runs = glyph_runs('-');
        assert_eq!(
            runs,
            vec![Run {
                row: 3,
                col: 0,
                len: 5
            }]
        );
    }

    #[test]
    fn test_split_row_yields_separate_runs() {
        // 'H' row 0 is X...X
        let runs: Vec<Run> = glyph_runs('H').into_iter().filter(|r| r.row == 0).collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].col, 0);
        assert_eq!(runs[1].col, 4);
    }

    #[test]
    fn test_lowercase_and_unknown() {
        assert_eq!(glyph('a'), glyph('A'));
        assert!(glyph('~').is_none());
        assert!(glyph_runs('~').is_empty());
        assert!(glyph_runs(' ').is_empty());
    }

    #[test]
    fn test_covers_legend_and_labels() {
        for c in "[ENTER] START [ESC] MENU ROUND 1 HALF 2 A-B C-D 12:34:56 BSV E.V. 1/2".chars() {
            assert!(glyph(c).is_some(), "missing glyph {:?}", c);
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2.0), 0.0);
        assert_eq!(text_width("A", 1.0), 5.0);
        assert_eq!(text_width("A-B", 16.0), 17.0 * 16.0);
        assert_eq!(text_width("AB\nABCD", 1.0), 23.0);
    }
}
