//! Frame geometry: colored quads and image placements in canvas pixels.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec4};

use super::{font, segments};
use crate::params::Rgb;

/// Vertex for solid colored geometry (canvas position + linear RGBA)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SolidVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Vertex for textured quads (canvas position + UV)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ImageVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// Uniform buffer: canvas → clip space projection
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CanvasUniforms {
    pub proj: [[f32; 4]; 4],
}

/// Axis-aligned rectangle in canvas pixels (y grows downwards)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Two triangles covering the rectangle, in vertex order
    fn triangles(&self) -> [Vec2; 6] {
        let top_left = self.min;
        let top_right = Vec2::new(self.max.x, self.min.y);
        let bottom_left = Vec2::new(self.min.x, self.max.y);
        let bottom_right = self.max;
        [
            top_left,
            bottom_left,
            top_right,
            top_right,
            bottom_left,
            bottom_right,
        ]
    }
}

/// Pre-loaded bitmaps the renderer can blit
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageId {
    SignalRed,
    SignalGreen,
    SignalYellow,
    Logo,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImagePlacement {
    pub id: ImageId,
    pub rect: Rect,
}

/// Everything drawn in one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub background: Rgb,
    /// Solid triangles, drawn on top of images
    pub solids: Vec<SolidVertex>,
    pub images: Vec<ImagePlacement>,
}

impl Frame {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            solids: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let color = color.to_linear();
        self.solids
            .extend(rect.triangles().iter().map(|corner| SolidVertex {
                position: corner.to_array(),
                color,
            }));
    }

    pub fn draw_image(&mut self, id: ImageId, rect: Rect) {
        self.images.push(ImagePlacement { id, rect });
    }

    /// Draw text in the 5x7 pixel font; `scale` is the size of one font pixel.
    /// `'\n'` starts a new line below `origin`.
    pub fn draw_text(&mut self, text: &str, origin: Vec2, scale: f32, color: Rgb) {
        let mut pen = origin;
        for c in text.chars() {
            if c == '\n' {
                pen = Vec2::new(origin.x, pen.y + font::LINE_HEIGHT as f32 * scale);
                continue;
            }
            for run in font::glyph_runs(c) {
                self.fill_rect(
                    Rect::new(
                        pen.x + run.col as f32 * scale,
                        pen.y + run.row as f32 * scale,
                        run.len as f32 * scale,
                        scale,
                    ),
                    color,
                );
            }
            pen.x += font::ADVANCE as f32 * scale;
        }
    }

    /// Draw seven-segment digits into consecutive cells of `cell_size`.
    /// Characters without a segment pattern leave their cell empty.
    pub fn draw_digits(&mut self, text: &str, origin: Vec2, cell_size: Vec2, gap: f32, color: Rgb) {
        let thickness = cell_size.x * segments::THICKNESS_RATIO;
        for (i, c) in text.chars().enumerate() {
            let Some(mask) = segments::mask(c) else {
                continue;
            };
            let x = origin.x + i as f32 * (cell_size.x + gap);
            let cell = Rect::new(x, origin.y, cell_size.x, cell_size.y);
            for (bit, rect) in segments::segment_rects(cell, thickness).iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    self.fill_rect(*rect, color);
                }
            }
        }
    }

    pub fn quad_count(&self) -> usize {
        self.solids.len() / 6
    }
}

/// Textured quad vertices for an image placement
pub fn image_vertices(rect: Rect) -> [ImageVertex; 6] {
    rect.triangles().map(|corner| ImageVertex {
        position: corner.to_array(),
        uv: [
            (corner.x - rect.min.x) / rect.width(),
            (corner.y - rect.min.y) / rect.height(),
        ],
    })
}

/// Projection fitting the canvas into the surface, centered with letterbox bars
pub fn canvas_projection(canvas: (u32, u32), surface: (u32, u32)) -> Mat4 {
    let (cw, ch) = (canvas.0.max(1) as f32, canvas.1.max(1) as f32);
    let (sw, sh) = (surface.0.max(1) as f32, surface.1.max(1) as f32);

    let scale = (sw / cw).min(sh / ch);
    let offset_x = (sw - cw * scale) / 2.0;
    let offset_y = (sh - ch * scale) / 2.0;

    Mat4::from_cols(
        Vec4::new(2.0 * scale / sw, 0.0, 0.0, 0.0),
        Vec4::new(0.0, -2.0 * scale / sh, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(2.0 * offset_x / sw - 1.0, 1.0 - 2.0 * offset_y / sh, 0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn project(proj: Mat4, x: f32, y: f32) -> Vec2 {
        let p = proj.project_point3(Vec3::new(x, y, 0.0));
        Vec2::new(p.x, p.y)
    }

    #[test]
    fn test_projection_fills_matching_aspect() {
        let proj = canvas_projection((1024, 768), (2048, 1536));
        assert!(project(proj, 0.0, 0.0).distance(Vec2::new(-1.0, 1.0)) < 1e-5);
        assert!(project(proj, 1024.0, 768.0).distance(Vec2::new(1.0, -1.0)) < 1e-5);
    }

    #[test]
    fn test_projection_letterboxes_wide_surface() {
        // 1920x1080: canvas scaled to 1440x1080, 240px bars left and right
        let proj = canvas_projection((1024, 768), (1920, 1080));
        let left = project(proj, 0.0, 0.0);
        let right = project(proj, 1024.0, 768.0);
        assert!((left.x - (-1.0 + 2.0 * 240.0 / 1920.0)).abs() < 1e-5);
        assert!((left.y - 1.0).abs() < 1e-5);
        assert!((right.x - (1.0 - 2.0 * 240.0 / 1920.0)).abs() < 1e-5);
        assert!((right.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fill_rect_emits_two_triangles() {
        let mut frame = Frame::new(Rgb(0, 0, 0));
        frame.fill_rect(Rect::new(10.0, 20.0, 30.0, 40.0), Rgb(255, 255, 255));
        assert_eq!(frame.solids.len(), 6);
        assert_eq!(frame.quad_count(), 1);
        assert_eq!(frame.solids[0].position, [10.0, 20.0]);
        assert_eq!(frame.solids[5].position, [40.0, 60.0]);
    }

    #[test]
    fn test_image_uvs_span_unit_square() {
        let vertices = image_vertices(Rect::new(100.0, 50.0, 200.0, 400.0));
        assert_eq!(vertices[0].uv, [0.0, 0.0]);
        assert_eq!(vertices[1].uv, [0.0, 1.0]);
        assert_eq!(vertices[2].uv, [1.0, 0.0]);
        assert_eq!(vertices[5].uv, [1.0, 1.0]);
    }

    #[test]
    fn test_draw_digits_skips_blanks() {
        let mut frame = Frame::new(Rgb(0, 0, 0));
        frame.draw_digits("  1", Vec2::ZERO, Vec2::new(100.0, 200.0), 10.0, Rgb(255, 255, 0));
        // "1" lights two segments
        assert_eq!(frame.quad_count(), 2);
        // Third cell starts after two cells and two gaps
        assert!(frame.solids.iter().all(|v| v.position[0] >= 220.0));
    }

    #[test]
    fn test_draw_text_newline_moves_down() {
        let mut frame = Frame::new(Rgb(0, 0, 0));
        frame.draw_text("-\n-", Vec2::new(5.0, 5.0), 2.0, Rgb(255, 255, 255));
        assert_eq!(frame.quad_count(), 2);
        let ys: Vec<f32> = frame.solids.iter().map(|v| v.position[1]).collect();
        assert!(ys.contains(&(5.0 + 3.0 * 2.0)));
        assert!(ys.contains(&(5.0 + (font::LINE_HEIGHT as f32 + 3.0) * 2.0)));
    }
}
