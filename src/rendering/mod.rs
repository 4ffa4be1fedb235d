//! Display: frame composition and the wgpu renderer.

pub mod font;
mod geometry;
mod images;
mod layout;
pub mod segments;
mod system;

// Re-export public types
pub use geometry::{
    canvas_projection, image_vertices, CanvasUniforms, Frame, ImageId, ImagePlacement,
    ImageVertex, Rect, SolidVertex,
};
pub use images::{load_image, load_images, signal_light, SIGNAL_SIZE};
pub use layout::compose;
pub use system::RenderSystem;
