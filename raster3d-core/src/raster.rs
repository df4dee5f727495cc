/// Interface between the pipeline and whatever paints pixels
use crate::algebra::Vec4;

/// 0x00RRGGBB
pub type Color = u32;

/// Fixed fill colour for the cube
pub const PAINT: Color = 0x00ff_ffff;

/// Three pixel-space vertices: x and y in pixels, z the NDC depth, w = 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec4; 3],
}

/// Paints the pixels covered by a screen-space triangle.
///
/// Implementations must use a deterministic coverage rule so that edges
/// shared by neighbouring triangles are filled consistently.
pub trait Rasterizer {
    fn fill_triangle(&mut self, triangle: &ScreenTriangle, color: Color);
}
