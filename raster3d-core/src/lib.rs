/// raster3d Core Library - transform, cull and projection pipeline
///
/// This library owns the algorithmic half of the renderer: homogeneous
/// vector/matrix helpers, transform builders, the camera controller and the
/// per-frame pipeline that hands screen-space triangles to a `Rasterizer`.
/// Surfaces, input and timing live with the front end.

pub mod algebra;
pub mod camera;
pub mod clip;
pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod transform;

// Re-export commonly used types
pub use algebra::{Mat4, Vec4};
pub use camera::{Action, CameraController, CameraPose, InputState};
pub use geometry::{Triangle, CUBE};
pub use pipeline::{FrameStats, Placement, RenderPipeline, TriangleFate};
pub use projection::{Projection, Viewport, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use raster::{Color, Rasterizer, ScreenTriangle, PAINT};
pub use transform::Transform;
