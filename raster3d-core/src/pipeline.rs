/// Per-frame transform, cull and submit pipeline
use log::trace;

use crate::algebra::{cross_2d, point, scalar_div, Mat4, Vec4};
use crate::camera::CameraPose;
use crate::clip::{outcode, trivially_outside};
use crate::geometry::{Triangle, CUBE};
use crate::projection::{Projection, Viewport};
use crate::raster::{Color, Rasterizer, ScreenTriangle, PAINT};
use crate::transform::Transform;

/// What happened to a triangle on its way through the pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleFate {
    Visible(ScreenTriangle),
    /// Every vertex lies outside the same frustum plane
    OutsideFrustum,
    /// A vertex sits on or behind the eye plane (w <= 0)
    DegenerateW,
    /// Winding indicator is zero or negative
    BackFacing,
}

/// Triangle counts for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub submitted: usize,
    pub outside_frustum: usize,
    pub degenerate_w: usize,
    pub back_facing: usize,
}

impl FrameStats {
    pub fn culled(&self) -> usize {
        self.outside_frustum + self.degenerate_w + self.back_facing
    }

    fn record(&mut self, fate: &TriangleFate) {
        match fate {
            TriangleFate::Visible(_) => self.submitted += 1,
            TriangleFate::OutsideFrustum => self.outside_frustum += 1,
            TriangleFate::DegenerateW => self.degenerate_w += 1,
            TriangleFate::BackFacing => self.back_facing += 1,
        }
    }
}

/// Where the mesh sits in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub rotation: Vec4,
    pub translation: Vec4,
    pub scale: Vec4,
}

impl Placement {
    pub fn matrix(&self) -> Mat4 {
        Transform::model_matrix(&self.rotation, &self.translation, &self.scale)
    }
}

impl Default for Placement {
    /// Three units in front of a camera at the origin
    fn default() -> Self {
        Self {
            rotation: Vec4::zeros(),
            translation: Vec4::new(0.0, 0.0, -3.0, 0.0),
            scale: Vec4::new(1.0, 1.0, 1.0, 0.0),
        }
    }
}

/// Immutable session configuration; every frame is computed fresh from it
/// and the camera pose.
#[derive(Debug, Clone)]
pub struct RenderPipeline {
    projection: Projection,
    viewport: Viewport,
    placement: Placement,
    color: Color,
}

impl RenderPipeline {
    pub fn new(viewport: Viewport, projection: Projection) -> Self {
        Self {
            projection,
            viewport,
            placement: Placement::default(),
            color: PAINT,
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Model-view transform for the current pose: model first, then view
    pub fn model_view(&self, camera: &CameraPose) -> Mat4 {
        let view = Transform::view_matrix(&camera.model_matrix());
        view * self.placement.matrix()
    }

    /// Draw the cube as seen from `camera`.
    pub fn render_frame<R: Rasterizer>(&self, camera: &CameraPose, rasterizer: &mut R) -> FrameStats {
        self.render_mesh(&CUBE, camera, rasterizer)
    }

    pub fn render_mesh<R: Rasterizer>(
        &self,
        mesh: &[Triangle],
        camera: &CameraPose,
        rasterizer: &mut R,
    ) -> FrameStats {
        let projection = self.projection.matrix();
        let model_view = self.model_view(camera);
        let mut stats = FrameStats::default();

        for (index, triangle) in mesh.iter().enumerate() {
            let fate = self.process_triangle(&projection, &model_view, triangle);
            if let TriangleFate::Visible(screen) = &fate {
                rasterizer.fill_triangle(screen, self.color);
            } else {
                trace!("triangle {} culled: {:?}", index, fate);
            }
            stats.record(&fate);
        }

        stats
    }

    /// Run one triangle through clip, divide, viewport and backface stages.
    pub fn process_triangle(&self, projection: &Mat4, model_view: &Mat4, triangle: &Triangle) -> TriangleFate {
        let clip = triangle
            .points()
            .map(|v| projection * (model_view * v));

        let outcodes = clip.each_ref().map(outcode);
        if trivially_outside(&outcodes) {
            trace!("outside frustum: {:?} outcodes {:?}", clip, outcodes);
            return TriangleFate::OutsideFrustum;
        }
        // Triangles straddling the frustum are not clipped and get drawn
        // whole, which can smear past the surface edges. Known artifact.

        if clip.iter().any(|v| !in_front_of_eye(v)) {
            trace!("vertex on or behind the eye plane: {:?}", clip);
            return TriangleFate::DegenerateW;
        }

        let screen = clip.map(|v| self.viewport.to_screen(&scalar_div(&v, v.w)));

        let a = screen[0] - screen[1];
        let b = screen[0] - screen[2];
        if cross_2d(&a, &b) > 0.0 {
            TriangleFate::Visible(ScreenTriangle { points: screen })
        } else {
            TriangleFate::BackFacing
        }
    }

    /// Pixel position of a single model-space point, ignoring frustum and
    /// winding culls. `None` when the point is on or behind the eye plane.
    pub fn project_point(&self, camera: &CameraPose, model: [f32; 3]) -> Option<Vec4> {
        let clip = self.projection.matrix() * (self.model_view(camera) * point(model[0], model[1], model[2]));
        if !in_front_of_eye(&clip) {
            return None;
        }
        Some(self.viewport.to_screen(&scalar_div(&clip, clip.w)))
    }
}

/// Safe to divide by `w`
fn in_front_of_eye(clip: &Vec4) -> bool {
    clip.w > f32::EPSILON
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(Viewport::default(), Projection::default())
    }
}
