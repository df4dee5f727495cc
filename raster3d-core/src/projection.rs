/// Perspective projection and viewport mapping
use crate::algebra::{Mat4, Vec4};

/// Default pixel surface width
pub const SCREEN_WIDTH: u32 = 128;
/// Default pixel surface height
pub const SCREEN_HEIGHT: u32 = 64;

/// Perspective projection parameters, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub near: f32,
    pub far: f32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Width over height
    pub aspect: f32,
}

impl Projection {
    pub fn new(near: f32, far: f32, fov: f32, aspect: f32) -> Result<Self, String> {
        if !(near > 0.0) {
            return Err(format!("near plane must be positive, got {}", near));
        }
        if !(far > near) {
            return Err(format!("far plane ({}) must lie beyond near plane ({})", far, near));
        }
        if !(fov > 0.0 && fov < std::f32::consts::PI) {
            return Err(format!("field of view must be within (0, pi) radians, got {}", fov));
        }
        if !(aspect > 0.0) || !aspect.is_finite() {
            return Err(format!("aspect ratio must be positive, got {}", aspect));
        }

        Ok(Self {
            near,
            far,
            fov,
            aspect,
        })
    }

    /// Session defaults for a viewport: near 0.1, far 1000, 45 degree fov.
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            near: 0.1,
            far: 1000.0,
            fov: std::f32::consts::FRAC_PI_4,
            aspect: viewport.aspect(),
        }
    }

    /// Create the projection matrix.
    ///
    /// Right-handed, camera looking down -z. The near plane lands on
    /// z = -w and the far plane on z = w, matching the clip-space outcodes.
    pub fn matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::for_viewport(&Viewport::default())
    }
}

/// Fixed-size pixel target that normalized device coordinates map onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("viewport must be non-empty, got {}x{}", width, height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map an NDC vertex to pixel space.
    ///
    /// Shifts [-1, 1] to [0, 2] and scales by half the surface size. The y
    /// axis is not flipped: NDC +y ends up towards the bottom row.
    pub fn to_screen(&self, ndc: &Vec4) -> Vec4 {
        let mut screen = ndc + Vec4::new(1.0, 1.0, 0.0, 0.0);
        screen.x *= 0.5 * self.width as f32;
        screen.y *= 0.5 * self.height as f32;
        screen
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}
