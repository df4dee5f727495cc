/// Clip-space frustum classification
use crate::algebra::Vec4;

pub const LEFT: u8 = 1 << 0;
pub const RIGHT: u8 = 1 << 1;
pub const BOTTOM: u8 = 1 << 2;
pub const TOP: u8 = 1 << 3;
pub const NEAR: u8 = 1 << 4;
pub const FAR: u8 = 1 << 5;

/// Bitmask of the frustum planes a clip-space vertex lies outside of.
pub fn outcode(v: &Vec4) -> u8 {
    let mut code = 0;
    if v.x < -v.w {
        code |= LEFT;
    }
    if v.x > v.w {
        code |= RIGHT;
    }
    if v.y < -v.w {
        code |= BOTTOM;
    }
    if v.y > v.w {
        code |= TOP;
    }
    if v.z < -v.w {
        code |= NEAR;
    }
    if v.z > v.w {
        code |= FAR;
    }
    code
}

/// True when all three vertices share a violated plane, so no part of the
/// triangle can be inside the frustum.
pub fn trivially_outside(outcodes: &[u8; 3]) -> bool {
    outcodes[0] & outcodes[1] & outcodes[2] != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_vertex_has_no_bits() {
        assert_eq!(outcode(&Vec4::new(0.5, -0.5, 0.0, 1.0)), 0);
        // Bounds are inclusive.
        assert_eq!(outcode(&Vec4::new(2.0, -2.0, 2.0, 2.0)), 0);
    }

    #[test]
    fn test_each_plane_sets_its_bit() {
        assert_eq!(outcode(&Vec4::new(-1.5, 0.0, 0.0, 1.0)), LEFT);
        assert_eq!(outcode(&Vec4::new(1.5, 0.0, 0.0, 1.0)), RIGHT);
        assert_eq!(outcode(&Vec4::new(0.0, -1.5, 0.0, 1.0)), BOTTOM);
        assert_eq!(outcode(&Vec4::new(0.0, 1.5, 0.0, 1.0)), TOP);
        assert_eq!(outcode(&Vec4::new(0.0, 0.0, -1.5, 1.0)), NEAR);
        assert_eq!(outcode(&Vec4::new(0.0, 0.0, 1.5, 1.0)), FAR);
        assert_eq!(outcode(&Vec4::new(-3.0, 3.0, 3.0, 1.0)), LEFT | TOP | FAR);
    }

    #[test]
    fn test_shared_plane_is_trivially_outside() {
        assert!(trivially_outside(&[LEFT, LEFT | TOP, LEFT | NEAR]));
        assert!(!trivially_outside(&[LEFT, RIGHT, LEFT]));
        assert!(!trivially_outside(&[0, 0, 0]));
        assert!(!trivially_outside(&[LEFT | TOP, 0, TOP]));
    }
}
