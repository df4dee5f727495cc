/// Geometry primitives for 3D rendering
use crate::algebra::Vec4;

/// A triangle face defined by three homogeneous vertices.
///
/// Vertex order defines the winding and therefore which side faces out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [[f32; 4]; 3],
}

impl Triangle {
    pub const fn new(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        Self {
            vertices: [
                [v0[0], v0[1], v0[2], 1.0],
                [v1[0], v1[1], v1[2], 1.0],
                [v2[0], v2[1], v2[2], 1.0],
            ],
        }
    }

    pub fn vertex(&self, index: usize) -> Vec4 {
        Vec4::from(self.vertices[index])
    }

    pub fn points(&self) -> [Vec4; 3] {
        [self.vertex(0), self.vertex(1), self.vertex(2)]
    }
}

/// Unit cube spanning [0, 1] on every axis, two triangles per face.
///
/// Faces wind counter-clockwise when seen from outside the cube.
pub const CUBE: [Triangle; 12] = [
    // z = 0
    Triangle::new([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
    Triangle::new([0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    // x = 1
    Triangle::new([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]),
    Triangle::new([1.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]),
    // z = 1
    Triangle::new([1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]),
    Triangle::new([1.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]),
    // x = 0
    Triangle::new([0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]),
    Triangle::new([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]),
    // y = 1
    Triangle::new([0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
    Triangle::new([0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]),
    // y = 0
    Triangle::new([1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]),
    Triangle::new([1.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
];
