/// Model, rotation and view matrix builders
use nalgebra::{Rotation3, Vector3};

use crate::algebra::{Mat4, Vec4};

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Rotation from per-axis angles in radians (x = pitch, y = yaw, z = roll).
    ///
    /// Roll is applied first, then pitch, then yaw. Angles are not
    /// normalised, so any magnitude is accepted.
    pub fn rotation_matrix(rotation: &Vec4) -> Mat4 {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);

        (ry * rx * rz).to_homogeneous()
    }

    /// Create a translation matrix
    pub fn translation_matrix(translation: &Vec4) -> Mat4 {
        Mat4::new_translation(&translation.xyz())
    }

    /// Create a scale matrix
    pub fn scale_matrix(scale: &Vec4) -> Mat4 {
        Mat4::new_nonuniform_scaling(&scale.xyz())
    }

    /// Translate ∘ rotate ∘ scale: scale is applied first, translation last.
    pub fn model_matrix(rotation: &Vec4, translation: &Vec4, scale: &Vec4) -> Mat4 {
        Self::translation_matrix(translation)
            * Self::rotation_matrix(rotation)
            * Self::scale_matrix(scale)
    }

    /// Invert a rigid camera transform into a view matrix.
    ///
    /// `camera_model` must be rotation plus translation with unit scale; the
    /// inverse is then `[Rᵀ | -Rᵀt]`, computed exactly rather than through a
    /// general matrix inverse.
    pub fn view_matrix(camera_model: &Mat4) -> Mat4 {
        let mut view = Mat4::identity();

        for row in 0..3 {
            for col in 0..3 {
                view[(row, col)] = camera_model[(col, row)];
            }
        }

        for row in 0..3 {
            let mut t = 0.0;
            for k in 0..3 {
                t -= view[(row, k)] * camera_model[(k, 3)];
            }
            view[(row, 3)] = t;
        }

        view
    }
}
