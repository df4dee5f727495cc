/// Homogeneous vector and matrix helpers on top of nalgebra
///
/// Matrices use the column-vector convention: `m * v` transforms `v`, and in
/// `a * b` the right-hand matrix is applied first.
use nalgebra::{Matrix4, Vector4};

/// A point or direction in homogeneous coordinates
pub type Vec4 = Vector4<f32>;

/// An affine or projective transform
pub type Mat4 = Matrix4<f32>;

/// Affine point (w = 1)
pub fn point(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 1.0)
}

/// Direction (w = 0), unaffected by translation
pub fn direction(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 0.0)
}

pub fn add(a: &Vec4, b: &Vec4) -> Vec4 {
    a + b
}

pub fn sub(a: &Vec4, b: &Vec4) -> Vec4 {
    a - b
}

/// Divide all four components by `s`.
///
/// The caller guarantees `s != 0`; nothing here guards against it.
pub fn scalar_div(v: &Vec4, s: f32) -> Vec4 {
    v / s
}

pub fn mat_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    a * b
}

pub fn mat_vec_mul(m: &Mat4, v: &Vec4) -> Vec4 {
    m * v
}

/// 2D cross product of the xy parts of two vectors
pub fn cross_2d(a: &Vec4, b: &Vec4) -> f32 {
    a.x * b.y - b.x * a.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_a() -> Mat4 {
        Mat4::new(
            1.0, 2.0, 0.0, 3.0, //
            0.0, 1.0, -1.0, 0.5, //
            2.0, 0.0, 1.0, -2.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn sample_b() -> Mat4 {
        Mat4::new(
            0.0, -1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 4.0, //
            0.0, 0.0, 2.0, 1.0, //
            0.0, 0.0, -1.0, 0.0,
        )
    }

    #[test]
    fn test_add_sub_componentwise() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(0.5, -2.0, 1.0, 1.0);
        assert_eq!(add(&a, &b), Vec4::new(1.5, 0.0, 4.0, 5.0));
        assert_eq!(sub(&a, &b), Vec4::new(0.5, 4.0, 2.0, 3.0));
    }

    #[test]
    fn test_scalar_div_divides_w_too() {
        let v = Vec4::new(2.0, -4.0, 6.0, 2.0);
        assert_eq!(scalar_div(&v, 2.0), Vec4::new(1.0, -2.0, 3.0, 1.0));
    }

    #[test]
    fn test_point_and_direction() {
        let translate = Mat4::new_translation(&nalgebra::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(mat_vec_mul(&translate, &point(0.0, 0.0, 0.0)), point(1.0, 2.0, 3.0));
        assert_eq!(
            mat_vec_mul(&translate, &direction(0.0, 0.0, -1.0)),
            direction(0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn test_composition_applies_right_first() {
        let (a, b) = (sample_a(), sample_b());
        for v in [
            point(0.0, 0.0, 0.0),
            point(1.0, -2.0, 3.5),
            Vec4::new(-0.25, 4.0, 2.0, 0.5),
        ] {
            let composed = mat_vec_mul(&mat_mul(&a, &b), &v);
            let chained = mat_vec_mul(&a, &mat_vec_mul(&b, &v));
            assert!((composed - chained).norm() < 1e-5);
        }
    }

    #[test]
    fn test_mat_mul_not_commutative() {
        let (a, b) = (sample_a(), sample_b());
        assert!((mat_mul(&a, &b) - mat_mul(&b, &a)).norm() > 1e-3);
    }

    #[test]
    fn test_cross_2d_sign() {
        let x = direction(1.0, 0.0, 0.0);
        let y = direction(0.0, 1.0, 0.0);
        assert_eq!(cross_2d(&x, &y), 1.0);
        assert_eq!(cross_2d(&y, &x), -1.0);
        assert_eq!(cross_2d(&x, &x), 0.0);
    }
}
