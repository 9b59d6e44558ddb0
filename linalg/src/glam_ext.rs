//! Conversions between the fixed types and `glam`. glam stores matrices column-major, the
//! fixed matrices are row-major, so matrix conversions transpose.
use crate::{FixedMatrix, FixedVector};
use glam::{DMat2, DMat3, DMat4, DVec2, DVec3, DVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

macro_rules! impl_glam_vec {
    ($($glam:ty => $n:literal, $t:ty;)+) => {
        $(
            impl From<$glam> for FixedVector<$n, $t> {
                #[inline]
                fn from(v: $glam) -> Self {
                    FixedVector::from_array(v.to_array())
                }
            }

            impl From<FixedVector<$n, $t>> for $glam {
                #[inline]
                fn from(v: FixedVector<$n, $t>) -> Self {
                    <$glam>::from_array(v.to_array())
                }
            }
        )+
    };
}

macro_rules! impl_glam_mat {
    ($($glam:ty => $n:literal, $t:ty;)+) => {
        $(
            impl From<$glam> for FixedMatrix<$n, $n, $t> {
                #[inline]
                fn from(m: $glam) -> Self {
                    FixedMatrix::from(m.to_cols_array_2d()).transpose()
                }
            }

            impl From<FixedMatrix<$n, $n, $t>> for $glam {
                #[inline]
                fn from(m: FixedMatrix<$n, $n, $t>) -> Self {
                    <$glam>::from_cols_array_2d(&m.transpose().to_array())
                }
            }
        )+
    };
}

impl_glam_vec! {
    Vec2 => 2, f32;
    Vec3 => 3, f32;
    Vec4 => 4, f32;
    DVec2 => 2, f64;
    DVec3 => 3, f64;
    DVec4 => 4, f64;
}

impl_glam_mat! {
    Mat2 => 2, f32;
    Mat3 => 3, f32;
    Mat4 => 4, f32;
    DMat2 => 2, f64;
    DMat3 => 3, f64;
    DMat4 => 4, f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cross, dot, Vector3};

    #[test]
    fn test_vec3_agrees_with_glam() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(-0.5, 3.0, 4.0);
        let fa = FixedVector::from(a);
        let fb = FixedVector::from(b);
        assert_eq!(Vec3::from(cross(&fa, &fb)), a.cross(b));
        assert_eq!(dot(&fa, &fb), a.dot(b));
        assert!((fa.magnitude() - a.length()).abs() < 1e-6);
        assert_eq!(Vec3::from(Vector3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mat3_layout() {
        let m = Mat3::from_cols(
            Vec3::new(1.0, 4.0, 7.0),
            Vec3::new(2.0, 5.0, 8.0),
            Vec3::new(3.0, 6.0, 9.0),
        );
        let f = FixedMatrix::from(m);
        assert_eq!(
            f.to_array(),
            [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
        );
        assert_eq!(Mat3::from(f * f.transpose()), m * m.transpose());
        assert_eq!(Mat3::from(f), m);
    }

    #[test]
    fn test_mat4_times_vector() {
        let m = DMat4::from_cols_array(&[
            1.0, 0.0, 0.0, 0.0, //
            0.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, 3.0, 0.0, //
            5.0, 6.0, 7.0, 1.0,
        ]);
        let v = DVec4::new(1.0, 1.0, 1.0, 1.0);
        let f = FixedMatrix::from(m) * FixedVector::from(v);
        assert_eq!(DVec4::from(f), m * v);
    }
}
