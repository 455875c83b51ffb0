//! 3x3 matrix, column-major.
//!
//! Rotation-sized matrix; also carries the Euler-angle conversions used
//! by the quaternion module.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{Scalar, PI};
use crate::{Mat2, Mat4, MathError, Vec3};

/// A 3x3 matrix stored as three column vectors.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    pub col: [Vec3; 3],
}

impl Default for Mat3 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        col: [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ],
    };

    pub const ZERO: Self = Self {
        col: [Vec3::ZERO, Vec3::ZERO, Vec3::ZERO],
    };

    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { col: [c0, c1, c2] }
    }

    /// Uniform diagonal matrix `s * I`.
    #[inline]
    pub const fn from_diagonal(s: Scalar) -> Self {
        Self::from_cols(
            Vec3::new(s, 0.0, 0.0),
            Vec3::new(0.0, s, 0.0),
            Vec3::new(0.0, 0.0, s),
        )
    }

    /// Builds from a flat column-major array.
    #[inline]
    pub const fn from_array(a: [Scalar; 9]) -> Self {
        Self::from_cols(
            Vec3::new(a[0], a[1], a[2]),
            Vec3::new(a[3], a[4], a[5]),
            Vec3::new(a[6], a[7], a[8]),
        )
    }

    /// Flat column-major array of the entries.
    pub const fn to_array(self) -> [Scalar; 9] {
        [
            self.col[0].x,
            self.col[0].y,
            self.col[0].z,
            self.col[1].x,
            self.col[1].y,
            self.col[1].z,
            self.col[2].x,
            self.col[2].y,
            self.col[2].z,
        ]
    }

    /// Entry at (row, col), 0-indexed.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Scalar {
        self.col[col][row]
    }

    /// Sets the entry at (row, col), 0-indexed.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Scalar) {
        self.col[col][row] = value;
    }

    #[inline]
    pub fn trace(&self) -> Scalar {
        self.col[0].x + self.col[1].y + self.col[2].z
    }

    /// Determinant by cofactor expansion along the first column.
    pub fn determinant(&self) -> Scalar {
        let m = self.to_array();
        let c0 = m[4] * m[8] - m[5] * m[7];
        let c1 = m[5] * m[6] - m[3] * m[8];
        let c2 = m[3] * m[7] - m[4] * m[6];
        m[0] * c0 + m[1] * c1 + m[2] * c2
    }

    /// Inverse as `(1/det)` times the cofactor matrix of the transpose.
    ///
    /// A singular matrix yields non-finite entries; no check is made.
    pub fn inverse(&self) -> Self {
        let m = self.to_array();

        let mut c = [0.0; 9];
        c[0] = m[4] * m[8] - m[7] * m[5];
        c[1] = m[7] * m[2] - m[1] * m[8];
        c[2] = m[1] * m[5] - m[4] * m[2];
        c[3] = m[6] * m[5] - m[3] * m[8];
        c[4] = m[0] * m[8] - m[6] * m[2];
        c[5] = m[3] * m[2] - m[0] * m[5];
        c[6] = m[3] * m[7] - m[6] * m[4];
        c[7] = m[6] * m[1] - m[0] * m[7];
        c[8] = m[0] * m[4] - m[3] * m[1];

        let det = m[0] * c[0] + m[3] * c[1] + m[6] * c[2];
        let denom = 1.0 / det;

        Self::from_array([
            c[0] * denom,
            c[1] * denom,
            c[2] * denom,
            c[3] * denom,
            c[4] * denom,
            c[5] * denom,
            c[6] * denom,
            c[7] * denom,
            c[8] * denom,
        ])
    }

    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec3::new(self.col[0].x, self.col[1].x, self.col[2].x),
            Vec3::new(self.col[0].y, self.col[1].y, self.col[2].y),
            Vec3::new(self.col[0].z, self.col[1].z, self.col[2].z),
        )
    }

    /// Square root of the sum of squared entries.
    pub fn frobenius_norm(&self) -> Scalar {
        (self.col[0].norm_sq() + self.col[1].norm_sq() + self.col[2].norm_sq()).sqrt()
    }

    /// Builds a rotation matrix from Euler angles, yaw-pitch-roll
    /// composition with angles given as `(x, y, z)`.
    pub fn from_euler(euler: Vec3) -> Self {
        let sx = euler.x.sin();
        let sy = euler.y.sin();
        let sz = euler.z.sin();
        let cx = euler.x.cos();
        let cy = euler.y.cos();
        let cz = euler.z.cos();
        Self::from_array([
            cy * cz,
            cy * sz,
            -sy,
            sx * sy * cz - cx * sz,
            cx * cz + sx * sy * sz,
            sx * cy,
            cx * sy * cz + sx * sz,
            cx * sy * sz - sx * cz,
            cx * cy,
        ])
    }

    /// Decomposes a rotation matrix into Euler angles using the
    /// x-y-z factorization.
    ///
    /// When the sine-of-pitch entry saturates at ±1 (gimbal lock) the
    /// roll angle is pinned to zero and the remaining freedom goes to
    /// the first angle. Note the factorization order differs from the
    /// composition order of [`Mat3::from_euler`]; the two only
    /// round-trip for single-axis rotations.
    pub fn to_euler(&self) -> Vec3 {
        let mut angles = Vec3::ZERO;
        if self.col[2].x < 1.0 {
            if self.col[2].x > -1.0 {
                angles.y = self.col[2].x.asin();
                angles.x = (-self.col[2].y).atan2(self.col[2].z);
                angles.z = (-self.col[1].x).atan2(self.col[0].x);
            } else {
                angles.y = -PI * 0.5;
                angles.x = -self.col[0].y.atan2(self.col[1].y);
                angles.z = 0.0;
            }
        } else {
            angles.y = PI * 0.5;
            angles.x = self.col[0].y.atan2(self.col[1].y);
            angles.z = 0.0;
        }
        angles
    }
}

impl Add for Mat3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_cols(
            self.col[0] + other.col[0],
            self.col[1] + other.col[1],
            self.col[2] + other.col[2],
        )
    }
}

impl Sub for Mat3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_cols(
            self.col[0] - other.col[0],
            self.col[1] - other.col[1],
            self.col[2] - other.col[2],
        )
    }
}

impl Add<Scalar> for Mat3 {
    type Output = Self;
    #[inline]
    fn add(self, s: Scalar) -> Self {
        Self::from_cols(self.col[0] + s, self.col[1] + s, self.col[2] + s)
    }
}

impl Sub<Scalar> for Mat3 {
    type Output = Self;
    #[inline]
    fn sub(self, s: Scalar) -> Self {
        Self::from_cols(self.col[0] - s, self.col[1] - s, self.col[2] - s)
    }
}

impl Mul<Scalar> for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Scalar) -> Self {
        Self::from_cols(self.col[0] * s, self.col[1] * s, self.col[2] * s)
    }
}

impl Div<Scalar> for Mat3 {
    type Output = Self;
    #[inline]
    fn div(self, s: Scalar) -> Self {
        let denom = 1.0 / s;
        self * denom
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.col[0].x * v.x + self.col[1].x * v.y + self.col[2].x * v.z,
            self.col[0].y * v.x + self.col[1].y * v.y + self.col[2].y * v.z,
            self.col[0].z * v.x + self.col[1].z * v.y + self.col[2].z * v.z,
        )
    }
}

/// Matrix composition; column j of the result is `self * other.col[j]`.
impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_cols(
            self * other.col[0],
            self * other.col[1],
            self * other.col[2],
        )
    }
}

/// Column access.
impl Index<usize> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn index(&self, index: usize) -> &Vec3 {
        &self.col[index]
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vec3 {
        &mut self.col[index]
    }
}

/// Embeds into the upper-left block of an identity.
impl From<Mat2> for Mat3 {
    fn from(m: Mat2) -> Self {
        Self::from_cols(
            m.col[0].extend(0.0),
            m.col[1].extend(0.0),
            Vec3::Z,
        )
    }
}

/// Upper-left block.
impl From<Mat4> for Mat3 {
    fn from(m: Mat4) -> Self {
        Self::from_cols(
            m.col[0].truncate(),
            m.col[1].truncate(),
            m.col[2].truncate(),
        )
    }
}

impl TryFrom<&[Scalar]> for Mat3 {
    type Error = MathError;

    fn try_from(s: &[Scalar]) -> Result<Self, MathError> {
        if s.len() != 9 {
            return Err(MathError::SliceLength { expected: 9, got: s.len() });
        }
        Ok(Self::from_array([
            s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7], s[8],
        ]))
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:12.7} {:12.7} {:12.7}",
                self.col[0][row], self.col[1][row], self.col[2][row]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_identity() {
        let m = Mat3::IDENTITY;
        assert_eq!(m, Mat3::default());
        assert_eq!(m * m, m);
        assert_eq!(m * Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(m.trace(), 3.0);
    }

    #[test]
    fn test_mat3_mul_composition() {
        // scale then swap x/y
        let scale = Mat3::from_diagonal(2.0);
        let swap = Mat3::from_array([0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let m = swap * scale;
        assert_eq!(m * Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_mat3_determinant() {
        let m = Mat3::from_array([2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0]);
        assert_eq!(m.determinant(), 24.0);
        // swapping two columns negates the determinant
        let swapped = Mat3::from_cols(m.col[1], m.col[0], m.col[2]);
        assert_eq!(swapped.determinant(), -24.0);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = Mat3::from_array([2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 1.0, 0.0, 4.0]);
        let p = m * m.inverse();
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((p.at(row, col) - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_mat3_singular_inverse_is_not_finite() {
        let m = Mat3::from_array([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 0.0]);
        assert!(!m.inverse().at(0, 0).is_finite());
    }

    #[test]
    fn test_mat3_transpose() {
        let m = Mat3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let t = m.transpose();
        assert_eq!(t.at(0, 1), m.at(1, 0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_mat3_frobenius() {
        let m = Mat3::from_diagonal(2.0);
        assert_eq!(m.frobenius_norm(), (12.0 as Scalar).sqrt());
    }

    #[test]
    fn test_mat3_euler_single_axis_roundtrip() {
        // single-axis rotations survive the decomposition unchanged
        for angles in [
            Vec3::new(0.4, 0.0, 0.0),
            Vec3::new(0.0, 0.4, 0.0),
            Vec3::new(0.0, 0.0, 0.4),
        ] {
            let back = Mat3::from_euler(angles).to_euler();
            assert!((back.x - angles.x).abs() < 1e-5);
            assert!((back.y - angles.y).abs() < 1e-5);
            assert!((back.z - angles.z).abs() < 1e-5);
        }
    }

    #[test]
    fn test_mat3_to_euler_xyz_factorization() {
        // to_euler factors a rotation as Rx * Ry * Rz; feed it exactly
        // that composition and expect the angles back
        let (x, y, z) = (0.3, 0.4, 0.5);
        let rx = Mat3::from_euler(Vec3::new(x, 0.0, 0.0));
        let ry = Mat3::from_euler(Vec3::new(0.0, y, 0.0));
        let rz = Mat3::from_euler(Vec3::new(0.0, 0.0, z));
        let angles = (rx * ry * rz).to_euler();
        assert!((angles.x - x).abs() < 1e-5);
        assert!((angles.y - y).abs() < 1e-5);
        assert!((angles.z - z).abs() < 1e-5);
    }

    #[test]
    fn test_mat3_euler_rotation_is_orthonormal() {
        let m = Mat3::from_euler(Vec3::new(0.7, -0.2, 1.1));
        assert!((m.determinant() - 1.0).abs() < 1e-5);
        let p = m * m.transpose();
        assert!((p.at(0, 0) - 1.0).abs() < 1e-5);
        assert!(p.at(0, 1).abs() < 1e-5);
    }

    #[test]
    fn test_mat3_euler_gimbal_lock() {
        // pitch at exactly +90 degrees hits the saturated branch
        let m = Mat3::from_euler(Vec3::new(0.0, PI * 0.5, 0.0));
        let angles = m.to_euler();
        assert!((angles.y - PI * 0.5).abs() < 1e-5);
        assert_eq!(angles.z, 0.0);
    }

    #[test]
    fn test_mat3_size_conversions() {
        let m2 = Mat2::from_array([1.0, 2.0, 3.0, 4.0]);
        let m3 = Mat3::from(m2);
        assert_eq!(m3.at(0, 0), 1.0);
        assert_eq!(m3.at(2, 2), 1.0);
        assert_eq!(m3.at(2, 0), 0.0);
        assert_eq!(Mat2::from(m3), m2);
    }
}
