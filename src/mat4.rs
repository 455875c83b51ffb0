//! 4x4 matrix, column-major.
//!
//! Carries the homogeneous-transform toolbox: camera and projection
//! builders in the classic OpenGL clip-space conventions (right-handed,
//! NDC in [-1, 1]), viewport project/unproject, and the
//! translate/scale/rotate post-multiplication helpers.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use bytemuck::{Pod, Zeroable};

use crate::scalar::Scalar;
use crate::{Mat2, Mat3, MathError, Vec3, Vec4};

/// A 4x4 matrix stored as four column vectors.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    pub col: [Vec4; 4],
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        col: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    pub const ZERO: Self = Self {
        col: [Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO],
    };

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { col: [c0, c1, c2, c3] }
    }

    /// Uniform diagonal matrix `s * I`.
    #[inline]
    pub const fn from_diagonal(s: Scalar) -> Self {
        Self::from_cols(
            Vec4::new(s, 0.0, 0.0, 0.0),
            Vec4::new(0.0, s, 0.0, 0.0),
            Vec4::new(0.0, 0.0, s, 0.0),
            Vec4::new(0.0, 0.0, 0.0, s),
        )
    }

    /// Builds from a flat column-major array.
    #[inline]
    pub const fn from_array(a: [Scalar; 16]) -> Self {
        Self::from_cols(
            Vec4::new(a[0], a[1], a[2], a[3]),
            Vec4::new(a[4], a[5], a[6], a[7]),
            Vec4::new(a[8], a[9], a[10], a[11]),
            Vec4::new(a[12], a[13], a[14], a[15]),
        )
    }

    /// Flat column-major array of the entries.
    pub const fn to_array(self) -> [Scalar; 16] {
        [
            self.col[0].x,
            self.col[0].y,
            self.col[0].z,
            self.col[0].w,
            self.col[1].x,
            self.col[1].y,
            self.col[1].z,
            self.col[1].w,
            self.col[2].x,
            self.col[2].y,
            self.col[2].z,
            self.col[2].w,
            self.col[3].x,
            self.col[3].y,
            self.col[3].z,
            self.col[3].w,
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
        self.col[0].x + self.col[1].y + self.col[2].z + self.col[3].w
    }

    /// Determinant by Laplace expansion over 2x2 minors of the last
    /// two rows.
    pub fn determinant(&self) -> Scalar {
        let m = self.to_array();

        let d0 = m[10] * m[15] - m[14] * m[11];
        let d1 = m[6] * m[11] - m[10] * m[7];
        let d2 = m[2] * m[7] - m[6] * m[3];
        let d3 = m[6] * m[15] - m[14] * m[7];
        let d4 = m[2] * m[11] - m[10] * m[3];
        let d5 = m[2] * m[15] - m[14] * m[3];

        let c0 = m[5] * d0 - m[9] * d3 + m[13] * d1;
        let c1 = m[9] * d5 - m[1] * d0 - m[13] * d4;
        let c2 = m[1] * d3 - m[5] * d5 + m[13] * d2;
        let c3 = m[5] * d4 - m[9] * d2 - m[1] * d1;

        m[0] * c0 + m[4] * c1 + m[8] * c2 + m[12] * c3
    }

    /// Inverse by Cramer's rule over the cofactor matrix.
    ///
    /// A singular matrix yields non-finite entries; no check is made.
    pub fn inverse(&self) -> Self {
        let m = self.to_array();
        let mut c = [0.0; 16];

        // minors of rows 2/3
        let mut dets = [
            m[10] * m[15] - m[14] * m[11],
            m[6] * m[11] - m[10] * m[7],
            m[2] * m[7] - m[6] * m[3],
            m[6] * m[15] - m[14] * m[7],
            m[2] * m[11] - m[10] * m[3],
            m[2] * m[15] - m[14] * m[3],
        ];

        c[0] = m[5] * dets[0] - m[9] * dets[3] + m[13] * dets[1];
        c[1] = m[9] * dets[5] - m[1] * dets[0] - m[13] * dets[4];
        c[2] = m[1] * dets[3] - m[5] * dets[5] + m[13] * dets[2];
        c[3] = m[5] * dets[4] - m[9] * dets[2] - m[1] * dets[1];
        c[4] = m[8] * dets[3] - m[4] * dets[0] - m[12] * dets[1];
        c[5] = m[0] * dets[0] - m[8] * dets[5] + m[12] * dets[4];
        c[6] = m[4] * dets[5] - m[0] * dets[3] - m[12] * dets[2];
        c[7] = m[0] * dets[1] - m[4] * dets[4] + m[8] * dets[2];

        // minors of rows 0/1
        dets = [
            m[8] * m[13] - m[12] * m[9],
            m[4] * m[9] - m[8] * m[5],
            m[0] * m[5] - m[4] * m[1],
            m[4] * m[13] - m[12] * m[5],
            m[0] * m[9] - m[8] * m[1],
            m[0] * m[13] - m[12] * m[1],
        ];

        c[8] = m[7] * dets[0] - m[11] * dets[3] + m[15] * dets[1];
        c[9] = m[11] * dets[5] - m[3] * dets[0] - m[15] * dets[4];
        c[10] = m[3] * dets[3] - m[7] * dets[5] + m[15] * dets[2];
        c[11] = m[7] * dets[4] - m[3] * dets[1] - m[11] * dets[2];
        c[12] = m[10] * dets[3] - m[6] * dets[0] - m[14] * dets[1];
        c[13] = m[2] * dets[0] - m[10] * dets[5] + m[14] * dets[4];
        c[14] = m[6] * dets[5] - m[2] * dets[3] - m[14] * dets[2];
        c[15] = m[2] * dets[1] - m[6] * dets[4] + m[10] * dets[2];

        let det = m[0] * c[0] + m[4] * c[1] + m[8] * c[2] + m[12] * c[3];
        let denom = 1.0 / det;

        let mut out = [0.0; 16];
        for (o, cof) in out.iter_mut().zip(c.iter()) {
            *o = cof * denom;
        }
        Self::from_array(out)
    }

    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec4::new(self.col[0].x, self.col[1].x, self.col[2].x, self.col[3].x),
            Vec4::new(self.col[0].y, self.col[1].y, self.col[2].y, self.col[3].y),
            Vec4::new(self.col[0].z, self.col[1].z, self.col[2].z, self.col[3].z),
            Vec4::new(self.col[0].w, self.col[1].w, self.col[2].w, self.col[3].w),
        )
    }

    /// Square root of the sum of squared entries.
    pub fn frobenius_norm(&self) -> Scalar {
        (self.col[0].norm_sq()
            + self.col[1].norm_sq()
            + self.col[2].norm_sq()
            + self.col[3].norm_sq())
        .sqrt()
    }

    /// Transforms `v` as a point: the translation column applies.
    #[inline]
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.col[0].x * v.x + self.col[1].x * v.y + self.col[2].x * v.z + self.col[3].x,
            self.col[0].y * v.x + self.col[1].y * v.y + self.col[2].y * v.z + self.col[3].y,
            self.col[0].z * v.x + self.col[1].z * v.y + self.col[2].z * v.z + self.col[3].z,
        )
    }

    /// Transforms `v` as a direction: the translation column is
    /// ignored.
    #[inline]
    pub fn transform_direction(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.col[0].x * v.x + self.col[1].x * v.y + self.col[2].x * v.z,
            self.col[0].y * v.x + self.col[1].y * v.y + self.col[2].y * v.z,
            self.col[0].z * v.x + self.col[1].z * v.y + self.col[2].z * v.z,
        )
    }

    /// Right-handed view matrix looking from `eye` towards `center`.
    ///
    /// The basis is built by Gram-Schmidt orthogonalization of `up`
    /// against `eye - center`.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let z = (eye - center).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();

        Self::from_array([
            x.x,
            y.x,
            z.x,
            0.0,
            x.y,
            y.y,
            z.y,
            0.0,
            x.z,
            y.z,
            z.z,
            0.0,
            -eye.dot(x),
            -eye.dot(y),
            -eye.dot(z),
            1.0,
        ])
    }

    /// Perspective projection from clip-plane extents, as `glFrustum`.
    pub fn frustum(
        left: Scalar,
        right: Scalar,
        bottom: Scalar,
        top: Scalar,
        z_near: Scalar,
        z_far: Scalar,
    ) -> Self {
        let x_diff = right - left;
        let y_diff = top - bottom;
        let z_diff = z_far - z_near;
        let a = (right + left) / x_diff;
        let b = (top + bottom) / y_diff;
        let c = -(z_far + z_near) / z_diff;
        let d = -(2.0 * z_far * z_near) / z_diff;

        Self::from_array([
            (2.0 * z_near) / x_diff,
            0.0,
            0.0,
            0.0,
            0.0,
            (2.0 * z_near) / y_diff,
            0.0,
            0.0,
            a,
            b,
            c,
            -1.0,
            0.0,
            0.0,
            d,
            0.0,
        ])
    }

    /// Perspective projection from a vertical field of view, as
    /// `gluPerspective`. Derives the frustum half-extents from `fovy`
    /// (radians) and `aspect` and delegates to [`Mat4::frustum`].
    pub fn perspective(fovy: Scalar, aspect: Scalar, z_near: Scalar, z_far: Scalar) -> Self {
        let ymax = z_near * (fovy * 0.5).tan();
        let ymin = -ymax;
        let xmin = ymin * aspect;
        let xmax = ymax * aspect;
        Self::frustum(xmin, xmax, ymin, ymax, z_near, z_far)
    }

    /// Orthographic projection, as `glOrtho`.
    pub fn ortho(
        left: Scalar,
        right: Scalar,
        bottom: Scalar,
        top: Scalar,
        z_near: Scalar,
        z_far: Scalar,
    ) -> Self {
        let x_diff = right - left;
        let y_diff = top - bottom;
        let z_diff = z_far - z_near;
        let tx = -(right + left) / x_diff;
        let ty = -(top + bottom) / y_diff;
        let tz = -(z_near + z_far) / z_diff;

        Self::from_array([
            2.0 / x_diff,
            0.0,
            0.0,
            0.0,
            0.0,
            2.0 / y_diff,
            0.0,
            0.0,
            0.0,
            0.0,
            -2.0 / z_diff,
            0.0,
            tx,
            ty,
            tz,
            1.0,
        ])
    }

    /// Post-multiplies by a translation; only the translation column
    /// changes.
    pub fn translate(&self, t: Vec3) -> Self {
        let mut result = *self;
        result.col[3] =
            self.col[0] * t.x + self.col[1] * t.y + self.col[2] * t.z + self.col[3];
        result
    }

    /// Post-multiplies by a non-uniform scale; the translation column
    /// is untouched.
    pub fn scale(&self, s: Vec3) -> Self {
        let mut result = *self;
        result.col[0] = self.col[0] * s.x;
        result.col[1] = self.col[1] * s.y;
        result.col[2] = self.col[2] * s.z;
        result
    }

    /// Post-multiplies by an axis-angle rotation (Rodrigues formula).
    /// The axis is normalized first; the translation column is
    /// untouched.
    pub fn rotate(&self, angle: Scalar, axis: Vec3) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        let t = 1.0 - c;

        let axis = axis.normalize();

        let r00 = c + axis.x * axis.x * t;
        let r11 = c + axis.y * axis.y * t;
        let r22 = c + axis.z * axis.z * t;

        let mut tmp_1 = axis.x * axis.y * t;
        let mut tmp_2 = axis.z * s;
        let r01 = tmp_1 + tmp_2;
        let r10 = tmp_1 - tmp_2;

        tmp_1 = axis.x * axis.z * t;
        tmp_2 = axis.y * s;
        let r02 = tmp_1 - tmp_2;
        let r20 = tmp_1 + tmp_2;

        tmp_1 = axis.y * axis.z * t;
        tmp_2 = axis.x * s;
        let r12 = tmp_1 + tmp_2;
        let r21 = tmp_1 - tmp_2;

        Self::from_cols(
            self.col[0] * r00 + self.col[1] * r01 + self.col[2] * r02,
            self.col[0] * r10 + self.col[1] * r11 + self.col[2] * r12,
            self.col[0] * r20 + self.col[1] * r21 + self.col[2] * r22,
            self.col[3],
        )
    }
}

/// Maps object-space coordinates to window coordinates, as
/// `gluProject`: clip through `projection * modelview`, perspective
/// divide, then the viewport transform (`viewport` is x, y, width,
/// height; window z lands in [0, 1]).
pub fn project(obj: Vec4, modelview: Mat4, projection: Mat4, viewport: Vec4) -> Vec3 {
    let tmp = (projection * modelview) * obj;
    let tmp = tmp / tmp.w;

    Vec3::new(
        viewport.x + (viewport.z * (tmp.x + 1.0)) / 2.0,
        viewport.y + (viewport.w * (tmp.y + 1.0)) / 2.0,
        (tmp.z + 1.0) / 2.0,
    )
}

/// Maps window coordinates back to object space, as `gluUnProject`;
/// the inverse of [`project`].
pub fn unproject(win: Vec3, modelview: Mat4, projection: Mat4, viewport: Vec4) -> Vec4 {
    let inv_pm = (projection * modelview).inverse();
    let tmp = Vec4::new(
        (2.0 * (win.x - viewport.x)) / viewport.z - 1.0,
        (2.0 * (win.y - viewport.y)) / viewport.w - 1.0,
        2.0 * win.z - 1.0,
        1.0,
    );

    let obj = inv_pm * tmp;
    obj / obj.w
}

impl Add for Mat4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_cols(
            self.col[0] + other.col[0],
            self.col[1] + other.col[1],
            self.col[2] + other.col[2],
            self.col[3] + other.col[3],
        )
    }
}

impl Sub for Mat4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_cols(
            self.col[0] - other.col[0],
            self.col[1] - other.col[1],
            self.col[2] - other.col[2],
            self.col[3] - other.col[3],
        )
    }
}

impl Add<Scalar> for Mat4 {
    type Output = Self;
    #[inline]
    fn add(self, s: Scalar) -> Self {
        Self::from_cols(
            self.col[0] + s,
            self.col[1] + s,
            self.col[2] + s,
            self.col[3] + s,
        )
    }
}

impl Sub<Scalar> for Mat4 {
    type Output = Self;
    #[inline]
    fn sub(self, s: Scalar) -> Self {
        Self::from_cols(
            self.col[0] - s,
            self.col[1] - s,
            self.col[2] - s,
            self.col[3] - s,
        )
    }
}

impl Mul<Scalar> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Scalar) -> Self {
        Self::from_cols(
            self.col[0] * s,
            self.col[1] * s,
            self.col[2] * s,
            self.col[3] * s,
        )
    }
}

impl Div<Scalar> for Mat4 {
    type Output = Self;
    #[inline]
    fn div(self, s: Scalar) -> Self {
        let denom = 1.0 / s;
        self * denom
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.col[0].x * v.x + self.col[1].x * v.y + self.col[2].x * v.z + self.col[3].x * v.w,
            self.col[0].y * v.x + self.col[1].y * v.y + self.col[2].y * v.z + self.col[3].y * v.w,
            self.col[0].z * v.x + self.col[1].z * v.y + self.col[2].z * v.z + self.col[3].z * v.w,
            self.col[0].w * v.x + self.col[1].w * v.y + self.col[2].w * v.z + self.col[3].w * v.w,
        )
    }
}

/// Matrix composition; column j of the result is `self * other.col[j]`.
impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_cols(
            self * other.col[0],
            self * other.col[1],
            self * other.col[2],
            self * other.col[3],
        )
    }
}

/// Column access.
impl Index<usize> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn index(&self, index: usize) -> &Vec4 {
        &self.col[index]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vec4 {
        &mut self.col[index]
    }
}

/// Embeds into the upper-left block of an identity.
impl From<Mat2> for Mat4 {
    fn from(m: Mat2) -> Self {
        Self::from_cols(
            m.col[0].extend2(0.0, 0.0),
            m.col[1].extend2(0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        )
    }
}

/// Embeds into the upper-left block of an identity.
impl From<Mat3> for Mat4 {
    fn from(m: Mat3) -> Self {
        Self::from_cols(
            m.col[0].extend(0.0),
            m.col[1].extend(0.0),
            m.col[2].extend(0.0),
            Vec4::W,
        )
    }
}

impl TryFrom<&[Scalar]> for Mat4 {
    type Error = MathError;

    fn try_from(s: &[Scalar]) -> Result<Self, MathError> {
        if s.len() != 16 {
            return Err(MathError::SliceLength { expected: 16, got: s.len() });
        }
        let mut a = [0.0; 16];
        a.copy_from_slice(s);
        Ok(Self::from_array(a))
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:12.7} {:12.7} {:12.7} {:12.7}",
                self.col[0][row], self.col[1][row], self.col[2][row], self.col[3][row]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::PI;

    #[test]
    fn test_mat4_identity() {
        let m = Mat4::IDENTITY;
        assert_eq!(m, Mat4::default());
        assert_eq!(m * m, m);
        assert_eq!(
            m * Vec4::new(1.0, 2.0, 3.0, 1.0),
            Vec4::new(1.0, 2.0, 3.0, 1.0)
        );
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(m.trace(), 4.0);
    }

    #[test]
    fn test_mat4_determinant() {
        let m = Mat4::from_diagonal(2.0);
        assert_eq!(m.determinant(), 16.0);
        let t = Mat4::IDENTITY.translate(Vec3::new(5.0, -3.0, 2.0));
        assert_eq!(t.determinant(), 1.0);
    }

    #[test]
    fn test_mat4_inverse() {
        let m = Mat4::IDENTITY
            .translate(Vec3::new(1.0, 2.0, 3.0))
            .rotate(0.7, Vec3::new(0.0, 1.0, 0.0))
            .scale(Vec3::new(2.0, 2.0, 2.0));
        let p = m * m.inverse();
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((p.at(row, col) - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_mat4_singular_inverse_is_not_finite() {
        let m = Mat4::ZERO;
        assert!(!m.inverse().at(0, 0).is_finite());
    }

    #[test]
    fn test_mat4_transpose() {
        let m = Mat4::IDENTITY.translate(Vec3::new(1.0, 2.0, 3.0));
        let t = m.transpose();
        assert_eq!(t.at(3, 0), 1.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_mat4_translate() {
        let m = Mat4::IDENTITY.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            m.transform_point(Vec3::ZERO),
            Vec3::new(1.0, 2.0, 3.0)
        );
        // directions are unaffected by translation
        assert_eq!(m.transform_direction(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_mat4_scale() {
        let m = Mat4::IDENTITY
            .translate(Vec3::new(1.0, 1.0, 1.0))
            .scale(Vec3::new(2.0, 3.0, 4.0));
        // scale applies before the existing translation
        assert_eq!(
            m.transform_point(Vec3::ONE),
            Vec3::new(3.0, 4.0, 5.0)
        );
    }

    #[test]
    fn test_mat4_rotate() {
        let m = Mat4::IDENTITY.rotate(PI * 0.5, Vec3::Z);
        let v = m.transform_direction(Vec3::X);
        assert!((v.x).abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        // the axis is normalized internally
        let m2 = Mat4::IDENTITY.rotate(PI * 0.5, Vec3::new(0.0, 0.0, 10.0));
        let v2 = m2.transform_direction(Vec3::X);
        assert!((v.x - v2.x).abs() < 1e-6 && (v.y - v2.y).abs() < 1e-6);
    }

    #[test]
    fn test_mat4_rotate_keeps_translation() {
        let m = Mat4::IDENTITY
            .translate(Vec3::new(5.0, 6.0, 7.0))
            .rotate(1.3, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(m.col[3], Vec4::new(5.0, 6.0, 7.0, 1.0));
    }

    #[test]
    fn test_mat4_size_conversions() {
        let m3 = Mat3::from_diagonal(2.0);
        let m4 = Mat4::from(m3);
        assert_eq!(m4.at(0, 0), 2.0);
        assert_eq!(m4.at(3, 3), 1.0);
        assert_eq!(Mat3::from(m4), m3);
        let m2 = Mat2::from(m4);
        assert_eq!(m2.at(1, 1), 2.0);
    }

    #[test]
    fn test_mat4_arithmetic() {
        let m = Mat4::from_diagonal(2.0);
        assert_eq!(m + m, Mat4::from_diagonal(4.0));
        assert_eq!(m - m, Mat4::ZERO);
        assert_eq!(m * 2.0, Mat4::from_diagonal(4.0));
        assert_eq!(m / 2.0, Mat4::IDENTITY);
        assert_eq!((m + 1.0).at(0, 1), 1.0);
        assert_eq!((m - 1.0).at(0, 0), 1.0);
    }

    #[test]
    fn test_mat4_frobenius() {
        assert_eq!(Mat4::IDENTITY.frobenius_norm(), 2.0);
    }
}
