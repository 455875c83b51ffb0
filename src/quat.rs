//! Quaternion rotation algebra.
//!
//! Rotation semantics assume a unit quaternion; the type never
//! enforces unit norm, callers normalize explicitly where they need
//! to. Matrix conversions use Shepperd's method (largest diagonal
//! element branch selection) for numerical stability.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{Scalar, EPSILON};
use crate::{Mat3, Mat4, MathError, Vec3};

/// A quaternion stored as `(x, y, z, w)` with `w` the scalar part.
///
/// Also viewable as a [`Vec3`] imaginary part plus a real part through
/// [`Quat::im`] and [`Quat::re`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Builds from an imaginary vector part and a real part.
    #[inline]
    pub const fn from_parts(im: Vec3, re: Scalar) -> Self {
        Self::new(im.x, im.y, im.z, re)
    }

    /// The imaginary (vector) part.
    #[inline]
    pub const fn im(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The real (scalar) part.
    #[inline]
    pub const fn re(self) -> Scalar {
        self.w
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is assumed to be normalized by the caller.
    pub fn from_axis_angle(axis: Vec3, angle: Scalar) -> Self {
        let a = angle * 0.5;
        let s = a.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, a.cos())
    }

    /// Half-angle product expansion for a pitch/yaw/roll triple.
    pub fn from_euler_angles(pitch: Scalar, yaw: Scalar, roll: Scalar) -> Self {
        let c1 = (pitch * 0.5).cos();
        let s1 = (pitch * 0.5).sin();
        let c2 = (yaw * 0.5).cos();
        let s2 = (yaw * 0.5).sin();
        let c3 = (roll * 0.5).cos();
        let s3 = (roll * 0.5).sin();

        Self::new(
            c1 * c2 * c3 - s1 * s2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
        )
    }

    /// The rotation taking `v1` onto `v2`.
    ///
    /// Near-opposite inputs would make the cross product degenerate, so
    /// that case rotates 180 degrees about an arbitrary orthogonal axis
    /// instead. The result is always normalized.
    pub fn from_vectors(v1: Vec3, v2: Vec3) -> Self {
        let norm_v1_norm_v2 = (v1.dot(v1) * v2.dot(v2)).sqrt();
        let mut real_part = norm_v1_norm_v2 + v1.dot(v2);
        let v3;

        if real_part < 1e-6 * norm_v1_norm_v2 {
            // axis normalization happens with the final normalize
            real_part = 0.0;
            v3 = if v1.x.abs() > v1.z.abs() {
                Vec3::new(-v1.y, v1.x, 0.0)
            } else {
                Vec3::new(0.0, -v1.z, v1.y)
            };
        } else {
            v3 = v1.cross(v2);
        }

        Self::new(v3.x, v3.y, v3.z, real_part).normalize()
    }

    /// Rotation matrix for this quaternion (expects unit norm).
    pub fn to_mat3(self) -> Mat3 {
        let xx = self.x * self.x;
        let xy = self.x * self.y;
        let xz = self.x * self.z;
        let xw = self.x * self.w;

        let yy = self.y * self.y;
        let yz = self.y * self.z;
        let yw = self.y * self.w;

        let zz = self.z * self.z;
        let zw = self.z * self.w;

        Mat3::from_array([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + zw),
            2.0 * (xz - yw),
            2.0 * (xy - zw),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + xw),
            2.0 * (xz + yw),
            2.0 * (yz - xw),
            1.0 - 2.0 * (xx + yy),
        ])
    }

    /// Homogeneous rotation matrix for this quaternion.
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from(self.to_mat3())
    }

    /// Extracts the quaternion of a rotation matrix.
    ///
    /// Shepperd's method: picks the numerically safest of four
    /// branches by the largest diagonal element.
    pub fn from_mat3(m: Mat3) -> Self {
        let d = m.to_array();
        let tr = d[0] + d[4] + d[8];

        if tr > EPSILON {
            let s = (tr + 1.0).sqrt() * 2.0;
            Self::new(
                (d[5] - d[7]) / s,
                (d[6] - d[2]) / s,
                (d[1] - d[3]) / s,
                0.25 * s,
            )
        } else if d[0] > d[4] && d[0] > d[8] {
            let s = (1.0 + d[0] - d[4] - d[8]).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (d[3] + d[1]) / s,
                (d[6] + d[2]) / s,
                (d[5] - d[7]) / s,
            )
        } else if d[4] > d[8] {
            let s = (1.0 + d[4] - d[0] - d[8]).sqrt() * 2.0;
            Self::new(
                (d[3] + d[1]) / s,
                0.25 * s,
                (d[7] + d[5]) / s,
                (d[6] - d[2]) / s,
            )
        } else {
            let s = (1.0 + d[8] - d[0] - d[4]).sqrt() * 2.0;
            Self::new(
                (d[6] + d[2]) / s,
                (d[7] + d[5]) / s,
                0.25 * s,
                (d[1] - d[3]) / s,
            )
        }
    }

    /// Extracts the quaternion of the rotation block of a homogeneous
    /// matrix.
    pub fn from_mat4(m: Mat4) -> Self {
        Self::from_mat3(Mat3::from(m))
    }

    #[inline]
    pub fn dot(self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn norm(self) -> Scalar {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    #[inline]
    pub fn norm_sq(self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Scales to unit norm by multiplying with the reciprocal norm.
    ///
    /// A zero quaternion produces non-finite components.
    #[inline]
    pub fn normalize(self) -> Self {
        let denom = 1.0 / self.norm();
        Self::from_parts(self.im() * denom, self.re() * denom)
    }

    /// Negates the imaginary part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse: the conjugate divided by the squared
    /// norm. Equal to the conjugate only for unit quaternions.
    #[inline]
    pub fn inverse(self) -> Self {
        let denom = 1.0 / self.norm_sq();
        Self::new(
            -self.x * denom,
            -self.y * denom,
            -self.z * denom,
            self.w * denom,
        )
    }

    /// Component-wise linear blend. The result is not renormalized;
    /// that is the caller's responsibility.
    pub fn lerp(self, other: Self, t: Scalar) -> Self {
        Self::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
            self.z * (1.0 - t) + other.z * t,
            self.w * (1.0 - t) + other.w * t,
        )
    }

    /// Spherical interpolation along the shortest arc.
    ///
    /// Falls back to [`Quat::lerp`] when the angle between the
    /// quaternions is too small for a stable `sin` division.
    pub fn slerp(self, other: Self, t: Scalar) -> Self {
        let a = self.dot(other).acos();
        if a.abs() > 1e-6 {
            self * ((a * (1.0 - t)).sin() / a.sin()) + other * ((a * t).sin() / a.sin())
        } else {
            self.lerp(other, t)
        }
    }
}

impl Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

/// Adds a real number: only the scalar part changes.
impl Add<Scalar> for Quat {
    type Output = Self;
    #[inline]
    fn add(self, s: Scalar) -> Self {
        Self::new(self.x, self.y, self.z, self.w + s)
    }
}

/// Subtracts a real number: only the scalar part changes.
impl Sub<Scalar> for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, s: Scalar) -> Self {
        Self::new(self.x, self.y, self.z, self.w - s)
    }
}

/// Hamilton product.
impl Mul for Quat {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            self.w * other.y + self.y * other.w + self.z * other.x - self.x * other.z,
            self.w * other.z + self.z * other.w + self.x * other.y - self.y * other.x,
            self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        )
    }
}

impl Mul<Scalar> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, s: Scalar) -> Self {
        Self::from_parts(self.im() * s, self.re() * s)
    }
}

impl Mul<Quat> for Scalar {
    type Output = Quat;
    #[inline]
    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

/// Quaternion division: `a * b.inverse()`.
impl Div for Quat {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        self * other.inverse()
    }
}

impl Div<Scalar> for Quat {
    type Output = Self;
    #[inline]
    fn div(self, s: Scalar) -> Self {
        let denom = 1.0 / s;
        Self::new(
            self.x * denom,
            self.y * denom,
            self.z * denom,
            self.w * denom,
        )
    }
}

impl From<[Scalar; 4]> for Quat {
    #[inline]
    fn from(a: [Scalar; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Quat> for [Scalar; 4] {
    #[inline]
    fn from(q: Quat) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

impl TryFrom<&[Scalar]> for Quat {
    type Error = MathError;

    fn try_from(s: &[Scalar]) -> Result<Self, MathError> {
        if s.len() != 4 {
            return Err(MathError::SliceLength { expected: 4, got: s.len() });
        }
        Ok(Self::new(s[0], s[1], s[2], s[3]))
    }
}

/// Scalar part first, then the imaginary components.
impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:12.7} {:12.7} {:12.7} {:12.7}",
            self.w, self.x, self.y, self.z
        )
    }
}
