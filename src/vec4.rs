//! 4D vector.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{Scalar, EPSILON};
use crate::{Mat4, MathError, Vec2, Vec3};

/// A 4D vector with `x`, `y`, `z` and `w` components.
///
/// Doubles as a homogeneous coordinate and as an RGBA color (see the
/// [`Vec4::r`], [`Vec4::g`], [`Vec4::b`], [`Vec4::a`] accessors).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0, 0.0);
    pub const NEG_W: Self = Self::new(0.0, 0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to `s`.
    #[inline]
    pub const fn splat(s: Scalar) -> Self {
        Self { x: s, y: s, z: s, w: s }
    }

    #[inline]
    pub const fn from_array(a: [Scalar; 4]) -> Self {
        Self { x: a[0], y: a[1], z: a[2], w: a[3] }
    }

    #[inline]
    pub const fn to_array(self) -> [Scalar; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub const fn r(self) -> Scalar {
        self.x
    }

    #[inline]
    pub const fn g(self) -> Scalar {
        self.y
    }

    #[inline]
    pub const fn b(self) -> Scalar {
        self.z
    }

    #[inline]
    pub const fn a(self) -> Scalar {
        self.w
    }

    /// Drops the w component.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt(), self.w.sqrt())
    }

    /// Clamps each component to `[min, max]`.
    ///
    /// When `min > max` the input is returned unchanged.
    #[inline]
    pub fn clamp(self, min: Scalar, max: Scalar) -> Self {
        if min > max {
            return self;
        }
        Self::new(
            self.x.max(min).min(max),
            self.y.max(min).min(max),
            self.z.max(min).min(max),
            self.w.max(min).min(max),
        )
    }

    /// Scales to unit length by multiplying with the reciprocal norm.
    ///
    /// A zero vector produces non-finite components.
    #[inline]
    pub fn normalize(self) -> Self {
        let denom = 1.0
            / (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt();
        Self::new(
            self.x * denom,
            self.y * denom,
            self.z * denom,
            self.w * denom,
        )
    }

    #[inline]
    pub fn dot(self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Alias for [`Vec4::dot`].
    #[inline]
    pub fn inner_product(self, other: Self) -> Scalar {
        self.dot(other)
    }

    /// Outer product `self * other^T`.
    #[inline]
    pub fn outer_product(self, other: Self) -> Mat4 {
        Mat4::from_cols(
            self * other.x,
            self * other.y,
            self * other.z,
            self * other.w,
        )
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(self) -> Scalar {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_sq(self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Per-component comparison with an absolute tolerance of machine
    /// epsilon. Does not scale with magnitude.
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() <= EPSILON
            && (self.y - other.y).abs() <= EPSILON
            && (self.z - other.z).abs() <= EPSILON
            && (self.w - other.w).abs() <= EPSILON
    }
}

impl Add for Vec4 {
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

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec4 {
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

impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Component-wise product.
impl Mul for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }
}

/// Component-wise quotient.
impl Div for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }
}

impl Add<Scalar> for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, s: Scalar) -> Self {
        Self::new(self.x + s, self.y + s, self.z + s, self.w + s)
    }
}

impl Sub<Scalar> for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, s: Scalar) -> Self {
        Self::new(self.x - s, self.y - s, self.z - s, self.w - s)
    }
}

impl Mul<Scalar> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Scalar) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Mul<Vec4> for Scalar {
    type Output = Vec4;
    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        v * self
    }
}

impl MulAssign<Scalar> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, s: Scalar) {
        *self = *self * s;
    }
}

impl Div<Scalar> for Vec4 {
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

impl Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Index<usize> for Vec4 {
    type Output = Scalar;
    #[inline]
    fn index(&self, index: usize) -> &Scalar {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", index),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", index),
        }
    }
}

impl From<[Scalar; 4]> for Vec4 {
    #[inline]
    fn from(a: [Scalar; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [Scalar; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

impl From<(Scalar, Scalar, Scalar, Scalar)> for Vec4 {
    #[inline]
    fn from(t: (Scalar, Scalar, Scalar, Scalar)) -> Self {
        Self::new(t.0, t.1, t.2, t.3)
    }
}

/// Zero-pads the z and w components.
impl From<Vec2> for Vec4 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0, 0.0)
    }
}

/// Zero-pads the w component.
impl From<Vec3> for Vec4 {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }
}

impl TryFrom<&[Scalar]> for Vec4 {
    type Error = MathError;

    fn try_from(s: &[Scalar]) -> Result<Self, MathError> {
        if s.len() != 4 {
            return Err(MathError::SliceLength { expected: 4, got: s.len() });
        }
        Ok(Self::new(s[0], s[1], s[2], s[3]))
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:12.7} {:12.7} {:12.7} {:12.7}",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_constructors() {
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vec4::splat(1.0), Vec4::ONE);
        assert_eq!(Vec4::ZERO, Vec4::default());
        assert_eq!(Vec4::X + Vec4::Y + Vec4::Z + Vec4::W, Vec4::ONE);
        assert_eq!(Vec4::NEG_W, -Vec4::W);
    }

    #[test]
    fn test_vec4_arithmetic() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::splat(4.0));
        assert_eq!(a * b, Vec4::new(5.0, 12.0, 21.0, 32.0));
        assert_eq!(a + 1.0, Vec4::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn test_vec4_norm() {
        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.norm(), 2.0);
        assert_eq!(v.norm_sq(), 4.0);
        assert!((v.normalize().norm() - 1.0).abs() < 1e-6);
        assert_eq!(v.normalize(), Vec4::splat(0.5));
    }

    #[test]
    fn test_vec4_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 70.0);
        assert_eq!(a.inner_product(b), 70.0);
    }

    #[test]
    fn test_vec4_outer_product() {
        let m = Vec4::new(1.0, 2.0, 3.0, 4.0).outer_product(Vec4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(m.at(0, 0), 5.0);
        assert_eq!(m.at(3, 0), 20.0);
        assert_eq!(m.at(0, 3), 8.0);
        assert_eq!(m.at(3, 3), 32.0);
    }

    #[test]
    fn test_vec4_clamp_division_edges() {
        let v = Vec4::new(-3.0, 0.2, 0.8, 3.0);
        assert_eq!(v.clamp(0.0, 1.0), Vec4::new(0.0, 0.2, 0.8, 1.0));
        assert_eq!(v.clamp(1.0, -1.0), v);
        // division by zero follows IEEE-754
        let d = Vec4::ONE / 0.0;
        assert!(d.x.is_infinite());
    }

    #[test]
    fn test_vec4_conversions() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec4::from(Vec2::new(1.0, 2.0)), Vec4::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(
            Vec4::from(Vec3::new(1.0, 2.0, 3.0)),
            Vec4::new(1.0, 2.0, 3.0, 0.0)
        );
        assert_eq!(Vec4::try_from([1.0, 2.0, 3.0, 4.0].as_slice()), Ok(v));
        assert!(Vec4::try_from([0.0; 5].as_slice()).is_err());
    }

    #[test]
    fn test_vec4_color_view() {
        let c = Vec4::new(0.1, 0.2, 0.3, 1.0);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0.1, 0.2, 0.3, 1.0));
    }
}
