//! 2D vector.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{Scalar, EPSILON};
use crate::{Mat2, MathError, Vec3, Vec4};

/// A 2D vector with `x` and `y` components.
///
/// Components are also addressable by index (0 = x, 1 = y) and through
/// the color-view accessors [`Vec2::r`] and [`Vec2::g`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0);

    #[inline]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `s`.
    #[inline]
    pub const fn splat(s: Scalar) -> Self {
        Self { x: s, y: s }
    }

    #[inline]
    pub const fn from_array(a: [Scalar; 2]) -> Self {
        Self { x: a[0], y: a[1] }
    }

    #[inline]
    pub const fn to_array(self) -> [Scalar; 2] {
        [self.x, self.y]
    }

    /// First component under the color view.
    #[inline]
    pub const fn r(self) -> Scalar {
        self.x
    }

    /// Second component under the color view.
    #[inline]
    pub const fn g(self) -> Scalar {
        self.y
    }

    /// Extends to a [`Vec3`] with the given z component.
    #[inline]
    pub const fn extend(self, z: Scalar) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }

    /// Extends to a [`Vec4`] with the given z and w components.
    #[inline]
    pub const fn extend2(self, z: Scalar, w: Scalar) -> Vec4 {
        Vec4::new(self.x, self.y, z, w)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt())
    }

    /// Clamps each component to `[min, max]`.
    ///
    /// When `min > max` the input is returned unchanged.
    #[inline]
    pub fn clamp(self, min: Scalar, max: Scalar) -> Self {
        if min > max {
            return self;
        }
        Self::new(self.x.max(min).min(max), self.y.max(min).min(max))
    }

    /// Scales to unit length by multiplying with the reciprocal norm.
    ///
    /// A zero vector produces non-finite components.
    #[inline]
    pub fn normalize(self) -> Self {
        let denom = 1.0 / (self.x * self.x + self.y * self.y).sqrt();
        Self::new(self.x * denom, self.y * denom)
    }

    #[inline]
    pub fn dot(self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    /// Alias for [`Vec2::dot`].
    #[inline]
    pub fn inner_product(self, other: Self) -> Scalar {
        self.dot(other)
    }

    /// Outer product `self * other^T`.
    #[inline]
    pub fn outer_product(self, other: Self) -> Mat2 {
        Mat2::from_cols(self * other.x, self * other.y)
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(self) -> Scalar {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_sq(self) -> Scalar {
        self.x * self.x + self.y * self.y
    }

    /// Per-component comparison with an absolute tolerance of machine
    /// epsilon. Does not scale with magnitude; see [`crate::scalar::EPSILON`].
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

/// Component-wise product.
impl Mul for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

/// Component-wise quotient.
impl Div for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }
}

impl Add<Scalar> for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, s: Scalar) -> Self {
        Self::new(self.x + s, self.y + s)
    }
}

impl Sub<Scalar> for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, s: Scalar) -> Self {
        Self::new(self.x - s, self.y - s)
    }
}

impl Mul<Scalar> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Scalar) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Mul<Vec2> for Scalar {
    type Output = Vec2;
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self, v.y * self)
    }
}

impl MulAssign<Scalar> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, s: Scalar) {
        self.x *= s;
        self.y *= s;
    }
}

impl Div<Scalar> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, s: Scalar) -> Self {
        let denom = 1.0 / s;
        Self::new(self.x * denom, self.y * denom)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Index<usize> for Vec2 {
    type Output = Scalar;
    #[inline]
    fn index(&self, index: usize) -> &Scalar {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", index),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", index),
        }
    }
}

impl From<[Scalar; 2]> for Vec2 {
    #[inline]
    fn from(a: [Scalar; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [Scalar; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl From<(Scalar, Scalar)> for Vec2 {
    #[inline]
    fn from(t: (Scalar, Scalar)) -> Self {
        Self::new(t.0, t.1)
    }
}

/// Truncation; drops z.
impl From<Vec3> for Vec2 {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Truncation; drops z and w.
impl From<Vec4> for Vec2 {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y)
    }
}

impl TryFrom<&[Scalar]> for Vec2 {
    type Error = MathError;

    fn try_from(s: &[Scalar]) -> Result<Self, MathError> {
        if s.len() != 2 {
            return Err(MathError::SliceLength { expected: 2, got: s.len() });
        }
        Ok(Self::new(s[0], s[1]))
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:12.7} {:12.7}", self.x, self.y)
    }
}
