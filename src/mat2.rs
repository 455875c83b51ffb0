//! 2x2 matrix, column-major.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use bytemuck::{Pod, Zeroable};

use crate::scalar::Scalar;
use crate::{Mat3, Mat4, MathError, Vec2};

/// A 2x2 matrix stored as two column vectors.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2 {
    pub col: [Vec2; 2],
}

impl Default for Mat2 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat2 {
    pub const IDENTITY: Self = Self {
        col: [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
    };

    pub const ZERO: Self = Self {
        col: [Vec2::ZERO, Vec2::ZERO],
    };

    #[inline]
    pub const fn from_cols(c0: Vec2, c1: Vec2) -> Self {
        Self { col: [c0, c1] }
    }

    /// Uniform diagonal matrix `s * I`.
    #[inline]
    pub const fn from_diagonal(s: Scalar) -> Self {
        Self::from_cols(Vec2::new(s, 0.0), Vec2::new(0.0, s))
    }

    /// Builds from a flat column-major array.
    #[inline]
    pub const fn from_array(a: [Scalar; 4]) -> Self {
        Self::from_cols(Vec2::new(a[0], a[1]), Vec2::new(a[2], a[3]))
    }

    /// Flat column-major array of the entries.
    #[inline]
    pub const fn to_array(self) -> [Scalar; 4] {
        [self.col[0].x, self.col[0].y, self.col[1].x, self.col[1].y]
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
        self.col[0].x + self.col[1].y
    }

    #[inline]
    pub fn determinant(&self) -> Scalar {
        self.col[0].x * self.col[1].y - self.col[1].x * self.col[0].y
    }

    /// Inverse by the 2x2 closed form.
    ///
    /// A singular matrix yields non-finite entries; no check is made.
    pub fn inverse(&self) -> Self {
        let denom = 1.0 / self.determinant();
        Self::from_cols(
            Vec2::new(self.col[1].y * denom, -self.col[0].y * denom),
            Vec2::new(-self.col[1].x * denom, self.col[0].x * denom),
        )
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec2::new(self.col[0].x, self.col[1].x),
            Vec2::new(self.col[0].y, self.col[1].y),
        )
    }

    /// Square root of the sum of squared entries.
    pub fn frobenius_norm(&self) -> Scalar {
        (self.col[0].norm_sq() + self.col[1].norm_sq()).sqrt()
    }
}

impl Add for Mat2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_cols(self.col[0] + other.col[0], self.col[1] + other.col[1])
    }
}

impl Sub for Mat2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_cols(self.col[0] - other.col[0], self.col[1] - other.col[1])
    }
}

impl Add<Scalar> for Mat2 {
    type Output = Self;
    #[inline]
    fn add(self, s: Scalar) -> Self {
        Self::from_cols(self.col[0] + s, self.col[1] + s)
    }
}

impl Sub<Scalar> for Mat2 {
    type Output = Self;
    #[inline]
    fn sub(self, s: Scalar) -> Self {
        Self::from_cols(self.col[0] - s, self.col[1] - s)
    }
}

impl Mul<Scalar> for Mat2 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Scalar) -> Self {
        Self::from_cols(self.col[0] * s, self.col[1] * s)
    }
}

impl Div<Scalar> for Mat2 {
    type Output = Self;
    #[inline]
    fn div(self, s: Scalar) -> Self {
        let denom = 1.0 / s;
        self * denom
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.col[0].x * v.x + self.col[1].x * v.y,
            self.col[0].y * v.x + self.col[1].y * v.y,
        )
    }
}

/// Matrix composition; column j of the result is `self * other.col[j]`.
impl Mul for Mat2 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_cols(self * other.col[0], self * other.col[1])
    }
}

/// Column access.
impl Index<usize> for Mat2 {
    type Output = Vec2;
    #[inline]
    fn index(&self, index: usize) -> &Vec2 {
        &self.col[index]
    }
}

impl IndexMut<usize> for Mat2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vec2 {
        &mut self.col[index]
    }
}

/// Upper-left block.
impl From<Mat3> for Mat2 {
    fn from(m: Mat3) -> Self {
        Self::from_cols(m.col[0].truncate(), m.col[1].truncate())
    }
}

/// Upper-left block.
impl From<Mat4> for Mat2 {
    fn from(m: Mat4) -> Self {
        Self::from_cols(
            Vec2::new(m.col[0].x, m.col[0].y),
            Vec2::new(m.col[1].x, m.col[1].y),
        )
    }
}

impl TryFrom<&[Scalar]> for Mat2 {
    type Error = MathError;

    fn try_from(s: &[Scalar]) -> Result<Self, MathError> {
        if s.len() != 4 {
            return Err(MathError::SliceLength { expected: 4, got: s.len() });
        }
        Ok(Self::from_array([s[0], s[1], s[2], s[3]]))
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:12.7} {:12.7}", self.col[0].x, self.col[1].x)?;
        write!(f, "{:12.7} {:12.7}", self.col[0].y, self.col[1].y)
    }
}
