//! Scalar type selection and shared numeric constants.
//!
//! Every entity in this crate stores the same scalar type, picked once
//! at build time: `f32` by default, `f64` with the `f64` cargo feature.
//! Changing the feature changes every vector, matrix and quaternion
//! uniformly.

/// The scalar type used by every vector, matrix and quaternion.
#[cfg(feature = "f64")]
pub type Scalar = f64;

/// The scalar type used by every vector, matrix and quaternion.
#[cfg(not(feature = "f64"))]
pub type Scalar = f32;

/// Machine epsilon for [`Scalar`].
///
/// This is the absolute tolerance used by the vector `approx_eq`
/// comparisons. Note that an absolute tolerance does not scale with the
/// magnitude of the operands; comparisons of large values will report
/// inequality for differences well within rounding error.
pub const EPSILON: Scalar = Scalar::EPSILON;

/// Archimedes' constant at [`Scalar`] precision.
pub const PI: Scalar = std::f64::consts::PI as Scalar;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_matches_scalar_type() {
        #[cfg(not(feature = "f64"))]
        assert_eq!(EPSILON, f32::EPSILON);
        #[cfg(feature = "f64")]
        assert_eq!(EPSILON, f64::EPSILON);
    }

    #[test]
    fn test_pi() {
        assert!((PI.sin()).abs() < 1e-6);
    }
}
