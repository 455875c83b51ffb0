//! vml: small fixed-size vector/matrix/quaternion math.
//!
//! 2-, 3- and 4-dimensional vectors, 2x2/3x3/4x4 column-major matrices
//! and quaternions, all plain `Copy` value types operated on by pure
//! functions. Built for graphics code: camera and projection matrix
//! builders, viewport project/unproject, axis-angle and Euler
//! conversions, slerp.
//!
//! Numerical degeneracies are not errors. Dividing by a zero scalar,
//! normalizing a zero vector or inverting a singular matrix all follow
//! IEEE-754 and yield infinities or NaNs; nothing is checked or
//! reported. Callers that need validity checks do them at the call
//! site.
//!
//! The scalar type is `f32` by default and `f64` with the `f64` cargo
//! feature. The `serde` feature derives `Serialize`/`Deserialize` on
//! every type.

pub mod scalar;

mod mat2;
mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::{project, unproject, Mat4};
pub use quat::Quat;
pub use scalar::Scalar;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Errors produced by fallible constructors.
///
/// The numerical operations themselves never fail; the only fallible
/// surface is building a value type from a borrowed slice of the wrong
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("expected a slice of {expected} scalars, got {got}")]
    SliceLength { expected: usize, got: usize },
}
