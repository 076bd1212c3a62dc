//! Coordinate and algebra types shared by the scene model and the interpreter.
//!
//! Conventions:
//! - points are row vectors; a point `p` is transformed as `p · M`
//! - transform matrices are 4×4 and carry the translation in their last row
//! - angles passed to matrix constructors are in degrees
//!
//! Dimension mismatches are programming defects. The plain operations panic;
//! the `try_*` variants report an [`AlgebraError`].

mod angle;
mod error;
mod matrix;
mod vec2;
mod vec3;
mod vector;

pub use angle::Angle;
pub use error::AlgebraError;
pub use matrix::Matrix;
pub use vec2::Vec2;
pub use vec3::{point, Vec3};
pub use vector::Vector;
