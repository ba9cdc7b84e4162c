//! Mathematical type definitions.
//!
//! Linear algebra aliases used throughout the workspace, plus the
//! [`Degrees`]/[`Radians`] wrappers that make angle units part of every
//! geometry signature.

use nalgebra::{Matrix3, Point2, Point3, Vector2, Vector3};

pub mod angle;

pub use angle::{Degrees, Radians};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 3D point with [`Real`] coordinates.
pub type Pt3 = Point3<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;
