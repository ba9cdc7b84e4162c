//! Geometric core for UAV image footprints.
//!
//! Given a camera's gimbal orientation, its field of view, and the flight
//! altitude above ground, this crate computes:
//! - the near/far ground distances from the nadir point along the viewing
//!   bearing ([`nadir_distances`], the trigonometric "wedge" path), and
//! - the four ground offsets of the oblique viewing frustum
//!   ([`bounding_polygon`], the full 3D rotated-frustum path).
//!
//! The two paths are alternative footprint strategies with different
//! simplifying assumptions. They are exposed behind the [`FootprintModel`]
//! trait, and each function names its angle unit in its signature through
//! the [`Degrees`]/[`Radians`] wrappers.
//!
//! All computations are pure functions of their inputs: no shared state,
//! no I/O. They may be called freely from multiple threads.

/// Type aliases and angle wrappers.
pub mod math;

/// Gimbal orientation and field-of-view value types.
pub mod orientation;

/// Error taxonomy shared by both projectors.
pub mod error;

/// Nadir-distance projector (trigonometric wedge path, degrees).
pub mod wedge;

/// Bounding-polygon calculator (rotated-frustum path, radians).
pub mod frustum;

/// Footprint strategies behind a common interface.
pub mod footprint;

/// Serializable strategy configuration.
pub mod config;

pub use config::{AnyFootprint, StrategyConfig};
pub use error::{FootprintError, FovAxis};
pub use footprint::{
    CalibrationCorrections, FootprintInput, FootprintModel, FrustumFootprint, GroundPolygon,
    WedgeFootprint,
};
pub use frustum::{bounding_polygon, FootprintCorners};
pub use math::*;
pub use orientation::{FieldOfView, GimbalOrientation};
pub use wedge::{nadir_distances, NadirDistances};
