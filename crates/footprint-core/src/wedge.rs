//! Nadir-distance projector: the trigonometric "wedge" footprint path.
//!
//! Under a flat-ground pinhole model, the ground distance from the nadir
//! point to the near and far edges of the vertical field of view is
//!
//! ```text
//! near = altitude * tan(radians(90 - pitch - vfov/2))
//! far  = altitude * tan(radians(90 - pitch + vfov/2))
//! ```
//!
//! Pitch here follows the gimbal metadata convention of the `90 - pitch`
//! formula (DJI reports -90 for a camera looking straight down). Distances
//! go negative once an edge angle passes 90 degrees; that is expected
//! output of the tangent model and the caller decides whether to take the
//! magnitude (see [`NadirDistances::magnitudes`]) or reject the image.

use serde::{Deserialize, Serialize};

use crate::error::{FootprintError, FovAxis};
use crate::math::{Degrees, Real};

/// Cosine magnitude below which an edge angle counts as asymptotic.
const ASYMPTOTE_COS_EPS: Real = 1e-9;

/// Signed ground distances (metres) from the nadir point to the near and
/// far edges of the vertical field of view, along the yaw bearing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NadirDistances {
    pub near: Real,
    pub far: Real,
}

impl NadirDistances {
    /// Non-negative `(inner, outer)` radii for wedge-buffer construction.
    ///
    /// Sign flips past vertical are normal projector output; every known
    /// call site uses the magnitudes as radial buffer distances, ordered
    /// so that `inner <= outer`.
    pub fn magnitudes(&self) -> (Real, Real) {
        let a = self.near.abs();
        let b = self.far.abs();
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Project the vertical field of view onto flat ground.
///
/// `gimbal_pitch` and `vertical_fov` are in degrees; `altitude` is metres
/// above ground. Errors are [`FootprintError::InvalidAltitude`] /
/// [`FootprintError::FovOutOfRange`] for bad parameters and
/// [`FootprintError::TangentAsymptote`] when an edge angle lands on a
/// tangent pole (the edge never meets the ground at a finite distance).
pub fn nadir_distances(
    altitude: Real,
    gimbal_pitch: Degrees,
    vertical_fov: Degrees,
) -> Result<NadirDistances, FootprintError> {
    if !(altitude >= 0.0 && altitude.is_finite()) {
        return Err(FootprintError::InvalidAltitude { altitude });
    }
    let vfov = vertical_fov.value();
    if !(vfov > 0.0 && vfov < 360.0) {
        return Err(FootprintError::FovOutOfRange {
            axis: FovAxis::Vertical,
            value: vfov,
            min: 0.0,
            max: 360.0,
        });
    }

    let half = 0.5 * vfov;
    let near_angle = 90.0 - gimbal_pitch.value() - half;
    let far_angle = 90.0 - gimbal_pitch.value() + half;

    Ok(NadirDistances {
        near: altitude * checked_tan(near_angle)?,
        far: altitude * checked_tan(far_angle)?,
    })
}

fn checked_tan(angle_deg: Real) -> Result<Real, FootprintError> {
    let rad = angle_deg.to_radians();
    if rad.cos().abs() < ASYMPTOTE_COS_EPS {
        return Err(FootprintError::TangentAsymptote { angle_deg });
    }
    Ok(rad.tan())
}
