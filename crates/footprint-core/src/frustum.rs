//! Bounding-polygon calculator: the full 3D rotated-frustum path.
//!
//! The camera frustum is approximated by its four corner rays. In the
//! camera frame the boresight points straight down `(0, 0, -1)` (pitch
//! convention: 0 = nadir-pointing), `x` is the forward/flight axis and `y`
//! the lateral axis. Corner rays are rotated into the local tangent frame
//! by the intrinsic composition roll, then pitch, then yaw
//! (`R = Rz(yaw) * Ry(pitch) * Rx(roll)`) and intersected with the ground
//! plane `altitude` below the camera. The composition order is
//! load-bearing: reversing it yields a different footprint.
//!
//! All angles here are radians; degree conversion happens at the strategy
//! boundary.

use nalgebra::Rotation3;
use serde::{Deserialize, Serialize};

use crate::error::{FootprintError, FovAxis};
use crate::math::{Radians, Real, Vec2, Vec3};

/// Downward components smaller than this count as "never reaches ground".
const MIN_DOWNWARD_DZ: Real = 1e-12;

/// Corner sign pattern `(forward, lateral)` in fixed cyclic order, so the
/// projected quadrilateral closes without self-intersection.
const CORNER_SIGNS: [(Real, Real); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)];

/// Ground offsets of the four frustum corners relative to the point on the
/// ground directly below the camera, in ray order (z is ~0 for all).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FootprintCorners {
    corners: [Vec3; 4],
}

impl FootprintCorners {
    pub fn corners(&self) -> &[Vec3; 4] {
        &self.corners
    }

    /// Closed 2D ring (first point repeated at the end), preserving the
    /// corner winding.
    pub fn ring(&self) -> [Vec2; 5] {
        let xy = |v: &Vec3| Vec2::new(v.x, v.y);
        [
            xy(&self.corners[0]),
            xy(&self.corners[1]),
            xy(&self.corners[2]),
            xy(&self.corners[3]),
            xy(&self.corners[0]),
        ]
    }
}

/// Project the four frustum corner rays onto flat ground.
///
/// `altitude` is metres above ground; all angles are radians. FOV angles
/// must lie in `(0, pi)`; at pi the corner tangents diverge. Returns
/// [`FootprintError::CornerAboveHorizon`] as soon as a rotated corner ray
/// fails to point below the horizon, rather than emitting an unbounded
/// intersection point.
pub fn bounding_polygon(
    vertical_fov: Radians,
    horizontal_fov: Radians,
    altitude: Real,
    roll: Radians,
    pitch: Radians,
    yaw: Radians,
) -> Result<FootprintCorners, FootprintError> {
    if !(altitude >= 0.0 && altitude.is_finite()) {
        return Err(FootprintError::InvalidAltitude { altitude });
    }
    for (axis, fov) in [
        (FovAxis::Horizontal, horizontal_fov),
        (FovAxis::Vertical, vertical_fov),
    ] {
        let v = fov.value();
        if !(v > 0.0 && v < std::f64::consts::PI) {
            return Err(FootprintError::FovOutOfRange {
                axis,
                value: fov.to_degrees().value(),
                min: 0.0,
                max: 180.0,
            });
        }
    }

    let tan_v = (0.5 * vertical_fov.value()).tan();
    let tan_h = (0.5 * horizontal_fov.value()).tan();
    let rotation = Rotation3::from_euler_angles(roll.value(), pitch.value(), yaw.value());

    let mut corners = [Vec3::zeros(); 4];
    for (i, (sign_v, sign_h)) in CORNER_SIGNS.iter().enumerate() {
        let ray = Vec3::new(sign_v * tan_v, sign_h * tan_h, -1.0).normalize();
        let dir = rotation * ray;
        if dir.z >= -MIN_DOWNWARD_DZ {
            return Err(FootprintError::CornerAboveHorizon { corner: i });
        }
        // Ray from (0, 0, altitude) meets the plane z = 0 at t = -altitude/dz.
        let t = -altitude / dir.z;
        corners[i] = Vec3::new(t * dir.x, t * dir.y, altitude + t * dir.z);
    }

    Ok(FootprintCorners { corners })
}
