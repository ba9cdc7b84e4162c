//! Footprint strategies behind a common interface.
//!
//! Two strategies compute a ground footprint polygon from the same inputs:
//!
//! - [`WedgeFootprint`] uses the nadir-distance projector and sweeps an
//!   annular sector (wedge buffer) centred on the yaw bearing, ignoring
//!   roll;
//! - [`FrustumFootprint`] projects the four rotated frustum corner rays,
//!   the full 3D model.
//!
//! Both consume degrees (the unit of drone metadata) and convert
//! internally as their math requires. Empirical per-camera radius
//! corrections live in [`CalibrationCorrections`] and are applied here, at
//! the strategy boundary, never inside the raw trigonometry.

use serde::{Deserialize, Serialize};

use crate::error::FootprintError;
use crate::frustum::bounding_polygon;
use crate::math::{Degrees, Real, Vec2};
use crate::orientation::{FieldOfView, GimbalOrientation};
use crate::wedge::nadir_distances;

/// Empirical linear corrections (metres) compensating for FOV values that
/// do not match the real optics. Added to the near/bottom and far/upper
/// nadir distances before the wedge radii are formed. The frustum strategy
/// ignores them (it has no radial distances to correct).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCorrections {
    #[serde(default)]
    pub nadir_to_bottom_offset: Real,
    #[serde(default)]
    pub nadir_to_upper_offset: Real,
}

/// Everything a strategy needs for one image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FootprintInput {
    /// Relative altitude above ground, metres.
    pub altitude: Real,
    /// Gimbal orientation in degrees (raw metadata values).
    pub orientation: GimbalOrientation,
    /// Field of view in degrees.
    pub fov: FieldOfView,
    #[serde(default)]
    pub corrections: CalibrationCorrections,
}

/// Ground footprint as a closed ring of offsets (metres) about the nadir
/// point: the last point repeats the first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundPolygon {
    pub ring: Vec<Vec2>,
}

impl GroundPolygon {
    pub fn is_closed(&self) -> bool {
        match (self.ring.first(), self.ring.last()) {
            (Some(a), Some(b)) => (a - b).norm() < 1e-12,
            _ => false,
        }
    }
}

/// Compute a ground footprint polygon from orientation, altitude and FOV.
pub trait FootprintModel {
    fn ground_footprint(&self, input: &FootprintInput) -> Result<GroundPolygon, FootprintError>;
}

/// Annular-sector footprint built from the nadir distances.
///
/// Reproduces the wedge-buffer construction: azimuth = gimbal yaw, angular
/// width = horizontal FOV, radii = the corrected near/far magnitudes.
/// Distance signs are collapsed with `abs()` and the radii ordered, which
/// is the documented policy of every known call site.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WedgeFootprint {
    /// Arc segments per full circle used to approximate the curved edges.
    pub arc_segments: usize,
}

impl Default for WedgeFootprint {
    fn default() -> Self {
        Self { arc_segments: 24 }
    }
}

impl FootprintModel for WedgeFootprint {
    fn ground_footprint(&self, input: &FootprintInput) -> Result<GroundPolygon, FootprintError> {
        input.fov.validate(0.0, 360.0)?;

        let distances = nadir_distances(
            input.altitude,
            input.orientation.pitch,
            input.fov.vertical,
        )?;
        let near_radius =
            (distances.near.abs() + input.corrections.nadir_to_bottom_offset).max(0.0);
        let far_radius = (distances.far.abs() + input.corrections.nadir_to_upper_offset).max(0.0);
        let (inner, outer) = if near_radius <= far_radius {
            (near_radius, far_radius)
        } else {
            (far_radius, near_radius)
        };

        Ok(GroundPolygon {
            ring: sector_ring(
                input.orientation.yaw,
                input.fov.horizontal,
                inner,
                outer,
                self.arc_segments,
            ),
        })
    }
}

/// Rotated-frustum footprint: the four corner rays projected to ground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrustumFootprint;

impl FootprintModel for FrustumFootprint {
    fn ground_footprint(&self, input: &FootprintInput) -> Result<GroundPolygon, FootprintError> {
        let o = input.orientation;
        let corners = bounding_polygon(
            input.fov.vertical.to_radians(),
            input.fov.horizontal.to_radians(),
            input.altitude,
            o.roll.to_radians(),
            o.pitch.to_radians(),
            o.yaw.to_radians(),
        )?;
        Ok(GroundPolygon {
            ring: corners.ring().to_vec(),
        })
    }
}

/// Point on a compass bearing: x = east, y = north.
fn bearing_point(bearing: Degrees, radius: Real) -> Vec2 {
    let rad = bearing.to_radians().value();
    Vec2::new(radius * rad.sin(), radius * rad.cos())
}

/// Closed ring of an annular sector centred on `azimuth`, spanning
/// `width` degrees, between `inner` and `outer` radii. Collapses to a pie
/// slice when the inner radius vanishes.
fn sector_ring(
    azimuth: Degrees,
    width: Degrees,
    inner: Real,
    outer: Real,
    arc_segments: usize,
) -> Vec<Vec2> {
    let width_deg = width.value();
    let start = azimuth.value() - 0.5 * width_deg;
    let segments = ((arc_segments as Real * width_deg / 360.0).ceil() as usize).max(8);
    let step = width_deg / segments as Real;

    let mut ring = Vec::with_capacity(2 * (segments + 1) + 2);
    for i in 0..=segments {
        ring.push(bearing_point(Degrees(start + i as Real * step), outer));
    }
    if inner > 1e-12 {
        for i in (0..=segments).rev() {
            ring.push(bearing_point(Degrees(start + i as Real * step), inner));
        }
    } else {
        ring.push(Vec2::new(0.0, 0.0));
    }
    ring.push(ring[0]);
    ring
}
