//! Coordinate transform seam.
//!
//! The geometric core works in metres about the nadir point; input
//! positions arrive as geodetic longitude/latitude. This module bridges
//! the two behind the [`CrsTransform`] trait so callers embedding the
//! pipeline in a GIS host can substitute a projection of their own.
//!
//! Two implementations ship with the crate: [`IdentityCrs`] passes
//! degrees through untouched (the host reprojects later), and
//! [`LocalTangentPlane`] is an equirectangular approximation about a
//! fixed origin, accurate to well under a metre at survey extents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use footprint_core::{Pt2, Real};

/// WGS84 equatorial radius, metres.
pub const EARTH_RADIUS_M: Real = 6_378_137.0;

#[derive(Debug, Error, PartialEq)]
pub enum CrsError {
    #[error("tangent-plane origin latitude {0} is outside (-90, 90)")]
    BadOriginLatitude(Real),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(Real),
}

/// Forward transform from geodetic `(lon, lat)` degrees to output plane
/// coordinates.
pub trait CrsTransform {
    fn forward(&self, lon_lat: Pt2) -> Result<Pt2, CrsError>;
}

/// Passes coordinates through unchanged. Footprint offsets are then in
/// metres about a degree-valued nadir, which is only meaningful when the
/// consumer reprojects downstream.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityCrs;

impl CrsTransform for IdentityCrs {
    fn forward(&self, lon_lat: Pt2) -> Result<Pt2, CrsError> {
        Ok(lon_lat)
    }
}

/// Equirectangular plane tangent at `origin`: x is metres east, y metres
/// north of the origin.
#[derive(Clone, Copy, Debug)]
pub struct LocalTangentPlane {
    origin: Pt2,
    cos_lat0: Real,
}

impl LocalTangentPlane {
    pub fn new(origin: Pt2) -> Result<Self, CrsError> {
        let lat0 = origin.y;
        if !(lat0 > -90.0 && lat0 < 90.0) {
            return Err(CrsError::BadOriginLatitude(lat0));
        }
        Ok(Self {
            origin,
            cos_lat0: lat0.to_radians().cos(),
        })
    }

    pub fn origin(&self) -> Pt2 {
        self.origin
    }
}

impl CrsTransform for LocalTangentPlane {
    fn forward(&self, lon_lat: Pt2) -> Result<Pt2, CrsError> {
        let lat = lon_lat.y;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CrsError::LatitudeOutOfRange(lat));
        }
        let x = (lon_lat.x - self.origin.x).to_radians() * self.cos_lat0 * EARTH_RADIUS_M;
        let y = (lat - self.origin.y).to_radians() * EARTH_RADIUS_M;
        Ok(Pt2::new(x, y))
    }
}

/// Transform dispatch without trait objects, mirroring how strategies are
/// dispatched in the core crate.
#[derive(Clone, Copy, Debug)]
pub enum AnyCrs {
    Identity(IdentityCrs),
    LocalTangentPlane(LocalTangentPlane),
}

impl CrsTransform for AnyCrs {
    fn forward(&self, lon_lat: Pt2) -> Result<Pt2, CrsError> {
        match self {
            AnyCrs::Identity(t) => t.forward(lon_lat),
            AnyCrs::LocalTangentPlane(t) => t.forward(lon_lat),
        }
    }
}

/// Serializable choice of destination plane. A tangent plane without an
/// explicit origin is anchored at the first image's position when the
/// batch resolves its transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DestinationConfig {
    Identity,
    LocalTangentPlane {
        /// `[lon, lat]` in degrees; `None` defers to the batch anchor.
        #[serde(default)]
        origin: Option<[Real; 2]>,
    },
}

impl Default for DestinationConfig {
    fn default() -> Self {
        DestinationConfig::LocalTangentPlane { origin: None }
    }
}

impl DestinationConfig {
    pub fn build(&self, fallback_origin: Pt2) -> Result<AnyCrs, CrsError> {
        match self {
            DestinationConfig::Identity => Ok(AnyCrs::Identity(IdentityCrs)),
            DestinationConfig::LocalTangentPlane { origin } => {
                let origin = origin
                    .map(|[lon, lat]| Pt2::new(lon, lat))
                    .unwrap_or(fallback_origin);
                Ok(AnyCrs::LocalTangentPlane(LocalTangentPlane::new(origin)?))
            }
        }
    }
}
