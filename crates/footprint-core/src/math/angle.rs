//! Unit-tagged angle wrappers.
//!
//! Drone metadata stores gimbal angles and FOV in degrees while the frustum
//! math works in radians; the two projector paths in this crate disagree on
//! their native unit on purpose (they reproduce two historical call sites).
//! These wrappers make the unit part of each function signature instead of
//! relying on caller discipline.

use serde::{Deserialize, Serialize};

use super::Real;

/// An angle expressed in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub Real);

/// An angle expressed in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub Real);

impl Degrees {
    /// Raw value in degrees.
    pub fn value(self) -> Real {
        self.0
    }

    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl Radians {
    /// Raw value in radians.
    pub fn value(self) -> Real {
        self.0
    }

    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Self {
        r.to_degrees()
    }
}
