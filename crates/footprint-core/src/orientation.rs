use serde::{Deserialize, Serialize};

use crate::error::{FootprintError, FovAxis};
use crate::math::Degrees;

/// Gimbal rotation relative to a level, north-aligned frame, in degrees as
/// reported by drone XMP metadata.
///
/// Yaw is the compass bearing of the camera's forward direction. The two
/// projector paths interpret pitch differently (see [`crate::wedge`] and
/// [`crate::frustum`]); this struct carries the raw metadata values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GimbalOrientation {
    pub roll: Degrees,
    pub pitch: Degrees,
    pub yaw: Degrees,
}

impl GimbalOrientation {
    pub fn new(roll: Degrees, pitch: Degrees, yaw: Degrees) -> Self {
        Self { roll, pitch, yaw }
    }
}

/// Camera field of view: horizontal ("wide") and vertical ("tall") angular
/// extents in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    pub horizontal: Degrees,
    pub vertical: Degrees,
}

impl FieldOfView {
    pub fn new(horizontal: Degrees, vertical: Degrees) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Check both angles against an open `(min, max)` degree interval.
    ///
    /// The wedge path accepts `(0, 360)`; the frustum path caps at
    /// `(0, 180)` because its corner tangents diverge at 180 degrees.
    pub fn validate(&self, min: f64, max: f64) -> Result<(), FootprintError> {
        for (axis, angle) in [
            (FovAxis::Horizontal, self.horizontal),
            (FovAxis::Vertical, self.vertical),
        ] {
            let value = angle.value();
            if !(value > min && value < max) {
                return Err(FootprintError::FovOutOfRange {
                    axis,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fov_validation_bounds() {
        let fov = FieldOfView::new(Degrees(84.0), Degrees(54.0));
        assert!(fov.validate(0.0, 360.0).is_ok());
        assert!(fov.validate(0.0, 180.0).is_ok());

        let too_wide = FieldOfView::new(Degrees(200.0), Degrees(54.0));
        assert!(too_wide.validate(0.0, 360.0).is_ok());
        let err = too_wide.validate(0.0, 180.0).unwrap_err();
        assert!(matches!(
            err,
            FootprintError::FovOutOfRange {
                axis: FovAxis::Horizontal,
                ..
            }
        ));
    }

    #[test]
    fn fov_rejects_zero_and_nan() {
        let zero = FieldOfView::new(Degrees(0.0), Degrees(54.0));
        assert!(zero.validate(0.0, 360.0).is_err());

        let nan = FieldOfView::new(Degrees(84.0), Degrees(f64::NAN));
        assert!(nan.validate(0.0, 360.0).is_err());
    }
}
