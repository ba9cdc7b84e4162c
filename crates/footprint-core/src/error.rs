use std::fmt;

use thiserror::Error;

use crate::Real;

/// Field-of-view axis named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FovAxis {
    Horizontal,
    Vertical,
}

impl fmt::Display for FovAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FovAxis::Horizontal => write!(f, "horizontal"),
            FovAxis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Failure modes of the footprint projectors.
///
/// Two classes: invalid parameters are rejected before any trigonometry
/// runs, degenerate geometry means the view has no finite ground
/// intersection. Batch callers typically skip degenerate images and abort
/// on invalid parameters; [`FootprintError::is_degenerate`] keeps the
/// distinction available after the error crosses the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    /// Field-of-view angle outside the accepted open interval.
    #[error("{axis} field of view must be inside ({min}, {max}) degrees, got {value}")]
    FovOutOfRange {
        axis: FovAxis,
        value: Real,
        min: Real,
        max: Real,
    },

    /// Altitude above ground must be a non-negative finite number.
    #[error("altitude above ground must be non-negative, got {altitude}")]
    InvalidAltitude { altitude: Real },

    /// A view edge angle hit a tangent asymptote; the edge never meets
    /// the ground within a finite distance.
    #[error("view edge at {angle_deg} degrees has no finite ground distance")]
    TangentAsymptote { angle_deg: Real },

    /// A rotated frustum corner ray points at or above the horizon.
    #[error("frustum corner {corner} points at or above the horizon")]
    CornerAboveHorizon { corner: usize },
}

impl FootprintError {
    /// `true` for degenerate-geometry conditions (skippable per image),
    /// `false` for invalid parameters (a misconfigured job).
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            FootprintError::TangentAsymptote { .. } | FootprintError::CornerAboveHorizon { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_classification() {
        assert!(FootprintError::TangentAsymptote { angle_deg: 90.0 }.is_degenerate());
        assert!(FootprintError::CornerAboveHorizon { corner: 2 }.is_degenerate());
        assert!(!FootprintError::InvalidAltitude { altitude: -1.0 }.is_degenerate());
        assert!(!FootprintError::FovOutOfRange {
            axis: FovAxis::Vertical,
            value: 400.0,
            min: 0.0,
            max: 360.0,
        }
        .is_degenerate());
    }

    #[test]
    fn messages_name_the_axis() {
        let err = FootprintError::FovOutOfRange {
            axis: FovAxis::Horizontal,
            value: -5.0,
            min: 0.0,
            max: 360.0,
        };
        assert!(err.to_string().contains("horizontal"));
    }
}
