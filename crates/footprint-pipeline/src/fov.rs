use footprint_core::Degrees;

use crate::PipelineError;

/// Empirical multiplier applied when deriving the vertical FOV from the
/// horizontal FOV and the image aspect ratio. Sensor FOV specs are
/// diagonal-biased; this factor was fitted against footprints measured
/// from ground control points.
pub const DEFAULT_VERTICAL_FOV_MULTIPLIER: f64 = 0.855;

/// Derive the vertical FOV as `horizontal / image_ratio * multiplier`,
/// where `image_ratio` is pixel width over pixel height.
pub fn vertical_fov_from_ratio(
    horizontal: Degrees,
    image_ratio: f64,
    multiplier: f64,
) -> Result<Degrees, PipelineError> {
    if !(image_ratio.is_finite() && image_ratio > 0.0) {
        return Err(PipelineError::BadImageRatio(image_ratio));
    }
    Ok(Degrees(horizontal.value() / image_ratio * multiplier))
}
