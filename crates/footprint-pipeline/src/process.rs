//! Single-image processing.

use footprint_core::{
    Degrees, FieldOfView, FootprintInput, FootprintModel, GimbalOrientation, Pt2,
};
use footprint_metadata::{DroneTags, ExifSummary};

use crate::crs::CrsTransform;
use crate::fov::vertical_fov_from_ratio;
use crate::types::{FeatureAttributes, FootprintJobConfig, ImageFootprint, ImageMetadata};
use crate::PipelineError;

/// Turn one image's metadata into a footprint record.
///
/// Parses the EXIF and drone tags, resolves the camera, optionally derives
/// the vertical FOV from the image aspect ratio, runs the configured
/// footprint strategy and places the result about the transformed nadir
/// point.
pub fn process_image(
    meta: &ImageMetadata,
    config: &FootprintJobConfig,
    crs: &dyn CrsTransform,
) -> Result<ImageFootprint, PipelineError> {
    let exif = ExifSummary::from_tags(&meta.exif)?;
    let drone = DroneTags::from_tags(&meta.xmp)?;
    let camera = config.camera.resolve()?;

    let vertical = if config.use_image_ratio_for_vertical_fov {
        vertical_fov_from_ratio(
            camera.fov.horizontal,
            exif.image_ratio(),
            config.vertical_fov_multiplier,
        )?
    } else {
        camera.fov.vertical
    };
    let fov = FieldOfView::new(camera.fov.horizontal, vertical);

    let input = FootprintInput {
        altitude: drone.relative_altitude,
        orientation: GimbalOrientation::new(
            Degrees(drone.gimbal_roll_deg),
            Degrees(drone.gimbal_pitch_deg),
            Degrees(drone.gimbal_yaw_deg),
        ),
        fov,
        corrections: camera.corrections,
    };
    let polygon = config.strategy.build().ground_footprint(&input)?;

    let nadir = crs.forward(Pt2::new(exif.lon_deg, exif.lat_deg))?;
    let footprint = polygon.ring.iter().map(|v| nadir + v).collect();

    log::debug!(
        "{}: pitch {:.1} yaw {:.1} alt {:.1} -> {} ring points",
        meta.path,
        drone.gimbal_pitch_deg,
        drone.gimbal_yaw_deg,
        drone.relative_altitude,
        polygon.ring.len()
    );

    Ok(ImageFootprint {
        nadir,
        footprint,
        attributes: FeatureAttributes {
            date_time: exif.date_time,
            gimbal_roll: drone.gimbal_roll_deg,
            gimbal_pitch: drone.gimbal_pitch_deg,
            gimbal_yaw: drone.gimbal_yaw_deg,
            relative_altitude: drone.relative_altitude,
            layer: meta.layer_name(),
            path: meta.path.clone(),
            camera_model: exif.model.unwrap_or_else(|| camera.name.clone()),
            horizontal_fov: fov.horizontal.value(),
            vertical_fov: fov.vertical.value(),
            nadir_to_bottom_offset: camera.corrections.nadir_to_bottom_offset,
            nadir_to_upper_offset: camera.corrections.nadir_to_upper_offset,
        },
    })
}
