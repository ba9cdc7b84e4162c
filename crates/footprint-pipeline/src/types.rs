use std::path::Path;

use serde::{Deserialize, Serialize};

use footprint_core::{Pt2, Real, StrategyConfig};
use footprint_metadata::TagMap;

use crate::crs::DestinationConfig;
use crate::fov::DEFAULT_VERTICAL_FOV_MULTIPLIER;
use crate::presets::CameraSelection;

/// One image's metadata as handed over by the host: the source path plus
/// the raw EXIF and XMP tag maps. Decoding image files is the host's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub path: String,
    pub exif: TagMap,
    #[serde(default)]
    pub xmp: TagMap,
}

impl ImageMetadata {
    /// File stem of the source path, used as the output layer name.
    pub fn layer_name(&self) -> String {
        Path::new(&self.path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.clone())
    }
}

fn default_multiplier() -> Real {
    DEFAULT_VERTICAL_FOV_MULTIPLIER
}

fn default_source_crs() -> String {
    "EPSG:4326".to_owned()
}

/// Full configuration of a footprint job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootprintJobConfig {
    pub camera: CameraSelection,
    pub strategy: StrategyConfig,
    pub destination: DestinationConfig,
    /// Replace the camera's vertical FOV with the value derived from the
    /// horizontal FOV and the image aspect ratio.
    pub use_image_ratio_for_vertical_fov: bool,
    pub vertical_fov_multiplier: Real,
    /// CRS of the EXIF positions. Only geodetic WGS84 input is produced
    /// by the metadata crate, so this is descriptive for now.
    pub source_crs: String,
}

impl Default for FootprintJobConfig {
    fn default() -> Self {
        Self {
            camera: CameraSelection::default(),
            strategy: StrategyConfig::default(),
            destination: DestinationConfig::default(),
            use_image_ratio_for_vertical_fov: false,
            vertical_fov_multiplier: default_multiplier(),
            source_crs: default_source_crs(),
        }
    }
}

/// Attributes carried on both output features of an image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureAttributes {
    pub date_time: Option<String>,
    pub gimbal_roll: Real,
    pub gimbal_pitch: Real,
    pub gimbal_yaw: Real,
    pub relative_altitude: Real,
    pub layer: String,
    pub path: String,
    pub camera_model: String,
    pub horizontal_fov: Real,
    pub vertical_fov: Real,
    pub nadir_to_bottom_offset: Real,
    pub nadir_to_upper_offset: Real,
}

/// Result of processing one image: the nadir point and footprint ring in
/// destination-plane coordinates, plus the shared attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageFootprint {
    pub nadir: Pt2,
    pub footprint: Vec<Pt2>,
    pub attributes: FeatureAttributes,
}

/// A per-image failure recorded by the batch loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageFailure {
    pub path: String,
    pub error: String,
    /// Degenerate view geometry (camera at or above the horizon) rather
    /// than broken metadata or configuration.
    pub degenerate: bool,
}

/// Outcome of a batch run. Failed images never abort the batch; they are
/// reported here alongside the successful features.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub features: Vec<ImageFootprint>,
    pub failures: Vec<ImageFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_name_is_the_file_stem() {
        let meta = ImageMetadata {
            path: "/data/flight-3/DJI_0042.JPG".into(),
            exif: TagMap::new(),
            xmp: TagMap::new(),
        };
        assert_eq!(meta.layer_name(), "DJI_0042");
    }

    #[test]
    fn job_config_defaults_from_empty_json() {
        let cfg: FootprintJobConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, FootprintJobConfig::default());
        assert!(!cfg.use_image_ratio_for_vertical_fov);
        assert!((cfg.vertical_fov_multiplier - 0.855).abs() < 1e-12);
        assert_eq!(cfg.source_crs, "EPSG:4326");
    }
}
