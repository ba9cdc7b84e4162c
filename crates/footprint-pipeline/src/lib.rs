//! Per-image and batch footprint pipelines.
//!
//! This crate wraps the geometric core with everything a survey workflow
//! needs around it: the immutable camera preset table, the empirical
//! calibration corrections, vertical-FOV derivation from the image aspect
//! ratio, the CRS transform seam, per-image processing into feature
//! records, a batch loop with per-image try/continue semantics, and
//! GeoJSON assembly of the results.

/// Builtin camera presets and per-invocation overrides.
pub mod presets;

/// Coordinate transform seam between geodetic input and the output plane.
pub mod crs;

/// Field-of-view derivation helpers.
pub mod fov;

/// Input, config, and output record types.
pub mod types;

/// Single-image processing.
pub mod process;

/// Batch processing with per-image failure isolation.
pub mod batch;

/// GeoJSON FeatureCollection assembly.
pub mod geojson;

mod error;

pub use batch::{resolve_destination, run_batch};
pub use crs::{AnyCrs, CrsError, CrsTransform, DestinationConfig, IdentityCrs, LocalTangentPlane};
pub use error::PipelineError;
pub use fov::{vertical_fov_from_ratio, DEFAULT_VERTICAL_FOV_MULTIPLIER};
pub use geojson::feature_collection;
pub use presets::{builtin_presets, find_preset, CameraSelection, CameraSpec};
pub use process::process_image;
pub use types::{
    BatchReport, FeatureAttributes, FootprintJobConfig, ImageFailure, ImageFootprint,
    ImageMetadata,
};
