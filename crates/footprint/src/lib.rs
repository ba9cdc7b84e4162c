//! High-level entry crate for the UAV footprint toolbox.
//!
//! Given a drone image's metadata (position, relative altitude, gimbal
//! attitude, camera field of view), this workspace computes the patch of
//! ground the camera saw and emits it as georeferenced features.
//!
//! ## Quick start
//!
//! ```
//! use footprint::prelude::*;
//!
//! # fn main() -> Result<(), FootprintError> {
//! let input = FootprintInput {
//!     altitude: 99.1,
//!     orientation: GimbalOrientation::new(Degrees(0.0), Degrees(-36.0), Degrees(152.5)),
//!     fov: FieldOfView::new(Degrees(67.07), Degrees(52.86)),
//!     corrections: Default::default(),
//! };
//!
//! let polygon = WedgeFootprint::default().ground_footprint(&input)?;
//! assert!(polygon.is_closed());
//! # Ok(())
//! # }
//! ```
//!
//! For whole flights, feed raw EXIF/XMP tag maps to the pipeline instead:
//! [`pipeline::run_batch`] resolves the destination plane, processes each
//! image with per-image failure isolation, and
//! [`pipeline::feature_collection`] assembles the GeoJSON output.
//!
//! ## Module organization
//!
//! - **[`core`]**: footprint geometry (nadir distances, frustum corners,
//!   the two strategies behind [`prelude::FootprintModel`])
//! - **[`metadata`]**: typed EXIF/XMP extraction from raw tag maps
//! - **[`pipeline`]**: camera presets, CRS seam, per-image and batch
//!   processing, GeoJSON assembly
//! - **[`prelude`]**: convenient re-exports for common use cases
//!
//! ## Stability
//!
//! The `footprint` crate is the public compatibility boundary. Lower-level
//! crates are intended for advanced usage and may evolve more quickly.

/// Footprint geometry: projectors, strategies, and their value types.
pub mod core {
    pub use footprint_core::*;
}

/// Typed extraction of EXIF/XMP metadata from raw tag maps.
pub mod metadata {
    pub use footprint_metadata::*;
}

/// Camera presets, CRS transforms, and batch processing.
pub mod pipeline {
    pub use footprint_pipeline::*;
}

/// Convenient re-exports for common use cases.
///
/// Import with `use footprint::prelude::*;` to get started quickly.
pub mod prelude {
    // Geometry types and strategies
    pub use crate::core::{
        CalibrationCorrections, Degrees, FieldOfView, FootprintError, FootprintInput,
        FootprintModel, FrustumFootprint, GimbalOrientation, GroundPolygon, Pt2, Radians,
        StrategyConfig, Vec2, WedgeFootprint,
    };

    // Metadata extraction
    pub use crate::metadata::{DroneTags, ExifSummary, TagMap};

    // Pipeline entry points
    pub use crate::pipeline::{
        feature_collection, run_batch, BatchReport, CameraSelection, FootprintJobConfig,
        ImageMetadata, PipelineError,
    };
}
