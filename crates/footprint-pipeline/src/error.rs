use thiserror::Error;

use footprint_core::FootprintError;
use footprint_metadata::MetadataError;

use crate::crs::CrsError;

/// Anything that can go wrong while turning one image into features.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Geometry(#[from] FootprintError),

    #[error(transparent)]
    Crs(#[from] CrsError),

    #[error("unknown camera preset '{0}'")]
    UnknownCamera(String),

    #[error("image ratio must be positive and finite, got {0}")]
    BadImageRatio(f64),

    #[error("no images to process")]
    EmptyBatch,
}

impl PipelineError {
    /// Degenerate view geometry is skippable per image; everything else
    /// points at a misconfigured job or broken metadata.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, PipelineError::Geometry(e) if e.is_degenerate())
    }
}
