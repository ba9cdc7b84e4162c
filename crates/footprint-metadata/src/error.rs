use thiserror::Error;

/// Failures while turning raw tag maps into typed metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("required tag '{0}' is missing")]
    MissingTag(String),

    #[error("tag '{tag}' holds '{value}', expected a number")]
    BadNumber { tag: String, value: String },

    #[error("'{0}' is not a degrees-minutes-seconds triplet")]
    BadDms(String),

    #[error("'{0}' is not a hemisphere reference (N/S/E/W)")]
    BadHemisphere(String),
}
