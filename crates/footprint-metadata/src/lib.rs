//! Typed extraction of UAV image metadata from raw tag maps.
//!
//! Byte-level EXIF/XMP decoding stays with the host (GDAL, exiftool, ...);
//! this crate is the boundary that turns their string key/value maps into
//! validated values: geodetic position from DMS triplets with hemisphere
//! signs, pixel dimensions, and the drone-specific XMP tags (relative
//! altitude, gimbal and flight attitude).

/// Degrees-minutes-seconds values and hemisphere references.
pub mod dms;

/// EXIF-derived summary of an image.
pub mod exif;

/// Drone-specific XMP tags.
pub mod xmp;

mod error;

pub use dms::{parse_dms, Dms, Hemisphere};
pub use error::MetadataError;
pub use exif::{ExifSummary, TagMap};
pub use xmp::DroneTags;
