//! Batch processing.
//!
//! A batch resolves its destination transform once, then processes each
//! image independently. One broken image never aborts the run; its error
//! is recorded and the loop moves on.

use footprint_core::Pt2;
use footprint_metadata::ExifSummary;

use crate::crs::AnyCrs;
use crate::process::process_image;
use crate::types::{BatchReport, FootprintJobConfig, ImageFailure, ImageMetadata};
use crate::PipelineError;

/// Build the destination transform for a batch.
///
/// A tangent-plane destination without a pinned origin is anchored at the
/// first image whose EXIF position parses. If no image yields a position,
/// the first parse error is returned.
pub fn resolve_destination(
    images: &[ImageMetadata],
    config: &FootprintJobConfig,
) -> Result<AnyCrs, PipelineError> {
    if images.is_empty() {
        return Err(PipelineError::EmptyBatch);
    }

    let mut first_err = None;
    let mut anchor = Pt2::new(0.0, 0.0);
    for meta in images {
        match ExifSummary::from_tags(&meta.exif) {
            Ok(exif) => {
                anchor = Pt2::new(exif.lon_deg, exif.lat_deg);
                first_err = None;
                break;
            }
            Err(e) => {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
    }
    if let Some(e) = first_err {
        return Err(e.into());
    }

    Ok(config.destination.build(anchor)?)
}

/// Process every image, collecting successes and failures.
pub fn run_batch(
    images: &[ImageMetadata],
    config: &FootprintJobConfig,
) -> Result<BatchReport, PipelineError> {
    let crs = resolve_destination(images, config)?;

    let mut report = BatchReport::default();
    for meta in images {
        match process_image(meta, config, &crs) {
            Ok(record) => report.features.push(record),
            Err(e) => {
                log::warn!("{}: skipped ({e})", meta.path);
                report.failures.push(ImageFailure {
                    path: meta.path.clone(),
                    degenerate: e.is_degenerate(),
                    error: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::tests::sample_metadata;

    #[test]
    fn empty_batch_is_an_error() {
        assert!(matches!(
            run_batch(&[], &FootprintJobConfig::default()),
            Err(PipelineError::EmptyBatch)
        ));
    }

    #[test]
    fn broken_image_does_not_abort_the_batch() {
        let good = sample_metadata("/flight/DJI_0001.JPG");
        let mut broken = sample_metadata("/flight/DJI_0002.JPG");
        broken.xmp.remove("drone-dji:RelativeAltitude");

        let report = run_batch(&[good, broken], &FootprintJobConfig::default()).unwrap();
        assert_eq!(report.features.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, "/flight/DJI_0002.JPG");
        assert!(!report.failures[0].degenerate);
    }

    #[test]
    fn degenerate_pitch_is_flagged_as_such() {
        // near edge angle 90 - (-26.43) - 52.86/2 = 90: tangent asymptote
        let mut skyward = sample_metadata("/flight/DJI_0003.JPG");
        skyward
            .xmp
            .insert("drone-dji:GimbalPitchDegree".into(), "-26.43".into());

        let report = run_batch(&[skyward], &FootprintJobConfig::default()).unwrap();
        assert!(report.features.is_empty());
        assert!(report.failures[0].degenerate);
    }

    #[test]
    fn anchor_skips_images_without_a_position() {
        let mut no_gps = sample_metadata("/flight/DJI_0001.JPG");
        no_gps.exif.remove("EXIF_GPSLatitude");
        let good = sample_metadata("/flight/DJI_0002.JPG");

        let crs = resolve_destination(&[no_gps, good], &FootprintJobConfig::default()).unwrap();
        match crs {
            AnyCrs::LocalTangentPlane(t) => {
                assert!((t.origin().x - 7.77897).abs() < 1e-4);
                assert!((t.origin().y - 43.27232).abs() < 1e-4);
            }
            AnyCrs::Identity(_) => panic!("expected tangent plane"),
        }
    }
}
