//! Batch footprints from synthetic flight metadata.
//!
//! Builds tag maps for a short oblique flight line, runs the wedge and
//! frustum strategies over it, and prints the resulting GeoJSON.
//!
//! Run with: `cargo run -p footprint --example flight_batch`

use anyhow::Result;
use footprint::pipeline::{feature_collection, run_batch, FootprintJobConfig, ImageMetadata};
use footprint::prelude::*;

fn image(index: usize, lat_sec: f64, yaw: f64) -> ImageMetadata {
    let exif: TagMap = [
        ("EXIF_GPSLatitude".to_owned(), format!("(43) (16) ({lat_sec:.4})")),
        ("EXIF_GPSLatitudeRef".to_owned(), "N".to_owned()),
        ("EXIF_GPSLongitude".to_owned(), "(7) (46) (44.29)".to_owned()),
        ("EXIF_GPSLongitudeRef".to_owned(), "E".to_owned()),
        ("EXIF_PixelXDimension".to_owned(), "4000".to_owned()),
        ("EXIF_PixelYDimension".to_owned(), "3000".to_owned()),
        ("EXIF_DateTime".to_owned(), "2019:08:21 10:41:10".to_owned()),
        ("EXIF_Model".to_owned(), "FC6310".to_owned()),
    ]
    .into_iter()
    .collect();

    let xmp: TagMap = [
        ("drone-dji:RelativeAltitude".to_owned(), "+99.10".to_owned()),
        ("drone-dji:GimbalRollDegree".to_owned(), "+0.00".to_owned()),
        ("drone-dji:GimbalPitchDegree".to_owned(), "-36.00".to_owned()),
        ("drone-dji:GimbalYawDegree".to_owned(), format!("{yaw:+.2}")),
        ("drone-dji:FlightRollDegree".to_owned(), "+0.40".to_owned()),
        ("drone-dji:FlightPitchDegree".to_owned(), "-1.80".to_owned()),
        ("drone-dji:FlightYawDegree".to_owned(), format!("{yaw:+.2}")),
    ]
    .into_iter()
    .collect();

    ImageMetadata {
        path: format!("/flight/DJI_{index:04}.JPG"),
        exif,
        xmp,
    }
}

fn main() -> Result<()> {
    let images: Vec<ImageMetadata> = (1..=3)
        .map(|i| image(i, 20.0 + 2.0 * i as f64, 150.0 + 1.5 * i as f64))
        .collect();

    for strategy in [StrategyConfig::default(), StrategyConfig::Frustum] {
        let config = FootprintJobConfig {
            strategy: strategy.clone(),
            ..FootprintJobConfig::default()
        };
        let report = run_batch(&images, &config)?;
        println!(
            "strategy {:?}: {} footprints, {} failures",
            strategy,
            report.features.len(),
            report.failures.len()
        );
        for record in &report.features {
            println!(
                "  {}: nadir ({:.1} m, {:.1} m), {} ring points",
                record.attributes.layer,
                record.nadir.x,
                record.nadir.y,
                record.footprint.len()
            );
        }
        println!("{}", serde_json::to_string_pretty(&feature_collection(&report))?);
    }
    Ok(())
}
