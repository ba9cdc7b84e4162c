//! End-to-end batch flow: tag maps in, GeoJSON out.

use footprint_pipeline::{feature_collection, run_batch, FootprintJobConfig, ImageMetadata};

fn image(path: &str, pitch: &str, strip_altitude: bool) -> ImageMetadata {
    let exif = [
        ("EXIF_GPSLatitude", "(43) (16) (20.3444)"),
        ("EXIF_GPSLatitudeRef", "N"),
        ("EXIF_GPSLongitude", "(7) (46) (44.29)"),
        ("EXIF_GPSLongitudeRef", "E"),
        ("EXIF_PixelXDimension", "4000"),
        ("EXIF_PixelYDimension", "3000"),
        ("EXIF_DateTime", "2019:08:21 10:41:10"),
        ("EXIF_Make", "DJI"),
        ("EXIF_Model", "FC6310"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let mut xmp: std::collections::BTreeMap<String, String> = [
        ("drone-dji:RelativeAltitude", "+99.10"),
        ("drone-dji:GimbalRollDegree", "+0.00"),
        ("drone-dji:GimbalYawDegree", "+152.50"),
        ("drone-dji:FlightRollDegree", "+1.20"),
        ("drone-dji:FlightPitchDegree", "-2.10"),
        ("drone-dji:FlightYawDegree", "+151.80"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    xmp.insert("drone-dji:GimbalPitchDegree".into(), pitch.into());
    if strip_altitude {
        xmp.remove("drone-dji:RelativeAltitude");
    }

    ImageMetadata {
        path: path.into(),
        exif,
        xmp,
    }
}

#[test]
fn batch_survives_broken_and_degenerate_images() {
    let images = [
        image("/flight/DJI_0001.JPG", "-36.00", false),
        image("/flight/DJI_0002.JPG", "-36.00", true),
        // near edge lands exactly on the horizon for the default preset
        image("/flight/DJI_0003.JPG", "-26.43", false),
    ];

    let report = run_batch(&images, &FootprintJobConfig::default()).unwrap();
    assert_eq!(report.features.len(), 1);
    assert_eq!(report.failures.len(), 2);

    let missing = &report.failures[0];
    assert_eq!(missing.path, "/flight/DJI_0002.JPG");
    assert!(!missing.degenerate);
    assert!(missing.error.contains("RelativeAltitude"));

    let skyward = &report.failures[1];
    assert_eq!(skyward.path, "/flight/DJI_0003.JPG");
    assert!(skyward.degenerate);

    // nadir of the surviving image sits at the tangent-plane origin
    let record = &report.features[0];
    assert!(record.nadir.coords.norm() < 1e-9);
    assert!(record.footprint.len() > 4);

    let collection = feature_collection(&report);
    let features = collection["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["properties"]["feature"], "footprint");
    assert_eq!(features[1]["properties"]["feature"], "nadir");
    assert_eq!(features[0]["properties"]["gimbal_pitch"], -36.0);
}
