//! GeoJSON assembly.
//!
//! Each processed image contributes two features to the output
//! FeatureCollection: a polygon for the ground footprint and a point for
//! the nadir. Both carry the same attribute set plus a `feature` property
//! telling them apart.

use serde_json::{json, Value};

use footprint_core::Pt2;

use crate::types::{BatchReport, FeatureAttributes, ImageFootprint};

fn position(p: &Pt2) -> Value {
    json!([p.x, p.y])
}

fn properties(attrs: &FeatureAttributes, kind: &str) -> Value {
    // FeatureAttributes serializes to a flat object, so this cannot fail
    // and always yields a map.
    let mut props = serde_json::to_value(attrs).unwrap_or_else(|_| json!({}));
    if let Some(map) = props.as_object_mut() {
        map.insert("feature".to_owned(), json!(kind));
    }
    props
}

fn footprint_feature(record: &ImageFootprint) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [record.footprint.iter().map(position).collect::<Vec<_>>()],
        },
        "properties": properties(&record.attributes, "footprint"),
    })
}

fn nadir_feature(record: &ImageFootprint) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": position(&record.nadir),
        },
        "properties": properties(&record.attributes, "nadir"),
    })
}

/// Assemble the batch output as a GeoJSON FeatureCollection.
pub fn feature_collection(report: &BatchReport) -> Value {
    let mut features = Vec::with_capacity(2 * report.features.len());
    for record in &report.features {
        features.push(footprint_feature(record));
        features.push(nadir_feature(record));
    }
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::run_batch;
    use crate::process::tests::sample_metadata;
    use crate::types::FootprintJobConfig;

    #[test]
    fn collection_pairs_polygon_and_point_per_image() {
        let images = [
            sample_metadata("/flight/DJI_0001.JPG"),
            sample_metadata("/flight/DJI_0002.JPG"),
        ];
        let report = run_batch(&images, &FootprintJobConfig::default()).unwrap();
        let collection = feature_collection(&report);

        assert_eq!(collection["type"], "FeatureCollection");
        let features = collection["features"].as_array().unwrap();
        assert_eq!(features.len(), 4);

        let polygon = &features[0];
        assert_eq!(polygon["geometry"]["type"], "Polygon");
        assert_eq!(polygon["properties"]["feature"], "footprint");
        assert_eq!(polygon["properties"]["layer"], "DJI_0001");
        let ring = polygon["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.first(), ring.last());

        let point = &features[1];
        assert_eq!(point["geometry"]["type"], "Point");
        assert_eq!(point["properties"]["feature"], "nadir");
        assert_eq!(point["properties"]["camera_model"], "FC6310");
    }

    #[test]
    fn empty_report_yields_an_empty_collection() {
        let collection = feature_collection(&BatchReport::default());
        assert_eq!(collection["features"].as_array().unwrap().len(), 0);
    }
}
