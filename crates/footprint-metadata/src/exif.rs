use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dms::{parse_dms, Hemisphere};
use crate::MetadataError;

/// Raw tag map as handed over by the host's EXIF reader (GDAL `EXIF_*`
/// key style).
pub type TagMap = BTreeMap<String, String>;

/// The EXIF values the footprint pipeline needs: nadir position, pixel
/// dimensions for the aspect-ratio FOV derivation, and descriptive fields
/// carried through to the output attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExifSummary {
    /// Geodetic latitude in decimal degrees, negative south.
    pub lat_deg: f64,
    /// Geodetic longitude in decimal degrees, negative west.
    pub lon_deg: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub date_time: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
}

impl ExifSummary {
    pub fn from_tags(tags: &TagMap) -> Result<Self, MetadataError> {
        let lat = parse_dms(require(tags, "EXIF_GPSLatitude")?)?.to_decimal_degrees();
        let lat_ref = Hemisphere::parse(require(tags, "EXIF_GPSLatitudeRef")?)?;
        let lon = parse_dms(require(tags, "EXIF_GPSLongitude")?)?.to_decimal_degrees();
        let lon_ref = Hemisphere::parse(require(tags, "EXIF_GPSLongitudeRef")?)?;

        Ok(ExifSummary {
            lat_deg: lat_ref.sign() * lat,
            lon_deg: lon_ref.sign() * lon,
            pixel_width: parse_number(tags, "EXIF_PixelXDimension")?,
            pixel_height: parse_number(tags, "EXIF_PixelYDimension")?,
            date_time: tags.get("EXIF_DateTime").cloned(),
            make: tags.get("EXIF_Make").cloned(),
            model: tags.get("EXIF_Model").cloned(),
        })
    }

    /// Width over height; the empirical vertical-FOV derivation divides
    /// the horizontal FOV by this.
    pub fn image_ratio(&self) -> f64 {
        f64::from(self.pixel_width) / f64::from(self.pixel_height)
    }
}

fn require<'a>(tags: &'a TagMap, key: &str) -> Result<&'a str, MetadataError> {
    tags.get(key)
        .map(String::as_str)
        .ok_or_else(|| MetadataError::MissingTag(key.to_owned()))
}

fn parse_number(tags: &TagMap, key: &str) -> Result<u32, MetadataError> {
    let raw = require(tags, key)?;
    raw.trim().parse().map_err(|_| MetadataError::BadNumber {
        tag: key.to_owned(),
        value: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tags() -> TagMap {
        let pairs = [
            ("EXIF_GPSLatitude", "(43) (16) (20.3444)"),
            ("EXIF_GPSLatitudeRef", "N"),
            ("EXIF_GPSLongitude", "(7) (46) (44.29)"),
            ("EXIF_GPSLongitudeRef", "W"),
            ("EXIF_PixelXDimension", "4000"),
            ("EXIF_PixelYDimension", "3000"),
            ("EXIF_DateTime", "2019:08:21 10:41:10"),
            ("EXIF_Make", "DJI"),
            ("EXIF_Model", "FC6310"),
        ];
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn extracts_position_with_hemisphere_signs() {
        let exif = ExifSummary::from_tags(&sample_tags()).unwrap();
        assert!((exif.lat_deg - 43.27232).abs() < 1e-4);
        assert!((exif.lon_deg + 7.77897).abs() < 1e-4);
        assert_eq!(exif.pixel_width, 4000);
        assert_eq!(exif.pixel_height, 3000);
        assert!((exif.image_ratio() - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(exif.model.as_deref(), Some("FC6310"));
    }

    #[test]
    fn southern_hemisphere_negates_latitude() {
        let mut tags = sample_tags();
        tags.insert("EXIF_GPSLatitudeRef".into(), "S".into());
        let exif = ExifSummary::from_tags(&tags).unwrap();
        assert!(exif.lat_deg < 0.0);
    }

    #[test]
    fn missing_gps_tag_is_reported_by_name() {
        let mut tags = sample_tags();
        tags.remove("EXIF_GPSLongitude");
        let err = ExifSummary::from_tags(&tags).unwrap_err();
        assert_eq!(err, MetadataError::MissingTag("EXIF_GPSLongitude".into()));
    }

    #[test]
    fn bad_dimension_is_a_number_error() {
        let mut tags = sample_tags();
        tags.insert("EXIF_PixelXDimension".into(), "wide".into());
        let err = ExifSummary::from_tags(&tags).unwrap_err();
        assert!(matches!(err, MetadataError::BadNumber { .. }));
    }

    #[test]
    fn descriptive_fields_are_optional() {
        let mut tags = sample_tags();
        tags.remove("EXIF_DateTime");
        tags.remove("EXIF_Make");
        tags.remove("EXIF_Model");
        let exif = ExifSummary::from_tags(&tags).unwrap();
        assert!(exif.date_time.is_none());
        assert!(exif.make.is_none());
        assert!(exif.model.is_none());
    }
}
