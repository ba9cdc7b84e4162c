use serde::{Deserialize, Serialize};

use crate::exif::TagMap;
use crate::MetadataError;

/// Drone-specific XMP values (the `drone-dji` namespace): relative
/// altitude above the takeoff point and the gimbal/flight attitude in
/// degrees.
///
/// Keys are accepted either fully qualified (`drone-dji:RelativeAltitude`)
/// or namespace-stripped (`RelativeAltitude`), matching the two ways hosts
/// commonly flatten the XMP packet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DroneTags {
    pub relative_altitude: f64,
    pub gimbal_roll_deg: f64,
    pub gimbal_pitch_deg: f64,
    pub gimbal_yaw_deg: f64,
    pub flight_roll_deg: f64,
    pub flight_pitch_deg: f64,
    pub flight_yaw_deg: f64,
}

impl DroneTags {
    pub fn from_tags(tags: &TagMap) -> Result<Self, MetadataError> {
        Ok(DroneTags {
            relative_altitude: lookup(tags, "RelativeAltitude")?,
            gimbal_roll_deg: lookup(tags, "GimbalRollDegree")?,
            gimbal_pitch_deg: lookup(tags, "GimbalPitchDegree")?,
            gimbal_yaw_deg: lookup(tags, "GimbalYawDegree")?,
            flight_roll_deg: lookup(tags, "FlightRollDegree")?,
            flight_pitch_deg: lookup(tags, "FlightPitchDegree")?,
            flight_yaw_deg: lookup(tags, "FlightYawDegree")?,
        })
    }
}

fn lookup(tags: &TagMap, name: &str) -> Result<f64, MetadataError> {
    let qualified = format!("drone-dji:{name}");
    let raw = tags
        .get(&qualified)
        .or_else(|| tags.get(name))
        .ok_or_else(|| MetadataError::MissingTag(qualified.clone()))?;
    raw.trim().parse().map_err(|_| MetadataError::BadNumber {
        tag: qualified,
        value: raw.clone(),
    })
}
