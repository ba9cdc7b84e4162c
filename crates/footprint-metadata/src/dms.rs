use serde::{Deserialize, Serialize};

use crate::MetadataError;

/// Sexagesimal angle as stored in EXIF GPS tags.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    pub fn to_decimal_degrees(self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }
}

/// Parse the GDAL EXIF rendering of a DMS triplet, e.g. `"(43) (16) (20.3444)"`.
///
/// Parentheses are optional; any whitespace-separated run of three numbers
/// is accepted.
pub fn parse_dms(raw: &str) -> Result<Dms, MetadataError> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '(' || c == ')' { ' ' } else { c })
        .collect();
    let parts: Vec<f64> = cleaned
        .split_whitespace()
        .map(|tok| tok.parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| MetadataError::BadDms(raw.to_owned()))?;
    match parts.as_slice() {
        &[degrees, minutes, seconds] => Ok(Dms {
            degrees,
            minutes,
            seconds,
        }),
        _ => Err(MetadataError::BadDms(raw.to_owned())),
    }
}

/// EXIF GPS hemisphere reference letter.
///
/// Southern and western references negate the decimal coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn parse(raw: &str) -> Result<Self, MetadataError> {
        match raw.trim() {
            "N" => Ok(Hemisphere::North),
            "S" => Ok(Hemisphere::South),
            "E" => Ok(Hemisphere::East),
            "W" => Ok(Hemisphere::West),
            other => Err(MetadataError::BadHemisphere(other.to_owned())),
        }
    }

    /// Sign applied to the decimal coordinate: -1 for S/W, +1 for N/E.
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gdal_form() {
        let dms = parse_dms("(43) (16) (20.3444)").unwrap();
        assert_eq!(dms.degrees, 43.0);
        assert_eq!(dms.minutes, 16.0);
        assert!((dms.seconds - 20.3444).abs() < 1e-12);
        assert!((dms.to_decimal_degrees() - 43.27232).abs() < 1e-4);
    }

    #[test]
    fn parses_bare_triplet() {
        let dms = parse_dms("7 30 0").unwrap();
        assert!((dms.to_decimal_degrees() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_dms("").is_err());
        assert!(parse_dms("(43) (16)").is_err());
        assert!(parse_dms("(43) (16) (x)").is_err());
        assert!(parse_dms("1 2 3 4").is_err());
    }

    #[test]
    fn hemisphere_signs() {
        assert_eq!(Hemisphere::parse("N").unwrap().sign(), 1.0);
        assert_eq!(Hemisphere::parse("E").unwrap().sign(), 1.0);
        assert_eq!(Hemisphere::parse("S").unwrap().sign(), -1.0);
        assert_eq!(Hemisphere::parse("W").unwrap().sign(), -1.0);
        assert_eq!(Hemisphere::parse(" W ").unwrap(), Hemisphere::West);
        assert!(Hemisphere::parse("Q").is_err());
    }
}
