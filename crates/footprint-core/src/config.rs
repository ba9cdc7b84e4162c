use serde::{Deserialize, Serialize};

use crate::error::FootprintError;
use crate::footprint::{
    FootprintInput, FootprintModel, FrustumFootprint, GroundPolygon, WedgeFootprint,
};

/// Serializable choice of footprint strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    Wedge {
        #[serde(default = "default_arc_segments")]
        arc_segments: usize,
    },
    Frustum,
}

fn default_arc_segments() -> usize {
    WedgeFootprint::default().arc_segments
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::Wedge {
            arc_segments: default_arc_segments(),
        }
    }
}

impl StrategyConfig {
    pub fn build(&self) -> AnyFootprint {
        match *self {
            StrategyConfig::Wedge { arc_segments } => {
                AnyFootprint::Wedge(WedgeFootprint { arc_segments })
            }
            StrategyConfig::Frustum => AnyFootprint::Frustum(FrustumFootprint),
        }
    }
}

/// Strategy dispatch without trait objects.
#[derive(Clone, Copy, Debug)]
pub enum AnyFootprint {
    Wedge(WedgeFootprint),
    Frustum(FrustumFootprint),
}

impl FootprintModel for AnyFootprint {
    fn ground_footprint(&self, input: &FootprintInput) -> Result<GroundPolygon, FootprintError> {
        match self {
            AnyFootprint::Wedge(m) => m.ground_footprint(input),
            AnyFootprint::Frustum(m) => m.ground_footprint(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Degrees;
    use crate::orientation::{FieldOfView, GimbalOrientation};

    #[test]
    fn config_json_roundtrip() {
        let cfg = StrategyConfig::Wedge { arc_segments: 48 };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("wedge"));
        let back: StrategyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);

        let frustum: StrategyConfig = serde_json::from_str(r#"{"type":"frustum"}"#).unwrap();
        assert_eq!(frustum, StrategyConfig::Frustum);
    }

    #[test]
    fn default_is_wedge() {
        assert!(matches!(
            StrategyConfig::default(),
            StrategyConfig::Wedge { .. }
        ));
    }

    #[test]
    fn built_strategies_dispatch() {
        let input = FootprintInput {
            altitude: 80.0,
            orientation: GimbalOrientation::new(Degrees(0.0), Degrees(-30.0), Degrees(10.0)),
            fov: FieldOfView::new(Degrees(67.07), Degrees(52.86)),
            corrections: Default::default(),
        };
        let wedge = StrategyConfig::default().build().ground_footprint(&input);
        let frustum = StrategyConfig::Frustum.build().ground_footprint(&input);
        assert!(wedge.is_ok());
        assert!(frustum.is_ok());
        assert_ne!(wedge.unwrap().ring.len(), frustum.unwrap().ring.len());
    }
}
