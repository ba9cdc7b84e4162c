//! Camera FOV presets.
//!
//! A fixed table of known cameras plus an "advanced" escape hatch carrying
//! arbitrary FOV and correction values per invocation. The table is
//! immutable; user overrides travel inside [`CameraSelection::Advanced`]
//! instead of mutating shared state.

use serde::{Deserialize, Serialize};

use footprint_core::{CalibrationCorrections, Degrees, FieldOfView};

use crate::PipelineError;

pub const PHANTOM_4_PRO: &str = "Phantom 4 Pro - FC6310";
pub const DJI_X3: &str = "DJI - X3";
pub const MICASENSE_ALTUM: &str = "MicaSense - Altum";

/// A camera's FOV values and empirical corrections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub name: String,
    pub fov: FieldOfView,
    #[serde(default)]
    pub corrections: CalibrationCorrections,
}

impl CameraSpec {
    fn preset(name: &str, horizontal_deg: f64, vertical_deg: f64) -> Self {
        CameraSpec {
            name: name.to_owned(),
            fov: FieldOfView::new(Degrees(horizontal_deg), Degrees(vertical_deg)),
            corrections: CalibrationCorrections::default(),
        }
    }
}

/// The builtin preset table.
pub fn builtin_presets() -> Vec<CameraSpec> {
    vec![
        CameraSpec::preset(PHANTOM_4_PRO, 67.07, 52.86),
        CameraSpec::preset(DJI_X3, 82.3, 66.46),
        CameraSpec::preset(MICASENSE_ALTUM, 64.0, 84.0),
    ]
}

/// Look up a builtin preset by its exact name.
pub fn find_preset(name: &str) -> Option<CameraSpec> {
    builtin_presets().into_iter().find(|p| p.name == name)
}

/// Which camera values a job uses: a named builtin preset, or explicit
/// "advanced" values supplied with the job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraSelection {
    Preset { name: String },
    Advanced { spec: CameraSpec },
}

impl Default for CameraSelection {
    fn default() -> Self {
        CameraSelection::Preset {
            name: PHANTOM_4_PRO.to_owned(),
        }
    }
}

impl CameraSelection {
    pub fn resolve(&self) -> Result<CameraSpec, PipelineError> {
        match self {
            CameraSelection::Preset { name } => {
                find_preset(name).ok_or_else(|| PipelineError::UnknownCamera(name.clone()))
            }
            CameraSelection::Advanced { spec } => Ok(spec.clone()),
        }
    }
}
