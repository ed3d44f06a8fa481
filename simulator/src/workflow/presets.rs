use anyhow::Context;
use lenscore::galaxy::LensPreset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_sb0() -> f64 {
    lenscore::DEFAULT_SB0_MAG_ARCSEC2
}

/// File-facing lens preset. The detection limit is mandatory; the central
/// anchor falls back to the standard value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LensPresetFile {
    pub sb_limit_mag_arcsec2: f64,
    #[serde(default = "default_sb0")]
    pub sb0_mag_arcsec2: f64,
}

impl LensPresetFile {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading lens preset {}", path_ref.display()))?;
        let preset: LensPresetFile = serde_json::from_str(&contents)
            .with_context(|| format!("parsing lens preset {}", path_ref.display()))?;
        Ok(preset)
    }

    pub fn to_lens_preset(&self) -> LensPreset {
        LensPreset::with_anchor(self.sb_limit_mag_arcsec2, self.sb0_mag_arcsec2)
    }
}
