use anyhow::Context;
use lenscore::prelude::GalaxyConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File-facing truth-galaxy configuration using the survey's conventional
/// key spelling; every key falls back to the standard demo galaxy.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TruthGalaxyConfig {
    #[serde(rename = "Mb_total_msun")]
    pub mb_total_msun: f64,
    #[serde(rename = "Rd_kpc")]
    pub rd_kpc: f64,
    #[serde(rename = "Rmax_kpc")]
    pub rmax_kpc: f64,
    pub npoints: usize,
}

impl Default for TruthGalaxyConfig {
    fn default() -> Self {
        Self {
            mb_total_msun: 5e10,
            rd_kpc: 3.0,
            rmax_kpc: 30.0,
            npoints: 300,
        }
    }
}

impl TruthGalaxyConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading galaxy config {}", path_ref.display()))?;
        let config: TruthGalaxyConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing galaxy config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(mb_total_msun: f64, rd_kpc: f64, rmax_kpc: f64, npoints: usize) -> Self {
        Self {
            mb_total_msun,
            rd_kpc,
            rmax_kpc,
            npoints,
        }
    }

    pub fn to_galaxy_config(&self) -> GalaxyConfig {
        GalaxyConfig {
            mb_total_msun: self.mb_total_msun,
            rd_kpc: self.rd_kpc,
            rmax_kpc: self.rmax_kpc,
            npoints: self.npoints,
        }
    }
}
