use crate::math::StatsHelper;
use crate::DEFAULT_SB0_MAG_ARCSEC2;
use serde::{Deserialize, Serialize};

/// Detection parameters of a simulated observation.
///
/// Both fields are magnitude-like: larger values mean fainter light.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensPreset {
    /// Faintest detectable surface brightness in mag/arcsec^2.
    pub sb_limit_mag_arcsec2: f64,
    /// Central surface-brightness anchor in mag/arcsec^2. The brightest
    /// profile point maps to exactly this value.
    pub sb0_mag_arcsec2: f64,
}

impl LensPreset {
    pub fn new(sb_limit_mag_arcsec2: f64) -> Self {
        Self {
            sb_limit_mag_arcsec2,
            sb0_mag_arcsec2: DEFAULT_SB0_MAG_ARCSEC2,
        }
    }

    pub fn with_anchor(sb_limit_mag_arcsec2: f64, sb0_mag_arcsec2: f64) -> Self {
        Self {
            sb_limit_mag_arcsec2,
            sb0_mag_arcsec2,
        }
    }
}

/// Detectable subset of a truth profile after a lens pass.
///
/// `r_kpc` and `v_obs_kms` hold only the surviving points, in grid order.
/// The mask and the brightness sequence keep the full truth length so the
/// dropped points stay diagnosable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationResult {
    /// Radii of the detected points, in kpc.
    pub r_kpc: Vec<f64>,
    /// Circular velocity at the detected points, in km/s.
    pub v_obs_kms: Vec<f64>,
    /// Per-grid-point detectability, co-indexed with the truth grid.
    pub observed_mask: Vec<bool>,
    /// Surface-brightness proxy for every truth point, in mag/arcsec^2.
    pub sb_mag: Vec<f64>,
}

impl ObservationResult {
    pub fn observed_count(&self) -> usize {
        self.r_kpc.len()
    }

    /// True when the lens rejected every grid point.
    pub fn is_empty(&self) -> bool {
        self.r_kpc.is_empty()
    }

    /// Outermost detected radius in kpc, `None` when nothing was detected.
    pub fn max_observed_radius_kpc(&self) -> Option<f64> {
        self.r_kpc.last().copied()
    }

    /// Largest detected velocity in km/s, `None` when nothing was detected.
    pub fn peak_observed_velocity_kms(&self) -> Option<f64> {
        StatsHelper::max(&self.v_obs_kms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_defaults_to_standard_anchor() {
        let preset = LensPreset::new(24.0);
        assert_eq!(preset.sb0_mag_arcsec2, DEFAULT_SB0_MAG_ARCSEC2);
        assert_eq!(preset.sb_limit_mag_arcsec2, 24.0);
    }

    #[test]
    fn empty_result_has_no_extrema() {
        let result = ObservationResult {
            r_kpc: Vec::new(),
            v_obs_kms: Vec::new(),
            observed_mask: vec![false; 3],
            sb_mag: vec![20.0, 25.0, 30.0],
        };
        assert!(result.is_empty());
        assert_eq!(result.observed_count(), 0);
        assert_eq!(result.max_observed_radius_kpc(), None);
        assert_eq!(result.peak_observed_velocity_kms(), None);
    }
}
