use crate::galaxy::{LensPreset, ObservationResult, TruthProfile};
use crate::math::StatsHelper;
use crate::telemetry::LogManager;
use crate::{SimError, SimResult};
use rand::RngCore;

/// Observation stage that keeps only the grid points an instrument with a
/// given surface-brightness limit would detect.
pub struct ObservationLens {
    preset: LensPreset,
    logger: LogManager,
}

impl ObservationLens {
    pub fn new(preset: LensPreset) -> SimResult<Self> {
        if !preset.sb_limit_mag_arcsec2.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "surface-brightness limit must be finite, got {}",
                preset.sb_limit_mag_arcsec2
            )));
        }
        if !preset.sb0_mag_arcsec2.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "central brightness anchor must be finite, got {}",
                preset.sb0_mag_arcsec2
            )));
        }
        Ok(Self {
            preset,
            logger: LogManager::new("ObservationLens"),
        })
    }

    pub fn preset(&self) -> &LensPreset {
        &self.preset
    }

    /// Applies the detection threshold to a truth profile.
    ///
    /// The generator is reserved for future photometric noise and does not
    /// currently influence the result. A profile whose surface density never
    /// rises above zero leaves the brightness proxy undefined and is
    /// rejected.
    pub fn observe(
        &self,
        truth: &TruthProfile,
        _rng: &mut dyn RngCore,
    ) -> SimResult<ObservationResult> {
        let n = truth.len();
        if n == 0 {
            return Err(SimError::InvalidInput("truth profile is empty".into()));
        }
        if truth.sigma_msun_kpc2.len() != n || truth.v_circ_kms.len() != n {
            return Err(SimError::InvalidInput(
                "truth profile sequences are misaligned".into(),
            ));
        }

        let sigma_max = StatsHelper::max(&truth.sigma_msun_kpc2).unwrap_or(0.0);
        if !sigma_max.is_finite() || sigma_max <= 0.0 {
            return Err(SimError::DegenerateProfile(format!(
                "maximum surface density {} leaves the brightness proxy undefined",
                sigma_max
            )));
        }

        // Magnitude-like proxy: larger is fainter. The brightest point maps
        // to exactly the anchor value.
        let sb0 = self.preset.sb0_mag_arcsec2;
        let sb_mag: Vec<f64> = truth
            .sigma_msun_kpc2
            .iter()
            .map(|&sigma| sb0 - 2.5 * (sigma / sigma_max).log10())
            .collect();

        // Point-wise predicate, no monotonicity assumption about the shape.
        let limit = self.preset.sb_limit_mag_arcsec2;
        let observed_mask: Vec<bool> = sb_mag.iter().map(|&sb| sb <= limit).collect();

        let mut r_obs = Vec::new();
        let mut v_obs = Vec::new();
        for (idx, &keep) in observed_mask.iter().enumerate() {
            if keep {
                r_obs.push(truth.r_kpc[idx]);
                v_obs.push(truth.v_circ_kms[idx]);
            }
        }

        self.logger.record(&format!(
            "observed {} of {} points at limit {:.1}",
            r_obs.len(),
            n,
            limit
        ));

        Ok(ObservationResult {
            r_kpc: r_obs,
            v_obs_kms: v_obs,
            observed_mask,
            sb_mag,
        })
    }
}
