use crate::galaxy::TruthProfile;
use crate::math::{GridHelper, QuadHelper};
use crate::telemetry::LogManager;
use crate::{GalaxyConfig, SimError, SimResult, G_KPC_KMS2_PER_MSUN};
use rand::RngCore;
use std::f64::consts::PI;

/// Forward-modelling stage that derives a disk galaxy's truth profile from
/// its global parameters.
pub struct ProfileBuilder {
    config: GalaxyConfig,
    logger: LogManager,
}

impl ProfileBuilder {
    /// Validates the configuration eagerly so the numerics never see bad
    /// values.
    pub fn new(config: GalaxyConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            logger: LogManager::new("ProfileBuilder"),
        })
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    /// Builds the truth profile.
    ///
    /// The generator is reserved for future stochastic effects and does not
    /// currently influence the output; the same configuration always yields
    /// the same profile.
    pub fn build(&self, _rng: &mut dyn RngCore) -> SimResult<TruthProfile> {
        let cfg = &self.config;
        let r = GridHelper::radial(cfg.npoints, cfg.rmax_kpc);

        // Exponential surface-density shape, normalized so the area integral
        // of 2*pi*r*Sigma over the grid equals the configured total mass.
        let shape = r.mapv(|radius| (-radius / cfg.rd_kpc).exp());
        let integrand = (&r * &shape) * (2.0 * PI);
        let raw_total = QuadHelper::trapezoid(integrand.view(), r.view());
        if !raw_total.is_finite() || raw_total <= 0.0 {
            return Err(SimError::Internal(format!(
                "non-positive mass integral {}",
                raw_total
            )));
        }
        let sigma = shape * (cfg.mb_total_msun / raw_total);

        // Enclosed mass as a running sum of ring contributions over the
        // local grid spacing. Downstream comparisons depend on this exact
        // discretization; it is not interchangeable with a per-segment
        // trapezoid.
        let spacing = GridHelper::local_spacing(r.view());
        let ring_mass = (&r * &sigma) * (2.0 * PI) * &spacing;
        let m_enclosed = QuadHelper::running_sum(ring_mass.view());

        // V^2 = G M(<r) / r, defined everywhere since the grid starts above
        // zero.
        let v_circ = ((&m_enclosed / &r) * G_KPC_KMS2_PER_MSUN).mapv(f64::sqrt);

        let truth = TruthProfile {
            r_kpc: r.to_vec(),
            sigma_msun_kpc2: sigma.to_vec(),
            m_enclosed_msun: m_enclosed.to_vec(),
            v_circ_kms: v_circ.to_vec(),
            mb_total_msun: cfg.mb_total_msun,
            rd_kpc: cfg.rd_kpc,
        };

        if let Some((radius, velocity)) = truth.peak_velocity() {
            self.logger.record(&format!(
                "peak V {:.1} km/s at r {:.2} kpc",
                velocity, radius
            ));
        }

        Ok(truth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_config() -> GalaxyConfig {
        GalaxyConfig {
            mb_total_msun: 5e10,
            rd_kpc: 3.0,
            rmax_kpc: 30.0,
            npoints: 300,
        }
    }

    fn build_default() -> TruthProfile {
        let builder = ProfileBuilder::new(default_config()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        builder.build(&mut rng).unwrap()
    }

    #[test]
    fn surface_density_normalizes_to_total_mass() {
        let truth = build_default();
        let r = Array1::from(truth.r_kpc.clone());
        let integrand: Array1<f64> = truth
            .r_kpc
            .iter()
            .zip(truth.sigma_msun_kpc2.iter())
            .map(|(&radius, &sigma)| 2.0 * PI * radius * sigma)
            .collect();
        let total = QuadHelper::trapezoid(integrand.view(), r.view());
        let relative_error = ((total - truth.mb_total_msun) / truth.mb_total_msun).abs();
        assert!(relative_error < 1e-3, "relative error {}", relative_error);
    }

    #[test]
    fn velocity_is_finite_and_non_negative_everywhere() {
        let truth = build_default();
        assert!(truth
            .v_circ_kms
            .iter()
            .all(|velocity| velocity.is_finite() && *velocity >= 0.0));
    }

    #[test]
    fn enclosed_mass_never_decreases() {
        let truth = build_default();
        assert!(truth
            .m_enclosed_msun
            .windows(2)
            .all(|pair| pair[1] >= pair[0]));
    }

    #[test]
    fn sequences_share_one_grid() {
        let truth = build_default();
        assert_eq!(truth.len(), 300);
        assert_eq!(truth.sigma_msun_kpc2.len(), 300);
        assert_eq!(truth.m_enclosed_msun.len(), 300);
        assert_eq!(truth.v_circ_kms.len(), 300);
    }

    #[test]
    fn rotation_curve_peaks_at_interior_radius() {
        let truth = build_default();
        let (radius, velocity) = truth.peak_velocity().unwrap();
        assert!(radius > truth.r_kpc[0]);
        assert!(radius < truth.max_radius_kpc().unwrap());
        assert!(velocity > 0.0 && velocity.is_finite());
    }

    #[test]
    fn build_ignores_the_injected_generator() {
        let builder = ProfileBuilder::new(default_config()).unwrap();
        let first = builder.build(&mut StdRng::seed_from_u64(1)).unwrap();
        let second = builder.build(&mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first.v_circ_kms, second.v_circ_kms);
        assert_eq!(first.sigma_msun_kpc2, second.sigma_msun_kpc2);
    }

    #[test]
    fn builder_rejects_non_positive_scale_length() {
        let mut config = default_config();
        config.rd_kpc = 0.0;
        assert!(matches!(
            ProfileBuilder::new(config),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn builder_rejects_non_positive_mass() {
        let mut config = default_config();
        config.mb_total_msun = -1.0;
        assert!(matches!(
            ProfileBuilder::new(config),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn builder_rejects_single_point_grid() {
        let mut config = default_config();
        config.npoints = 1;
        assert!(matches!(
            ProfileBuilder::new(config),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn builder_rejects_max_radius_inside_grid_floor() {
        let mut config = default_config();
        config.rmax_kpc = 0.01;
        assert!(matches!(
            ProfileBuilder::new(config),
            Err(SimError::InvalidConfig(_))
        ));
    }
}
