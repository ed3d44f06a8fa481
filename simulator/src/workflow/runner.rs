use crate::workflow::config::TruthGalaxyConfig;
use anyhow::Context;
use lenscore::galaxy::{LensPreset, TruthProfile};
use lenscore::pipeline::{ObservationLens, ProfileBuilder};
use lenscore::telemetry::MetricsRecorder;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Truth-side figures the console summary prints.
pub struct TruthSummary {
    pub mb_total_msun: f64,
    pub rd_kpc: f64,
    pub max_radius_kpc: f64,
    pub peak_radius_kpc: f64,
    pub peak_velocity_kms: f64,
}

/// Per-preset figures after the lens pass. The extrema stay `None` when the
/// preset detected nothing.
pub struct LensReport {
    pub label: String,
    pub observed_count: usize,
    pub max_observed_radius_kpc: Option<f64>,
    pub peak_observed_velocity_kms: Option<f64>,
}

pub struct ComparisonResult {
    pub truth: TruthSummary,
    pub reports: Vec<LensReport>,
}

pub struct Runner {
    config: TruthGalaxyConfig,
    seed: u64,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new(config: TruthGalaxyConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            metrics: MetricsRecorder::new(),
        }
    }

    /// Builds the shared truth profile once, then applies every preset to
    /// that same profile.
    pub fn execute(&self, presets: &[(String, LensPreset)]) -> anyhow::Result<ComparisonResult> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let builder = ProfileBuilder::new(self.config.to_galaxy_config())
            .context("configuring profile builder")?;
        let truth = builder.build(&mut rng).context("building truth profile")?;
        self.metrics.record_profile();
        let truth_summary = summarize_truth(&truth)?;

        let mut reports = Vec::with_capacity(presets.len());
        for (label, preset) in presets {
            let lens = ObservationLens::new(preset.clone())
                .with_context(|| format!("configuring lens preset {}", label))?;
            let result = lens
                .observe(&truth, &mut rng)
                .with_context(|| format!("applying lens preset {}", label))?;
            self.metrics.record_observation(result.is_empty());
            reports.push(LensReport {
                label: label.clone(),
                observed_count: result.observed_count(),
                max_observed_radius_kpc: result.max_observed_radius_kpc(),
                peak_observed_velocity_kms: result.peak_observed_velocity_kms(),
            });
        }

        Ok(ComparisonResult {
            truth: truth_summary,
            reports,
        })
    }

    pub fn metrics_snapshot(&self) -> (usize, usize, usize) {
        self.metrics.snapshot()
    }
}

fn summarize_truth(truth: &TruthProfile) -> anyhow::Result<TruthSummary> {
    let (peak_radius_kpc, peak_velocity_kms) = truth
        .peak_velocity()
        .context("truth profile has no velocity points")?;
    let max_radius_kpc = truth
        .max_radius_kpc()
        .context("truth profile has no radii")?;
    Ok(TruthSummary {
        mb_total_msun: truth.mb_total_msun,
        rd_kpc: truth.rd_kpc,
        max_radius_kpc,
        peak_radius_kpc,
        peak_velocity_kms,
    })
}
