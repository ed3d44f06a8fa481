use anyhow::Context;
use clap::Parser;
use lenscore::galaxy::LensPreset;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use workflow::config::TruthGalaxyConfig;
use workflow::presets::LensPresetFile;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Rust-facing inference-lens workflow driver")]
struct Args {
    /// Load a truth-galaxy config from YAML
    #[arg(long)]
    galaxy: Option<PathBuf>,
    /// Lens preset JSON files applied to the shared truth (repeatable)
    #[arg(long)]
    lens: Vec<PathBuf>,
    /// Inline surface-brightness limit used when no preset files are given
    #[arg(long, default_value_t = 24.0)]
    sb_limit: f64,
    /// Central surface-brightness anchor for the inline preset
    #[arg(long, default_value_t = 20.0)]
    sb0: f64,
    #[arg(long, default_value_t = 5e10)]
    mb_total: f64,
    #[arg(long, default_value_t = 3.0)]
    rd: f64,
    #[arg(long, default_value_t = 30.0)]
    rmax: f64,
    #[arg(long, default_value_t = 300)]
    npoints: usize,
    /// Seed for the reserved noise generator
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Append one summary line per lens to this report file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let galaxy_config = if let Some(path) = args.galaxy {
        TruthGalaxyConfig::load(path)?
    } else {
        TruthGalaxyConfig::from_args(args.mb_total, args.rd, args.rmax, args.npoints)
    };

    let mut presets = Vec::new();
    if args.lens.is_empty() {
        presets.push((
            format!("sb{:.1}", args.sb_limit),
            LensPreset::with_anchor(args.sb_limit, args.sb0),
        ));
    } else {
        for path in &args.lens {
            let label = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("preset")
                .to_string();
            let preset = LensPresetFile::load(path)?;
            presets.push((label, preset.to_lens_preset()));
        }
    }

    let runner = Runner::new(galaxy_config, args.seed);
    let result = runner.execute(&presets)?;

    println!("Truth galaxy built:");
    println!(
        "  Total baryonic mass = {:.2e} Msun",
        result.truth.mb_total_msun
    );
    println!("  Disk scale length   = {:.2} kpc", result.truth.rd_kpc);
    println!("  Max radius          = {:.1} kpc", result.truth.max_radius_kpc);
    println!(
        "  Peak V_true         = {:.1} km/s at {:.2} kpc",
        result.truth.peak_velocity_kms, result.truth.peak_radius_kpc
    );

    let mut report_lines = Vec::new();
    for report in &result.reports {
        match (
            report.max_observed_radius_kpc,
            report.peak_observed_velocity_kms,
        ) {
            (Some(radius), Some(velocity)) => {
                println!(
                    "Lens {} -> observed {} points out to {:.1} kpc, peak V_obs {:.1} km/s",
                    report.label, report.observed_count, radius, velocity
                );
                report_lines.push(format!(
                    "lens={} observed={} rmax_obs={:.2} vpeak_obs={:.2}\n",
                    report.label, report.observed_count, radius, velocity
                ));
            }
            _ => {
                println!("Lens {} -> no points detected", report.label);
                report_lines.push(format!("lens={} observed=0\n", report.label));
            }
        }
    }

    let (profiles, lenses, empty) = runner.metrics_snapshot();
    log::info!(
        "run complete: {} profile(s), {} lens pass(es), {} empty result(s)",
        profiles,
        lenses,
        empty
    );

    if let Some(report_path) = args.report {
        if let Some(parent) = report_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&report_path)
            .with_context(|| format!("opening report file {}", report_path.display()))?;
        for line in &report_lines {
            file.write_all(line.as_bytes())?;
        }
    }

    Ok(())
}
