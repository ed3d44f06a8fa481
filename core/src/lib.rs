//! Core forward-modelling and observation stages for the Rust inference-lens
//! platform.
//!
//! The modules mirror the truth-then-lens pipeline: a profile builder derives
//! a disk galaxy's surface density, enclosed mass, and rotation curve from a
//! handful of global parameters, and an observation lens applies a
//! surface-brightness detection threshold that models the information an
//! instrument would actually keep.

pub mod galaxy;
pub mod math;
pub mod pipeline;
pub mod prelude;
pub mod telemetry;

pub use prelude::{ObservationLens, ProfileBuilder};
use serde::{Deserialize, Serialize};

/// Gravitational constant in kpc (km/s)^2 / Msun.
pub const G_KPC_KMS2_PER_MSUN: f64 = 4.30091e-6;

/// Innermost radius of the truth grid in kpc. The grid starts strictly above
/// zero so the circular-velocity division is always well defined.
pub const INNER_RADIUS_KPC: f64 = 0.05;

/// Default central surface-brightness anchor in mag/arcsec^2.
pub const DEFAULT_SB0_MAG_ARCSEC2: f64 = 20.0;

/// Global parameters of a truth galaxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxyConfig {
    /// Total baryonic mass in Msun.
    pub mb_total_msun: f64,
    /// Exponential disk scale length in kpc.
    pub rd_kpc: f64,
    /// Outermost radius of the radial grid in kpc.
    pub rmax_kpc: f64,
    /// Number of radial grid points.
    pub npoints: usize,
}

impl GalaxyConfig {
    /// Rejects physically invalid parameters before any numerics run.
    pub fn validate(&self) -> SimResult<()> {
        if !self.mb_total_msun.is_finite() || self.mb_total_msun <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "total baryonic mass must be positive, got {}",
                self.mb_total_msun
            )));
        }
        if !self.rd_kpc.is_finite() || self.rd_kpc <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "disk scale length must be positive, got {}",
                self.rd_kpc
            )));
        }
        if !self.rmax_kpc.is_finite() || self.rmax_kpc <= INNER_RADIUS_KPC {
            return Err(SimError::InvalidConfig(format!(
                "max radius must exceed the inner grid radius {} kpc, got {}",
                INNER_RADIUS_KPC, self.rmax_kpc
            )));
        }
        if self.npoints < 2 {
            return Err(SimError::InvalidConfig(format!(
                "at least 2 radial points required, got {}",
                self.npoints
            )));
        }
        Ok(())
    }
}

/// Common error type for stage execution.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("degenerate profile: {0}")]
    DegenerateProfile(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type SimResult<T> = Result<T, SimError>;
