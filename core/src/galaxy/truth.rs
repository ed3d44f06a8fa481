use crate::math::StatsHelper;
use serde::{Deserialize, Serialize};

/// Fully-known radial profile of a simulated disk galaxy.
///
/// The four sequences are co-indexed: index `i` across all of them refers to
/// the same radius. Radii increase strictly from the inner grid radius, so
/// every velocity entry is finite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthProfile {
    /// Radial grid in kpc.
    pub r_kpc: Vec<f64>,
    /// Surface mass density in Msun/kpc^2.
    pub sigma_msun_kpc2: Vec<f64>,
    /// Cumulative enclosed mass in Msun.
    pub m_enclosed_msun: Vec<f64>,
    /// Circular velocity in km/s.
    pub v_circ_kms: Vec<f64>,
    /// Total baryonic mass the density was normalized to, in Msun.
    pub mb_total_msun: f64,
    /// Disk scale length in kpc.
    pub rd_kpc: f64,
}

impl TruthProfile {
    pub fn len(&self) -> usize {
        self.r_kpc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r_kpc.is_empty()
    }

    /// Outermost grid radius in kpc.
    pub fn max_radius_kpc(&self) -> Option<f64> {
        self.r_kpc.last().copied()
    }

    /// Radius and value of the rotation-curve maximum.
    pub fn peak_velocity(&self) -> Option<(f64, f64)> {
        StatsHelper::argmax(&self.v_circ_kms).map(|idx| (self.r_kpc[idx], self.v_circ_kms[idx]))
    }
}
