use crate::INNER_RADIUS_KPC;
use ndarray::{Array1, ArrayView1};

pub struct GridHelper;

impl GridHelper {
    /// Evenly spaced radial grid from the inner grid radius to `rmax_kpc`
    /// inclusive. The endpoint is pinned so the outermost radius equals
    /// `rmax_kpc` regardless of step rounding.
    pub fn radial(npoints: usize, rmax_kpc: f64) -> Array1<f64> {
        let mut r = Array1::linspace(INNER_RADIUS_KPC, rmax_kpc, npoints);
        if let Some(last) = r.iter_mut().last() {
            *last = rmax_kpc;
        }
        r
    }

    /// Per-point spacing: central differences inside the grid, one-sided at
    /// the ends.
    pub fn local_spacing(x: ArrayView1<f64>) -> Array1<f64> {
        let n = x.len();
        if n < 2 {
            return Array1::zeros(n);
        }
        let mut spacing = Array1::zeros(n);
        spacing[0] = x[1] - x[0];
        spacing[n - 1] = x[n - 1] - x[n - 2];
        for i in 1..n - 1 {
            spacing[i] = 0.5 * (x[i + 1] - x[i - 1]);
        }
        spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_grid_starts_above_zero_and_ends_at_rmax() {
        let r = GridHelper::radial(300, 30.0);
        assert_eq!(r.len(), 300);
        assert_eq!(r[0], INNER_RADIUS_KPC);
        assert_eq!(r[299], 30.0);
        assert!(r.windows(2).into_iter().all(|w| w[1] > w[0]));
    }

    #[test]
    fn local_spacing_is_uniform_on_uniform_grid() {
        let r = GridHelper::radial(5, 0.45);
        let spacing = GridHelper::local_spacing(r.view());
        for &dr in spacing.iter() {
            assert!((dr - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn local_spacing_degenerate_grid_yields_zeros() {
        let x = Array1::from(vec![1.0]);
        assert_eq!(GridHelper::local_spacing(x.view()).len(), 1);
    }
}
