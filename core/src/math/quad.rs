use ndarray::{Array1, ArrayView1};

pub struct QuadHelper;

impl QuadHelper {
    /// Trapezoidal integral of `y` sampled at `x`.
    pub fn trapezoid(y: ArrayView1<f64>, x: ArrayView1<f64>) -> f64 {
        let n = x.len().min(y.len());
        let mut total = 0.0;
        for i in 1..n {
            total += 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]);
        }
        total
    }

    /// Running cumulative sum; index `i` holds the sum of `values[..=i]`.
    pub fn running_sum(values: ArrayView1<f64>) -> Array1<f64> {
        let mut acc = 0.0;
        values
            .iter()
            .map(|&value| {
                acc += value;
                acc
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapezoid_integrates_constant_exactly() {
        let x = Array1::linspace(0.0, 1.0, 11);
        let y = Array1::from_elem(11, 2.0);
        assert!((QuadHelper::trapezoid(y.view(), x.view()) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn trapezoid_integrates_linear_ramp_exactly() {
        let x = Array1::linspace(0.0, 2.0, 21);
        let y = x.clone();
        assert!((QuadHelper::trapezoid(y.view(), x.view()) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn trapezoid_of_single_point_is_zero() {
        let x = Array1::from(vec![1.0]);
        let y = Array1::from(vec![5.0]);
        assert_eq!(QuadHelper::trapezoid(y.view(), x.view()), 0.0);
    }

    #[test]
    fn running_sum_accumulates_in_order() {
        let values = Array1::from(vec![1.0, 2.0, 3.0]);
        let summed = QuadHelper::running_sum(values.view());
        assert_eq!(summed.to_vec(), vec![1.0, 3.0, 6.0]);
    }
}
