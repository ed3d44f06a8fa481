pub struct StatsHelper;

impl StatsHelper {
    /// Index of the largest value, `None` for an empty slice.
    pub fn argmax(values: &[f64]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, &value) in values.iter().enumerate() {
            let replace = match best {
                Some(current) => value > values[current],
                None => true,
            };
            if replace {
                best = Some(idx);
            }
        }
        best
    }

    /// Largest value, `None` for an empty slice.
    pub fn max(values: &[f64]) -> Option<f64> {
        Self::argmax(values).map(|idx| values[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_empty_sequence_yields_none() {
        assert_eq!(StatsHelper::argmax(&[]), None);
        assert_eq!(StatsHelper::max(&[]), None);
    }

    #[test]
    fn argmax_picks_first_of_equal_maxima() {
        assert_eq!(StatsHelper::argmax(&[1.0, 7.0, 7.0, 2.0]), Some(1));
        assert_eq!(StatsHelper::max(&[1.0, 7.0, 7.0, 2.0]), Some(7.0));
    }

    #[test]
    fn max_handles_single_value() {
        assert_eq!(StatsHelper::max(&[4.0]), Some(4.0));
    }
}
