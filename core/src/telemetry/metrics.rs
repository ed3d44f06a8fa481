use std::sync::Mutex;

/// Counters describing forward-model activity across a run.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    profiles_built: usize,
    lenses_applied: usize,
    empty_results: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                profiles_built: 0,
                lenses_applied: 0,
                empty_results: 0,
            }),
        }
    }

    pub fn record_profile(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.profiles_built += 1;
        }
    }

    pub fn record_observation(&self, empty: bool) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.lenses_applied += 1;
            if empty {
                metrics.empty_results += 1;
            }
        }
    }

    /// Returns (profiles built, lenses applied, empty results).
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (
                metrics.profiles_built,
                metrics.lenses_applied,
                metrics.empty_results,
            )
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_tracks_observations_and_empty_results() {
        let recorder = MetricsRecorder::new();
        recorder.record_profile();
        recorder.record_observation(false);
        recorder.record_observation(true);
        assert_eq!(recorder.snapshot(), (1, 2, 1));
    }
}
