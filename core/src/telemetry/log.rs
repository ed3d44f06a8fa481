use log::info;

/// Thin wrapper over the `log` facade that prefixes records with the owning
/// stage name.
pub struct LogManager {
    stage: &'static str,
}

impl LogManager {
    pub fn new(stage: &'static str) -> Self {
        Self { stage }
    }

    pub fn record(&self, message: &str) {
        info!("{} {}", self.stage, message);
    }
}
