pub use crate::galaxy::{LensPreset, ObservationResult, TruthProfile};
pub use crate::pipeline::{ObservationLens, ProfileBuilder};
pub use crate::{GalaxyConfig, SimError, SimResult};
