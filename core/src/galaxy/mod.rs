pub mod observation;
pub mod truth;

pub use observation::{LensPreset, ObservationResult};
pub use truth::TruthProfile;
