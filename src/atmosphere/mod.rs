pub mod atmosphere_errors;
pub mod isa;
pub mod layers;
pub mod profile;

pub use atmosphere_errors::AtmosphereError;
pub use isa::{AtmosphereModel, IsaResult};
pub use layers::{AtmosphericLayer, LAYERS};
