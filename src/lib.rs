pub mod constants;
pub mod conversion;
pub mod frames;
pub mod grid;
pub mod heliograph_errors;
pub mod observations;
pub mod projection;
pub mod rotation;
pub mod sun;
pub mod time;

pub use constants::TrackSet;
