//! Concrete rocket builders.

pub mod freight;
pub mod sounding;

pub use self::freight::{CapacityBand, FreightProfile, FreightRocketBuilder, ProfileError};
pub use self::sounding::SoundingRocketBuilder;
