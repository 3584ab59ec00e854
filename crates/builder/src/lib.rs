//! Builder crate driving staged rocket assembly and exposing supporting crates.

pub mod assembly;
pub mod builders;
pub mod calibration;

pub use facade::*;

mod facade;
