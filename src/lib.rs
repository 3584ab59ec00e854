//! Staged rocket assembly.
//!
//! Builders construct rockets in a fixed order (create, attach payload,
//! attach stages, refuel) under the control of a stateless director. This
//! crate re-exports the workspace crates so front-ends only need one
//! dependency.

pub use rocket_builder as builder;
pub use rocket_config as config;
pub use rocket_core as primitives;
pub use rocket_export as export;
pub use rocket_propulsion as propulsion;
