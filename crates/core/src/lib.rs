//! Core constants, payload primitives, and shared validation for the Rocket Assembly workspace.

/// Constants shared by builders and calibration code.
pub mod constants {
    /// Fuel level of a completely filled tank (percent).
    pub const FULL_TANK_PERCENT: f64 = 100.0;
    /// Upper payload limit of the single-stage band in the standard freight profile.
    pub const ONE_STAGE_MAX_PAYLOAD: f64 = 1_000.0;
    /// Upper payload limit of the two-stage band in the standard freight profile.
    pub const TWO_STAGE_MAX_PAYLOAD: f64 = 2_000.0;
}

/// Payload carried by a rocket.
pub mod payload {
    use std::fmt;

    use thiserror::Error;

    /// What the payload is. Builders only look at the weight.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PayloadKind {
        /// Science probe flown on sounding rockets.
        Probe,
        /// Satellite identified by a catalog number.
        Satellite { id: u32 },
    }

    impl fmt::Display for PayloadKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                PayloadKind::Probe => write!(f, "probe"),
                PayloadKind::Satellite { id } => write!(f, "satellite #{id}"),
            }
        }
    }

    /// Cargo attached to a rocket. Its weight drives every staging decision.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Payload {
        pub kind: PayloadKind,
        pub weight: f64,
    }

    #[derive(Debug, Error, Clone, Copy, PartialEq)]
    pub enum PayloadError {
        #[error("payload weight must be non-negative (got {0})")]
        Negative(f64),
        #[error("payload weight must be a finite number")]
        NotFinite,
    }

    impl Payload {
        pub fn probe(weight: f64) -> Self {
            Self {
                kind: PayloadKind::Probe,
                weight,
            }
        }

        pub fn satellite(id: u32, weight: f64) -> Self {
            Self {
                kind: PayloadKind::Satellite { id },
                weight,
            }
        }

        /// Reject weights no builder can stage.
        pub fn validate(&self) -> Result<(), PayloadError> {
            if !self.weight.is_finite() {
                return Err(PayloadError::NotFinite);
            }
            if self.weight < 0.0 {
                return Err(PayloadError::Negative(self.weight));
            }
            Ok(())
        }
    }
}

pub use payload::{Payload, PayloadError, PayloadKind};
