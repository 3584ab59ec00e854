//! Freight rocket: liquid stages added band by band as the payload grows.

use rocket_core::constants::{ONE_STAGE_MAX_PAYLOAD, TWO_STAGE_MAX_PAYLOAD};
use rocket_propulsion::Stage;
use thiserror::Error;

use crate::assembly::{AssemblyError, AssemblyStep, RocketBuilder, Workbench};
use crate::calibration::{active_band_count, band_fractions};

const DEFAULT_NAME: &str = "Freight";

/// Weight interval served by one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityBand {
    pub name: String,
    /// Upper payload limit of the band.
    pub max_payload: f64,
    pub engine_count: usize,
    /// Fixed per-engine thrust. `None` splits the payload weight across the engines.
    pub engine_thrust: Option<f64>,
}

impl CapacityBand {
    pub fn new(name: impl Into<String>, max_payload: f64, engine_count: usize) -> Self {
        Self {
            name: name.into(),
            max_payload,
            engine_count,
            engine_thrust: None,
        }
    }

    pub fn with_engine_thrust(mut self, thrust: f64) -> Self {
        self.engine_thrust = Some(thrust);
        self
    }

    fn stage_for(&self, weight: f64) -> Stage {
        let thrust = self
            .engine_thrust
            .unwrap_or(weight / self.engine_count as f64);
        Stage::liquid(self.name.clone(), self.engine_count, thrust)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    #[error("freight profile needs at least one capacity band")]
    Empty,
    #[error("band '{0}' must have a positive, finite capacity")]
    InvalidCapacity(String),
    #[error("band '{0}' capacity must exceed the band below it")]
    NotIncreasing(String),
    #[error("band '{0}' has no engines")]
    NoEngines(String),
    #[error("band '{0}' engine thrust must be non-negative and finite")]
    InvalidThrust(String),
}

/// Ordered capacity bands of a freight rocket.
#[derive(Debug, Clone, PartialEq)]
pub struct FreightProfile {
    bands: Vec<CapacityBand>,
    capacities: Vec<f64>,
}

impl FreightProfile {
    pub fn new(bands: Vec<CapacityBand>) -> Result<Self, ProfileError> {
        if bands.is_empty() {
            return Err(ProfileError::Empty);
        }

        let mut floor = 0.0;
        for band in &bands {
            if !band.max_payload.is_finite() || band.max_payload <= 0.0 {
                return Err(ProfileError::InvalidCapacity(band.name.clone()));
            }
            if band.max_payload <= floor {
                return Err(ProfileError::NotIncreasing(band.name.clone()));
            }
            if band.engine_count == 0 {
                return Err(ProfileError::NoEngines(band.name.clone()));
            }
            if let Some(thrust) = band.engine_thrust {
                if !thrust.is_finite() || thrust < 0.0 {
                    return Err(ProfileError::InvalidThrust(band.name.clone()));
                }
            }
            floor = band.max_payload;
        }

        let capacities = bands.iter().map(|band| band.max_payload).collect();
        Ok(Self { bands, capacities })
    }

    /// Four-engine first stage up to 1000, single-engine second stage up to 2000.
    pub fn standard() -> Self {
        let bands = vec![
            CapacityBand::new("first stage", ONE_STAGE_MAX_PAYLOAD, 4),
            CapacityBand::new("second stage", TWO_STAGE_MAX_PAYLOAD, 1),
        ];
        let capacities = vec![ONE_STAGE_MAX_PAYLOAD, TWO_STAGE_MAX_PAYLOAD];
        Self { bands, capacities }
    }

    pub fn bands(&self) -> &[CapacityBand] {
        &self.bands
    }

    pub fn capacities(&self) -> &[f64] {
        &self.capacities
    }

    /// Capacity of the top band.
    pub fn max_payload(&self) -> f64 {
        self.capacities.last().copied().unwrap_or(0.0)
    }
}

impl Default for FreightProfile {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builds multi-stage freight rockets from a [`FreightProfile`].
#[derive(Debug)]
pub struct FreightRocketBuilder {
    name: String,
    profile: FreightProfile,
    workbench: Workbench,
}

impl FreightRocketBuilder {
    pub fn new() -> Self {
        Self::with_profile(DEFAULT_NAME, FreightProfile::standard())
    }

    pub fn with_profile(name: impl Into<String>, profile: FreightProfile) -> Self {
        Self {
            name: name.into(),
            profile,
            workbench: Workbench::new(),
        }
    }

    pub fn profile(&self) -> &FreightProfile {
        &self.profile
    }
}

impl Default for FreightRocketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RocketBuilder for FreightRocketBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    fn workbench_mut(&mut self) -> &mut Workbench {
        &mut self.workbench
    }

    fn add_stages(&mut self) -> Result<(), AssemblyError> {
        let rocket = self.workbench.advance(AssemblyStep::StagesAttached)?;
        let weight = rocket.payload_weight()?;
        let active = active_band_count(weight, self.profile.capacities());
        for band in self.profile.bands().iter().take(active) {
            rocket.push_stage(band.stage_for(weight));
        }
        tracing::debug!(rocket = %self.name, weight, stages = active, "stages attached");
        Ok(())
    }

    fn refuel_rocket(&mut self) -> Result<(), AssemblyError> {
        let rocket = self.workbench.advance(AssemblyStep::Refueled)?;
        let weight = rocket.payload_weight()?;
        let levels = band_fractions(weight, self.profile.capacities());
        if weight > self.profile.max_payload() {
            tracing::warn!(
                rocket = %self.name,
                weight,
                max_payload = self.profile.max_payload(),
                "payload exceeds top band; fuel level above full tank"
            );
        }
        for (stage, level) in rocket.stages_mut().iter_mut().zip(levels) {
            stage.refuel(level)?;
        }
        Ok(())
    }
}
