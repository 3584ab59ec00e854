//! Sounding rocket: a single solid motor sized to the payload.

use rocket_propulsion::Stage;

use crate::assembly::{AssemblyError, AssemblyStep, RocketBuilder, Workbench};

const DEFAULT_NAME: &str = "Sounding";

/// Builds single-stage rockets whose motor thrust equals the payload weight.
///
/// Solid motors take no fuel, so the refuel step is a no-op.
#[derive(Debug)]
pub struct SoundingRocketBuilder {
    name: String,
    workbench: Workbench,
}

impl SoundingRocketBuilder {
    pub fn new() -> Self {
        Self::named(DEFAULT_NAME)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            workbench: Workbench::new(),
        }
    }
}

impl Default for SoundingRocketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RocketBuilder for SoundingRocketBuilder {
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
        rocket.push_stage(Stage::solid("solid motor", weight));
        Ok(())
    }
}
