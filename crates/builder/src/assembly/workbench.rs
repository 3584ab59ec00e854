//! In-progress rocket and the step tracker that keeps assembly in order.

use std::fmt;

use rocket_core::Payload;
use rocket_propulsion::Stage;

use super::AssemblyError;

/// Assembly steps in the only order a builder may perform them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStep {
    Created,
    PayloadAttached,
    StagesAttached,
    Refueled,
}

impl AssemblyStep {
    /// Step that must have completed immediately before this one.
    pub fn predecessor(self) -> Option<AssemblyStep> {
        match self {
            AssemblyStep::Created => None,
            AssemblyStep::PayloadAttached => Some(AssemblyStep::Created),
            AssemblyStep::StagesAttached => Some(AssemblyStep::PayloadAttached),
            AssemblyStep::Refueled => Some(AssemblyStep::StagesAttached),
        }
    }
}

impl fmt::Display for AssemblyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssemblyStep::Created => "create rocket",
            AssemblyStep::PayloadAttached => "attach payload",
            AssemblyStep::StagesAttached => "attach stages",
            AssemblyStep::Refueled => "refuel",
        };
        f.write_str(label)
    }
}

/// Assembled (or partially assembled) rocket.
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub name: String,
    payload: Option<Payload>,
    stages: Vec<Stage>,
}

impl Rocket {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            payload: None,
            stages: Vec::new(),
        }
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub(crate) fn attach_payload(&mut self, payload: Payload) {
        self.payload = Some(payload);
    }

    pub(crate) fn push_stage(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    pub(crate) fn stages_mut(&mut self) -> &mut [Stage] {
        &mut self.stages
    }

    /// Weight of the attached payload; staging is impossible without one.
    pub(crate) fn payload_weight(&self) -> Result<f64, AssemblyError> {
        self.payload
            .map(|payload| payload.weight)
            .ok_or(AssemblyError::OutOfOrder {
                attempted: AssemblyStep::StagesAttached,
                completed: Some(AssemblyStep::Created),
            })
    }
}

/// Rocket under construction together with the last completed step.
///
/// Every builder owns one. The workbench is empty until `start` and becomes
/// empty again once the finished rocket is taken.
#[derive(Debug, Default)]
pub struct Workbench {
    rocket: Option<Rocket>,
    completed: Option<AssemblyStep>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(&self) -> Option<AssemblyStep> {
        self.completed
    }

    /// Allocate an empty rocket. Fails while another assembly is in progress.
    pub fn start(&mut self, name: &str) -> Result<&mut Rocket, AssemblyError> {
        if self.completed.is_some() {
            return Err(AssemblyError::OutOfOrder {
                attempted: AssemblyStep::Created,
                completed: self.completed,
            });
        }
        self.completed = Some(AssemblyStep::Created);
        Ok(self.rocket.insert(Rocket::new(name)))
    }

    /// Mark `step` complete and hand out the rocket so the step can be applied.
    pub fn advance(&mut self, step: AssemblyStep) -> Result<&mut Rocket, AssemblyError> {
        // `start` is the only way to create a rocket.
        if step == AssemblyStep::Created || self.completed != step.predecessor() {
            return Err(AssemblyError::OutOfOrder {
                attempted: step,
                completed: self.completed,
            });
        }
        let rocket = self.rocket.as_mut().ok_or(AssemblyError::Uninitialized)?;
        self.completed = Some(step);
        Ok(rocket)
    }

    /// Rocket in its current state.
    pub fn rocket(&self) -> Result<&Rocket, AssemblyError> {
        self.rocket.as_ref().ok_or(AssemblyError::Uninitialized)
    }

    /// Remove the finished rocket, leaving the workbench ready for a new run.
    pub fn take(&mut self) -> Result<Rocket, AssemblyError> {
        match self.completed {
            None => Err(AssemblyError::Uninitialized),
            Some(AssemblyStep::Refueled) => {
                let rocket = self.rocket.take().ok_or(AssemblyError::Uninitialized)?;
                self.completed = None;
                Ok(rocket)
            }
            Some(step) => Err(AssemblyError::Incomplete(step)),
        }
    }

    /// Discard any partial rocket.
    pub fn reset(&mut self) {
        self.rocket = None;
        self.completed = None;
    }
}
