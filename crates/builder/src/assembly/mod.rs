//! Assembly orchestrator that runs a builder through create, payload, stages, and refuel.

mod workbench;

pub use self::workbench::{AssemblyStep, Rocket, Workbench};

use rocket_core::{Payload, PayloadError};
use rocket_propulsion::PropulsionError;

/// Top-level assembly error.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum AssemblyError {
    #[error("cannot {attempted}: last completed step was {}", describe(.completed))]
    OutOfOrder {
        attempted: AssemblyStep,
        completed: Option<AssemblyStep>,
    },
    #[error("rocket has not been created yet")]
    Uninitialized,
    #[error("rocket is unfinished; last completed step was {0}")]
    Incomplete(AssemblyStep),
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),
    #[error("calibration failed: {0}")]
    Propulsion(#[from] PropulsionError),
}

fn describe(step: &Option<AssemblyStep>) -> String {
    match step {
        Some(step) => step.to_string(),
        None => "none".to_string(),
    }
}

/// Pluggable strategy supplying each assembly step.
///
/// Implementors embed a [`Workbench`] and usually only provide `add_stages`
/// (and `refuel_rocket` when their engines take fuel). Each step fails with
/// [`AssemblyError::OutOfOrder`] unless the previous one has completed, so
/// calling the steps by hand is as safe as going through [`assemble`].
pub trait RocketBuilder {
    /// Name given to every rocket this builder produces.
    fn name(&self) -> &str;

    fn workbench(&self) -> &Workbench;

    fn workbench_mut(&mut self) -> &mut Workbench;

    fn create_rocket(&mut self) -> Result<(), AssemblyError> {
        let name = self.name().to_string();
        self.workbench_mut().start(&name)?;
        Ok(())
    }

    fn add_payload(&mut self, payload: Payload) -> Result<(), AssemblyError> {
        payload.validate()?;
        self.workbench_mut()
            .advance(AssemblyStep::PayloadAttached)?
            .attach_payload(payload);
        Ok(())
    }

    fn add_stages(&mut self) -> Result<(), AssemblyError>;

    /// Builders without liquid stages have nothing to calibrate.
    fn refuel_rocket(&mut self) -> Result<(), AssemblyError> {
        self.workbench_mut().advance(AssemblyStep::Refueled)?;
        Ok(())
    }

    fn rocket(&self) -> Result<&Rocket, AssemblyError> {
        self.workbench().rocket()
    }

    fn take_rocket(&mut self) -> Result<Rocket, AssemblyError> {
        self.workbench_mut().take()
    }
}

/// Run the four assembly steps in order and return the finished rocket.
///
/// The payload is validated before any step runs. On failure the builder's
/// workbench is cleared, so no partially assembled rocket can be read back.
pub fn assemble<B>(builder: &mut B, payload: Payload) -> Result<Rocket, AssemblyError>
where
    B: RocketBuilder + ?Sized,
{
    let result = run_steps(builder, payload);
    match &result {
        Ok(rocket) => tracing::info!(
            rocket = %rocket.name,
            payload_weight = payload.weight,
            stages = rocket.stage_count(),
            "rocket assembled"
        ),
        Err(err) => {
            tracing::debug!(builder = builder.name(), error = %err, "assembly aborted");
            builder.workbench_mut().reset();
        }
    }
    result
}

fn run_steps<B>(builder: &mut B, payload: Payload) -> Result<Rocket, AssemblyError>
where
    B: RocketBuilder + ?Sized,
{
    payload.validate()?;
    builder.create_rocket()?;
    tracing::debug!(builder = builder.name(), step = %AssemblyStep::Created);
    builder.add_payload(payload)?;
    tracing::debug!(builder = builder.name(), step = %AssemblyStep::PayloadAttached, kind = %payload.kind);
    builder.add_stages()?;
    tracing::debug!(builder = builder.name(), step = %AssemblyStep::StagesAttached);
    builder.refuel_rocket()?;
    tracing::debug!(builder = builder.name(), step = %AssemblyStep::Refueled);
    builder.take_rocket()
}

/// Stateless coordinator handing payloads to builders.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    pub fn prepare_rocket<B>(&self, builder: &mut B, payload: Payload) -> Result<Rocket, AssemblyError>
    where
        B: RocketBuilder + ?Sized,
    {
        assemble(builder, payload)
    }
}
