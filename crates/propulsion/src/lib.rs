//! Engine descriptors and the stages that group them.

use std::fmt;

use thiserror::Error;

/// How an engine is fuelled. Only liquid engines can be refuelled after assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Solid motor: ignites once, no fuel level to calibrate.
    Solid,
    /// Liquid engine with a fuel level expressed as a percentage.
    Liquid,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Solid => write!(f, "solid"),
            EngineKind::Liquid => write!(f, "liquid"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropulsionError {
    #[error("stage '{stage}' contains solid motors and cannot be refuelled")]
    SolidEngine { stage: String },
}

/// A single propulsion unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub kind: EngineKind,
    pub thrust: f64,
    fuel_level: Option<f64>,
}

impl Engine {
    pub fn solid(thrust: f64) -> Self {
        Self {
            kind: EngineKind::Solid,
            thrust,
            fuel_level: None,
        }
    }

    /// Liquid engines leave the factory with empty tanks.
    pub fn liquid(thrust: f64) -> Self {
        Self {
            kind: EngineKind::Liquid,
            thrust,
            fuel_level: Some(0.0),
        }
    }

    /// Current fuel level in percent, `None` for solid motors.
    pub fn fuel_level(&self) -> Option<f64> {
        self.fuel_level
    }

    /// Set the fuel level. Returns `false` for engines without tanks.
    pub fn refuel(&mut self, level: f64) -> bool {
        match self.fuel_level.as_mut() {
            Some(current) => {
                *current = level;
                true
            }
            None => false,
        }
    }
}

/// Ordered group of engines belonging to exactly one rocket.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub name: String,
    engines: Vec<Engine>,
}

impl Stage {
    pub fn new(name: impl Into<String>, engines: Vec<Engine>) -> Self {
        Self {
            name: name.into(),
            engines,
        }
    }

    /// Single solid motor producing `thrust`.
    pub fn solid(name: impl Into<String>, thrust: f64) -> Self {
        Self::new(name, vec![Engine::solid(thrust)])
    }

    /// `engine_count` identical liquid engines of `engine_thrust` each.
    pub fn liquid(name: impl Into<String>, engine_count: usize, engine_thrust: f64) -> Self {
        Self::new(name, vec![Engine::liquid(engine_thrust); engine_count])
    }

    pub fn engines(&self) -> &[Engine] {
        &self.engines
    }

    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    pub fn total_thrust(&self) -> f64 {
        self.engines.iter().map(|engine| engine.thrust).sum()
    }

    /// Kind shared by every engine in the stage, `None` for empty or mixed stages.
    pub fn engine_kind(&self) -> Option<EngineKind> {
        let first = self.engines.first()?.kind;
        self.engines
            .iter()
            .all(|engine| engine.kind == first)
            .then_some(first)
    }

    /// Fuel level shared by the stage's engines (the first engine's level).
    pub fn fuel_level(&self) -> Option<f64> {
        self.engines.first().and_then(Engine::fuel_level)
    }

    /// Fill every engine to the same level.
    ///
    /// The stage is left untouched if any engine has no tank.
    pub fn refuel(&mut self, level: f64) -> Result<(), PropulsionError> {
        if self.engines.iter().any(|engine| engine.fuel_level.is_none()) {
            return Err(PropulsionError::SolidEngine {
                stage: self.name.clone(),
            });
        }
        for engine in &mut self.engines {
            engine.refuel(level);
        }
        Ok(())
    }
}
