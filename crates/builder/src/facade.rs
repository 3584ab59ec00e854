//! Re-exported APIs for consumers of the builder crate.

pub use crate::assembly::{
    AssemblyError, AssemblyStep, Director, Rocket, RocketBuilder, Workbench, assemble,
};
pub use crate::builders::{
    CapacityBand, FreightProfile, FreightRocketBuilder, ProfileError, SoundingRocketBuilder,
};
pub use rocket_core::{Payload, PayloadError, PayloadKind};
pub use rocket_propulsion::{Engine, EngineKind, PropulsionError, Stage};

pub mod catalog {
    use rocket_config::{BandConfig, BuilderConfig, StagingConfig};
    use thiserror::Error;

    use crate::assembly::RocketBuilder;
    use crate::builders::{
        CapacityBand, FreightProfile, FreightRocketBuilder, ProfileError, SoundingRocketBuilder,
    };

    /// Errors surfaced when selecting or converting builders.
    #[derive(Debug, Error)]
    pub enum CatalogError {
        #[error("builder '{0}' not found in catalog")]
        NotFound(String),
        #[error("builder catalog is empty")]
        EmptyCatalog,
        #[error("builder '{0}' uses an unsupported stage layout")]
        UnsupportedLayout(String),
        #[error("invalid freight profile: {0}")]
        Profile(#[from] ProfileError),
    }

    /// Convert a `BuilderConfig` into a fresh builder ready for one assembly.
    pub fn from_config(config: &BuilderConfig) -> Result<Box<dyn RocketBuilder>, CatalogError> {
        match &config.layout {
            StagingConfig::Sounding => Ok(Box::new(SoundingRocketBuilder::named(&config.name))),
            StagingConfig::Freight { bands } => {
                let profile = FreightProfile::new(bands.iter().map(band_from_config).collect())?;
                Ok(Box::new(FreightRocketBuilder::with_profile(
                    &config.name,
                    profile,
                )))
            }
            StagingConfig::Unsupported => Err(CatalogError::UnsupportedLayout(config.name.clone())),
        }
    }

    /// Select a builder by optional name (case-insensitive), defaulting to the first entry.
    pub fn select(
        configs: &[BuilderConfig],
        requested: Option<&str>,
    ) -> Result<Box<dyn RocketBuilder>, CatalogError> {
        let first = configs.first().ok_or(CatalogError::EmptyCatalog)?;

        let chosen = if let Some(name) = requested {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| CatalogError::NotFound(name.to_string()))?
        } else {
            first
        };

        from_config(chosen)
    }

    fn band_from_config(config: &BandConfig) -> CapacityBand {
        CapacityBand {
            name: config.name.clone(),
            max_payload: config.max_payload,
            engine_count: config.engine_count,
            engine_thrust: config.engine_thrust,
        }
    }
}
