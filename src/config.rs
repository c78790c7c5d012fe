//! Game configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `config.ron` file (if exists)
//! 3. Environment variables prefixed with `DIGIPET_`
//!
//! Example environment variable: `DIGIPET_SIMULATION__FIXED_TICK_DURATION=0.25`

use anyhow::{ensure, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Main game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub pet: PetConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Simulation timing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seconds per simulation tick; must be positive
    pub fixed_tick_duration: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_tick_duration: 0.5,
        }
    }
}

/// Pet settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetConfig {
    /// Name shown in the status snapshot
    pub name: String,
    /// Hunger right after hatching (clamped to 0-100)
    pub starting_hunger: i32,
    /// Hours granted per training session
    pub train_hours: i32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            name: "Doki".to_string(),
            starting_hunger: 50,
            train_hours: 5,
        }
    }
}

/// UI and window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial window width
    pub window_width: u32,
    /// Initial window height
    pub window_height: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log the full configuration at startup
    pub verbose_logging: bool,
    /// Emit a status snapshot as soon as the pet hatches
    pub show_status_on_start: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            show_status_on_start: true,
        }
    }
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `config.ron` file (if exists)
    /// 3. Environment variables prefixed with `DIGIPET_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("simulation.fixed_tick_duration", 0.5)?
            .set_default("pet.name", "Doki")?
            .set_default("pet.starting_hunger", 50_i64)?
            .set_default("pet.train_hours", 5_i64)?
            .set_default("ui.window_width", 800_i64)?
            .set_default("ui.window_height", 600_i64)?
            .set_default("debug.verbose_logging", false)?
            .set_default("debug.show_status_on_start", true)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("config")
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (DIGIPET_SIMULATION__FIXED_TICK_DURATION, etc.)
            .add_source(Environment::with_prefix("DIGIPET").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(self) -> Result<Self> {
        ensure!(
            self.simulation.fixed_tick_duration.is_finite()
                && self.simulation.fixed_tick_duration > 0.0,
            "simulation.fixed_tick_duration must be a positive number of seconds, got {}",
            self.simulation.fixed_tick_duration
        );
        ensure!(
            self.ui.window_width > 0 && self.ui.window_height > 0,
            "ui.window_width and ui.window_height must be positive"
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.simulation.fixed_tick_duration, 0.5);
        assert_eq!(config.pet.name, "Doki");
        assert_eq!(config.pet.starting_hunger, 50);
        assert_eq!(config.ui.window_width, 800);
        assert!(!config.debug.verbose_logging);
    }

    #[test]
    fn test_defaults_pass_validation() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_tick_duration() {
        let mut config = GameConfig::default();
        config.simulation.fixed_tick_duration = 0.0;
        assert!(config.clone().validate().is_err());

        config.simulation.fixed_tick_duration = -0.5;
        assert!(config.clone().validate().is_err());

        config.simulation.fixed_tick_duration = f32::NAN;
        assert!(config.validate().is_err());
    }
}
