//! Runner configuration (defaults match the original tuning, overridable from TOML)

use mote_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the runner simulation. All units are surface pixels and ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Initial vertical velocity of a jump (negative = up)
    pub jump_force: f32,
    /// Upward velocity clamp applied when the jump key is released early
    pub jump_cutoff: f32,
    /// Horizontal scroll speed at session start
    pub base_speed: f32,
    /// Speed gained every tick — the difficulty ramp
    pub speed_increment: f32,
    /// Ground level (top of the player when standing)
    pub ground_y: f32,
    /// Base period of the obstacle spawn timer, in ticks
    pub spawn_rate: u32,
    /// Probability an elapsed obstacle timer actually spawns
    pub obstacle_chance: f32,
    /// Fixed period of the collectible spawn timer, in ticks
    pub collectible_interval: u32,
    /// Probability an elapsed collectible timer actually spawns
    pub collectible_chance: f32,
    /// Margin past the left edge at which obstacles are recycled
    pub removal_margin: f32,
    /// Simulation surface size
    pub surface_width: f32,
    pub surface_height: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            jump_force: -14.0,
            jump_cutoff: -5.0,
            base_speed: 5.0,
            speed_increment: 0.001,
            ground_y: 320.0,
            spawn_rate: 100,
            obstacle_chance: 0.7,
            collectible_interval: 80,
            collectible_chance: 0.5,
            removal_margin: 50.0,
            surface_width: 800.0,
            surface_height: 450.0,
        }
    }
}

impl RunnerConfig {
    /// Load a config from a TOML file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
