//! Engine configuration loaded from RON. Every field falls back to the
//! defaults in `constants`, so a config file only lists what it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// World size and generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub ground_height: i32,
    /// Generation seed. None = caller picks one (e.g. from the clock).
    pub seed: Option<u32>,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            depth: WORLD_DEPTH,
            ground_height: GROUND_HEIGHT,
            seed: None,
        }
    }
}

/// Camera projection and interaction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub fov_horizontal: f32,
    pub fov_vertical: f32,
    pub far_plane: f32,
    pub eye_height: f32,
    pub edge_threshold: f32,
    pub reach: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            fov_horizontal: FOV_HORIZONTAL,
            fov_vertical: FOV_VERTICAL,
            far_plane: FAR_PLANE,
            eye_height: EYE_HEIGHT,
            edge_threshold: EDGE_THRESHOLD,
            reach: REACH_DISTANCE,
        }
    }
}

/// Hit shading parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingSettings {
    pub fog_enabled: bool,
    pub fog_start: f32,
    pub fog_end: f32,
    /// Adjust the bright color bit by hit brightness.
    pub shading_enabled: bool,
}

impl Default for ShadingSettings {
    fn default() -> Self {
        Self {
            fog_enabled: true,
            fog_start: FOG_START,
            fog_end: FOG_END,
            shading_enabled: true,
        }
    }
}

impl ShadingSettings {
    /// Settings with fog turned off.
    pub fn without_fog() -> Self {
        Self {
            fog_enabled: false,
            ..Self::default()
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub world: WorldSettings,
    pub view: ViewSettings,
    pub shading: ShadingSettings,
}

impl EngineConfig {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        if w.width < 1 || w.height < 1 || w.depth < 1 {
            return Err(ConfigError::InvalidValue {
                field: "world",
                reason: format!("dimensions {}x{}x{} must all be >= 1", w.width, w.height, w.depth),
            });
        }
        if w.ground_height < 0 {
            return Err(ConfigError::InvalidValue {
                field: "world.ground_height",
                reason: format!("{} is negative", w.ground_height),
            });
        }

        let v = &self.view;
        if !(v.far_plane > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "view.far_plane",
                reason: format!("{} must be positive", v.far_plane),
            });
        }
        if !(v.reach > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "view.reach",
                reason: format!("{} must be positive", v.reach),
            });
        }
        if !(0.0..0.5).contains(&v.edge_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "view.edge_threshold",
                reason: format!("{} must be in [0, 0.5)", v.edge_threshold),
            });
        }

        let s = &self.shading;
        if s.fog_enabled && !(s.fog_end > s.fog_start) {
            return Err(ConfigError::InvalidValue {
                field: "shading.fog_end",
                reason: format!("{} must be greater than fog_start {}", s.fog_end, s.fog_start),
            });
        }
        Ok(())
    }
}

/// Parse and validate an engine config from a RON string.
pub fn load_config_from_str(ron_str: &str) -> Result<EngineConfig, ConfigError> {
    let options = ron::Options::default();
    let config: EngineConfig = options
        .from_str(ron_str)
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
