use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::renderer::ColorMap;
use crate::solver::{DEFAULT_ITERATIONS, FluidParams};
use crate::state::{MIN_SIZE, N};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_PATH: &str = "dyeflow.yaml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub diffusion: f32,
    pub viscosity: f32,
    pub dt: f32,
    pub iterations: usize,
    pub grid_size: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub window_size: usize,
    pub target_fps: usize,
    pub steps_per_frame: usize,
    /// Densities at or above this render at full intensity.
    pub display_max: f32,
    pub palette: ColorMap,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Dye added per pointer-drag event.
    pub dye_amount: f32,
    /// Velocity added per pixel of pointer motion.
    pub force_scale: f32,
    /// Density subtracted from every cell each frame (0 disables).
    pub fade: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let params = FluidParams::default();
        Self {
            diffusion: params.diffusion,
            viscosity: params.viscosity,
            dt: params.dt,
            iterations: DEFAULT_ITERATIONS,
            grid_size: N,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_size: 512,
            target_fps: 60,
            steps_per_frame: 1,
            display_max: 0.99,
            palette: ColorMap::Ink,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dye_amount: 50.0,
            force_scale: 10000.0,
            fade: 0.0,
        }
    }
}

impl PhysicsConfig {
    pub fn params(&self) -> FluidParams {
        FluidParams::new(self.diffusion, self.viscosity, self.dt)
    }
}

/// Parse a config file. A missing file is not an error and yields defaults.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: Config = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if cfg.physics.grid_size < MIN_SIZE {
        return Err(ConfigError::GridSize {
            path: path.to_path_buf(),
            size: cfg.physics.grid_size,
            min: MIN_SIZE,
        });
    }
    Ok(cfg)
}

/// Like [`load_from`], but falls back to defaults with a warning on any error.
pub fn load(path: Option<&Path>) -> Config {
    let path = path.unwrap_or(Path::new(DEFAULT_PATH));
    match load_from(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("{e}; using defaults");
            Config::default()
        }
    }
}
