//! Error types for dyeflow.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the checked injection variants on [`crate::solver::FluidSolver`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Cell coordinates outside the grid.
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Requested x (row) coordinate.
        x: usize,
        /// Requested y (column) coordinate.
        y: usize,
        /// Grid edge length.
        size: usize,
    },
}

/// Errors while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for [`crate::config::Config`].
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `physics.grid_size` leaves no interior cells.
    #[error("{path}: grid_size {size} is below the minimum of {min}")]
    GridSize { path: PathBuf, size: usize, min: usize },
}
