//! Interactive 2D Stable Fluids solver: a velocity field and a passive dye
//! density on a fixed square grid, advanced by diffusion, projection and
//! semi-Lagrangian advection.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;
pub mod renderer;
pub mod solver;
pub mod state;

pub use error::{ConfigError, SolverError};
pub use solver::{FluidParams, FluidSolver};
pub use state::FluidGrid;
