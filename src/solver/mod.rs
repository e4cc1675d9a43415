mod boundary;
mod core;
pub mod diagnostics;
mod params;

// Re-export public API
pub use boundary::{FieldType, set_bnd};
pub use self::core::{advect, diffuse, lin_solve, project};
pub use params::{DEFAULT_ITERATIONS, FluidParams};

use crate::error::SolverError;
use crate::state::FluidGrid;

/// Stable Fluids solver bound to one exclusively owned grid.
pub struct FluidSolver {
    grid: FluidGrid,
    iterations: usize,
}

impl FluidSolver {
    /// Take ownership of `grid`; `iterations` is the sweep count of every relaxation solve.
    pub fn new(grid: FluidGrid, iterations: usize) -> Self {
        tracing::debug!(
            size = grid.size(),
            iterations,
            diffusion = grid.params().diffusion,
            viscosity = grid.params().viscosity,
            dt = grid.params().dt,
            "fluid solver created"
        );
        Self { grid, iterations }
    }

    pub fn grid(&self) -> &FluidGrid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Linear cell index `x + y * N`.
    pub fn index(&self, x: usize, y: usize) -> usize {
        self.grid.idx(x, y)
    }

    /// Add dye at a cell. Negative amounts remove dye.
    pub fn add_dye(&mut self, x: usize, y: usize, amount: f32) {
        let i = self.grid.idx(x, y);
        self.grid.density[i] += amount;
    }

    /// Add a velocity impulse at a cell.
    pub fn add_velocity(&mut self, x: usize, y: usize, dx: f32, dy: f32) {
        let i = self.grid.idx(x, y);
        self.grid.vx[i] += dx;
        self.grid.vy[i] += dy;
    }

    /// [`Self::add_dye`] with a bounds check instead of a debug assertion.
    pub fn try_add_dye(&mut self, x: usize, y: usize, amount: f32) -> Result<(), SolverError> {
        self.check_bounds(x, y)?;
        self.add_dye(x, y, amount);
        Ok(())
    }

    /// [`Self::add_velocity`] with a bounds check instead of a debug assertion.
    pub fn try_add_velocity(&mut self, x: usize, y: usize, dx: f32, dy: f32) -> Result<(), SolverError> {
        self.check_bounds(x, y)?;
        self.add_velocity(x, y, dx, dy);
        Ok(())
    }

    /// Current dye density at a cell.
    pub fn density(&self, x: usize, y: usize) -> f32 {
        self.grid.density[self.grid.idx(x, y)]
    }

    /// Subtract `amount` from every density cell, clamping at zero.
    pub fn fade(&mut self, amount: f32) {
        for d in self.grid.density.iter_mut() {
            *d = (*d - amount).max(0.0);
        }
    }

    /// Advance the simulation by one timestep.
    pub fn step(&mut self) {
        let iter = self.iterations;
        let n = self.grid.size();
        let FluidParams { diffusion, viscosity, dt } = *self.grid.params();
        let FluidGrid { vx, vy, vx0, vy0, density, density0, .. } = &mut self.grid;

        // 1-2. Diffuse velocity: vx/vy are current, result lands in vx0/vy0.
        diffuse(FieldType::Vx, vx0, vx, viscosity, dt, iter, n);
        diffuse(FieldType::Vy, vy0, vy, viscosity, dt, iter, n);

        // 3. Project vx0/vy0; vx holds pressure, vy divergence (both scratch).
        project(vx0, vy0, vx, vy, iter, n);

        // 4-5. Advect velocity by itself: vx0/vy0 are both source and carrier.
        advect(FieldType::Vx, vx, vx0, vx0, vy0, dt, n);
        advect(FieldType::Vy, vy, vy0, vx0, vy0, dt, n);

        // 6. Project vx/vy again; vx0 holds pressure, vy0 divergence.
        project(vx, vy, vx0, vy0, iter, n);

        // 7. Diffuse dye into density0.
        diffuse(FieldType::Scalar, density0, density, diffusion, dt, iter, n);

        // 8. Advect dye back into density along the final velocity.
        advect(FieldType::Scalar, density, density0, vx, vy, dt, n);
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), SolverError> {
        if self.grid.contains(x, y) {
            Ok(())
        } else {
            Err(SolverError::OutOfBounds { x, y, size: self.grid.size() })
        }
    }
}
