/// Immutable physical parameters of one simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidParams {
    /// Dye diffusion rate (>= 0).
    pub diffusion: f32,
    /// Kinematic viscosity (>= 0).
    pub viscosity: f32,
    /// Fixed timestep (> 0).
    pub dt: f32,
}

/// Default Gauss-Seidel sweep count per relaxation solve.
pub const DEFAULT_ITERATIONS: usize = 16;

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            diffusion: 0.2,
            viscosity: 0.0,
            dt: 0.00001,
        }
    }
}

impl FluidParams {
    pub fn new(diffusion: f32, viscosity: f32, dt: f32) -> Self {
        Self { diffusion, viscosity, dt }
    }

    /// Diffusion coefficient `a = dt * rate * (n-2)^2` for a grid of edge `n`.
    pub fn relaxation_coefficient(rate: f32, dt: f32, n: usize) -> f32 {
        let interior = (n - 2) as f32;
        dt * rate * interior * interior
    }
}
