use crate::solver::FluidParams;

/// Default grid edge length (cells per side, boundary ring included).
pub const N: usize = 64;

/// Smallest edge length with at least one interior cell.
pub const MIN_SIZE: usize = 3;

/// Grid state for one simulation: six N×N buffers plus immutable parameters.
///
/// The `*0` buffers are workspace. `FluidSolver::step` reuses them (and, at
/// times, the live velocity buffers) as scratch storage between stages.
pub struct FluidGrid {
    size: usize,
    params: FluidParams,
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,
    pub vx0: Vec<f32>,
    pub vy0: Vec<f32>,
    pub density: Vec<f32>,
    pub density0: Vec<f32>,
}

/// Convert 2D coordinates to a linear index: `x + y * n`.
/// No bounds handling; callers keep `0 <= x, y < n`.
#[inline(always)]
pub const fn idx(x: usize, y: usize, n: usize) -> usize {
    x + y * n
}

impl FluidGrid {
    /// Allocate a zero-filled grid of `size`×`size` cells.
    pub fn new(size: usize, params: FluidParams) -> Self {
        debug_assert!(size >= MIN_SIZE, "grid needs at least one interior cell, got size={size}");
        let cells = size * size;
        Self {
            size,
            params,
            vx: vec![0.0; cells],
            vy: vec![0.0; cells],
            vx0: vec![0.0; cells],
            vy0: vec![0.0; cells],
            density: vec![0.0; cells],
            density0: vec![0.0; cells],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn params(&self) -> &FluidParams {
        &self.params
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) outside {0}x{0} grid",
            self.size
        );
        idx(x, y, self.size)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }
}
