use crate::config::InputConfig;
use crate::solver::FluidSolver;

/// One dye + force injection produced by a pointer drag.
#[derive(Debug, Clone, PartialEq)]
pub struct Injection {
    /// Grid row, counted from the bottom of the window.
    pub row: usize,
    /// Grid column, counted from the left of the window.
    pub col: usize,
    pub dye: f32,
    pub force_x: f32,
    pub force_y: f32,
}

impl Injection {
    pub fn apply(&self, solver: &mut FluidSolver) {
        solver.add_dye(self.row, self.col, self.dye);
        solver.add_velocity(self.row, self.col, self.force_x, self.force_y);
    }
}

/// Tracks a left-button drag in window pixel coordinates (origin top-left).
#[derive(Debug, Default)]
pub struct PointerDrag {
    prev: Option<(i32, i32)>,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.prev.is_some()
    }

    pub fn press(&mut self, x: i32, y: i32) {
        self.prev = Some((x, y));
    }

    pub fn release(&mut self) {
        self.prev = None;
    }

    /// Pointer moved to `(x, y)` while held.
    ///
    /// Returns `None` when no drag is active or the pointer is not strictly inside
    /// the `window_size` square; the previous position is left unchanged then.
    pub fn drag(&mut self, x: i32, y: i32, window_size: usize, grid_size: usize, input: &InputConfig) -> Option<Injection> {
        let (prev_x, prev_y) = self.prev?;
        let w = window_size as i32;
        if !(x > 0 && y > 0 && x < w && y < w) {
            return None;
        }
        let n = grid_size as i32;
        let col = (x * n / w) as usize;
        let row = ((w - y) * n / w) as usize;
        self.prev = Some((x, y));
        Some(Injection {
            row,
            col,
            dye: input.dye_amount,
            // Screen y grows downward while grid rows grow upward.
            force_x: -((y - prev_y) as f32) * input.force_scale,
            force_y: (x - prev_x) as f32 * input.force_scale,
        })
    }
}
