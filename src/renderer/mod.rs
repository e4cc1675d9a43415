mod color;

// Re-export public API
pub use color::{ColorMap, map_to_argb};

use crate::solver::FluidSolver;

/// Pixel layout of the square density view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Window edge in pixels.
    pub frame_size: usize,
    pub grid_size: usize,
    /// Densities at or above this value render at full intensity.
    pub display_max: f32,
    pub colormap: ColorMap,
}

impl RenderConfig {
    pub fn new(frame_size: usize, grid_size: usize, display_max: f32, colormap: ColorMap) -> Self {
        Self {
            frame_size: frame_size.max(grid_size),
            grid_size,
            display_max,
            colormap,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.frame_size * self.frame_size
    }
}

/// Rasterize the density field into a `0RGB` framebuffer.
///
/// Grid row 0 is the bottom row of the frame and column 0 the left edge, matching
/// the pointer mapping in [`crate::input::PointerDrag`].
pub fn render_into(buf: &mut Vec<u32>, solver: &FluidSolver, cfg: &RenderConfig) {
    let size = cfg.frame_size;
    let n = cfg.grid_size;
    buf.resize(cfg.pixel_count(), 0);

    let max = cfg.display_max;
    for py in 0..size {
        let row = n - 1 - py * n / size;
        let line = &mut buf[py * size..(py + 1) * size];
        for (px, pixel) in line.iter_mut().enumerate() {
            let col = px * n / size;
            let t = if max > 0.0 { solver.density(row, col).min(max) / max } else { 0.0 };
            *pixel = map_to_argb(t, cfg.colormap);
        }
    }
}
