use crate::state::{FluidGrid, idx};

/// Sum of the live density buffer over every cell, walls included.
pub fn total_density(grid: &FluidGrid) -> f32 {
    grid.density.iter().sum()
}

/// Compute volume-averaged kinetic energy over interior cells: KE = 0.5 * <vx² + vy²>.
pub fn compute_kinetic_energy(grid: &FluidGrid) -> f32 {
    let n = grid.size();
    let mut sum = 0.0;
    let mut count = 0usize;
    for j in 1..(n - 1) {
        for i in 1..(n - 1) {
            let ii = idx(i, j, n);
            sum += grid.vx[ii] * grid.vx[ii] + grid.vy[ii] * grid.vy[ii];
            count += 1;
        }
    }
    if count > 0 { 0.5 * sum / count as f32 } else { 0.0 }
}

/// Largest absolute central-difference divergence over interior cells.
pub fn max_divergence(grid: &FluidGrid) -> f32 {
    let n = grid.size();
    let (vx, vy) = (&grid.vx, &grid.vy);
    let mut max = 0.0_f32;
    for j in 1..(n - 1) {
        for i in 1..(n - 1) {
            let d = 0.5
                * (vx[idx(i + 1, j, n)] - vx[idx(i - 1, j, n)] + vy[idx(i, j + 1, n)]
                    - vy[idx(i, j - 1, n)]);
            max = max.max(d.abs());
        }
    }
    max
}

/// Whether any live buffer holds a NaN or infinity.
pub fn has_non_finite(grid: &FluidGrid) -> bool {
    [&grid.vx, &grid.vy, &grid.density]
        .iter()
        .any(|buf| buf.iter().any(|v| !v.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FluidParams;
    use crate::state::N;

    fn grid() -> FluidGrid {
        FluidGrid::new(N, FluidParams::default())
    }

    #[test]
    fn test_total_density_sums_all_cells() {
        let mut g = grid();
        g.density[idx(0, 0, N)] = 1.5;
        g.density[idx(10, 20, N)] = 2.5;
        assert_eq!(total_density(&g), 4.0);
    }

    #[test]
    fn test_kinetic_energy_zero() {
        let g = grid();
        let ke = compute_kinetic_energy(&g);
        assert!(ke.abs() < 1e-15, "KE should be 0 with no flow, got {}", ke);
    }

    #[test]
    fn test_kinetic_energy_uniform_flow() {
        let mut g = grid();
        g.vx.fill(1.0);
        let ke = compute_kinetic_energy(&g);
        // Interior cells: vx=1 → KE = 0.5 * 1^2 = 0.5
        assert!((ke - 0.5).abs() < 1e-6, "KE should be 0.5, got {}", ke);
    }

    #[test]
    fn test_max_divergence_uniform_flow_is_zero() {
        let mut g = grid();
        g.vx.fill(2.0);
        g.vy.fill(-1.0);
        assert_eq!(max_divergence(&g), 0.0);
    }

    #[test]
    fn test_max_divergence_source() {
        let mut g = grid();
        let mid = N / 2;
        g.vx[idx(mid + 1, mid, N)] = 1.0;
        g.vx[idx(mid - 1, mid, N)] = -1.0;
        assert_eq!(max_divergence(&g), 1.0);
    }

    #[test]
    fn test_has_non_finite() {
        let mut g = grid();
        assert!(!has_non_finite(&g));
        g.density[5] = f32::NAN;
        assert!(has_non_finite(&g));
    }
}
