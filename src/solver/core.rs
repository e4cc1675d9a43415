use crate::state::idx;
use super::boundary::{FieldType, set_bnd};
use super::params::FluidParams;

/// Gauss-Seidel iterative linear solver.
/// Solves: x[i,j] = (x0[i,j] + a * (neighbors)) / c
///
/// Sweeps run in place, rows outer and columns inner, so each update sees
/// neighbors already relaxed in the same sweep.
pub fn lin_solve(field_type: FieldType, x: &mut [f32], x0: &[f32], a: f32, c: f32, iter: usize, n: usize) {
    let c_inv = 1.0 / c;
    for _ in 0..iter {
        for j in 1..(n - 1) {
            for i in 1..(n - 1) {
                let neighbors = x[idx(i + 1, j, n)]
                    + x[idx(i - 1, j, n)]
                    + x[idx(i, j + 1, n)]
                    + x[idx(i, j - 1, n)];
                x[idx(i, j, n)] = (x0[idx(i, j, n)] + a * neighbors) * c_inv;
            }
        }
        set_bnd(field_type, x, n);
    }
}

/// Implicit diffusion step.
/// a = dt * diff * (N-2)^2, c = 1 + 6a
///
/// `x` is not seeded from `x0`: relaxation starts from whatever `x` holds.
pub fn diffuse(field_type: FieldType, x: &mut [f32], x0: &[f32], diff: f32, dt: f32, iter: usize, n: usize) {
    let a = FluidParams::relaxation_coefficient(diff, dt, n);
    // Six-neighbor constant, kept on purpose (see DESIGN.md).
    lin_solve(field_type, x, x0, a, 1.0 + 6.0 * a, iter, n);
}

/// Semi-Lagrangian advection: traces cell centers backwards through the velocity field
/// and bilinearly samples `d0` at the departure point.
pub fn advect(field_type: FieldType, d: &mut [f32], d0: &[f32], vx: &[f32], vy: &[f32], dt: f32, n: usize) {
    let dt0 = dt * (n - 2) as f32;
    // Keeps x0 + 1 and y0 + 1 inside the grid.
    let hi = n as f32 - 1.5;

    for j in 1..(n - 1) {
        for i in 1..(n - 1) {
            let ii = idx(i, j, n);
            let x = (i as f32 - dt0 * vx[ii]).clamp(0.5, hi);
            let y = (j as f32 - dt0 * vy[ii]).clamp(0.5, hi);

            let x0 = x.floor();
            let y0 = y.floor();
            let s1 = x - x0;
            let s0 = 1.0 - s1;
            let t1 = y - y0;
            let t0 = 1.0 - t1;

            let i0 = x0 as usize;
            let i1 = i0 + 1;
            let j0 = y0 as usize;
            let j1 = j0 + 1;

            d[ii] = s0 * (t0 * d0[idx(i0, j0, n)] + t1 * d0[idx(i0, j1, n)])
                + s1 * (t0 * d0[idx(i1, j0, n)] + t1 * d0[idx(i1, j1, n)]);
        }
    }
    set_bnd(field_type, d, n);
}

/// Pressure projection: removes the divergent part of (vx, vy).
/// `p` and `div` are scratch buffers; their prior contents are discarded.
pub fn project(vx: &mut [f32], vy: &mut [f32], p: &mut [f32], div: &mut [f32], iter: usize, n: usize) {
    let n_f = n as f32;

    for j in 1..(n - 1) {
        for i in 1..(n - 1) {
            div[idx(i, j, n)] = -0.5
                * (vx[idx(i + 1, j, n)] - vx[idx(i - 1, j, n)]
                    + vy[idx(i, j + 1, n)] - vy[idx(i, j - 1, n)])
                / n_f;
            p[idx(i, j, n)] = 0.0;
        }
    }
    set_bnd(FieldType::Scalar, div, n);
    set_bnd(FieldType::Scalar, p, n);

    lin_solve(FieldType::Scalar, p, div, 1.0, 6.0, iter, n);

    for j in 1..(n - 1) {
        for i in 1..(n - 1) {
            vx[idx(i, j, n)] -= 0.5 * (p[idx(i + 1, j, n)] - p[idx(i - 1, j, n)]) * n_f;
            vy[idx(i, j, n)] -= 0.5 * (p[idx(i, j + 1, n)] - p[idx(i, j - 1, n)]) * n_f;
        }
    }
    set_bnd(FieldType::Vx, vx, n);
    set_bnd(FieldType::Vy, vy, n);
}
