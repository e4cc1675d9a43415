use crate::state::idx;

/// Field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Density, pressure, divergence: zero-gradient on every wall.
    Scalar,
    /// Horizontal velocity: negated on the left/right walls.
    Vx,
    /// Vertical velocity: negated on the top/bottom walls.
    Vy,
}

/// Boundary condition handler for a closed box.
///   - `FieldType::Vx`: negate at left/right walls, copy at top/bottom
///   - `FieldType::Vy`: negate at top/bottom walls, copy at left/right
///   - `FieldType::Scalar`: copy neighbor everywhere (Neumann)
///
/// Corners are the mean of their two adjacent edge cells, for every field type.
pub fn set_bnd(field_type: FieldType, x: &mut [f32], n: usize) {
    let flip_y = field_type == FieldType::Vy;
    for i in 1..(n - 1) {
        let bottom = x[idx(i, 1, n)];
        let top = x[idx(i, n - 2, n)];
        x[idx(i, 0, n)] = if flip_y { -bottom } else { bottom };
        x[idx(i, n - 1, n)] = if flip_y { -top } else { top };
    }

    let flip_x = field_type == FieldType::Vx;
    for j in 1..(n - 1) {
        let left = x[idx(1, j, n)];
        let right = x[idx(n - 2, j, n)];
        x[idx(0, j, n)] = if flip_x { -left } else { left };
        x[idx(n - 1, j, n)] = if flip_x { -right } else { right };
    }

    x[idx(0, 0, n)] = 0.5 * (x[idx(1, 0, n)] + x[idx(0, 1, n)]);
    x[idx(0, n - 1, n)] = 0.5 * (x[idx(1, n - 1, n)] + x[idx(0, n - 2, n)]);
    x[idx(n - 1, 0, n)] = 0.5 * (x[idx(n - 2, 0, n)] + x[idx(n - 1, 1, n)]);
    x[idx(n - 1, n - 1, n)] = 0.5 * (x[idx(n - 2, n - 1, n)] + x[idx(n - 1, n - 2, n)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::N;

    /// Interior filled with a distinct value per cell so copies are traceable.
    fn ramp() -> Vec<f32> {
        let mut field = vec![0.0; N * N];
        for j in 1..(N - 1) {
            for i in 1..(N - 1) {
                field[idx(i, j, N)] = (i * 3 + j * 7) as f32 * 0.25 + 1.0;
            }
        }
        field
    }

    fn assert_corners(field: &[f32]) {
        let n = N;
        let corners = [
            (field[idx(0, 0, n)], field[idx(1, 0, n)], field[idx(0, 1, n)]),
            (field[idx(0, n - 1, n)], field[idx(1, n - 1, n)], field[idx(0, n - 2, n)]),
            (field[idx(n - 1, 0, n)], field[idx(n - 2, 0, n)], field[idx(n - 1, 1, n)]),
            (field[idx(n - 1, n - 1, n)], field[idx(n - 2, n - 1, n)], field[idx(n - 1, n - 2, n)]),
        ];
        for (corner, a, b) in corners {
            assert_eq!(corner, 0.5 * (a + b), "corner should average its edge neighbors");
        }
    }

    #[test]
    fn test_set_bnd_vx_negates_left_right() {
        let mut field = ramp();
        set_bnd(FieldType::Vx, &mut field, N);
        for j in 1..(N - 1) {
            assert_eq!(field[idx(0, j, N)], -field[idx(1, j, N)], "left wall should negate at y={}", j);
            assert_eq!(field[idx(N - 1, j, N)], -field[idx(N - 2, j, N)], "right wall should negate at y={}", j);
        }
        for i in 1..(N - 1) {
            assert_eq!(field[idx(i, 0, N)], field[idx(i, 1, N)], "bottom wall should copy at x={}", i);
            assert_eq!(field[idx(i, N - 1, N)], field[idx(i, N - 2, N)], "top wall should copy at x={}", i);
        }
    }

    #[test]
    fn test_set_bnd_vy_negates_top_bottom() {
        let mut field = ramp();
        set_bnd(FieldType::Vy, &mut field, N);
        for i in 1..(N - 1) {
            assert_eq!(field[idx(i, 0, N)], -field[idx(i, 1, N)], "bottom wall should negate at x={}", i);
            assert_eq!(field[idx(i, N - 1, N)], -field[idx(i, N - 2, N)], "top wall should negate at x={}", i);
        }
        for j in 1..(N - 1) {
            assert_eq!(field[idx(0, j, N)], field[idx(1, j, N)], "left wall should copy at y={}", j);
            assert_eq!(field[idx(N - 1, j, N)], field[idx(N - 2, j, N)], "right wall should copy at y={}", j);
        }
    }

    #[test]
    fn test_set_bnd_scalar_copies_neighbor() {
        let mut field = ramp();
        set_bnd(FieldType::Scalar, &mut field, N);
        for k in 1..(N - 1) {
            assert_eq!(field[idx(0, k, N)], field[idx(1, k, N)]);
            assert_eq!(field[idx(N - 1, k, N)], field[idx(N - 2, k, N)]);
            assert_eq!(field[idx(k, 0, N)], field[idx(k, 1, N)]);
            assert_eq!(field[idx(k, N - 1, N)], field[idx(k, N - 2, N)]);
        }
    }

    #[test]
    fn test_corners_average_for_every_field_type() {
        for field_type in [FieldType::Scalar, FieldType::Vx, FieldType::Vy] {
            let mut field = ramp();
            set_bnd(field_type, &mut field, N);
            assert_corners(&field);
        }
    }

    #[test]
    fn test_set_bnd_leaves_interior_untouched() {
        let original = ramp();
        let mut field = original.clone();
        set_bnd(FieldType::Vx, &mut field, N);
        for j in 1..(N - 1) {
            for i in 1..(N - 1) {
                assert_eq!(field[idx(i, j, N)], original[idx(i, j, N)]);
            }
        }
    }

    #[test]
    fn test_set_bnd_vx_corner_sign() {
        // Bottom-left corner under Vx: bottom edge copies (+), left edge negates (-).
        let n = 4;
        let mut field = vec![0.0; n * n];
        field[idx(1, 1, n)] = 2.0;
        set_bnd(FieldType::Vx, &mut field, n);
        assert_eq!(field[idx(1, 0, n)], 2.0);
        assert_eq!(field[idx(0, 1, n)], -2.0);
        assert_eq!(field[idx(0, 0, n)], 0.0);
    }
}
