/// Returns the number of lattice steps per axis for a cubic domain of
/// half-width `max_abs_value` sampled at `spacing`.
pub fn grid_size(max_abs_value: f32, spacing: f32) -> usize {
    (2.0 * max_abs_value / spacing).floor() as usize + 1
}

/// Generates a dense regular lattice of candidate points over the cubic
/// domain `[-max_abs_value, max_abs_value]^3`.
///
/// Points are emitted in nested index order (outer `i` along x, then `j`
/// along y, then `k` along z) with coordinate `index * spacing -
/// max_abs_value`. That order is what later assigns each surviving point its
/// sequential primitive index, so it must not change.
///
/// # Example
/// ```rust
/// use sirensdf::grid::sample_grid;
///
/// let points = sample_grid(1.0, 0.1);
/// assert_eq!(points.len(), 21 * 21 * 21);
/// assert_eq!(points[0], [-1.0, -1.0, -1.0]);
/// ```
///
/// # Panics
///
/// - Panics if `spacing` is not strictly positive
pub fn sample_grid(max_abs_value: f32, spacing: f32) -> Vec<[f32; 3]> {
    assert!(
        spacing > 0.0,
        "grid spacing must be strictly positive, got {}",
        spacing
    );

    let size = grid_size(max_abs_value, spacing);
    let mut points = Vec::with_capacity(size * size * size);

    for i in 0..size {
        let x = i as f32 * spacing - max_abs_value;
        for j in 0..size {
            let y = j as f32 * spacing - max_abs_value;
            for k in 0..size {
                let z = k as f32 * spacing - max_abs_value;
                points.push([x, y, z]);
            }
        }
    }

    points
}
