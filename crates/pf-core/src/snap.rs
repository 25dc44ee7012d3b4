//! Grid snapping: quantize a coordinate to the nearest grid multiple.

/// Round `value` to the nearest multiple of `grid_size`.
///
/// Ties (exact half-grid offsets) round away from zero, so `25.0` with a
/// grid of 10 snaps to `30.0` and `-25.0` snaps to `-30.0`. A grid size of
/// zero or less disables snapping and returns the value unchanged.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}
