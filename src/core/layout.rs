use ordered_float::OrderedFloat;

/// Minimum horizontal room reserved for one time-axis label.
pub const X_TICK_SPACING_PX: f64 = 160.0;
/// Time axes always show at least this many ticks.
pub const MIN_X_TICKS: usize = 3;
/// Minimum vertical room reserved for one value-axis label.
pub const Y_TICK_SPACING_PX: f64 = 50.0;
/// Value axes always show at least this many ticks.
pub const MIN_Y_TICKS: usize = 2;
/// At or above this device pixel ratio strokes are crisp without snapping.
pub const SNAP_PIXEL_RATIO_THRESHOLD: f64 = 2.0;

/// Pushes positions apart so neighbours are at least `min_gap` apart.
///
/// Positions are processed in ascending order (ties keep input order) and
/// only ever move towards larger values; the result is returned in input
/// order.
#[must_use]
pub fn calculate_shifted_positions(positions: &[f64], min_gap: f64) -> Vec<f64> {
    let mut order: Vec<usize> = (0..positions.len()).collect();
    order.sort_by_key(|&i| OrderedFloat(positions[i]));

    let mut shifted = positions.to_vec();
    let mut previous: Option<f64> = None;
    for index in order {
        let mut position = positions[index];
        if let Some(previous) = previous {
            if position - previous < min_gap {
                position = previous + min_gap;
            }
        }
        shifted[index] = position;
        previous = Some(position);
    }
    shifted
}

/// Number of time-axis ticks that fit in `width` pixels.
#[must_use]
pub fn get_num_x_ticks(width: f64) -> usize {
    if !width.is_finite() {
        return MIN_X_TICKS;
    }
    ((width.abs() / X_TICK_SPACING_PX).floor() as usize).max(MIN_X_TICKS)
}

/// Number of value-axis ticks that fit in `height` pixels.
#[must_use]
pub fn get_num_y_ticks(height: f64) -> usize {
    if !height.is_finite() {
        return MIN_Y_TICKS;
    }
    ((height.abs() / Y_TICK_SPACING_PX).floor() as usize).max(MIN_Y_TICKS)
}

/// Snaps a coordinate to the centre of a device pixel so 1px strokes stay sharp.
///
/// Skipped at high pixel ratios where sub-pixel rendering is already crisp.
#[must_use]
pub fn align(value: f64, pixel_ratio: f64) -> f64 {
    if !(pixel_ratio > 0.0) || pixel_ratio >= SNAP_PIXEL_RATIO_THRESHOLD {
        return value;
    }
    ((value * pixel_ratio).floor() + 0.5) / pixel_ratio
}

/// Rounds a coordinate to the nearest device pixel boundary.
#[must_use]
pub fn snap_to_device(value: f64, pixel_ratio: f64) -> f64 {
    let pixel_ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
    (value * pixel_ratio).round() / pixel_ratio
}

/// Snaps a span to whole device pixels, never below one device pixel.
#[must_use]
pub fn align_span(span: f64, pixel_ratio: f64) -> f64 {
    let pixel_ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
    ((span * pixel_ratio).round() / pixel_ratio).max(1.0 / pixel_ratio)
}
