// Viewport fitting: overflow detection plus the clamp and shift corrections.
// All three take an explicit padding that keeps the box away from the edges.

use super::types::{BoundsCheck, Position, ShiftResult, Shifted, Viewport};

/// Report which edges a `width` x `height` box at `(left, top)` crosses.
pub fn is_out_of_bounds(
    top: f32,
    left: f32,
    width: f32,
    height: f32,
    viewport: &Viewport,
    padding: f32,
) -> BoundsCheck {
    BoundsCheck {
        top: top < padding,
        right: left + width > viewport.width - padding,
        bottom: top + height > viewport.height - padding,
        left: left < padding,
    }
}

/// Hard-bound each axis into `[padding, dim - size - padding]`.
///
/// When the box is larger than the viewport the upper bound falls below the
/// lower one and wins.
pub fn clamp_to_viewport(
    top: f32,
    left: f32,
    width: f32,
    height: f32,
    viewport: &Viewport,
    padding: f32,
) -> Position {
    Position {
        top: clamp_axis(top, height, viewport.height, padding),
        left: clamp_axis(left, width, viewport.width, padding),
    }
}

fn clamp_axis(value: f32, size: f32, extent: f32, padding: f32) -> f32 {
    // Not `f32::clamp`: the bounds may cross.
    value.max(padding).min(extent - size - padding)
}

/// Nudge an axis back inside only when one of its two boundary tests fires.
pub fn shift_to_viewport(
    top: f32,
    left: f32,
    width: f32,
    height: f32,
    viewport: &Viewport,
    padding: f32,
) -> ShiftResult {
    let (left, x) = shift_axis(left, width, viewport.width, padding);
    let (top, y) = shift_axis(top, height, viewport.height, padding);
    ShiftResult {
        top,
        left,
        shifted: Shifted { x, y },
    }
}

fn shift_axis(value: f32, size: f32, extent: f32, padding: f32) -> (f32, bool) {
    if value < padding {
        (padding, true)
    } else if value + size > extent - padding {
        (extent - size - padding, true)
    } else {
        (value, false)
    }
}
