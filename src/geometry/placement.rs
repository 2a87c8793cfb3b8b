use super::types::{Alignment, Placement, PositionConfig, PositionResult, Rect, Side};

/// Cross-axis coordinate of the floating element for the given alignment.
pub fn aligned_position(
    anchor_start: f32,
    anchor_size: f32,
    floating_size: f32,
    alignment: Alignment,
) -> f32 {
    match alignment {
        Alignment::Start => anchor_start,
        Alignment::End => anchor_start + anchor_size - floating_size,
        Alignment::Center => anchor_start + (anchor_size - floating_size) / 2.0,
    }
}

/// Position the floating element next to the anchor for `config.placement`.
///
/// Pure relative arithmetic: no bounds checking is done, and the result may be
/// negative or off-screen.
pub fn compute_position(anchor: &Rect, floating: &Rect, config: &PositionConfig) -> PositionResult {
    position_for(anchor, floating, config.placement, config.offset)
}

pub(crate) fn position_for(
    anchor: &Rect,
    floating: &Rect,
    placement: Placement,
    offset: f32,
) -> PositionResult {
    let alignment = placement.alignment;
    let (top, left) = match placement.side {
        Side::Top => (
            anchor.top() - floating.height - offset,
            aligned_position(anchor.left(), anchor.width, floating.width, alignment),
        ),
        Side::Bottom => (
            anchor.bottom() + offset,
            aligned_position(anchor.left(), anchor.width, floating.width, alignment),
        ),
        Side::Left => (
            aligned_position(anchor.top(), anchor.height, floating.height, alignment),
            anchor.left() - floating.width - offset,
        ),
        Side::Right => (
            aligned_position(anchor.top(), anchor.height, floating.height, alignment),
            anchor.right() + offset,
        ),
    };
    PositionResult {
        top,
        left,
        placement,
    }
}
