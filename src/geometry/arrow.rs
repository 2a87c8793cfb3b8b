use super::types::{ArrowPosition, Placement, Rect};

/// Offset of an arrow of `arrow_size` along the floating element's edge so it
/// points at the anchor's center.
///
/// The arrow sits on the side facing the anchor. Its offset is kept within
/// `[arrow_size, dim - 2 * arrow_size]` so the triangle never passes the
/// floating element's corner.
pub fn compute_arrow_position(
    placement: Placement,
    anchor: &Rect,
    floating: &Rect,
    arrow_size: f32,
) -> ArrowPosition {
    let static_side = placement.side.opposite();
    if placement.side.is_vertical() {
        let anchor_center = anchor.left() + anchor.width / 2.0;
        let offset = anchor_center - floating.left() - arrow_size / 2.0;
        ArrowPosition {
            left: Some(clamp_to_edge(offset, floating.width, arrow_size)),
            top: None,
            static_side,
        }
    } else {
        let anchor_center = anchor.top() + anchor.height / 2.0;
        let offset = anchor_center - floating.top() - arrow_size / 2.0;
        ArrowPosition {
            left: None,
            top: Some(clamp_to_edge(offset, floating.height, arrow_size)),
            static_side,
        }
    }
}

fn clamp_to_edge(offset: f32, edge_length: f32, arrow_size: f32) -> f32 {
    offset.max(arrow_size).min(edge_length - 2.0 * arrow_size)
}
