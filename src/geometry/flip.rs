// Auto-flip: try the requested placement, then the fallbacks, and keep the
// first whose box lies entirely inside the viewport.

use tracing::debug;

use super::placement::position_for;
use super::types::{Placement, PositionConfig, PositionResult, Rect, Viewport};

/// Mirror the side, keep the alignment (`left-end` -> `right-end`).
pub fn opposite_placement(placement: Placement) -> Placement {
    Placement::new(placement.side.opposite(), placement.alignment)
}

/// Requested placement first, then the configured fallbacks or, when none are
/// configured, the opposite placement.
pub fn candidate_placements(config: &PositionConfig) -> Vec<Placement> {
    let mut candidates = vec![config.placement];
    match &config.fallback_placements {
        Some(fallbacks) => candidates.extend(fallbacks.iter().copied()),
        None => candidates.push(opposite_placement(config.placement)),
    }
    candidates
}

/// Strict containment in `[0, width] x [0, height]`; no padding.
pub fn fits_in_viewport(top: f32, left: f32, width: f32, height: f32, viewport: &Viewport) -> bool {
    top >= 0.0 && left >= 0.0 && top + height <= viewport.height && left + width <= viewport.width
}

/// Ordered-candidate flip.
///
/// Returns the first candidate that fits. When none fits, the requested
/// placement is returned unshifted and the caller is expected to clamp or
/// shift it.
pub fn compute_position_with_flip(
    anchor: &Rect,
    floating: &Rect,
    config: &PositionConfig,
    viewport: &Viewport,
) -> PositionResult {
    for candidate in candidate_placements(config) {
        let result = position_for(anchor, floating, candidate, config.offset);
        if fits_in_viewport(
            result.top,
            result.left,
            floating.width,
            floating.height,
            viewport,
        ) {
            if candidate != config.placement {
                debug!(
                    requested = %config.placement,
                    resolved = %candidate,
                    "flipped floating element"
                );
            }
            return result;
        }
        debug!(
            placement = %candidate,
            top = result.top,
            left = result.left,
            "candidate overflows viewport"
        );
    }

    debug!(requested = %config.placement, "no candidate fits, keeping requested placement");
    position_for(anchor, floating, config.placement, config.offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::types::{Alignment, Side};

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn floating() -> Rect {
        Rect::sized(100.0, 50.0)
    }

    #[test]
    fn opposite_is_an_involution_that_keeps_alignment() {
        for placement in Placement::ALL {
            let opposite = opposite_placement(placement);
            assert_ne!(opposite.side, placement.side);
            assert_eq!(opposite.alignment, placement.alignment);
            assert_eq!(opposite_placement(opposite), placement);
        }
    }

    #[test]
    fn opposite_lookup_table() {
        assert_eq!(opposite_placement(Placement::TOP), Placement::BOTTOM);
        assert_eq!(opposite_placement(Placement::BOTTOM_START), Placement::TOP_START);
        assert_eq!(opposite_placement(Placement::LEFT), Placement::RIGHT);
        assert_eq!(opposite_placement(Placement::RIGHT_END), Placement::LEFT_END);
        assert_eq!(
            opposite_placement(Placement::new(Side::Left, Alignment::End)),
            Placement::new(Side::Right, Alignment::End)
        );
    }

    #[test]
    fn candidates_default_to_the_opposite() {
        let config = PositionConfig::new(Placement::TOP_START);
        assert_eq!(
            candidate_placements(&config),
            vec![Placement::TOP_START, Placement::BOTTOM_START]
        );
    }

    #[test]
    fn custom_fallbacks_replace_the_opposite() {
        let config = PositionConfig::new(Placement::TOP)
            .with_fallbacks(vec![Placement::RIGHT, Placement::BOTTOM, Placement::LEFT]);
        assert_eq!(
            candidate_placements(&config),
            vec![Placement::TOP, Placement::RIGHT, Placement::BOTTOM, Placement::LEFT]
        );
    }

    #[test]
    fn flips_from_bottom_to_top_when_no_space_below() {
        let anchor = Rect::new(100.0, 560.0, 80.0, 30.0);
        let result = compute_position_with_flip(
            &anchor,
            &floating(),
            &PositionConfig::new(Placement::BOTTOM),
            &viewport(),
        );
        assert_eq!(result.placement, Placement::TOP);
        assert_eq!(result.top, 560.0 - 50.0 - 8.0);
    }

    #[test]
    fn keeps_placement_when_space_is_available() {
        let anchor = Rect::new(100.0, 200.0, 80.0, 30.0);
        let result = compute_position_with_flip(
            &anchor,
            &floating(),
            &PositionConfig::new(Placement::BOTTOM),
            &viewport(),
        );
        assert_eq!(result.placement, Placement::BOTTOM);
        assert_eq!(result.top, 238.0);
    }

    #[test]
    fn walks_custom_fallbacks_in_order() {
        // Against the left edge near the top: top and left overflow, right fits.
        let anchor = Rect::new(0.0, 30.0, 40.0, 20.0);
        let config = PositionConfig::new(Placement::TOP)
            .with_fallbacks(vec![Placement::LEFT, Placement::RIGHT, Placement::BOTTOM]);
        let result = compute_position_with_flip(&anchor, &floating(), &config, &viewport());
        assert_eq!(result.placement, Placement::RIGHT);
        assert_eq!(result.left, 48.0);
        assert_eq!(result.top, 15.0);
    }

    #[test]
    fn falls_back_to_requested_placement_when_nothing_fits() {
        let anchor = Rect::new(100.0, 100.0, 80.0, 40.0);
        let huge = Rect::sized(1000.0, 1000.0);
        let result = compute_position_with_flip(
            &anchor,
            &huge,
            &PositionConfig::new(Placement::BOTTOM_END),
            &viewport(),
        );
        assert_eq!(result.placement, Placement::BOTTOM_END);
        assert_eq!(result.top, 148.0);
        assert_eq!(result.left, 100.0 + 80.0 - 1000.0);
    }

    #[test]
    fn containment_is_checked_on_every_edge_not_just_the_side() {
        // Below has room vertically but the box sticks out to the left; above
        // is cut off. Nothing fits, so the requested placement comes back.
        let anchor = Rect::new(0.0, 10.0, 20.0, 20.0);
        let result = compute_position_with_flip(
            &anchor,
            &floating(),
            &PositionConfig::new(Placement::BOTTOM),
            &viewport(),
        );
        assert_eq!(result.placement, Placement::BOTTOM);
        assert!(result.left < 0.0);
    }

    #[test]
    fn fits_uses_the_raw_viewport_edges() {
        let vp = viewport();
        assert!(fits_in_viewport(0.0, 0.0, 800.0, 600.0, &vp));
        assert!(!fits_in_viewport(-0.5, 0.0, 10.0, 10.0, &vp));
        assert!(!fits_in_viewport(0.0, 791.0, 10.0, 10.0, &vp));
    }
}
