//! Pure positioning geometry.
//!
//! Everything here is a synchronous function of its arguments: rectangles and
//! viewport snapshots go in, coordinates come out. Nothing is cached between
//! calls, so a stale snapshot only produces a stale result.

mod arrow;
mod error;
mod flip;
mod placement;
mod types;
mod viewport;

pub use arrow::compute_arrow_position;
pub use error::PlacementError;
pub use flip::{
    candidate_placements, compute_position_with_flip, fits_in_viewport, opposite_placement,
};
pub use placement::{aligned_position, compute_position};
pub use types::{
    Alignment, ArrowPosition, BoundsCheck, DEFAULT_ARROW_SIZE, DEFAULT_OFFSET, DEFAULT_PADDING,
    Placement, Position, PositionConfig, PositionResult, Rect, ShiftResult, Shifted, Side,
    Viewport,
};
pub use viewport::{clamp_to_viewport, is_out_of_bounds, shift_to_viewport};
