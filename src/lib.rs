//! Anchor positioning for floating elements: tooltips, dropdowns and popovers.
//!
//! The [`geometry`] module is the pure engine. [`anchor`] chains it into a full
//! positioning pass and [`session`] tracks open/ready state and coalesces
//! recomputation for a host event loop.

pub mod anchor;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dump;
pub mod geometry;
pub mod scenario;
pub mod session;
pub mod styles;

pub use anchor::{
    AnchorOptions, AnchoredPosition, ArrowConfig, OverflowStrategy, resolve_anchored_position,
};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ArrowSetting, Config, OptionOverrides, load_config, parse_config};
pub use dump::{PositionDump, write_position_dump};
pub use geometry::{
    Alignment, ArrowPosition, BoundsCheck, Placement, PlacementError, Position, PositionConfig,
    PositionResult, Rect, ShiftResult, Shifted, Side, Viewport, clamp_to_viewport,
    compute_arrow_position, compute_position, compute_position_with_flip, is_out_of_bounds,
    opposite_placement, shift_to_viewport,
};
pub use scenario::{Scenario, parse_scenarios};
pub use session::AnchorSession;
pub use styles::{ArrowStyles, FloatingStyles, Visibility};
