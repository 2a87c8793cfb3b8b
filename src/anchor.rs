use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::geometry::{
    ArrowPosition, DEFAULT_ARROW_SIZE, DEFAULT_OFFSET, DEFAULT_PADDING, Placement, PositionConfig,
    Rect, Shifted, Viewport, clamp_to_viewport, compute_arrow_position, compute_position,
    compute_position_with_flip, shift_to_viewport,
};

/// Whether the floating element carries an arrow, and how large it is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ArrowConfig {
    #[default]
    Disabled,
    Enabled {
        size: f32,
    },
}

impl ArrowConfig {
    pub fn enabled() -> Self {
        ArrowConfig::Enabled {
            size: DEFAULT_ARROW_SIZE,
        }
    }

    pub fn size(&self) -> Option<f32> {
        match self {
            ArrowConfig::Disabled => None,
            ArrowConfig::Enabled { size } => Some(*size),
        }
    }
}

/// Correction applied after placement (and flipping) to keep the element on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowStrategy {
    #[default]
    Clamp,
    Shift,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnchorOptions {
    pub placement: Placement,
    pub offset: f32,
    pub fallback_placements: Option<Vec<Placement>>,
    pub auto_flip: bool,
    pub padding: f32,
    pub overflow: OverflowStrategy,
    pub arrow: ArrowConfig,
    pub z_index: Option<i32>,
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            offset: DEFAULT_OFFSET,
            fallback_placements: None,
            auto_flip: true,
            padding: DEFAULT_PADDING,
            overflow: OverflowStrategy::default(),
            arrow: ArrowConfig::default(),
            z_index: None,
        }
    }
}

impl AnchorOptions {
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_fallbacks(mut self, fallbacks: Vec<Placement>) -> Self {
        self.fallback_placements = Some(fallbacks);
        self
    }

    pub fn with_auto_flip(mut self, auto_flip: bool) -> Self {
        self.auto_flip = auto_flip;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowStrategy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_arrow(mut self, arrow: ArrowConfig) -> Self {
        self.arrow = arrow;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn position_config(&self) -> PositionConfig {
        PositionConfig {
            placement: self.placement,
            offset: self.offset,
            fallback_placements: self.fallback_placements.clone(),
        }
    }
}

/// Final coordinates for a floating element after flipping and overflow correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchoredPosition {
    pub top: f32,
    pub left: f32,
    pub placement: Placement,
    /// Set only for [`OverflowStrategy::Shift`].
    pub shifted: Option<Shifted>,
    pub arrow: Option<ArrowPosition>,
}

/// Run one full positioning pass for a measured anchor/floating pair.
pub fn resolve_anchored_position(
    anchor: &Rect,
    floating: &Rect,
    viewport: &Viewport,
    options: &AnchorOptions,
) -> AnchoredPosition {
    let config = options.position_config();
    let raw = if options.auto_flip {
        compute_position_with_flip(anchor, floating, &config, viewport)
    } else {
        compute_position(anchor, floating, &config)
    };
    trace!(
        placement = %raw.placement,
        top = raw.top,
        left = raw.left,
        "raw floating position"
    );

    let (width, height) = (floating.width, floating.height);
    let (top, left, shifted) = match options.overflow {
        OverflowStrategy::Clamp => {
            let clamped =
                clamp_to_viewport(raw.top, raw.left, width, height, viewport, options.padding);
            (clamped.top, clamped.left, None)
        }
        OverflowStrategy::Shift => {
            let result =
                shift_to_viewport(raw.top, raw.left, width, height, viewport, options.padding);
            (result.top, result.left, Some(result.shifted))
        }
        OverflowStrategy::None => (raw.top, raw.left, None),
    };

    let arrow = options.arrow.size().map(|size| {
        compute_arrow_position(raw.placement, anchor, &floating.moved_to(top, left), size)
    });

    AnchoredPosition {
        top,
        left,
        placement: raw.placement,
        shifted,
        arrow,
    }
}
