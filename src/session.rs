// Open/ready bookkeeping for a single floating element.
//
// The host (an event loop, a UI framework) calls `request_update` from its
// resize/scroll/mutation callbacks and `flush` once per frame with fresh
// measurements. Requests between two flushes collapse into one pass, and
// closing the element drops anything still pending.

use tracing::debug;

use crate::anchor::{AnchorOptions, AnchoredPosition, resolve_anchored_position};
use crate::geometry::{Placement, Rect, Viewport};
use crate::styles::{ArrowStyles, FloatingStyles, Visibility};

#[derive(Debug, Clone)]
pub struct AnchorSession {
    options: AnchorOptions,
    is_open: bool,
    is_ready: bool,
    pending: bool,
    actual_placement: Placement,
    position: Option<AnchoredPosition>,
}

impl AnchorSession {
    pub fn new(options: AnchorOptions) -> Self {
        let actual_placement = options.placement;
        Self {
            options,
            is_open: false,
            is_ready: false,
            pending: false,
            actual_placement,
            position: None,
        }
    }

    pub fn options(&self) -> &AnchorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: AnchorOptions) {
        self.actual_placement = options.placement;
        self.options = options;
        self.request_update();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// True once a position has been computed for the current open period.
    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Placement actually used by the last pass; may differ from the requested one.
    pub fn actual_placement(&self) -> Placement {
        self.actual_placement
    }

    pub fn position(&self) -> Option<&AnchoredPosition> {
        self.position.as_ref()
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.pending = true;
    }

    pub fn close(&mut self) {
        if self.pending {
            debug!("dropping pending floating update on close");
        }
        self.is_open = false;
        self.is_ready = false;
        self.pending = false;
    }

    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    /// Mark the position stale. Ignored while closed.
    pub fn request_update(&mut self) {
        if self.is_open {
            self.pending = true;
        }
    }

    /// Recompute once if open and stale; otherwise do nothing.
    pub fn flush(
        &mut self,
        anchor: &Rect,
        floating: &Rect,
        viewport: &Viewport,
    ) -> Option<&AnchoredPosition> {
        if !self.is_open || !self.pending {
            return None;
        }
        debug!("flushing pending floating update");
        self.update_now(anchor, floating, viewport)
    }

    /// Recompute immediately while open, regardless of pending state.
    pub fn update_now(
        &mut self,
        anchor: &Rect,
        floating: &Rect,
        viewport: &Viewport,
    ) -> Option<&AnchoredPosition> {
        if !self.is_open {
            return None;
        }
        let resolved = resolve_anchored_position(anchor, floating, viewport, &self.options);
        self.actual_placement = resolved.placement;
        self.is_ready = true;
        self.pending = false;
        self.position = Some(resolved);
        self.position.as_ref()
    }

    pub fn floating_styles(&self) -> FloatingStyles {
        let (top, left) = self
            .position
            .map(|position| (position.top, position.left))
            .unwrap_or((0.0, 0.0));
        let visibility = if self.is_ready {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        FloatingStyles::new(top, left, visibility, self.options.z_index)
    }

    /// `None` until a position has been computed for the current open period.
    pub fn arrow_styles(&self) -> Option<ArrowStyles> {
        if !self.is_ready {
            return None;
        }
        let size = self.options.arrow.size()?;
        let arrow = self.position?.arrow?;
        Some(ArrowStyles::new(&arrow, size))
    }
}

impl Default for AnchorSession {
    fn default() -> Self {
        Self::new(AnchorOptions::default())
    }
}
