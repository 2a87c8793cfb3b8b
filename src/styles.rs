use serde::Serialize;
use std::fmt::Write as _;

use crate::geometry::{ArrowPosition, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// Style properties for the floating element. It is positioned against the
/// viewport and stays hidden until a position has been computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingStyles {
    pub position: &'static str,
    pub top: f32,
    pub left: f32,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl FloatingStyles {
    pub fn new(top: f32, left: f32, visibility: Visibility, z_index: Option<i32>) -> Self {
        Self {
            position: "fixed",
            top,
            left,
            visibility,
            z_index,
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!(
            "position: {}; top: {}px; left: {}px; visibility: {};",
            self.position,
            self.top,
            self.left,
            self.visibility.as_str()
        );
        if let Some(z_index) = self.z_index {
            let _ = write!(css, " z-index: {z_index};");
        }
        css
    }
}

/// Style properties for the arrow, absolutely positioned inside the floating
/// element and pushed out past its anchor-facing edge by its own size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowStyles {
    pub position: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    pub static_side: Side,
    pub static_offset: f32,
}

impl ArrowStyles {
    pub fn new(arrow: &ArrowPosition, size: f32) -> Self {
        Self {
            position: "absolute",
            left: arrow.left,
            top: arrow.top,
            static_side: arrow.static_side,
            static_offset: -size,
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("position: {};", self.position);
        if let Some(left) = self.left {
            let _ = write!(css, " left: {left}px;");
        }
        if let Some(top) = self.top {
            let _ = write!(css, " top: {top}px;");
        }
        let _ = write!(css, " {}: {}px;", self.static_side, self.static_offset);
        css
    }
}
