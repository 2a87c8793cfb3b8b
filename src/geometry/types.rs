use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PlacementError;

/// Gap between anchor and floating element when none is configured.
pub const DEFAULT_OFFSET: f32 = 8.0;
/// Safety margin kept between the floating element and the viewport edges.
pub const DEFAULT_PADDING: f32 = 8.0;
pub const DEFAULT_ARROW_SIZE: f32 = 8.0;

/// Axis-aligned box in viewport-relative pixels, as measured from a live element.
///
/// Deserializes from a bounding-client-rect shape: `x`/`y` or `left`/`top`
/// (both may be present), with `right`/`bottom` tolerated and ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RectInput")]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Deserialize)]
struct RectInput {
    x: Option<f32>,
    y: Option<f32>,
    left: Option<f32>,
    top: Option<f32>,
    width: f32,
    height: f32,
}

impl From<RectInput> for Rect {
    fn from(input: RectInput) -> Self {
        Rect::new(
            input.x.or(input.left).unwrap_or(0.0),
            input.y.or(input.top).unwrap_or(0.0),
            input.width,
            input.height,
        )
    }
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect with only a size, placed at the origin.
    pub const fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Same size, moved so its top-left corner sits at `(left, top)`.
    pub fn moved_to(&self, top: f32, left: f32) -> Self {
        Self::new(left, top, self.width, self.height)
    }
}

/// Visible window bounds. Scroll offsets are carried for callers; the geometry
/// functions never apply them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub scroll_x: f32,
    #[serde(default)]
    pub scroll_y: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Top and bottom placements stack the floating element vertically, so
    /// alignment runs along the horizontal axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(PlacementError::UnknownSide(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

/// Side plus alignment. The textual form is `side` for centered placements and
/// `side-start` / `side-end` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Placement {
    pub side: Side,
    pub alignment: Alignment,
}

impl Placement {
    pub const TOP: Self = Self::new(Side::Top, Alignment::Center);
    pub const TOP_START: Self = Self::new(Side::Top, Alignment::Start);
    pub const TOP_END: Self = Self::new(Side::Top, Alignment::End);
    pub const BOTTOM: Self = Self::new(Side::Bottom, Alignment::Center);
    pub const BOTTOM_START: Self = Self::new(Side::Bottom, Alignment::Start);
    pub const BOTTOM_END: Self = Self::new(Side::Bottom, Alignment::End);
    pub const LEFT: Self = Self::new(Side::Left, Alignment::Center);
    pub const LEFT_START: Self = Self::new(Side::Left, Alignment::Start);
    pub const LEFT_END: Self = Self::new(Side::Left, Alignment::End);
    pub const RIGHT: Self = Self::new(Side::Right, Alignment::Center);
    pub const RIGHT_START: Self = Self::new(Side::Right, Alignment::Start);
    pub const RIGHT_END: Self = Self::new(Side::Right, Alignment::End);

    pub const ALL: [Self; 12] = [
        Self::TOP,
        Self::TOP_START,
        Self::TOP_END,
        Self::BOTTOM,
        Self::BOTTOM_START,
        Self::BOTTOM_END,
        Self::LEFT,
        Self::LEFT_START,
        Self::LEFT_END,
        Self::RIGHT,
        Self::RIGHT_START,
        Self::RIGHT_END,
    ];

    pub const fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::BOTTOM
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Alignment::Center => write!(f, "{}", self.side),
            Alignment::Start => write!(f, "{}-start", self.side),
            Alignment::End => write!(f, "{}-end", self.side),
        }
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PlacementError::Empty);
        }
        let (side, alignment) = match trimmed.split_once('-') {
            Some((side, "start")) => (side, Alignment::Start),
            Some((side, "end")) => (side, Alignment::End),
            Some((_, other)) => return Err(PlacementError::UnknownAlignment(other.to_string())),
            None => (trimmed, Alignment::Center),
        };
        Ok(Self::new(side.parse()?, alignment))
    }
}

impl TryFrom<String> for Placement {
    type Error = PlacementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(value: Placement) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionConfig {
    pub placement: Placement,
    /// Pixel gap between anchor and floating element along the placement axis.
    pub offset: f32,
    /// Placements tried, in order, after the requested one. `None` means the
    /// opposite placement.
    pub fallback_placements: Option<Vec<Placement>>,
}

impl PositionConfig {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            offset: DEFAULT_OFFSET,
            fallback_placements: None,
        }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_fallbacks(mut self, fallbacks: Vec<Placement>) -> Self {
        self.fallback_placements = Some(fallbacks);
        self
    }
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self::new(Placement::default())
    }
}

/// Coordinates for the floating element plus the placement actually used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionResult {
    pub top: f32,
    pub left: f32,
    pub placement: Placement,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

/// Which viewport edges a box overflows. Several may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoundsCheck {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BoundsCheck {
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Shifted {
    pub x: bool,
    pub y: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftResult {
    pub top: f32,
    pub left: f32,
    pub shifted: Shifted,
}

/// Offset of the arrow along the floating element's edge. Exactly one of
/// `left` / `top` is set, depending on the placement axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowPosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    pub static_side: Side,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_round_trips_through_text() {
        for placement in Placement::ALL {
            let text = placement.to_string();
            assert_eq!(text.parse::<Placement>().unwrap(), placement, "{text}");
        }
    }

    #[test]
    fn placement_text_forms() {
        assert_eq!(Placement::BOTTOM.to_string(), "bottom");
        assert_eq!(Placement::LEFT_END.to_string(), "left-end");
        assert_eq!(
            "top-start".parse::<Placement>().unwrap(),
            Placement::new(Side::Top, Alignment::Start)
        );
    }

    #[test]
    fn placement_rejects_unknown_values() {
        assert_eq!(
            "middle".parse::<Placement>(),
            Err(PlacementError::UnknownSide("middle".to_string()))
        );
        assert_eq!(
            "bottom-center".parse::<Placement>(),
            Err(PlacementError::UnknownAlignment("center".to_string()))
        );
        assert_eq!("".parse::<Placement>(), Err(PlacementError::Empty));
    }

    #[test]
    fn placement_deserializes_from_string() {
        let placement: Placement = serde_json::from_str("\"right-start\"").unwrap();
        assert_eq!(placement, Placement::RIGHT_START);
        assert!(serde_json::from_str::<Placement>("\"diagonal\"").is_err());
        assert_eq!(
            serde_json::to_string(&Placement::TOP_END).unwrap(),
            "\"top-end\""
        );
    }

    #[test]
    fn rect_edges_follow_origin_and_size() {
        let rect = Rect::new(100.0, 100.0, 80.0, 40.0);
        assert_eq!(rect.top(), 100.0);
        assert_eq!(rect.left(), 100.0);
        assert_eq!(rect.right(), 180.0);
        assert_eq!(rect.bottom(), 140.0);
    }

    #[test]
    fn rect_accepts_top_left_aliases_and_bare_sizes() {
        let rect: Rect =
            serde_json::from_str(r#"{"left": 10, "top": 20, "width": 30, "height": 40}"#).unwrap();
        assert_eq!(rect, Rect::new(10.0, 20.0, 30.0, 40.0));
        let sized: Rect = serde_json::from_str(r#"{"width": 120, "height": 50}"#).unwrap();
        assert_eq!(sized, Rect::sized(120.0, 50.0));
    }

    #[test]
    fn rect_accepts_full_bounding_client_rect() {
        let rect: Rect = serde_json::from_str(
            r#"{"x": 100, "y": 100, "width": 80, "height": 40,
                "top": 100, "left": 100, "right": 180, "bottom": 140}"#,
        )
        .unwrap();
        assert_eq!(rect, Rect::new(100.0, 100.0, 80.0, 40.0));
        assert_eq!(rect.right(), 180.0);
    }

    #[test]
    fn rect_prefers_x_y_over_left_top() {
        let rect: Rect = serde_json::from_str(
            r#"{"x": 5, "y": 6, "left": 50, "top": 60, "width": 1, "height": 2}"#,
        )
        .unwrap();
        assert_eq!(rect, Rect::new(5.0, 6.0, 1.0, 2.0));
    }

    #[test]
    fn alignment_does_not_change_side() {
        for placement in Placement::ALL {
            let start = Placement::new(placement.side, Alignment::Start);
            assert_eq!(start.side, placement.side);
        }
    }
}
