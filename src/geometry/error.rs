use thiserror::Error;

/// Raised when text does not name one of the twelve placements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("placement is empty")]
    Empty,
    #[error("unknown placement side `{0}` (expected top, bottom, left or right)")]
    UnknownSide(String),
    #[error("unknown placement alignment `{0}` (expected start or end)")]
    UnknownAlignment(String),
}
