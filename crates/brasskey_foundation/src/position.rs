//! 2D placement for scene objects.

use serde::{Deserialize, Serialize};

/// A 2D point in scene coordinates.
///
/// Positions are presentational: the core logic carries them through for
/// the rendering layer but never branches on them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
