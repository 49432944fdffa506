// ABOUTME: Absolute grid rectangles and the positioning capability panels expose.
// ABOUTME: The layout engine only ever writes panels through `Positioned`.

use serde::{Deserialize, Serialize};

/// Number of columns on a dashboard grid
pub const GRID_WIDTH: u32 = 24;

/// Rectangle in grid units, serialized the way dashboards expect (`x`, `y`, `w`, `h`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
}

impl GridPos {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Full-width strip of height 1, as used by row headers
    pub const fn header(y: u32, grid_width: u32) -> Self {
        Self::new(0, y, grid_width, 1)
    }

    /// First row below this rectangle
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// First column right of this rectangle
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }
}

/// Anything carrying a mutable grid rectangle.
///
/// Panels are owned by the caller; the layout engine never creates or drops them,
/// it only reads and writes their position.
pub trait Positioned {
    fn grid_pos(&self) -> GridPos;

    fn set_grid_pos(&mut self, pos: GridPos);

    fn set_rectangle(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.set_grid_pos(GridPos::new(x, y, width, height));
    }

    /// Shift vertically so a block with origin `from` ends up at `to`
    fn translate_y(&mut self, from: u32, to: u32) {
        let mut pos = self.grid_pos();
        pos.y = pos.y.saturating_sub(from).saturating_add(to);
        self.set_grid_pos(pos);
    }
}

impl Positioned for GridPos {
    fn grid_pos(&self) -> GridPos {
        *self
    }

    fn set_grid_pos(&mut self, pos: GridPos) {
        *self = pos;
    }
}

impl<T: Positioned + ?Sized> Positioned for &mut T {
    fn grid_pos(&self) -> GridPos {
        (**self).grid_pos()
    }

    fn set_grid_pos(&mut self, pos: GridPos) {
        (**self).set_grid_pos(pos);
    }
}

impl<T: Positioned + ?Sized> Positioned for Box<T> {
    fn grid_pos(&self) -> GridPos {
        (**self).grid_pos()
    }

    fn set_grid_pos(&mut self, pos: GridPos) {
        (**self).set_grid_pos(pos);
    }
}
