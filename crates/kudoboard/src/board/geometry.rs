//! Mapping between board units and terminal cells.
//!
//! Post geometry is stored in board units. A `Grid` says how many units one
//! terminal cell covers, so rendering and hit testing agree on the same
//! cell rectangles.

use ratatui::layout::Rect;

use super::Post;

/// Smallest post a resize may produce, in cells (room for a border and one line).
pub const MIN_POST_COLUMNS: i32 = 4;
pub const MIN_POST_ROWS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cell_width: 10,
            cell_height: 20,
        }
    }
}

/// A position on the board, in board units, scroll already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    Body,
    ResizeCorner,
}

/// A post's footprint in terminal cells relative to the board area.
/// May extend past any edge of the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        Self {
            cell_width: i32::from(cell_width.max(1)),
            cell_height: i32::from(cell_height.max(1)),
        }
    }

    /// Board point at the top-left corner of a terminal cell.
    pub fn point_at(&self, column: u16, row: u16, scroll: i32) -> BoardPoint {
        BoardPoint {
            x: i32::from(column).saturating_mul(self.cell_width),
            y: i32::from(row)
                .saturating_mul(self.cell_height)
                .saturating_add(scroll),
        }
    }

    pub fn cell_rect(&self, post: &Post, scroll: i32) -> CellRect {
        CellRect {
            x: post.x.div_euclid(self.cell_width),
            y: post.y.saturating_sub(scroll).div_euclid(self.cell_height),
            width: (post.width / self.cell_width).max(1),
            height: (post.height / self.cell_height).max(1),
        }
    }

    /// Height of `rows` terminal rows in board units.
    pub fn viewport_height(&self, rows: u16) -> i32 {
        i32::from(rows).saturating_mul(self.cell_height)
    }

    pub fn min_width(&self) -> i32 {
        MIN_POST_COLUMNS * self.cell_width
    }

    pub fn min_height(&self) -> i32 {
        MIN_POST_ROWS * self.cell_height
    }
}

impl CellRect {
    /// One past the last column. Saturates for posts far off the board.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// One past the last row.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// The same rect in screen coordinates of `area`.
    pub fn offset(&self, area: Rect) -> CellRect {
        CellRect {
            x: self.x.saturating_add(i32::from(area.x)),
            y: self.y.saturating_add(i32::from(area.y)),
            ..*self
        }
    }

    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= self.x
            && column < self.right()
            && row >= self.y
            && row < self.bottom()
    }

    pub fn zone_at(&self, column: i32, row: i32) -> Option<HitZone> {
        if !self.contains(column, row) {
            return None;
        }
        if column == self.right() - 1 && row == self.bottom() - 1 {
            Some(HitZone::ResizeCorner)
        } else {
            Some(HitZone::Body)
        }
    }

    /// Translate into `area` and clip to it. `None` when nothing is on screen.
    pub fn clip_to(&self, area: Rect) -> Option<Rect> {
        let shifted = self.offset(area);
        let left = shifted.x.max(i32::from(area.x));
        let top = shifted.y.max(i32::from(area.y));
        let right = shifted.right().min(i32::from(area.right()));
        let bottom = shifted.bottom().min(i32::from(area.bottom()));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

/// Whether any part of the post's vertical extent falls inside the viewport.
pub fn is_visible(post: &Post, scroll: i32, viewport_height: i32) -> bool {
    let top = post.y.saturating_sub(scroll);
    top.saturating_add(post.height) > 0 && top < viewport_height
}
