//! In-memory board of sticky-note posts.
//!
//! Posts are stored in draw order: the last post is drawn on top and wins
//! hit tests. Each post carries a stable `PostId` for the lifetime of the
//! process so interaction state never has to hold a list index.
//!
//! Submodules:
//! - geometry: board units to terminal cells, visibility and hit zones

mod geometry;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use geometry::{is_visible, BoardPoint, CellRect, Grid, HitZone};

pub const DEFAULT_X: i32 = 100;
pub const DEFAULT_Y: i32 = 100;
pub const DEFAULT_WIDTH: i32 = 200;
pub const DEFAULT_HEIGHT: i32 = 100;

/// A single sticky note as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_x")]
    pub x: i32,
    #[serde(default = "default_y")]
    pub y: i32,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    /// Fields we don't know about, kept so a save doesn't drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_x() -> i32 {
    DEFAULT_X
}

fn default_y() -> i32 {
    DEFAULT_Y
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

impl Post {
    /// A new post with the default size at the given position.
    pub fn new(content: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            content: content.into(),
            x,
            y,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            extra: Map::new(),
        }
    }

    /// Clamp negative sizes read from disk to zero.
    pub fn normalize(&mut self) {
        self.width = self.width.max(0);
        self.height = self.height.max(0);
    }
}

/// Stable identity of a post for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(u64);

#[derive(Debug, Clone)]
struct Entry {
    id: PostId,
    post: Post,
}

/// Result of a pointer hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: PostId,
    pub zone: HitZone,
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Board {
    pub fn new(posts: Vec<Post>) -> Self {
        let mut board = Self::default();
        for post in posts {
            board.push(post);
        }
        board
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Posts in draw order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = (PostId, &Post)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.post))
    }

    pub fn posts(&self) -> impl Iterator<Item = &Post> + '_ {
        self.entries.iter().map(|entry| &entry.post)
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.post)
    }

    pub fn get_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.post)
    }

    pub fn contains(&self, id: PostId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: PostId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    #[cfg(test)]
    pub fn id_at(&self, index: usize) -> Option<PostId> {
        self.entries.get(index).map(|entry| entry.id)
    }

    /// Append a post on top of the board and return its new id.
    pub fn push(&mut self, post: Post) -> PostId {
        let id = PostId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, post });
        id
    }

    pub fn remove(&mut self, id: PostId) -> Option<Post> {
        let index = self.index_of(id)?;
        self.remove_at(index)
    }

    /// Remove the post at `index`; later posts shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<Post> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index).post)
    }

    /// Find the topmost post under the terminal cell at `column`/`row`.
    ///
    /// The resize corner is checked before the body so a click on the
    /// bottom-right cell always starts a resize.
    pub fn hit_test(&self, grid: &Grid, scroll: i32, column: u16, row: u16) -> Option<Hit> {
        let column = i32::from(column);
        let row = i32::from(row);
        self.entries.iter().rev().find_map(|entry| {
            let rect = grid.cell_rect(&entry.post, scroll);
            rect.zone_at(column, row).map(|zone| Hit { id: entry.id, zone })
        })
    }
}
