//! Interaction state for the board.
//!
//! Exactly one `Interaction` is active at any time. Mouse-driven states are
//! entered on button down and always left on button up; text states are
//! left by Enter (commit) or Escape (discard).
//!
//! Submodules:
//! - text: editable single-line buffer with a character cursor
//! - timing: key repeat, cursor blink and double-click detection

mod text;
mod timing;

use crate::board::{BoardPoint, PostId};

pub use text::TextEntry;
pub use timing::{ClickTracker, CursorBlink, KeyRepeat, RepeatKey};

/// Pointer offset from a post's origin, kept constant while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOffset {
    pub dx: i32,
    pub dy: i32,
}

/// Post size and pointer position when a resize started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAnchor {
    pub width: i32,
    pub height: i32,
    pub origin: BoardPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    Creating(TextEntry),
    Editing {
        post: PostId,
        entry: TextEntry,
    },
    Dragging {
        post: PostId,
        offset: DragOffset,
    },
    Resizing {
        post: PostId,
        anchor: ResizeAnchor,
    },
    ConfirmingDelete {
        post: PostId,
    },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// The post this state refers to, if any.
    pub fn post(&self) -> Option<PostId> {
        match self {
            Interaction::Idle | Interaction::Creating(_) => None,
            Interaction::Editing { post, .. }
            | Interaction::Dragging { post, .. }
            | Interaction::Resizing { post, .. }
            | Interaction::ConfirmingDelete { post } => Some(*post),
        }
    }

    pub fn entry(&self) -> Option<&TextEntry> {
        match self {
            Interaction::Creating(entry) | Interaction::Editing { entry, .. } => Some(entry),
            _ => None,
        }
    }

    pub fn entry_mut(&mut self) -> Option<&mut TextEntry> {
        match self {
            Interaction::Creating(entry) | Interaction::Editing { entry, .. } => Some(entry),
            _ => None,
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Interaction::Idle => "BOARD",
            Interaction::Creating(_) => "NEW",
            Interaction::Editing { .. } => "EDIT",
            Interaction::Dragging { .. } => "MOVE",
            Interaction::Resizing { .. } => "RESIZE",
            Interaction::ConfirmingDelete { .. } => "DELETE",
        }
    }
}
