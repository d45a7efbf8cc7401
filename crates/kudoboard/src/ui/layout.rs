//! Layout utilities for rect manipulation.
//!
//! Pure functions for computing layout areas. No state mutation.

use ratatui::layout::Rect;

const STATUS_HEIGHT: u16 = 1;
const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 9;
const BUTTON_WIDTH: u16 = 10;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_INSET: u16 = 6;
const NEW_POST_MARGIN: u16 = 5;
const NEW_POST_MAX_WIDTH: u16 = 60;
const NEW_POST_HEIGHT: u16 = 3;

/// Rects of the delete confirmation dialog and its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub dialog: Rect,
    pub yes: Rect,
    pub no: Rect,
}

impl ConfirmDialog {
    pub fn hits_yes(&self, column: u16, row: u16) -> bool {
        contains(self.yes, column, row)
    }

    pub fn hits_no(&self, column: u16, row: u16) -> bool {
        contains(self.no, column, row)
    }
}

/// Split the screen into the board and a one-line status bar below it.
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let status_height = STATUS_HEIGHT.min(area.height);
    let board = Rect {
        height: area.height - status_height,
        ..area
    };
    let status = Rect {
        y: area.y + board.height,
        height: status_height,
        ..area
    };
    (board, status)
}

/// Centered confirmation dialog with Yes on the left and No on the right.
pub fn confirm_dialog(area: Rect) -> ConfirmDialog {
    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    let dialog = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    let button_y = dialog.bottom().saturating_sub(BUTTON_HEIGHT + 1).max(dialog.y);
    let yes = Rect {
        x: dialog.x + BUTTON_INSET.min(width),
        y: button_y,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    }
    .intersection(dialog);
    let no = Rect {
        x: dialog
            .right()
            .saturating_sub(BUTTON_INSET + BUTTON_WIDTH)
            .max(yes.right()),
        y: button_y,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    }
    .intersection(dialog);
    ConfirmDialog { dialog, yes, no }
}

/// Input box for a post being created, on the left of the board's middle row.
pub fn new_post_box(area: Rect) -> Rect {
    let x = area.x + NEW_POST_MARGIN.min(area.width);
    let width = (area.right() - x)
        .saturating_sub(NEW_POST_MARGIN)
        .min(NEW_POST_MAX_WIDTH);
    let height = NEW_POST_HEIGHT.min(area.height);
    Rect {
        x,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
