use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::board::{BoardPoint, HitZone};
use crate::interaction::{DragOffset, Interaction, ResizeAnchor};

use super::actions;
use crate::app::state::App;

pub(super) fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    app.mouse_position = Some((mouse.column, mouse.row));
    match mouse.kind {
        MouseEventKind::Down(button) => {
            app.mouse_pressed = Some(button);
            if button == MouseButton::Left {
                app.pending_left_press = Some((mouse.column, mouse.row));
            }
        }
        MouseEventKind::Up(_) => {
            app.mouse_pressed = None;
        }
        _ => {}
    }
    handle_mouse(app, mouse, now);
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let kind = match mouse.kind {
        // Some terminals report motion with a button held as plain moves.
        MouseEventKind::Moved => match app.mouse_pressed {
            Some(button) => MouseEventKind::Drag(button),
            None => return,
        },
        kind => kind,
    };

    match (&app.interaction, kind) {
        (Interaction::Idle, MouseEventKind::Down(MouseButton::Left)) => {
            if let Some((column, row)) = board_cell(app, &mouse) {
                press_left(app, column, row, now);
            }
        }
        (Interaction::Idle, MouseEventKind::Down(MouseButton::Right)) => {
            if let Some((column, row)) = board_cell(app, &mouse) {
                press_right(app, column, row);
            }
        }
        (Interaction::Idle, MouseEventKind::ScrollUp) => app.scroll_by(-app.scroll_step),
        (Interaction::Idle, MouseEventKind::ScrollDown) => app.scroll_by(app.scroll_step),
        (Interaction::Dragging { .. }, MouseEventKind::Drag(MouseButton::Left)) => {
            let point = pointer_point(app, &mouse);
            drag_to(app, point);
        }
        (Interaction::Resizing { .. }, MouseEventKind::Drag(MouseButton::Left)) => {
            let point = pointer_point(app, &mouse);
            resize_to(app, point);
        }
        (
            Interaction::Dragging { .. } | Interaction::Resizing { .. },
            MouseEventKind::Up(_),
        ) => actions::finish_gesture(app),
        _ => {}
    }
}

/// Mouse position relative to the board, `None` outside it.
fn board_cell(app: &App, mouse: &MouseEvent) -> Option<(u16, u16)> {
    let area = app.board_area;
    let inside = mouse.column >= area.x
        && mouse.column < area.x.saturating_add(area.width)
        && mouse.row >= area.y
        && mouse.row < area.y.saturating_add(area.height);
    if !inside {
        return None;
    }
    Some((mouse.column - area.x, mouse.row - area.y))
}

/// Board point under the pointer, allowed to leave the board area mid-gesture.
fn pointer_point(app: &App, mouse: &MouseEvent) -> BoardPoint {
    let column = mouse.column.saturating_sub(app.board_area.x);
    let row = mouse.row.saturating_sub(app.board_area.y);
    app.grid.point_at(column, row, app.scroll)
}

fn press_left(app: &mut App, column: u16, row: u16, now: Instant) {
    let Some(hit) = app.board.hit_test(&app.grid, app.scroll, column, row) else {
        app.clicks.clear();
        return;
    };
    let Some(post) = app.board.get(hit.id) else {
        return;
    };
    let point = app.grid.point_at(column, row, app.scroll);
    match hit.zone {
        HitZone::ResizeCorner => {
            app.interaction = Interaction::Resizing {
                post: hit.id,
                anchor: ResizeAnchor {
                    width: post.width,
                    height: post.height,
                    origin: point,
                },
            };
            app.clicks.clear();
        }
        HitZone::Body => {
            let offset = DragOffset {
                dx: point.x.saturating_sub(post.x),
                dy: point.y.saturating_sub(post.y),
            };
            if app.clicks.register(hit.id, now) {
                actions::start_editing(app, hit.id, now);
            } else {
                app.interaction = Interaction::Dragging {
                    post: hit.id,
                    offset,
                };
            }
        }
    }
}

fn press_right(app: &mut App, column: u16, row: u16) {
    if let Some(hit) = app.board.hit_test(&app.grid, app.scroll, column, row) {
        app.interaction = Interaction::ConfirmingDelete { post: hit.id };
        // Only presses made on the open dialog count as answers.
        app.pending_left_press = None;
    }
}

fn drag_to(app: &mut App, point: BoardPoint) {
    let Interaction::Dragging { post, offset } = app.interaction else {
        return;
    };
    let Some(target) = app.board.get_mut(post) else {
        return;
    };
    let x = point.x.saturating_sub(offset.dx).max(0);
    let y = point.y.saturating_sub(offset.dy).max(0);
    if (x, y) != (target.x, target.y) {
        target.x = x;
        target.y = y;
        app.gesture_dirty = true;
    }
}

fn resize_to(app: &mut App, point: BoardPoint) {
    let Interaction::Resizing { post, anchor } = app.interaction else {
        return;
    };
    let min_width = app.grid.min_width();
    let min_height = app.grid.min_height();
    let Some(target) = app.board.get_mut(post) else {
        return;
    };
    let width = anchor
        .width
        .saturating_add(point.x.saturating_sub(anchor.origin.x))
        .max(min_width);
    let height = anchor
        .height
        .saturating_add(point.y.saturating_sub(anchor.origin.y))
        .max(min_height);
    if (width, height) != (target.width, target.height) {
        target.width = width;
        target.height = height;
        app.gesture_dirty = true;
    }
}
