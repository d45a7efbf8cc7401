//! Input event handling.
//!
//! Handles keyboard and mouse events, routing them to handlers based on
//! the active interaction. `tick` runs once per frame for everything that
//! depends on time rather than events: key repeat, cursor blink and the
//! confirmation dialog buttons.

mod actions;
mod keyboard;
mod mouse;

use std::time::Instant;

use crossterm::event::MouseButton;
use ratatui::layout::Rect;

use crate::events::AppEvent;
use crate::interaction::{Interaction, RepeatKey};
use crate::ui::confirm_dialog;

use super::state::App;

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Key(key) => keyboard::handle_key(app, key, now),
        AppEvent::Mouse(mouse) => mouse::handle_mouse_event(app, mouse, now),
        AppEvent::Resize(columns, rows) => app.set_screen(Rect::new(0, 0, columns, rows)),
    }
}

/// Advance per-frame timers and poll-driven UI.
pub fn tick(app: &mut App, now: Instant) {
    drop_stale_interaction(app);
    apply_key_repeat(app, now);
    if app.interaction.entry().is_some() {
        app.blink.tick(now);
    }
    evaluate_confirm_buttons(app);
}

/// Fall back to idle if the post the interaction points at is gone.
fn drop_stale_interaction(app: &mut App) {
    if let Some(post) = app.interaction.post() {
        if !app.board.contains(post) {
            log::debug!("event=interaction_dropped reason=post_missing");
            app.interaction = Interaction::Idle;
            app.key_repeat.cancel();
            app.gesture_dirty = false;
        }
    }
}

fn apply_key_repeat(app: &mut App, now: Instant) {
    let Some((key, count)) = app.key_repeat.poll(now) else {
        return;
    };
    let Some(entry) = app.interaction.entry_mut() else {
        app.key_repeat.cancel();
        return;
    };
    for _ in 0..count {
        match key {
            RepeatKey::Backspace => entry.backspace(),
            RepeatKey::Delete => entry.delete(),
        };
    }
    app.blink.reset(now);
}

/// Yes/No are checked every frame against where the mouse is while the
/// left button is down, or where it was pressed if the click already ended.
fn evaluate_confirm_buttons(app: &mut App) {
    let pending = app.pending_left_press.take();
    if !matches!(app.interaction, Interaction::ConfirmingDelete { .. }) {
        return;
    }
    let held = if app.mouse_pressed == Some(MouseButton::Left) {
        app.mouse_position
    } else {
        None
    };
    let Some((column, row)) = held.or(pending) else {
        return;
    };
    let dialog = confirm_dialog(app.screen_area);
    if dialog.hits_yes(column, row) {
        actions::confirm_delete(app);
    } else if dialog.hits_no(column, row) {
        actions::cancel(app);
    }
}

#[cfg(test)]
mod tests;
