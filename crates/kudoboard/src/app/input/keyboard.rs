use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::interaction::{Interaction, RepeatKey};
use crate::keymap::matches_chord;

use super::actions;
use crate::app::state::App;

pub(super) fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    let repeat_key = repeat_key(key.code);
    match key.kind {
        KeyEventKind::Release => {
            if let Some(repeat_key) = repeat_key {
                app.key_repeat.release(repeat_key);
            }
            return;
        }
        // Backspace/Delete repeats are generated locally once releases are reported.
        KeyEventKind::Repeat if app.synthetic_repeat && repeat_key.is_some() => return,
        _ => {}
    }

    if key.code == KeyCode::Esc {
        escape(app);
        return;
    }

    match app.interaction {
        Interaction::Creating(_) | Interaction::Editing { .. } => {
            handle_text_key(app, key, now)
        }
        Interaction::ConfirmingDelete { .. } => handle_confirm_key(app, key),
        Interaction::Idle => handle_board_key(app, key, now),
        Interaction::Dragging { .. } | Interaction::Resizing { .. } => {}
    }
}

fn repeat_key(code: KeyCode) -> Option<RepeatKey> {
    match code {
        KeyCode::Backspace => Some(RepeatKey::Backspace),
        KeyCode::Delete => Some(RepeatKey::Delete),
        _ => None,
    }
}

/// Escape backs out of any interaction; from idle it quits.
fn escape(app: &mut App) {
    if app.interaction.is_idle() {
        app.should_quit = true;
        return;
    }
    actions::cancel(app);
}

fn handle_board_key(app: &mut App, key: KeyEvent, now: Instant) {
    if app
        .keys
        .create
        .as_ref()
        .is_some_and(|chord| matches_chord(&key, chord))
    {
        actions::start_creating(app, now);
        return;
    }
    if app
        .keys
        .scroll_up
        .as_ref()
        .is_some_and(|chord| matches_chord(&key, chord))
    {
        app.scroll_by(-app.scroll_step);
        return;
    }
    if app
        .keys
        .scroll_down
        .as_ref()
        .is_some_and(|chord| matches_chord(&key, chord))
    {
        app.scroll_by(app.scroll_step);
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent, now: Instant) {
    if repeat_key(key.code) != app.key_repeat.held() {
        app.key_repeat.cancel();
    }
    let synthetic_repeat = app.synthetic_repeat;
    match key.code {
        KeyCode::Enter => {
            actions::commit(app);
            return;
        }
        KeyCode::Backspace => {
            if let Some(entry) = app.interaction.entry_mut() {
                entry.backspace();
            }
            if synthetic_repeat {
                app.key_repeat.press(RepeatKey::Backspace, now);
            }
        }
        KeyCode::Delete => {
            if let Some(entry) = app.interaction.entry_mut() {
                entry.delete();
            }
            if synthetic_repeat {
                app.key_repeat.press(RepeatKey::Delete, now);
            }
        }
        KeyCode::Left => {
            if let Some(entry) = app.interaction.entry_mut() {
                entry.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(entry) = app.interaction.entry_mut() {
                entry.move_right();
            }
        }
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            {
                return;
            }
            if let Some(entry) = app.interaction.entry_mut() {
                entry.insert(ch);
            }
        }
        _ => return,
    }
    app.blink.reset(now);
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => actions::confirm_delete(app),
        KeyCode::Char('n') | KeyCode::Char('N') => actions::cancel(app),
        _ => {}
    }
}
