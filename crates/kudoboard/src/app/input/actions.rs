//! State transitions shared by keyboard and mouse handlers.

use std::time::Instant;

use crate::board::{Post, PostId, DEFAULT_X, DEFAULT_Y};
use crate::interaction::{Interaction, TextEntry};

use crate::app::state::App;

pub(super) fn start_creating(app: &mut App, now: Instant) {
    app.interaction = Interaction::Creating(TextEntry::default());
    app.blink.reset(now);
}

/// Open `post` for editing with the cursor after its last character.
pub(super) fn start_editing(app: &mut App, post: PostId, now: Instant) {
    let Some(content) = app.board.get(post).map(|p| p.content.clone()) else {
        return;
    };
    app.interaction = Interaction::Editing {
        post,
        entry: TextEntry::with_text(content),
    };
    app.blink.reset(now);
}

/// Write the text buffer into the board and save.
pub(super) fn commit(app: &mut App) {
    app.key_repeat.cancel();
    match std::mem::take(&mut app.interaction) {
        Interaction::Creating(entry) => {
            let empty = entry.is_empty();
            let y = app.scroll.saturating_add(DEFAULT_Y);
            let post = Post::new(entry.into_text(), DEFAULT_X, y);
            app.board.push(post);
            log::info!("event=post_created posts={} empty={empty}", app.board.len());
        }
        Interaction::Editing { post, entry } => match app.board.get_mut(post) {
            Some(target) => {
                target.content = entry.into_text();
                log::info!("event=post_edited index={:?}", app.board.index_of(post));
            }
            None => {
                app.set_output("That post no longer exists.".to_string());
                return;
            }
        },
        other => {
            app.interaction = other;
            return;
        }
    }
    if app.save_board() {
        app.output = None;
    }
}

pub(super) fn confirm_delete(app: &mut App) {
    let Interaction::ConfirmingDelete { post } = std::mem::take(&mut app.interaction) else {
        return;
    };
    let index = app.board.index_of(post);
    if app.board.remove(post).is_some() {
        log::info!(
            "event=post_deleted index={index:?} posts={}",
            app.board.len()
        );
        app.save_board();
    }
}

/// End a drag or resize, saving if the geometry moved.
pub(super) fn finish_gesture(app: &mut App) {
    app.interaction = Interaction::Idle;
    if app.gesture_dirty {
        app.gesture_dirty = false;
        app.save_board();
    }
}

/// Leave the current interaction without committing text.
pub(super) fn cancel(app: &mut App) {
    match app.interaction {
        Interaction::Dragging { .. } | Interaction::Resizing { .. } => finish_gesture(app),
        _ => app.interaction = Interaction::Idle,
    }
    app.key_repeat.cancel();
}
