//! UI rendering methods.
//!
//! Handles all drawing for the TUI:
//! - Board (visible posts, the post being edited)
//! - Overlays (new post input, delete confirmation)
//! - Status bar

mod overlays;
mod posts;
mod status;

use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::interaction::Interaction;
use crate::ui::split_screen;

use super::state::App;

pub(super) const BOARD_BG: Color = Color::Rgb(240, 240, 240);
pub(super) const TEXT_FG: Color = Color::Rgb(50, 50, 50);

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    app.set_screen(area);
    let (board_area, status_area) = split_screen(area);

    frame.render_widget(Block::default().style(Style::default().bg(BOARD_BG)), area);
    if app.board.is_empty() && app.interaction.is_idle() {
        overlays::render_empty_hint(frame, board_area);
    } else {
        posts::render_posts(app, frame, board_area);
    }

    match app.interaction {
        Interaction::Creating(_) => overlays::render_new_post(app, frame, board_area),
        Interaction::ConfirmingDelete { .. } => overlays::render_confirm_dialog(app, frame, area),
        _ => {}
    }

    status::render_status_bar(app, frame, status_area);
}
