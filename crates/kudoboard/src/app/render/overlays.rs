use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::ui::{confirm_dialog, entry_line, new_post_box};

use super::super::state::App;
use super::{BOARD_BG, TEXT_FG};

const DIALOG_BG: Color = Color::Rgb(169, 169, 169);
const BUTTON_BG: Color = Color::Rgb(200, 200, 200);
const BUTTON_HOVER_BG: Color = Color::Rgb(180, 180, 180);
const INPUT_BG: Color = Color::Rgb(255, 255, 255);

/// Centered placeholder for a board without posts.
pub(super) fn render_empty_hint(frame: &mut ratatui::Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let hint = Paragraph::new(Line::raw("No posts yet."))
        .style(Style::default().fg(Color::DarkGray).bg(BOARD_BG))
        .alignment(Alignment::Center);
    frame.render_widget(hint, row);
}

/// Render the input box for a post that hasn't been committed yet.
pub(super) fn render_new_post(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let Some(entry) = app.interaction.entry() else {
        return;
    };
    let rect = new_post_box(area);
    let style = Style::default().fg(TEXT_FG).bg(INPUT_BG);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("New post")
        .style(style);
    frame.render_widget(
        Paragraph::new(entry_line(entry, app.blink.visible(), style)).block(block),
        rect,
    );
}

/// Render the delete confirmation dialog with hover-highlighted buttons.
pub(super) fn render_confirm_dialog(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let layout = confirm_dialog(area);
    frame.render_widget(Clear, layout.dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Delete")
        .style(Style::default().fg(Color::Black).bg(DIALOG_BG));
    let lines = vec![
        Line::raw(""),
        Line::raw("Are you sure you want to delete this post?"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        layout.dialog,
    );

    let hovered = app.mouse_position;
    let yes_hover = hovered.is_some_and(|(column, row)| layout.hits_yes(column, row));
    let no_hover = hovered.is_some_and(|(column, row)| layout.hits_no(column, row));
    render_button(frame, layout.yes, "Yes", yes_hover);
    render_button(frame, layout.no, "No", no_hover);
}

fn render_button(frame: &mut ratatui::Frame, rect: Rect, label: &str, hovered: bool) {
    if rect.is_empty() {
        return;
    }
    let bg = if hovered { BUTTON_HOVER_BG } else { BUTTON_BG };
    let mut style = Style::default().fg(Color::Black).bg(bg);
    if hovered {
        style = style.add_modifier(Modifier::BOLD);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(style);
    frame.render_widget(
        Paragraph::new(label.to_string())
            .block(block)
            .alignment(Alignment::Center),
        rect,
    );
}
