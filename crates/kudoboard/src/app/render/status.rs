use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::interaction::Interaction;

use super::super::state::App;

/// Render the mode label and hints on the left, the last message on the right.
pub(super) fn render_status_bar(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let status = status_line(app);
    let Some(message) = app.output.as_deref() else {
        frame.render_widget(Paragraph::new(status), area);
        return;
    };

    let message_len = message.chars().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(message_len.saturating_add(1))])
        .split(area);
    frame.render_widget(Paragraph::new(status), chunks[0]);
    let message = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(message, chunks[1]);
}

fn status_line(app: &App) -> Line<'static> {
    let label_style = match app.interaction {
        Interaction::Idle => Style::default().fg(Color::DarkGray),
        Interaction::ConfirmingDelete { .. } => Style::default().bg(Color::Red).fg(Color::White),
        _ => Style::default().bg(Color::Blue).fg(Color::White),
    };
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    Line::from(vec![
        Span::styled(format!("-- {} --", app.interaction.label()), label_style),
        Span::raw(" "),
        Span::styled(hint(&app.interaction), hint_style),
    ])
}

fn hint(interaction: &Interaction) -> &'static str {
    match interaction {
        Interaction::Idle => "c: new  drag: move  corner: resize  double-click: edit  right-click: delete  esc: quit",
        Interaction::Creating(_) | Interaction::Editing { .. } => "enter: save  esc: cancel",
        Interaction::Dragging { .. } | Interaction::Resizing { .. } => "release to drop",
        Interaction::ConfirmingDelete { .. } => "y: delete  n: keep",
    }
}
