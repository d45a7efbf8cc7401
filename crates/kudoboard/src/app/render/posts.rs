use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::board::{is_visible, CellRect, PostId};
use crate::interaction::{Interaction, TextEntry};
use crate::ui::entry_line;

use super::super::state::App;
use super::TEXT_FG;

const POST_BG: Color = Color::Rgb(255, 255, 255);
const POST_BORDER: Color = Color::Rgb(200, 200, 200);
const ACTIVE_BORDER: Color = Color::Rgb(90, 90, 90);
const RESIZE_GLYPH: &str = "◢";

/// Draw every post that intersects the viewport, in board order.
pub(super) fn render_posts(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let viewport_height = app.viewport_height();
    let active = app.interaction.post();
    let editing = editing_entry(&app.interaction);

    for (id, post) in app.board.iter() {
        if !is_visible(post, app.scroll, viewport_height) {
            continue;
        }
        let cells = app.grid.cell_rect(post, app.scroll);
        let Some(rect) = cells.clip_to(area) else {
            continue;
        };

        let border_color = if active == Some(id) {
            ACTIVE_BORDER
        } else {
            POST_BORDER
        };
        let screen = cells.offset(area);
        let text_style = Style::default().fg(TEXT_FG).bg(POST_BG);
        let block = Block::default()
            .borders(visible_borders(&screen, rect))
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color).bg(POST_BG))
            .style(text_style);
        let body = match editing {
            Some((editing_id, entry)) if editing_id == id => {
                Text::from(entry_line(entry, app.blink.visible(), text_style))
            }
            _ => Text::raw(post.content.as_str()),
        };

        // Rows cut off above the board, minus the hidden top border.
        let hidden_rows = i32::from(rect.y)
            .saturating_sub(screen.y)
            .saturating_sub(1)
            .max(0);
        let hidden_rows = u16::try_from(hidden_rows).unwrap_or(u16::MAX);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(body)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((hidden_rows, 0)),
            rect,
        );

        // Resize handle, only when the corner itself is on screen.
        let corner_x = screen.right() - 1;
        let corner_y = screen.bottom() - 1;
        let on_screen = corner_x >= i32::from(rect.x)
            && corner_x < i32::from(rect.right())
            && corner_y >= i32::from(rect.y)
            && corner_y < i32::from(rect.bottom());
        if on_screen {
            if let Some(cell) = frame
                .buffer_mut()
                .cell_mut((corner_x as u16, corner_y as u16))
            {
                cell.set_symbol(RESIZE_GLYPH).set_fg(border_color);
            }
        }
    }
}

/// Borders for the sides of a post that weren't clipped away.
fn visible_borders(screen: &CellRect, clipped: Rect) -> Borders {
    let mut borders = Borders::ALL;
    if i32::from(clipped.x) > screen.x {
        borders.remove(Borders::LEFT);
    }
    if i32::from(clipped.y) > screen.y {
        borders.remove(Borders::TOP);
    }
    if i32::from(clipped.right()) < screen.right() {
        borders.remove(Borders::RIGHT);
    }
    if i32::from(clipped.bottom()) < screen.bottom() {
        borders.remove(Borders::BOTTOM);
    }
    borders
}

fn editing_entry(interaction: &Interaction) -> Option<(PostId, &TextEntry)> {
    match interaction {
        Interaction::Editing { post, entry } => Some((*post, entry)),
        _ => None,
    }
}
