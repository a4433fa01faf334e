//! Order uid input component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

const PROMPT: &str = "> ";

/// Renders the input box and places the terminal cursor inside it.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Order UID ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let para = Paragraph::new(format!("{PROMPT}{}", app.input.as_str()));
    frame.render_widget(para, inner);

    frame.set_cursor_position((cursor_x(inner, app.input.cursor_width()), inner.y));
}

/// Column of the cursor, clamped to the last cell of `inner`.
fn cursor_x(inner: Rect, cursor_width: usize) -> u16 {
    let offset = u16::try_from(PROMPT.len().saturating_add(cursor_width)).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1))
}
