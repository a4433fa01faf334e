//! Order summary panel: three labelled sections and the item table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::view::{ITEM_COLUMNS, OrderPanel, Section};

/// Renders the order region.
pub fn render(frame: &mut Frame, area: Rect, panel: &OrderPanel) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(section_height()), Constraint::Min(4)])
        .split(area);

    render_sections(frame, layout[0], panel);
    render_items(frame, layout[1], panel);
}

/// Tallest section plus its borders.
fn section_height() -> u16 {
    let rows = Section::ALL.iter().map(|s| s.fields().len()).max().unwrap_or(0);
    rows as u16 + 2
}

fn render_sections(frame: &mut Frame, area: Rect, panel: &OrderPanel) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (section, col) in Section::ALL.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", section.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines: Vec<Line> = section
            .fields()
            .iter()
            .map(|&field| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", field.label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(panel.field(field).to_string()),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), *col);
    }
}

fn render_items(frame: &mut Frame, area: Rect, panel: &OrderPanel) {
    let block = Block::default()
        .title(format!(" Items ({}) ", panel.items_amount))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let header = Row::new(ITEM_COLUMNS).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = panel
        .items
        .iter()
        .map(|item| Row::new(item.cells().map(str::to_string)));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
