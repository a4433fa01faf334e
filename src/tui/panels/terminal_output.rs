//! "Not found" panel: status label over the terminal transcript.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::view::{NotFoundPanel, TerminalBlock, Tone};

/// Renders the not-found region.
pub fn render(frame: &mut Frame, area: Rect, panel: &NotFoundPanel) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let label = Paragraph::new(Span::styled(
        panel.label.clone(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, layout[0]);

    let block = Block::default()
        .title(" Terminal ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = panel.transcript.iter().map(transcript_line).collect();
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(para, layout[1]);
}

/// Converts one transcript block into a styled line.
pub fn transcript_line(block: &TerminalBlock) -> Line<'static> {
    match block {
        TerminalBlock::Spacer => Line::default(),
        TerminalBlock::Line(segments) => Line::from(
            segments
                .iter()
                .map(|segment| Span::styled(segment.text.clone(), tone_style(segment.tone)))
                .collect::<Vec<_>>(),
        ),
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default(),
        Tone::Info => Style::default().fg(Color::Green),
        Tone::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}
