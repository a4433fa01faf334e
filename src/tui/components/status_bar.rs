//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;
use crate::view::ViewState;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let bar = Paragraph::new(status_line(app)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, area);
}

/// Builds the status bar contents.
pub fn status_line(app: &App) -> Line<'static> {
    let state = app.screen.state();
    let state_color = match state {
        ViewState::Idle => Color::White,
        ViewState::ShowingOrder => Color::Green,
        ViewState::ShowingNotFound => Color::Yellow,
    };

    let mut spans = vec![
        Span::styled(
            " orderview ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", state.label()),
            Style::default().fg(state_color),
        ),
        Span::raw("│"),
        Span::raw(format!(" {} ", app.dispatcher.policy().label())),
        Span::raw("│"),
    ];

    let in_flight = app.dispatcher.in_flight();
    if in_flight > 0 {
        spans.push(Span::styled(
            format!(" Loading ({in_flight}) "),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("│"));
    }

    if let Some(ref order_id) = app.last_requested {
        spans.push(Span::raw(format!(" Last: {order_id} ")));
        spans.push(Span::raw("│"));
    }

    if let Some(ref notice) = app.notice {
        spans.push(Span::styled(
            format!(" {} ", notice.message),
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}
