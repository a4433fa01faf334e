//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::view::ViewState;

use super::app::App;
use super::components::{input_bar, status_bar};
use super::panels::{order_info, terminal_output};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(3), // Order uid input
            Constraint::Min(6),    // Result region
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    input_bar::render(frame, main_layout[1], app);
    render_result(frame, main_layout[2], app);
    render_keybindings(frame, main_layout[3]);
}

/// Draws whichever region is currently visible. At most one is.
fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    match app.screen.state() {
        ViewState::ShowingOrder => order_info::render(frame, area, &app.screen.order),
        ViewState::ShowingNotFound => terminal_output::render(frame, area, &app.screen.not_found),
        ViewState::Idle => {
            let hint = Paragraph::new("Type an order uid and press Enter")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
        }
    }
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let para = Paragraph::new("[Enter]look up [←/→]move [Esc]quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupOutcome;
    use crate::models::{Order, OrderId};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn complete(app: &mut App, outcome: LookupOutcome) {
        app.input.insert('x');
        let ticket = app.commit().unwrap();
        app.finish_lookup(&ticket, outcome);
    }

    #[test]
    fn idle_screen_shows_hint() {
        let screen = draw(&App::default());
        assert!(screen.contains("Order UID"));
        assert!(screen.contains("Type an order uid"));
        assert!(!screen.contains("Delivery"));
        assert!(!screen.contains("Terminal"));
    }

    #[test]
    fn found_order_draws_sections_and_items() {
        let mut app = App::default();
        let order: Order = serde_json::from_str(
            r#"{"order_uid":"b563feb7","track_number":"WBILMTESTTRACK",
                "delivery":{"name":"Test Testov"},
                "items":[{"name":"Mascaras","brand":"Vivienne Sabo","total_price":317}]}"#,
        )
        .unwrap();
        complete(&mut app, LookupOutcome::Found(order));

        let screen = draw(&app);
        assert!(screen.contains("Delivery"));
        assert!(screen.contains("Test Testov"));
        assert!(screen.contains("Items (1)"));
        assert!(screen.contains("Mascaras"));
        assert!(!screen.contains("Terminal"));
    }

    #[test]
    fn not_found_draws_transcript_only() {
        let mut app = App::default();
        complete(
            &mut app,
            LookupOutcome::NotFound(OrderId::new("x").unwrap()),
        );

        let screen = draw(&app);
        assert!(screen.contains("Order not found"));
        assert!(screen.contains("Terminal"));
        assert!(!screen.contains("Delivery"));
    }
}
