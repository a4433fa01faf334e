//! Event handling for the TUI.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use tokio::sync::mpsc;

use crate::dispatch::LookupTicket;
use crate::lookup::{LookupOutcome, OrderTransport, lookup};

use super::app::App;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Text arrived as one bracketed paste.
    Paste(String),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// A spawned lookup completed.
    LookupFinished {
        ticket: LookupTicket,
        outcome: LookupOutcome,
    },
}

/// Actions that require external handling.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Start the lookup for this ticket.
    Lookup(LookupTicket),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Paste(text))) => {
                    if tx.send(Message::Input(Event::Paste(text))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Spawns the lookup for `ticket` and reports its outcome on `tx`.
///
/// Each call is independent: nothing cancels or waits for earlier lookups.
pub fn spawn_lookup<T>(
    transport: Arc<T>,
    ticket: LookupTicket,
    tx: mpsc::UnboundedSender<Message>,
) where
    T: OrderTransport + 'static,
{
    tokio::spawn(async move {
        let outcome = lookup(transport.as_ref(), ticket.order_id.clone()).await;
        // The receiver is gone only when the app is shutting down.
        let _ = tx.send(Message::LookupFinished { ticket, outcome });
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::LookupFinished { ticket, outcome } => {
            app.finish_lookup(&ticket, outcome);
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            // Pasted line breaks are dropped; only Enter commits.
            for c in text.chars().filter(|c| !c.is_control()) {
                app.input.insert(c);
            }
            None
        }
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.clear_stale_notice();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            None
        }
        KeyCode::Enter => app.commit().map(Action::Lookup),
        KeyCode::Char(c) => {
            app.input.insert(c);
            None
        }
        KeyCode::Backspace => {
            app.input.backspace();
            None
        }
        KeyCode::Delete => {
            app.input.delete();
            None
        }
        KeyCode::Left => {
            app.input.move_left();
            None
        }
        KeyCode::Right => {
            app.input.move_right();
            None
        }
        KeyCode::Home => {
            app.input.move_home();
            None
        }
        KeyCode::End => {
            app.input.move_end();
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderId;

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        update(
            app,
            Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_with_text_starts_a_lookup() {
        let mut app = App::default();
        type_text(&mut app, "abc123");

        let action = press(&mut app, KeyCode::Enter);

        assert_eq!(
            action,
            Some(Action::Lookup(LookupTicket {
                seq: 1,
                order_id: OrderId::new("abc123").unwrap(),
            }))
        );
    }

    #[test]
    fn enter_on_empty_input_does_nothing() {
        let mut app = App::default();
        assert_eq!(press(&mut app, KeyCode::Enter), None);
        assert_eq!(app.dispatcher.latest(), 0);
    }

    #[test]
    fn repeated_enter_issues_one_lookup_each() {
        let mut app = App::default();
        type_text(&mut app, "abc123");
        let seqs: Vec<u64> = (0..3)
            .filter_map(|_| press(&mut app, KeyCode::Enter))
            .map(|Action::Lookup(ticket)| ticket.seq)
            .collect();
        assert_eq!(seqs, [1, 2, 3]);
    }

    #[test]
    fn editing_keys_change_the_input() {
        let mut app = App::default();
        type_text(&mut app, "abd");
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "c");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.input.as_str(), "bc");
    }

    #[test]
    fn paste_inserts_text_without_committing() {
        let mut app = App::default();
        type_text(&mut app, "ab");

        let action = update(
            &mut app,
            Message::Input(Event::Paste("c123\r\nxyz\n".to_string())),
        );

        assert_eq!(action, None);
        assert_eq!(app.input.as_str(), "abc123xyz");
        assert_eq!(app.dispatcher.latest(), 0);
        assert!(app.last_requested.is_none());
    }

    #[test]
    fn enter_after_paste_commits_pasted_text() {
        let mut app = App::default();
        update(
            &mut app,
            Message::Input(Event::Paste("abc123\n".to_string())),
        );

        let action = press(&mut app, KeyCode::Enter);

        assert!(matches!(
            action,
            Some(Action::Lookup(ref ticket)) if ticket.order_id.as_str() == "abc123"
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::default();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        update(&mut app, Message::Input(Event::Key(key)));
        assert!(app.input.is_empty());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::default();
        update(
            &mut app,
            Message::Input(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(app.should_quit);
        assert!(app.input.is_empty());
    }
}
