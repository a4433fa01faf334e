//! Application state for the TUI.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::dispatch::{Dispatch, Dispatcher, LookupTicket, StalePolicy};
use crate::lookup::{LookupOutcome, commit_input};
use crate::models::OrderId;
use crate::view::Screen;

use super::input::TextInput;

/// How long a status-bar notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Central application state container.
pub struct App {
    /// The order uid input field.
    pub input: TextInput,
    /// View model drawn every frame.
    pub screen: Screen,
    /// Ticket issuer and stale-completion policy.
    pub dispatcher: Dispatcher,
    /// Identifier of the most recently issued lookup.
    pub last_requested: Option<OrderId>,
    /// Transient message in the status bar.
    pub notice: Option<Notice>,
    /// Whether transport errors produce a notice.
    pub surface_transport_errors: bool,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an idle App.
    pub fn new(stale_policy: StalePolicy, surface_transport_errors: bool) -> Self {
        Self {
            input: TextInput::new(),
            screen: Screen::new(),
            dispatcher: Dispatcher::new(stale_policy),
            last_requested: None,
            notice: None,
            surface_transport_errors,
            should_quit: false,
        }
    }

    /// Handles the commit key on the input field.
    ///
    /// Returns the ticket of the lookup to start, or `None` when the input is
    /// empty. The input text is left in place.
    pub fn commit(&mut self) -> Option<LookupTicket> {
        let order_id = commit_input(self.input.as_str())?;
        let ticket = self.dispatcher.issue(order_id.clone());
        debug!(seq = ticket.seq, order_uid = %order_id, "Lookup issued");
        self.last_requested = Some(order_id);
        Some(ticket)
    }

    /// Applies a completed lookup to the screen.
    pub fn finish_lookup(&mut self, ticket: &LookupTicket, outcome: LookupOutcome) {
        match self.dispatcher.complete(&mut self.screen, ticket.seq, outcome) {
            Dispatch::TransportFailed(e) if self.surface_transport_errors => {
                self.show_notice(format!("lookup of {} failed: {e}", ticket.order_id));
            }
            Dispatch::Rendered(_) | Dispatch::TransportFailed(_) | Dispatch::Stale => {}
        }
    }

    /// Sets a notice to display.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears a notice older than [`NOTICE_TTL`].
    pub fn clear_stale_notice(&mut self) {
        if let Some(ref notice) = self.notice
            && notice.timestamp.elapsed() > NOTICE_TTL
        {
            self.notice = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(StalePolicy::default(), false)
    }
}

/// Status-bar message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct Notice {
    /// The message text.
    pub message: String,
    /// When the notice was shown.
    pub timestamp: Instant,
}
