//! Terminal User Interface for order lookups.
//!
//! Provides a Ratatui-based TUI with a single order uid input, a status
//! bar, and either the order summary or the not-found transcript below.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod panels;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
