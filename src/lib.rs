//! Order lookup widget.
//!
//! Type an order uid, press Enter, and the order server's document for it is
//! fetched and rendered as an order summary, or as a scripted "not found"
//! terminal transcript when the server answers 404. Transport failures are
//! logged and leave the screen as it was.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod oneshot;
pub mod tui;
pub mod view;

pub use error::{OrderViewError, Result};
