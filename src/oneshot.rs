//! Single lookup without a terminal UI: `orderview <ORDER_UID>`.

use crate::dispatch::{Dispatch, dispatch};
use crate::lookup::{OrderTransport, commit_input, lookup};
use crate::view::Screen;
use crate::view::plain::to_plain_text;

/// Looks up `value` once and returns the rendered screen as plain text.
///
/// An empty `value` is ignored and yields an empty string without any
/// request.
///
/// # Errors
///
/// Returns the transport error if the lookup could not be classified as
/// found or not found.
pub async fn run_once<T: OrderTransport>(transport: &T, value: &str) -> crate::Result<String> {
    let Some(order_id) = commit_input(value) else {
        return Ok(String::new());
    };

    let mut screen = Screen::new();
    match dispatch(&mut screen, lookup(transport, order_id).await) {
        Dispatch::TransportFailed(e) => Err(e),
        Dispatch::Rendered(_) | Dispatch::Stale => Ok(to_plain_text(&screen)),
    }
}
