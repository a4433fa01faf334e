//! Plain-text rendering of a [`Screen`], used by one-shot mode.

use std::fmt::Write;

use super::{ITEM_COLUMNS, Screen, Section, ViewState};

/// Renders the visible region as plain text lines.
///
/// An idle screen renders as the empty string.
pub fn to_plain_text(screen: &Screen) -> String {
    let mut out = String::new();

    match screen.state() {
        ViewState::Idle => {}
        ViewState::ShowingOrder => {
            let panel = &screen.order;
            for section in Section::ALL {
                let _ = writeln!(out, "{}", section.title());
                for field in section.fields() {
                    let _ = writeln!(out, "  {}: {}", field.label(), panel.field(*field));
                }
            }
            let _ = writeln!(out, "Items ({})", panel.items_amount);
            let _ = writeln!(out, "  {}", ITEM_COLUMNS.join(" | "));
            for row in &panel.items {
                let _ = writeln!(out, "  {}", row.cells().join(" | "));
            }
        }
        ViewState::ShowingNotFound => {
            let panel = &screen.not_found;
            let _ = writeln!(out, "{}", panel.label);
            let _ = writeln!(out);
            for block in &panel.transcript {
                let _ = writeln!(out, "{}", block.text());
            }
        }
    }

    out
}
