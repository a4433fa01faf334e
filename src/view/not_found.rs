//! "Not found" transcript renderer.
//!
//! Shows a short scripted CLI session instead of a bare error: the command
//! echo carries the identifier, the remaining lines never change.

use tracing::debug;

use super::{Screen, Segment, TerminalBlock, Tone, ViewState};
use crate::models::OrderId;

/// Status label shown above the transcript.
pub const NOT_FOUND_MESSAGE: &str = "Order not found";

/// Transcript lines after the command echo.
const SCRIPT: [&str; 5] = [
    "[INFO] Connecting to database: orders_db",
    "[INFO] Querying order...",
    "[INFO] Validating order data...",
    "[ERROR] Can't retrieve order: not found in database",
    "[INFO] Triggering not-found handler...",
];

/// Marker, highlighted keyword, tone.
const MARKERS: [(&str, &str, Tone); 2] = [
    ("[INFO]", "INFO", Tone::Info),
    ("[ERROR]", "ERROR", Tone::Error),
];

/// The shell-style echo that opens the transcript.
pub fn command_echo(order_id: &OrderId) -> String {
    format!("~$ orderctl get \"{order_id}\"")
}

/// Shows the not-found region and rewrites its transcript for `order_id`.
///
/// Produces six lines, each followed by a spacer. The identifier only ever
/// appears in the first line and is never scanned for markers.
pub fn render_not_found(screen: &mut Screen, order_id: &OrderId) {
    screen.show(ViewState::ShowingNotFound);

    let panel = &mut screen.not_found;
    panel.label = NOT_FOUND_MESSAGE.to_string();
    panel.transcript.clear();

    panel
        .transcript
        .push(TerminalBlock::Line(vec![Segment::plain(command_echo(order_id))]));
    panel.transcript.push(TerminalBlock::Spacer);

    for line in SCRIPT {
        panel.transcript.push(TerminalBlock::Line(highlight(line)));
        panel.transcript.push(TerminalBlock::Spacer);
    }

    debug!(order_uid = %order_id, "Rendered not-found transcript");
}

/// Splits a scripted line so the keyword inside its marker gets the
/// marker's tone.
fn highlight(line: &str) -> Vec<Segment> {
    for (marker, keyword, tone) in MARKERS {
        if let Some(start) = line.find(marker) {
            let keyword_start = start + 1;
            let keyword_end = keyword_start + keyword.len();
            return vec![
                Segment::plain(&line[..keyword_start]),
                Segment {
                    text: keyword.to_string(),
                    tone,
                },
                Segment::plain(&line[keyword_end..]),
            ];
        }
    }
    vec![Segment::plain(line)]
}
