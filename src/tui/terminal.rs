//! Terminal setup and teardown.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::OrderViewError;

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches stdout to raw mode on the alternate screen with bracketed paste.
///
/// Bracketed paste makes a pasted line break arrive inside one paste event
/// instead of as an Enter key, so pasting never starts a lookup.
///
/// Also installs a panic hook that puts the terminal back before the panic
/// message is printed, so a crash does not leave the shell in raw mode.
///
/// # Errors
///
/// Returns [`OrderViewError::Io`] if stdout is not a TTY or the terminal
/// refuses raw mode or the alternate screen.
pub fn setup_terminal() -> crate::Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(OrderViewError::Io(
            "the lookup UI needs an interactive terminal; pass an order uid to run once instead"
                .to_string(),
        ));
    }

    enable_raw_mode().map_err(|e| OrderViewError::Io(format!("failed to enable raw mode: {e}")))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
        reset_screen();
        return Err(OrderViewError::Io(format!("failed to enter alternate screen: {e}")));
    }

    let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            reset_screen();
            return Err(OrderViewError::Io(format!("failed to create terminal: {e}")));
        }
    };

    install_panic_hook();
    Ok(terminal)
}

/// Leaves raw mode, bracketed paste and the alternate screen and shows the
/// cursor again.
///
/// # Errors
///
/// Returns [`OrderViewError::Io`] if any of the steps fails.
pub fn restore_terminal(terminal: &mut Tui) -> crate::Result<()> {
    disable_raw_mode().map_err(|e| OrderViewError::Io(e.to_string()))?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .map_err(|e| OrderViewError::Io(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| OrderViewError::Io(e.to_string()))?;
    Ok(())
}

/// Best-effort restore used on error and panic paths.
fn reset_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        reset_screen();
        previous(info);
    }));
}
