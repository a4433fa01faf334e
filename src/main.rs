use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use orderview::OrderViewError;
use orderview::config::{AppConfig, fetch_config};
use orderview::logging::{init_file_logging, init_stderr_logging};
use orderview::lookup::HttpTransport;
use orderview::oneshot::run_once;
use orderview::tui::event::{spawn_event_reader, spawn_lookup, spawn_tick_timer, update};
use orderview::tui::{Action, App, Tui, render, restore_terminal, setup_terminal};

/// Interval between UI ticks, used to expire status-bar notices.
const TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<(), OrderViewError> {
    let app_config = fetch_config()?;
    let transport = Arc::new(HttpTransport::new(&app_config.orders.base_url)?);

    if let Some(order_uid) = std::env::args().nth(1) {
        init_stderr_logging()?;
        let output = run_once(transport.as_ref(), &order_uid).await?;
        if !output.is_empty() {
            println!("{output}");
        }
        return Ok(());
    }

    init_file_logging(&app_config.ui.log_file)?;
    info!(base_url = %app_config.orders.base_url, "Starting order lookup UI");

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &app_config, transport).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_app(
    terminal: &mut Tui,
    app_config: &AppConfig,
    transport: Arc<HttpTransport>,
) -> Result<(), OrderViewError> {
    let mut app = App::new(
        app_config.ui.stale_policy,
        app_config.ui.surface_transport_errors,
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), TICK_MS);

    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| OrderViewError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(Action::Lookup(ticket)) = update(&mut app, message) {
            spawn_lookup(Arc::clone(&transport), ticket, tx.clone());
        }
    }

    info!("Order lookup UI closed");
    Ok(())
}
