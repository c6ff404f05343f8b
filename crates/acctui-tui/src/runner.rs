//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::Duration;

use acctui_app::config::Settings;
use acctui_app::process::process_message;
use acctui_app::signals;
use acctui_app::{AppState, Message};
use acctui_client::{ApiClient, HttpTransport, ReqwestTransport};
use acctui_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI against the server described by `settings`
pub async fn run(settings: Settings) -> Result<()> {
    let transport = ReqwestTransport::new(
        &settings.server.base_url,
        Duration::from_secs(settings.server.connect_timeout_secs),
    )?;
    info!("Server: {}", transport.base_url());
    let api = ApiClient::new(
        Arc::new(transport),
        settings.server.endpoints(),
        settings.session.to_session(),
    );

    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    // Startup profile fetch
    process_message(&mut state, Message::LoadProfile, &msg_tx, &api);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop<T>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &ApiClient<T>,
) -> Result<()>
where
    T: HttpTransport + Sync + 'static,
{
    while !state.should_quit() {
        // Completions from background requests and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, api);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, api);
        }
    }

    info!("Leaving event loop");
    Ok(())
}
