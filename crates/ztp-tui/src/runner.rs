//! Main TUI runner - entry point and event loop

use std::path::PathBuf;

use tokio::sync::mpsc;

use ztp_app::config::Settings;
use ztp_app::message::Message;
use ztp_app::signals;
use ztp_app::state::AppState;
use ztp_app::{process_message, startup_messages};
use ztp_client::ZtpClient;
use ztp_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive console against the configured server
pub async fn run(settings: Settings, config_path: Option<PathBuf>) -> Result<()> {
    let client = ZtpClient::new(&settings.server.url)?;
    info!("Starting console against {}", client.base_url());

    let mut term = terminal::init()?;
    let mut state = AppState::with_settings(settings, config_path);

    // Network tasks report back on this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    for message in startup_messages() {
        process_message(&mut state, message, &msg_tx, &client);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    // Abort in-flight uploads; their tasks end with the runtime
    for (id, cancel) in state.upload_cancels.drain() {
        debug!("Cancelling upload {} on exit", id);
        let _ = cancel.send(());
    }

    terminal::restore().context("Leaving the console")?;
    info!("Console exited");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &ZtpClient,
) -> Result<()> {
    while !state.should_quit() {
        // Results from background requests
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, client);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Terminal polling blocks for up to one tick; keep it off the
        // runtime's worker so spawned requests make progress
        let messages = tokio::task::block_in_place(event::poll)?;
        for message in messages {
            process_message(state, message, &msg_tx, client);
        }
    }

    Ok(())
}
