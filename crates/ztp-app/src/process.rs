//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages and hands every resulting action to the action layer.

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use ztp_client::ZtpClient;

/// Messages sent once when the console starts
pub fn startup_messages() -> Vec<Message> {
    // Loading the profile data also lists the files
    vec![Message::ReloadData, Message::RefreshLog]
}

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &ZtpClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client);
        }

        msg = result.message;
    }
}
