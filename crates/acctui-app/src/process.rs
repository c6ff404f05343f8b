//! Message processing
//!
//! Runs a message through the TEA update function, dispatching every action
//! it produces and following up on chained messages.

use acctui_client::{ApiClient, HttpTransport};
use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<T>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &ApiClient<T>,
) where
    T: HttpTransport + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
