//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use botdash_client::ResourceClient;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed in the same call; every dispatched action
/// counts as one in-flight request until its completion message arrives.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
) where
    C: ResourceClient + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            state.begin_request();
            handle_action(action, msg_tx.clone(), Arc::clone(client));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
