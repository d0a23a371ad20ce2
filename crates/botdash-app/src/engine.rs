//! Engine - owns the TEA state, the message channel and the service client
//!
//! Frontends feed it messages (keys, ticks) and render from `engine.state`.
//! Completion messages from background tasks arrive over the same channel.

use std::sync::Arc;

use botdash_client::ResourceClient;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the bot dashboard.
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key poller).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    client: Arc<C>,
}

impl<C> Engine<C>
where
    C: ResourceClient + Sync + 'static,
{
    pub fn new(settings: Settings, client: C) -> Self {
        Self::with_clock(settings, client, Arc::new(SystemClock))
    }

    /// Build an engine whose notification timing follows `clock`
    pub fn with_clock(settings: Settings, client: C, clock: Arc<dyn Clock>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        Self {
            state: AppState::new(settings, clock),
            msg_tx,
            msg_rx,
            client: Arc::new(client),
        }
    }

    /// Kick off the initial loads
    pub fn start(&mut self) {
        if self.state.settings.behavior.refresh_on_start {
            info!("Loading bots and stats from {}", self.state.settings.service.base_url);
            self.process_message(Message::RefreshAll);
        } else {
            debug!("refresh_on_start disabled; waiting for manual refresh");
        }
    }

    /// Install SIGINT/SIGTERM handling that quits the loop
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.client);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it. Returns false once every
    /// sender is gone.
    pub async fn recv_and_process(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Process messages until no request is in flight
    pub async fn settle(&mut self) {
        while self.state.is_busy() {
            if !self.recv_and_process().await {
                break;
            }
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
