//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per open modal
//! - `modals`: Modal open/close and form editing
//! - `lifecycle`: Resource requests, confirmation and task completions

pub(crate) mod keys;
pub(crate) mod lifecycle;
pub(crate) mod modals;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use botdash_client::{CreateAccountRequest, CreateBotRequest};
use botdash_core::{AccountId, BotId};

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Spawn a background mutation or lookup against the service
    SpawnTask(Task),

    /// Re-fetch one snapshot from the service
    Refresh(RefreshTarget),
}

/// Which cached snapshot a refresh replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTarget {
    Bots,
    Accounts,
    Stats,
}

/// Background tasks to spawn
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    CreateBot(CreateBotRequest),
    StartBot(BotId),
    StopBot(BotId),
    DeleteBot(BotId),
    CreateAccount(CreateAccountRequest),
    DeleteAccount(AccountId),
    TestAccountConnection(AccountId),
    /// Fetch a single bot ahead of editing
    LoadBotForEdit(BotId),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn task(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }

    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
