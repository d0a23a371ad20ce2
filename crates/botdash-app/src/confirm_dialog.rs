//! Confirmation state for destructive operations.
//!
//! A pending confirmation is data, not a callback: the handler dispatches the
//! returned [`ConfirmAction`] itself. The pending slot is private, so the only
//! way an action leaves this module is through [`ConfirmationState::confirm`].

use botdash_core::{AccountId, BotId};
use tracing::debug;

/// A destructive operation waiting for explicit confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteBot(BotId),
    DeleteAccount(AccountId),
}

/// Text shown in the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Delete".to_string(),
        }
    }

    pub fn delete_bot(name: &str) -> Self {
        Self::new(
            "Delete Bot",
            format!(
                "Are you sure you want to delete the bot \"{}\"? This action cannot be undone.",
                name
            ),
        )
    }

    pub fn delete_account(phone_number: &str) -> Self {
        Self::new(
            "Delete Account",
            format!(
                "Are you sure you want to delete the account {}? This action cannot be undone.",
                phone_number
            ),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum PendingConfirmation {
    #[default]
    Idle,
    Pending {
        prompt: ConfirmPrompt,
        action: ConfirmAction,
    },
}

#[derive(Debug, Default)]
pub struct ConfirmationState {
    pending: PendingConfirmation,
}

impl ConfirmationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a confirmation, replacing any that is already pending
    pub fn request(&mut self, prompt: ConfirmPrompt, action: ConfirmAction) {
        if let PendingConfirmation::Pending { action: previous, .. } = &self.pending {
            debug!("Replacing pending confirmation for {:?}", previous);
        }
        self.pending = PendingConfirmation::Pending { prompt, action };
    }

    /// Take the pending action. Yields it at most once.
    pub fn confirm(&mut self) -> Option<ConfirmAction> {
        match std::mem::take(&mut self.pending) {
            PendingConfirmation::Pending { action, .. } => Some(action),
            PendingConfirmation::Idle => None,
        }
    }

    /// Drop the pending action without running it
    pub fn cancel(&mut self) {
        self.pending = PendingConfirmation::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.pending, PendingConfirmation::Pending { .. })
    }

    pub fn prompt(&self) -> Option<&ConfirmPrompt> {
        match &self.pending {
            PendingConfirmation::Pending { prompt, .. } => Some(prompt),
            PendingConfirmation::Idle => None,
        }
    }

    /// Inspect (not take) what would run on confirm
    pub fn pending_action(&self) -> Option<&ConfirmAction> {
        match &self.pending {
            PendingConfirmation::Pending { action, .. } => Some(action),
            PendingConfirmation::Idle => None,
        }
    }
}
