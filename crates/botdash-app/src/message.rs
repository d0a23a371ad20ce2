//! Message types for the application (TEA pattern)

use botdash_client::{ClientError, ClientResult, ConnectionTest};
use botdash_core::{Account, AccountId, Bot, BotId, Stats};

use crate::input_key::InputKey;
use crate::modal::Modal;

/// A bot mutation whose completion triggers a bots + stats refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotMutation {
    Create,
    Start,
    Stop,
    Delete,
}

impl BotMutation {
    pub fn success_message(&self) -> &'static str {
        match self {
            BotMutation::Create => "Bot created successfully!",
            BotMutation::Start => "Bot started successfully!",
            BotMutation::Stop => "Bot stopped successfully!",
            BotMutation::Delete => "Bot deleted successfully!",
        }
    }

    /// Shown when the request failed without a service explanation
    pub fn fallback_message(&self) -> &'static str {
        match self {
            BotMutation::Create => "Error creating bot. Please try again.",
            BotMutation::Start => "Error starting bot. Please try again.",
            BotMutation::Stop => "Error stopping bot. Please try again.",
            BotMutation::Delete => "Error deleting bot. Please try again.",
        }
    }
}

/// An account mutation whose completion triggers an accounts refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMutation {
    Create,
    Delete,
}

impl AccountMutation {
    pub fn success_message(&self) -> &'static str {
        match self {
            AccountMutation::Create => "Account added successfully!",
            AccountMutation::Delete => "Account deleted successfully!",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            AccountMutation::Create => "Error adding account. Please try again.",
            AccountMutation::Delete => "Error deleting account. Please try again.",
        }
    }
}

/// List fetches performed after a successful bot mutation
#[derive(Debug, Clone)]
pub struct BotRefresh {
    pub bots: ClientResult<Vec<Bot>>,
    pub stats: ClientResult<Stats>,
}

/// List fetch performed after a successful account mutation
#[derive(Debug, Clone)]
pub struct AccountRefresh {
    pub accounts: ClientResult<Vec<Account>>,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Periodic tick; drives notification expiry
    Tick,
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectNextBot,
    SelectPreviousBot,
    SelectNextAccount,
    SelectPreviousAccount,
    /// Dismiss the newest notification before its timer runs out
    DismissLatestNotification,

    // ─────────────────────────────────────────────────────────
    // Modals & Forms
    // ─────────────────────────────────────────────────────────
    OpenCreateBot,
    OpenAccountsList,
    /// Opened from the accounts list, which it replaces until closed
    OpenAddAccount,
    CloseModal(Modal),
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    FormToggleBotType,

    // ─────────────────────────────────────────────────────────
    // Lifecycle Requests
    // ─────────────────────────────────────────────────────────
    SubmitCreateBot,
    SubmitAddAccount,
    StartBot(BotId),
    StopBot(BotId),
    RequestDeleteBot(BotId),
    RequestDeleteAccount(AccountId),
    TestAccountConnection(AccountId),
    EditBot(BotId),
    ToggleFilter,
    ToggleSort,
    RefreshAll,
    RefreshBots,
    RefreshAccounts,
    RefreshStats,

    // ─────────────────────────────────────────────────────────
    // Confirmation
    // ─────────────────────────────────────────────────────────
    ConfirmAccepted,
    ConfirmCancelled,

    // ─────────────────────────────────────────────────────────
    // Task Completions
    // ─────────────────────────────────────────────────────────
    BotMutationCompleted {
        mutation: BotMutation,
        result: Result<BotRefresh, ClientError>,
    },
    AccountMutationCompleted {
        mutation: AccountMutation,
        result: Result<AccountRefresh, ClientError>,
    },
    ConnectionTested {
        account_id: AccountId,
        result: ClientResult<ConnectionTest>,
    },
    BotLoadedForEdit {
        bot_id: BotId,
        result: ClientResult<Bot>,
    },
    BotsRefreshed(ClientResult<Vec<Bot>>),
    AccountsRefreshed(ClientResult<Vec<Account>>),
    StatsRefreshed(ClientResult<Stats>),
}

impl Message {
    /// Completion messages close out one in-flight request
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Message::BotMutationCompleted { .. }
                | Message::AccountMutationCompleted { .. }
                | Message::ConnectionTested { .. }
                | Message::BotLoadedForEdit { .. }
                | Message::BotsRefreshed(_)
                | Message::AccountsRefreshed(_)
                | Message::StatsRefreshed(_)
        )
    }
}
