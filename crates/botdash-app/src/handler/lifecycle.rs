//! Resource lifecycle handlers
//!
//! Requests become tasks; completions replace cached snapshots and emit
//! exactly one outcome notification. The cache is never patched from a
//! mutation response, only from the list fetches the task performed after it.

use botdash_client::{ClientError, ClientResult, ConnectionTest};
use botdash_core::{Account, AccountId, Bot, BotId, Stats};
use tracing::{debug, warn};

use crate::confirm_dialog::{ConfirmAction, ConfirmPrompt};
use crate::message::{AccountMutation, AccountRefresh, BotMutation, BotRefresh};
use crate::modal::Modal;
use crate::state::AppState;

use super::{Task, UpdateResult};

const TEST_CONNECTION_FALLBACK: &str = "Error testing connection. Please try again.";
const LOAD_BOT_FAILED: &str = "Error loading bot data";
const EDIT_UNAVAILABLE: &str = "Bot editing will be available soon!";

// ─────────────────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────────────────

/// Submit the create-bot form, or focus its first missing required field
pub fn handle_submit_create_bot(state: &mut AppState) -> UpdateResult {
    if !state.modal.is_open(Modal::CreateBot) {
        return UpdateResult::none();
    }

    let form = &mut state.modal.create_bot;
    if let Some(field) = form.missing_required() {
        debug!("Create bot blocked: {:?} is required", field);
        form.focus = field;
        return UpdateResult::none();
    }

    UpdateResult::task(Task::CreateBot(form.to_request()))
}

pub fn handle_submit_add_account(state: &mut AppState) -> UpdateResult {
    if !state.modal.is_open(Modal::AddAccount) {
        return UpdateResult::none();
    }

    let form = &mut state.modal.add_account;
    if let Some(field) = form.missing_required() {
        debug!("Add account blocked: {:?} is required", field);
        form.focus = field;
        return UpdateResult::none();
    }

    UpdateResult::task(Task::CreateAccount(form.to_request()))
}

pub fn handle_start_bot(id: BotId) -> UpdateResult {
    UpdateResult::task(Task::StartBot(id))
}

pub fn handle_stop_bot(id: BotId) -> UpdateResult {
    UpdateResult::task(Task::StopBot(id))
}

pub fn handle_test_account_connection(id: AccountId) -> UpdateResult {
    UpdateResult::task(Task::TestAccountConnection(id))
}

pub fn handle_edit_bot(id: BotId) -> UpdateResult {
    UpdateResult::task(Task::LoadBotForEdit(id))
}

/// Deletion only ever runs from an accepted confirmation
pub fn handle_request_delete_bot(state: &mut AppState, id: BotId) -> UpdateResult {
    let name = state
        .cache
        .bot(&id)
        .map(|bot| bot.name.clone())
        .unwrap_or_else(|| id.to_string());

    state
        .confirmation
        .request(ConfirmPrompt::delete_bot(&name), ConfirmAction::DeleteBot(id));
    state.modal.open(Modal::Confirm);
    UpdateResult::none()
}

/// Account deletion starts from the accounts list, which the dialog
/// replaces until it is answered
pub fn handle_request_delete_account(state: &mut AppState, id: AccountId) -> UpdateResult {
    let phone_number = state
        .cache
        .account(id)
        .map(|account| account.phone_number.clone())
        .unwrap_or_else(|| format!("#{}", id));

    state.modal.close(Modal::AccountsList);
    state.confirmation.request(
        ConfirmPrompt::delete_account(&phone_number),
        ConfirmAction::DeleteAccount(id),
    );
    state.modal.open(Modal::Confirm);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Confirmation
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_confirm_accepted(state: &mut AppState) -> UpdateResult {
    state.modal.close(Modal::Confirm);

    match state.confirmation.confirm() {
        Some(ConfirmAction::DeleteBot(id)) => UpdateResult::task(Task::DeleteBot(id)),
        Some(ConfirmAction::DeleteAccount(id)) => {
            state.modal.open(Modal::AccountsList);
            UpdateResult::task(Task::DeleteAccount(id))
        }
        None => {
            debug!("Confirm with nothing pending; ignoring");
            UpdateResult::none()
        }
    }
}

pub fn handle_confirm_cancelled(state: &mut AppState) -> UpdateResult {
    let back_to_accounts = matches!(
        state.confirmation.pending_action(),
        Some(ConfirmAction::DeleteAccount(_))
    );

    state.confirmation.cancel();
    if state.modal.close(Modal::Confirm) && back_to_accounts {
        state.modal.open(Modal::AccountsList);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Completions
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_bot_mutation_completed(
    state: &mut AppState,
    mutation: BotMutation,
    result: Result<BotRefresh, ClientError>,
) -> UpdateResult {
    match result {
        Ok(refresh) => {
            if mutation == BotMutation::Create {
                state.modal.close(Modal::CreateBot);
            }
            apply_bots(state, refresh.bots);
            apply_stats(state, refresh.stats);
            state.notifications.success(mutation.success_message());
        }
        Err(e) => {
            warn!("{:?} bot failed: {}", mutation, e);
            state
                .notifications
                .error(e.user_message(mutation.fallback_message()));
        }
    }
    UpdateResult::none()
}

pub fn handle_account_mutation_completed(
    state: &mut AppState,
    mutation: AccountMutation,
    result: Result<AccountRefresh, ClientError>,
) -> UpdateResult {
    match result {
        Ok(refresh) => {
            if mutation == AccountMutation::Create && state.modal.close(Modal::AddAccount) {
                state.modal.open(Modal::AccountsList);
            }
            apply_accounts(state, refresh.accounts);
            state.notifications.success(mutation.success_message());
        }
        Err(e) => {
            warn!("{:?} account failed: {}", mutation, e);
            state
                .notifications
                .error(e.user_message(mutation.fallback_message()));
        }
    }
    UpdateResult::none()
}

/// The service's own verdict is shown verbatim
pub fn handle_connection_tested(
    state: &mut AppState,
    account_id: AccountId,
    result: ClientResult<ConnectionTest>,
) -> UpdateResult {
    match result {
        Ok(test) => {
            debug!("Connection test for account {}: {:?}", account_id, test);
            let message = if !test.message.is_empty() {
                test.message
            } else if test.success {
                "Connection successful".to_string()
            } else {
                "Connection failed".to_string()
            };

            if test.success {
                state.notifications.success(message);
            } else {
                state.notifications.error(message);
            }
        }
        Err(e) => {
            warn!("Connection test for account {} failed: {}", account_id, e);
            state
                .notifications
                .error(e.user_message(TEST_CONNECTION_FALLBACK));
        }
    }
    UpdateResult::none()
}

pub fn handle_bot_loaded_for_edit(
    state: &mut AppState,
    bot_id: BotId,
    result: ClientResult<Bot>,
) -> UpdateResult {
    match result {
        Ok(_) => {
            state.notifications.info(EDIT_UNAVAILABLE);
        }
        Err(e) => {
            warn!("Loading bot {} for edit failed: {}", bot_id, e);
            state.notifications.error(LOAD_BOT_FAILED);
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot Replacement
// ─────────────────────────────────────────────────────────────────────────────

/// Replace the bots snapshot, or keep it and report the failure
pub fn apply_bots(state: &mut AppState, result: ClientResult<Vec<Bot>>) {
    match result {
        Ok(bots) => {
            debug!("Bots refreshed: {} bot(s)", bots.len());
            state.cache.replace_bots(bots);
        }
        Err(e) => {
            warn!("Bots refresh failed: {}", e);
            state.notifications.error(e.user_message("Error loading bots."));
        }
    }
}

pub fn apply_accounts(state: &mut AppState, result: ClientResult<Vec<Account>>) {
    match result {
        Ok(accounts) => {
            debug!("Accounts refreshed: {} account(s)", accounts.len());
            state.cache.replace_accounts(accounts);
        }
        Err(e) => {
            warn!("Accounts refresh failed: {}", e);
            state
                .notifications
                .error(e.user_message("Error loading accounts."));
        }
    }
}

pub fn apply_stats(state: &mut AppState, result: ClientResult<Stats>) {
    match result {
        Ok(stats) => state.cache.replace_stats(stats),
        Err(e) => {
            warn!("Stats refresh failed: {}", e);
            state.notifications.error(e.user_message("Error loading stats."));
        }
    }
}
