//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, lifecycle, modals, RefreshTarget, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    if message.is_completion() {
        state.finish_request();
    }

    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            let now = state.notifications.now();
            state.notifications.prune(now);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNextBot => {
            if !state.modal.scroll_locked() {
                state.cache.select_next_bot();
            }
            UpdateResult::none()
        }
        Message::SelectPreviousBot => {
            if !state.modal.scroll_locked() {
                state.cache.select_previous_bot();
            }
            UpdateResult::none()
        }
        Message::SelectNextAccount => {
            state.cache.select_next_account();
            UpdateResult::none()
        }
        Message::SelectPreviousAccount => {
            state.cache.select_previous_account();
            UpdateResult::none()
        }
        Message::DismissLatestNotification => {
            state.notifications.dismiss_latest();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Modals & Forms
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateBot => modals::handle_open_create_bot(state),
        Message::OpenAccountsList => modals::handle_open_accounts_list(state),
        Message::OpenAddAccount => modals::handle_open_add_account(state),
        Message::CloseModal(modal) => modals::handle_close_modal(state, modal),
        Message::FormInput(c) => modals::handle_form_input(state, c),
        Message::FormBackspace => modals::handle_form_backspace(state),
        Message::FormNextField => modals::handle_form_next_field(state),
        Message::FormPrevField => modals::handle_form_prev_field(state),
        Message::FormToggleBotType => modals::handle_form_toggle_bot_type(state),

        // ─────────────────────────────────────────────────────────
        // Lifecycle Requests
        // ─────────────────────────────────────────────────────────
        Message::SubmitCreateBot => lifecycle::handle_submit_create_bot(state),
        Message::SubmitAddAccount => lifecycle::handle_submit_add_account(state),
        Message::StartBot(id) => lifecycle::handle_start_bot(id),
        Message::StopBot(id) => lifecycle::handle_stop_bot(id),
        Message::RequestDeleteBot(id) => lifecycle::handle_request_delete_bot(state, id),
        Message::RequestDeleteAccount(id) => lifecycle::handle_request_delete_account(state, id),
        Message::TestAccountConnection(id) => lifecycle::handle_test_account_connection(id),
        Message::EditBot(id) => lifecycle::handle_edit_bot(id),
        Message::ToggleFilter => {
            state.notifications.info("Filtering will be available soon!");
            UpdateResult::none()
        }
        Message::ToggleSort => {
            state.notifications.info("Sorting will be available soon!");
            UpdateResult::none()
        }

        // Bots first; stats follow as a second dispatch
        Message::RefreshAll => UpdateResult::action(UpdateAction::Refresh(RefreshTarget::Bots))
            .with_message(Message::RefreshStats),
        Message::RefreshBots => UpdateResult::action(UpdateAction::Refresh(RefreshTarget::Bots)),
        Message::RefreshAccounts => {
            UpdateResult::action(UpdateAction::Refresh(RefreshTarget::Accounts))
        }
        Message::RefreshStats => UpdateResult::action(UpdateAction::Refresh(RefreshTarget::Stats)),

        // ─────────────────────────────────────────────────────────
        // Confirmation
        // ─────────────────────────────────────────────────────────
        Message::ConfirmAccepted => lifecycle::handle_confirm_accepted(state),
        Message::ConfirmCancelled => lifecycle::handle_confirm_cancelled(state),

        // ─────────────────────────────────────────────────────────
        // Task Completions
        // ─────────────────────────────────────────────────────────
        Message::BotMutationCompleted { mutation, result } => {
            lifecycle::handle_bot_mutation_completed(state, mutation, result)
        }
        Message::AccountMutationCompleted { mutation, result } => {
            lifecycle::handle_account_mutation_completed(state, mutation, result)
        }
        Message::ConnectionTested { account_id, result } => {
            lifecycle::handle_connection_tested(state, account_id, result)
        }
        Message::BotLoadedForEdit { bot_id, result } => {
            lifecycle::handle_bot_loaded_for_edit(state, bot_id, result)
        }
        Message::BotsRefreshed(result) => {
            lifecycle::apply_bots(state, result);
            UpdateResult::none()
        }
        Message::AccountsRefreshed(result) => {
            lifecycle::apply_accounts(state, result);
            UpdateResult::none()
        }
        Message::StatsRefreshed(result) => {
            lifecycle::apply_stats(state, result);
            UpdateResult::none()
        }
    }
}
