//! Modal open/close handlers and form editing

use crate::forms::CreateBotField;
use crate::modal::Modal;
use crate::state::AppState;

use super::{lifecycle, RefreshTarget, UpdateAction, UpdateResult};

pub fn handle_open_create_bot(state: &mut AppState) -> UpdateResult {
    state.modal.open(Modal::CreateBot);
    UpdateResult::none()
}

/// Show the accounts list and fetch a fresh snapshot for it
pub fn handle_open_accounts_list(state: &mut AppState) -> UpdateResult {
    state.modal.open(Modal::AccountsList);
    UpdateResult::action(UpdateAction::Refresh(RefreshTarget::Accounts))
}

/// The add-account form takes the accounts list's place until it closes
pub fn handle_open_add_account(state: &mut AppState) -> UpdateResult {
    state.modal.close(Modal::AccountsList);
    state.modal.open(Modal::AddAccount);
    UpdateResult::none()
}

pub fn handle_close_modal(state: &mut AppState, modal: Modal) -> UpdateResult {
    match modal {
        // Closing the dialog by any route counts as cancelling it
        Modal::Confirm => lifecycle::handle_confirm_cancelled(state),
        Modal::AddAccount => {
            if state.modal.close(Modal::AddAccount) {
                state.modal.open(Modal::AccountsList);
            }
            UpdateResult::none()
        }
        Modal::CreateBot | Modal::AccountsList => {
            state.modal.close(modal);
            UpdateResult::none()
        }
    }
}

pub fn handle_form_input(state: &mut AppState, c: char) -> UpdateResult {
    match state.modal.current() {
        Some(Modal::CreateBot) => state.modal.create_bot.input_char(c),
        Some(Modal::AddAccount) => state.modal.add_account.input_char(c),
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_form_backspace(state: &mut AppState) -> UpdateResult {
    match state.modal.current() {
        Some(Modal::CreateBot) => state.modal.create_bot.backspace(),
        Some(Modal::AddAccount) => state.modal.add_account.backspace(),
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_form_next_field(state: &mut AppState) -> UpdateResult {
    match state.modal.current() {
        Some(Modal::CreateBot) => state.modal.create_bot.next_field(),
        Some(Modal::AddAccount) => state.modal.add_account.next_field(),
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_form_prev_field(state: &mut AppState) -> UpdateResult {
    match state.modal.current() {
        Some(Modal::CreateBot) => state.modal.create_bot.prev_field(),
        Some(Modal::AddAccount) => state.modal.add_account.prev_field(),
        _ => {}
    }
    UpdateResult::none()
}

/// Arrow keys only switch the bot type while the type field has focus
pub fn handle_form_toggle_bot_type(state: &mut AppState) -> UpdateResult {
    if state.modal.is_open(Modal::CreateBot)
        && state.modal.create_bot.focus == CreateBotField::BotType
    {
        state.modal.create_bot.toggle_bot_type();
    }
    UpdateResult::none()
}
