//! Key event handlers for each open modal

use crate::input_key::InputKey;
use crate::message::Message;
use crate::modal::Modal;
use crate::state::AppState;

/// Convert key events to messages based on which modal is open
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key.is_interrupt() {
        return Some(Message::Quit);
    }

    match state.modal.current() {
        None => handle_key_normal(state, key),
        Some(Modal::CreateBot) => handle_key_create_bot(key),
        Some(Modal::AddAccount) => handle_key_add_account(key),
        Some(Modal::AccountsList) => handle_key_accounts_list(state, key),
        Some(Modal::Confirm) => handle_key_confirm_dialog(key),
    }
}

/// Handle key events on the bot list
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = || state.cache.selected_bot().map(|bot| bot.id.clone());

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc => Some(Message::DismissLatestNotification),

        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNextBot),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPreviousBot),

        InputKey::Char('n') => Some(Message::OpenCreateBot),
        InputKey::Char('a') => Some(Message::OpenAccountsList),
        InputKey::Char('r') => Some(Message::RefreshAll),
        InputKey::Char('f') => Some(Message::ToggleFilter),
        InputKey::Char('o') => Some(Message::ToggleSort),

        // Actions on the selected bot
        InputKey::Char('s') => selected().map(Message::StartBot),
        InputKey::Char('x') => selected().map(Message::StopBot),
        InputKey::Char('d') | InputKey::Delete => selected().map(Message::RequestDeleteBot),
        InputKey::Char('e') => selected().map(Message::EditBot),

        _ => None,
    }
}

fn handle_key_create_bot(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseModal(Modal::CreateBot)),
        InputKey::Enter => Some(Message::SubmitCreateBot),
        InputKey::Left | InputKey::Right => Some(Message::FormToggleBotType),
        key => handle_form_editing(key),
    }
}

fn handle_key_add_account(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseModal(Modal::AddAccount)),
        InputKey::Enter => Some(Message::SubmitAddAccount),
        key => handle_form_editing(key),
    }
}

/// Keys shared by both input forms
fn handle_form_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}

fn handle_key_accounts_list(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = || state.cache.selected_account().map(|account| account.id);

    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseModal(Modal::AccountsList)),
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNextAccount),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPreviousAccount),
        InputKey::Char('n') => Some(Message::OpenAddAccount),
        InputKey::Char('r') => Some(Message::RefreshAccounts),
        InputKey::Char('t') => selected().map(Message::TestAccountConnection),
        InputKey::Char('d') | InputKey::Delete => selected().map(Message::RequestDeleteAccount),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmAccepted),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::ConfirmCancelled),
        _ => None,
    }
}
