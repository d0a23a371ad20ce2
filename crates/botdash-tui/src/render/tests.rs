use std::sync::Arc;

use botdash_app::config::Settings;
use botdash_app::confirm_dialog::{ConfirmAction, ConfirmPrompt};
use botdash_app::{AppState, ManualClock, Modal};
use botdash_client::test_utils::{test_account, test_bot};
use botdash_core::{BotId, BotStatus, Stats};

use super::view;
use crate::test_utils::TestTerminal;

fn test_state() -> (AppState, ManualClock) {
    let clock = ManualClock::new();
    let state = AppState::new(Settings::default(), Arc::new(clock.clone()));
    (state, clock)
}

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_empty_dashboard() {
    let (state, _) = test_state();
    let term = render(&state);

    assert!(term.buffer_contains("Bot Dashboard"));
    assert!(term.buffer_contains("No bots created yet"));
    assert!(term.buffer_contains("New bot"));
}

#[test]
fn test_dashboard_with_bots_and_stats() {
    let (mut state, _) = test_state();
    state.cache.replace_bots(vec![
        test_bot("b1", "Echo", BotStatus::Running),
        test_bot("b2", "Relay", BotStatus::Error),
    ]);
    state.cache.replace_stats(Stats {
        total_bots: 2,
        active_bots: 1,
        total_messages: 42,
        uptime: "1h 5m".to_string(),
    });

    let term = render(&state);

    assert!(term.buffer_contains("Echo"));
    assert!(term.buffer_contains("Relay"));
    assert!(term.buffer_contains("error"));
    assert!(term.buffer_contains("1h 5m"));
    assert!(!term.buffer_contains("No bots created yet"));
}

#[test]
fn test_create_bot_modal_over_dashboard() {
    let (mut state, _) = test_state();
    state.modal.open(Modal::CreateBot);
    state.modal.create_bot.name = "Echo".to_string();

    let term = render(&state);

    assert!(term.buffer_contains("Create New Bot"));
    assert!(term.buffer_contains("Bot token"));
    assert!(term.buffer_contains("Echo"));
}

#[test]
fn test_accounts_modal_lists_accounts() {
    let (mut state, _) = test_state();
    state
        .cache
        .replace_accounts(vec![test_account(1, "+15550100")]);
    state.modal.open(Modal::AccountsList);

    let term = render(&state);

    assert!(term.buffer_contains("Accounts"));
    assert!(term.buffer_contains("+15550100"));
    assert!(term.buffer_contains("pending"));
}

#[test]
fn test_confirm_dialog_shows_prompt() {
    let (mut state, _) = test_state();
    state.confirmation.request(
        ConfirmPrompt::delete_bot("Echo"),
        ConfirmAction::DeleteBot(BotId::new("b1")),
    );
    state.modal.open(Modal::Confirm);

    let term = render(&state);

    assert!(term.buffer_contains("Delete Bot"));
    assert!(term.buffer_contains("[y] Delete"));
}

#[test]
fn test_notification_disappears_after_lifetime() {
    let (mut state, clock) = test_state();
    state.notifications.success("Bot started successfully!");

    assert!(render(&state).buffer_contains("Bot started successfully!"));

    clock.advance_ms(5300);
    assert!(!render(&state).buffer_contains("Bot started successfully!"));
}
