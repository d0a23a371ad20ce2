//! Tests for handler module

use std::sync::Arc;

use super::*;
use crate::clock::ManualClock;
use crate::config::Settings;
use crate::forms::{AccountField, CreateBotField};
use crate::input_key::InputKey;
use crate::message::{AccountMutation, AccountRefresh, BotMutation, BotRefresh, Message};
use crate::modal::Modal;
use crate::state::{AppPhase, AppState};
use botdash_client::test_utils::{test_account, test_bot};
use botdash_client::{ClientError, ConnectionTest};
use botdash_core::{AccountId, BotId, BotStatus, BotType, Severity, Stats};

fn test_state() -> AppState {
    AppState::new(Settings::default(), Arc::new(ManualClock::new()))
}

fn state_with_bots() -> AppState {
    let mut state = test_state();
    state.cache.replace_bots(vec![
        test_bot("b1", "Echo", BotStatus::Running),
        test_bot("b2", "Relay", BotStatus::Stopped),
    ]);
    state
}

/// Run a message and every follow-up, collecting the actions produced
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn notifications(state: &AppState) -> Vec<(Severity, String)> {
    state
        .notifications
        .iter()
        .map(|n| (n.severity, n.message.clone()))
        .collect()
}

fn bot_refresh(bots: Vec<botdash_core::Bot>) -> BotRefresh {
    let stats = Stats {
        total_bots: bots.len() as u64,
        ..Stats::default()
    };
    BotRefresh {
        bots: Ok(bots),
        stats: Ok(stats),
    }
}

// ─────────────────────────────────────────────────────────
// Lifecycle & Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_any_modal() {
    let mut state = test_state();
    state.modal.open(Modal::CreateBot);
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_q_types_into_form_instead_of_quitting() {
    let mut state = test_state();
    state.modal.open(Modal::CreateBot);
    run(&mut state, Message::Key(InputKey::Char('q')));

    assert!(!state.should_quit());
    assert_eq!(state.modal.create_bot.name, "q");
}

#[test]
fn test_bot_keys_target_selected_bot() {
    let mut state = state_with_bots();
    run(&mut state, Message::Key(InputKey::Char('j')));

    match handle_key(&state, InputKey::Char('s')) {
        Some(Message::StartBot(id)) => assert_eq!(id, BotId::new("b2")),
        other => panic!("unexpected: {:?}", other),
    }
    assert!(matches!(
        handle_key(&state, InputKey::Char('x')),
        Some(Message::StopBot(_))
    ));
}

#[test]
fn test_bot_keys_without_bots_do_nothing() {
    let state = test_state();
    assert!(handle_key(&state, InputKey::Char('s')).is_none());
    assert!(handle_key(&state, InputKey::Char('d')).is_none());
}

#[test]
fn test_selection_locked_while_modal_open() {
    let mut state = state_with_bots();
    state.modal.open(Modal::CreateBot);
    update(&mut state, Message::SelectNextBot);
    assert_eq!(state.cache.selected_bot_index(), 0);
}

#[test]
fn test_start_and_stop_spawn_tasks() {
    let mut state = state_with_bots();
    assert_eq!(
        run(&mut state, Message::StartBot(BotId::new("b1"))),
        vec![UpdateAction::SpawnTask(Task::StartBot(BotId::new("b1")))]
    );
    assert_eq!(
        run(&mut state, Message::StopBot(BotId::new("b1"))),
        vec![UpdateAction::SpawnTask(Task::StopBot(BotId::new("b1")))]
    );
}

#[test]
fn test_refresh_all_fetches_bots_then_stats() {
    let mut state = test_state();
    assert_eq!(
        run(&mut state, Message::RefreshAll),
        vec![
            UpdateAction::Refresh(RefreshTarget::Bots),
            UpdateAction::Refresh(RefreshTarget::Stats),
        ]
    );
}

// ─────────────────────────────────────────────────────────
// Create Bot
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_with_missing_field_focuses_it() {
    let mut state = test_state();
    run(&mut state, Message::OpenCreateBot);
    state.modal.create_bot.name = "Echo".into();

    let actions = run(&mut state, Message::SubmitCreateBot);

    assert!(actions.is_empty());
    assert_eq!(state.modal.create_bot.focus, CreateBotField::Token);
    assert!(state.notifications.is_empty());
}

#[test]
fn test_submit_create_bot_dispatches_request() {
    let mut state = test_state();
    run(&mut state, Message::OpenCreateBot);
    state.modal.create_bot.name = "Echo".into();
    state.modal.create_bot.token = "abc".into();

    let actions = run(&mut state, Message::SubmitCreateBot);

    match actions.as_slice() {
        [UpdateAction::SpawnTask(Task::CreateBot(request))] => {
            assert_eq!(request.name, "Echo");
            assert_eq!(request.bot_type, BotType::TokenBased);
            assert_eq!(request.token.as_deref(), Some("abc"));
        }
        other => panic!("unexpected actions: {:?}", other),
    }
    // Stays open until the service answers
    assert!(state.modal.is_open(Modal::CreateBot));
}

#[test]
fn test_create_success_closes_modal_and_replaces_cache() {
    let mut state = test_state();
    run(&mut state, Message::OpenCreateBot);
    state.modal.create_bot.name = "Echo".into();

    run(
        &mut state,
        Message::BotMutationCompleted {
            mutation: BotMutation::Create,
            result: Ok(bot_refresh(vec![test_bot("b1", "Echo", BotStatus::Created)])),
        },
    );

    assert_eq!(state.modal.current(), None);
    assert_eq!(state.modal.create_bot.name, "");
    assert_eq!(
        state.cache.bot(&BotId::new("b1")).map(|b| b.status),
        Some(BotStatus::Created)
    );
    assert_eq!(state.cache.stats().map(|s| s.total_bots), Some(1));
    assert_eq!(
        notifications(&state),
        vec![(Severity::Success, "Bot created successfully!".to_string())]
    );
}

#[test]
fn test_create_failure_keeps_modal_and_form() {
    let mut state = test_state();
    run(&mut state, Message::OpenCreateBot);
    state.modal.create_bot.name = "Echo".into();
    state.modal.create_bot.token = "bad".into();

    run(
        &mut state,
        Message::BotMutationCompleted {
            mutation: BotMutation::Create,
            result: Err(ClientError::rejected(400, "Invalid token")),
        },
    );

    assert!(state.modal.is_open(Modal::CreateBot));
    assert_eq!(state.modal.create_bot.name, "Echo");
    assert_eq!(state.modal.create_bot.token, "bad");
    assert_eq!(
        notifications(&state),
        vec![(Severity::Error, "Error: Invalid token".to_string())]
    );
}

#[test]
fn test_transport_failure_uses_fallback() {
    let mut state = test_state();
    run(
        &mut state,
        Message::BotMutationCompleted {
            mutation: BotMutation::Stop,
            result: Err(ClientError::transport("connection refused")),
        },
    );
    assert_eq!(
        notifications(&state),
        vec![(
            Severity::Error,
            "Error stopping bot. Please try again.".to_string()
        )]
    );
}

#[test]
fn test_failed_refresh_after_mutation_keeps_snapshot() {
    let mut state = state_with_bots();
    run(
        &mut state,
        Message::BotMutationCompleted {
            mutation: BotMutation::Start,
            result: Ok(BotRefresh {
                bots: Err(ClientError::transport("reset")),
                stats: Ok(Stats::default()),
            }),
        },
    );

    assert_eq!(state.cache.bots().len(), 2);
    assert_eq!(
        notifications(&state),
        vec![
            (Severity::Error, "Error loading bots.".to_string()),
            (Severity::Success, "Bot started successfully!".to_string()),
        ]
    );
}

#[test]
fn test_last_completion_wins() {
    let mut state = state_with_bots();
    let stopped = vec![test_bot("b1", "Echo", BotStatus::Stopped)];
    let running = vec![test_bot("b1", "Echo", BotStatus::Running)];

    run(
        &mut state,
        Message::BotMutationCompleted {
            mutation: BotMutation::Stop,
            result: Ok(bot_refresh(stopped)),
        },
    );
    run(
        &mut state,
        Message::BotMutationCompleted {
            mutation: BotMutation::Start,
            result: Ok(bot_refresh(running)),
        },
    );

    assert_eq!(
        state.cache.bot(&BotId::new("b1")).map(|b| b.status),
        Some(BotStatus::Running)
    );
}

// ─────────────────────────────────────────────────────────
// Confirmation
// ─────────────────────────────────────────────────────────

#[test]
fn test_delete_bot_requires_confirmation() {
    let mut state = state_with_bots();

    let actions = run(&mut state, Message::RequestDeleteBot(BotId::new("b1")));

    assert!(actions.is_empty());
    assert_eq!(state.modal.current(), Some(Modal::Confirm));
    assert!(state
        .confirmation
        .prompt()
        .is_some_and(|p| p.message.contains("\"Echo\"")));
}

#[test]
fn test_confirm_dispatches_delete_and_closes_dialog() {
    let mut state = state_with_bots();
    run(&mut state, Message::RequestDeleteBot(BotId::new("b1")));

    let actions = run(&mut state, Message::Key(InputKey::Char('y')));

    assert_eq!(
        actions,
        vec![UpdateAction::SpawnTask(Task::DeleteBot(BotId::new("b1")))]
    );
    assert_eq!(state.modal.current(), None);
    assert!(!state.confirmation.is_pending());
}

#[test]
fn test_cancel_never_dispatches() {
    let mut state = state_with_bots();
    run(&mut state, Message::RequestDeleteBot(BotId::new("b1")));

    let mut actions = run(&mut state, Message::Key(InputKey::Esc));
    actions.extend(run(&mut state, Message::ConfirmCancelled));
    actions.extend(run(&mut state, Message::CloseModal(Modal::Confirm)));
    actions.extend(run(&mut state, Message::ConfirmAccepted));

    assert!(actions.is_empty());
    assert_eq!(state.modal.current(), None);
}

#[test]
fn test_config_cannot_skip_delete_confirmation() {
    let settings: Settings =
        toml::from_str("[behavior]\nconfirm_deletes = false\n").expect("settings parse");
    let mut state = AppState::new(settings, Arc::new(ManualClock::new()));
    state
        .cache
        .replace_bots(vec![test_bot("b1", "Echo", BotStatus::Stopped)]);

    let actions = run(&mut state, Message::RequestDeleteBot(BotId::new("b1")));

    assert!(actions.is_empty());
    assert_eq!(state.modal.current(), Some(Modal::Confirm));
}

#[test]
fn test_account_delete_requires_confirmation() {
    let mut state = test_state();
    state
        .cache
        .replace_accounts(vec![test_account(1, "+15550100")]);
    state.modal.open(Modal::AccountsList);

    let actions = run(&mut state, Message::RequestDeleteAccount(AccountId(1)));

    assert!(actions.is_empty());
    assert_eq!(state.modal.current(), Some(Modal::Confirm));
    assert!(state.confirmation.is_pending());
}

#[test]
fn test_account_delete_returns_to_accounts_list() {
    let mut state = test_state();
    state
        .cache
        .replace_accounts(vec![test_account(7, "+15550100")]);
    run(&mut state, Message::OpenAccountsList);

    run(&mut state, Message::Key(InputKey::Char('d')));
    assert_eq!(state.modal.current(), Some(Modal::Confirm));
    assert!(state
        .confirmation
        .prompt()
        .is_some_and(|p| p.message.contains("+15550100")));

    run(&mut state, Message::ConfirmCancelled);
    assert_eq!(state.modal.current(), Some(Modal::AccountsList));

    run(&mut state, Message::RequestDeleteAccount(AccountId(7)));
    let actions = run(&mut state, Message::ConfirmAccepted);
    assert_eq!(
        actions,
        vec![UpdateAction::SpawnTask(Task::DeleteAccount(AccountId(7)))]
    );
    assert_eq!(state.modal.current(), Some(Modal::AccountsList));
}

// ─────────────────────────────────────────────────────────
// Accounts
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_accounts_list_refreshes_accounts() {
    let mut state = test_state();
    let actions = run(&mut state, Message::Key(InputKey::Char('a')));

    assert_eq!(state.modal.current(), Some(Modal::AccountsList));
    assert_eq!(
        actions,
        vec![UpdateAction::Refresh(RefreshTarget::Accounts)]
    );
}

#[test]
fn test_add_account_form_round_trip() {
    let mut state = test_state();
    run(&mut state, Message::OpenAccountsList);
    run(&mut state, Message::Key(InputKey::Char('n')));
    assert_eq!(state.modal.current(), Some(Modal::AddAccount));

    for c in "+15550100".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }
    let actions = run(&mut state, Message::Key(InputKey::Enter));
    assert!(actions.is_empty());
    assert_eq!(state.modal.add_account.focus, AccountField::ApiId);

    state.modal.add_account.api_id = "777".into();
    state.modal.add_account.api_hash = "hash".into();
    let actions = run(&mut state, Message::SubmitAddAccount);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SpawnTask(Task::CreateAccount(req))] if req.phone_number == "+15550100"
    ));

    run(
        &mut state,
        Message::AccountMutationCompleted {
            mutation: AccountMutation::Create,
            result: Ok(AccountRefresh {
                accounts: Ok(vec![test_account(1, "+15550100")]),
            }),
        },
    );
    assert_eq!(state.modal.current(), Some(Modal::AccountsList));
    assert_eq!(state.cache.accounts().len(), 1);
    assert_eq!(state.modal.add_account.phone_number, "");
}

#[test]
fn test_closing_add_account_reopens_list() {
    let mut state = test_state();
    run(&mut state, Message::OpenAddAccount);
    run(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.modal.current(), Some(Modal::AccountsList));

    run(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.modal.current(), None);
}

#[test]
fn test_connection_result_severity() {
    let mut state = test_state();
    run(
        &mut state,
        Message::ConnectionTested {
            account_id: AccountId(1),
            result: Ok(ConnectionTest {
                success: false,
                message: "Session expired".into(),
            }),
        },
    );
    run(
        &mut state,
        Message::ConnectionTested {
            account_id: AccountId(1),
            result: Ok(ConnectionTest {
                success: true,
                message: "Connected".into(),
            }),
        },
    );

    assert_eq!(
        notifications(&state),
        vec![
            (Severity::Error, "Session expired".to_string()),
            (Severity::Success, "Connected".to_string()),
        ]
    );
}

// ─────────────────────────────────────────────────────────
// Stubs & Refresh
// ─────────────────────────────────────────────────────────

#[test]
fn test_stubs_only_notify() {
    let mut state = test_state();
    let mut actions = run(&mut state, Message::ToggleFilter);
    actions.extend(run(&mut state, Message::ToggleSort));

    assert!(actions.is_empty());
    assert_eq!(
        notifications(&state),
        vec![
            (Severity::Info, "Filtering will be available soon!".to_string()),
            (Severity::Info, "Sorting will be available soon!".to_string()),
        ]
    );
}

#[test]
fn test_edit_bot_outcomes() {
    let mut state = test_state();
    assert_eq!(
        run(&mut state, Message::EditBot(BotId::new("b1"))),
        vec![UpdateAction::SpawnTask(Task::LoadBotForEdit(BotId::new("b1")))]
    );

    run(
        &mut state,
        Message::BotLoadedForEdit {
            bot_id: BotId::new("b1"),
            result: Ok(test_bot("b1", "Echo", BotStatus::Running)),
        },
    );
    run(
        &mut state,
        Message::BotLoadedForEdit {
            bot_id: BotId::new("b9"),
            result: Err(ClientError::rejected(404, "Bot not found")),
        },
    );

    assert_eq!(
        notifications(&state),
        vec![
            (Severity::Info, "Bot editing will be available soon!".to_string()),
            (Severity::Error, "Error loading bot data".to_string()),
        ]
    );
}

#[test]
fn test_failed_refresh_keeps_previous_snapshot() {
    let mut state = state_with_bots();
    run(
        &mut state,
        Message::BotsRefreshed(Err(ClientError::transport("timeout"))),
    );

    assert_eq!(state.cache.bots().len(), 2);
    assert_eq!(
        notifications(&state),
        vec![(Severity::Error, "Error loading bots.".to_string())]
    );
}

#[test]
fn test_completion_decrements_in_flight() {
    let mut state = test_state();
    state.begin_request();
    run(&mut state, Message::StatsRefreshed(Ok(Stats::default())));
    assert_eq!(state.in_flight, 0);
    assert!(state.cache.stats().is_some());
}

#[test]
fn test_esc_dismisses_latest_notification() {
    let mut state = test_state();
    state.notifications.info("first");
    state.notifications.info("second");

    run(&mut state, Message::Key(InputKey::Esc));

    assert_eq!(
        notifications(&state),
        vec![(Severity::Info, "first".to_string())]
    );
}
