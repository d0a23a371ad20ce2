//! Action handlers: UpdateAction dispatch and background task execution
//!
//! Tasks only talk to the service and report back with a single completion
//! message; they never see `AppState`.

use std::sync::Arc;

use botdash_client::{ClientResult, ResourceClient};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::handler::{RefreshTarget, Task, UpdateAction};
use crate::message::{AccountMutation, AccountRefresh, BotMutation, BotRefresh, Message};

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: ResourceClient + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, msg_tx, client).await;
            });
        }

        UpdateAction::Refresh(target) => {
            tokio::spawn(async move {
                let message = refresh(target, client.as_ref()).await;
                send(&msg_tx, message).await;
            });
        }
    }
}

/// Run a task to completion and report its outcome
pub async fn execute_task<C>(task: Task, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: ResourceClient + Sync,
{
    let message = run_task(task, client.as_ref()).await;
    send(&msg_tx, message).await;
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        debug!("Message channel closed; dropping task result");
    }
}

/// Perform a task against the service and build its completion message
pub async fn run_task<C>(task: Task, client: &C) -> Message
where
    C: ResourceClient + Sync,
{
    debug!("Running task: {:?}", task);

    match task {
        Task::CreateBot(request) => {
            let outcome = client.create_bot(&request).await.map(|created| {
                debug!("Service created bot {:?}", created.id);
            });
            finish_bot_mutation(client, BotMutation::Create, outcome).await
        }
        Task::StartBot(id) => {
            let outcome = client.start_bot(&id).await;
            finish_bot_mutation(client, BotMutation::Start, outcome).await
        }
        Task::StopBot(id) => {
            let outcome = client.stop_bot(&id).await;
            finish_bot_mutation(client, BotMutation::Stop, outcome).await
        }
        Task::DeleteBot(id) => {
            let outcome = client.delete_bot(&id).await;
            finish_bot_mutation(client, BotMutation::Delete, outcome).await
        }
        Task::CreateAccount(request) => {
            let outcome = client.create_account(&request).await;
            finish_account_mutation(client, AccountMutation::Create, outcome).await
        }
        Task::DeleteAccount(id) => {
            let outcome = client.delete_account(id).await;
            finish_account_mutation(client, AccountMutation::Delete, outcome).await
        }
        Task::TestAccountConnection(account_id) => Message::ConnectionTested {
            account_id,
            result: client.test_account_connection(account_id).await,
        },
        Task::LoadBotForEdit(bot_id) => {
            let result = client.get_bot(&bot_id).await;
            Message::BotLoadedForEdit { bot_id, result }
        }
    }
}

/// Fetch one snapshot
pub async fn refresh<C>(target: RefreshTarget, client: &C) -> Message
where
    C: ResourceClient + Sync,
{
    match target {
        RefreshTarget::Bots => Message::BotsRefreshed(client.list_bots().await),
        RefreshTarget::Accounts => Message::AccountsRefreshed(client.list_accounts().await),
        RefreshTarget::Stats => Message::StatsRefreshed(client.get_stats().await),
    }
}

/// On success, re-fetch bots and stats before reporting so the completion
/// carries fresh snapshots. A failed mutation skips the refresh.
async fn finish_bot_mutation<C>(
    client: &C,
    mutation: BotMutation,
    outcome: ClientResult<()>,
) -> Message
where
    C: ResourceClient + Sync,
{
    let result = match outcome {
        Ok(()) => {
            info!("{:?} bot succeeded; refreshing bots and stats", mutation);
            let (bots, stats) = tokio::join!(client.list_bots(), client.get_stats());
            Ok(BotRefresh { bots, stats })
        }
        Err(e) => {
            warn!("{:?} bot rejected: {}", mutation, e);
            Err(e)
        }
    };
    Message::BotMutationCompleted { mutation, result }
}

async fn finish_account_mutation<C>(
    client: &C,
    mutation: AccountMutation,
    outcome: ClientResult<()>,
) -> Message
where
    C: ResourceClient + Sync,
{
    let result = match outcome {
        Ok(()) => {
            info!("{:?} account succeeded; refreshing accounts", mutation);
            Ok(AccountRefresh {
                accounts: client.list_accounts().await,
            })
        }
        Err(e) => {
            warn!("{:?} account rejected: {}", mutation, e);
            Err(e)
        }
    };
    Message::AccountMutationCompleted { mutation, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botdash_client::test_utils::{test_account, test_bot, FakeResourceClient, Operation};
    use botdash_client::{ClientError, CreateBotRequest};
    use botdash_core::{AccountId, BotId, BotStatus};

    #[tokio::test]
    async fn test_create_bot_refreshes_after_success() {
        let client = FakeResourceClient::new();

        let message = run_task(
            Task::CreateBot(CreateBotRequest::token_based("Echo", "abc")),
            &client,
        )
        .await;

        match message {
            Message::BotMutationCompleted {
                mutation: BotMutation::Create,
                result: Ok(refresh),
            } => {
                let bots = refresh.bots.unwrap();
                assert_eq!(bots.len(), 1);
                assert_eq!(bots[0].id, BotId::new("b1"));
                assert_eq!(bots[0].status, BotStatus::Created);
                assert_eq!(refresh.stats.unwrap().total_bots, 1);
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(client.count(Operation::ListBots), 1);
        assert_eq!(client.count(Operation::GetStats), 1);
    }

    #[tokio::test]
    async fn test_failed_start_skips_refresh() {
        let client = FakeResourceClient::new();

        let message = run_task(Task::StartBot(BotId::new("missing")), &client).await;

        match message {
            Message::BotMutationCompleted {
                mutation: BotMutation::Start,
                result: Err(ClientError::Rejected { status, .. }),
            } => assert_eq!(status, 404),
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(client.count(Operation::ListBots), 0);
        assert_eq!(client.count(Operation::GetStats), 0);
    }

    #[tokio::test]
    async fn test_refresh_failure_is_carried_not_fatal() {
        let client =
            FakeResourceClient::with_bots(vec![test_bot("b1", "Echo", BotStatus::Stopped)]);
        client.fail(Operation::GetStats, ClientError::transport("connection reset"));

        let message = run_task(Task::StartBot(BotId::new("b1")), &client).await;

        match message {
            Message::BotMutationCompleted {
                result: Ok(refresh),
                ..
            } => {
                assert_eq!(refresh.bots.unwrap()[0].status, BotStatus::Running);
                assert!(refresh.stats.is_err());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_account_refreshes_accounts() {
        let client = FakeResourceClient::new()
            .with_accounts(vec![test_account(1, "+15550100"), test_account(2, "+15550101")]);

        let message = run_task(Task::DeleteAccount(AccountId(1)), &client).await;

        match message {
            Message::AccountMutationCompleted {
                mutation: AccountMutation::Delete,
                result: Ok(refresh),
            } => {
                let accounts = refresh.accounts.unwrap();
                assert_eq!(accounts.len(), 1);
                assert_eq!(accounts[0].id, AccountId(2));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refresh_targets() {
        let client = FakeResourceClient::new().with_accounts(vec![test_account(1, "+1")]);

        assert!(matches!(
            refresh(RefreshTarget::Accounts, &client).await,
            Message::AccountsRefreshed(Ok(ref accounts)) if accounts.len() == 1
        ));
        assert!(matches!(
            refresh(RefreshTarget::Stats, &client).await,
            Message::StatsRefreshed(Ok(_))
        ));
    }

    #[tokio::test]
    async fn test_handle_action_reports_over_channel() {
        let client = Arc::new(FakeResourceClient::new());
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::Refresh(RefreshTarget::Bots), tx, client);

        let message = rx.recv().await.expect("completion message");
        assert!(matches!(message, Message::BotsRefreshed(Ok(_))));
    }
}
