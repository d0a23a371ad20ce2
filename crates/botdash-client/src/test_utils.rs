//! Test utilities for client consumers
//!
//! [`FakeResourceClient`] behaves like a small in-memory service: mutations
//! change its state, list calls return the current state, and any operation
//! can be scripted to fail.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use botdash_core::{Account, AccountId, Bot, BotId, BotStatus, BotType, Stats};
use serde_json::Map;

use crate::client::ResourceClient;
use crate::error::{ClientError, ClientResult};
use crate::payload::{ConnectionTest, CreateAccountRequest, CreateBotRequest, CreatedBot};

/// One client operation, used for scripting failures and inspecting calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListBots,
    GetBot,
    CreateBot,
    DeleteBot,
    StartBot,
    StopBot,
    ListAccounts,
    CreateAccount,
    DeleteAccount,
    TestAccountConnection,
    GetStats,
}

/// A recorded call: the operation and its target id, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: Operation,
    pub target: Option<String>,
}

#[derive(Debug, Default)]
struct FakeState {
    bots: Vec<Bot>,
    accounts: Vec<Account>,
    next_bot: u64,
    next_account: i64,
    failures: HashMap<Operation, ClientError>,
    connection_result: Option<ConnectionTest>,
    calls: Vec<Call>,
}

/// In-memory [`ResourceClient`]
#[derive(Debug, Default)]
pub struct FakeResourceClient {
    state: Mutex<FakeState>,
}

impl FakeResourceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given bots already present
    pub fn with_bots(bots: Vec<Bot>) -> Self {
        let fake = Self::new();
        fake.state().bots = bots;
        fake
    }

    /// Start with the given accounts already present
    pub fn with_accounts(self, accounts: Vec<Account>) -> Self {
        {
            let mut state = self.state();
            state.next_account = accounts.iter().map(|a| a.id.0).max().unwrap_or(0);
            state.accounts = accounts;
        }
        self
    }

    /// Make every subsequent call to `operation` fail with `error`
    pub fn fail(&self, operation: Operation, error: ClientError) {
        self.state().failures.insert(operation, error);
    }

    /// Undo a previous [`fail`](Self::fail)
    pub fn succeed(&self, operation: Operation) {
        self.state().failures.remove(&operation);
    }

    /// Script the answer of `test_account_connection`
    pub fn set_connection_result(&self, result: ConnectionTest) {
        self.state().connection_result = Some(result);
    }

    /// Replace a bot's status behind the dashboard's back
    pub fn set_status(&self, id: &BotId, status: BotStatus) {
        if let Some(bot) = self.state().bots.iter_mut().find(|b| &b.id == id) {
            bot.status = status;
        }
    }

    pub fn bots(&self) -> Vec<Bot> {
        self.state().bots.clone()
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.state().accounts.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    /// Number of recorded calls to `operation`
    pub fn count(&self, operation: Operation) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call and return the scripted failure, if any
    fn begin(
        &self,
        operation: Operation,
        target: Option<String>,
    ) -> ClientResult<MutexGuard<'_, FakeState>> {
        let mut state = self.state();
        state.calls.push(Call { operation, target });
        if let Some(err) = state.failures.get(&operation).cloned() {
            return Err(err);
        }
        Ok(state)
    }

    fn stats_of(state: &FakeState) -> Stats {
        Stats {
            total_bots: state.bots.len() as u64,
            active_bots: state.bots.iter().filter(|b| b.status.is_running()).count() as u64,
            total_messages: state.bots.iter().map(|b| b.total_messages).sum(),
            uptime: "0h 0m".to_string(),
        }
    }
}

fn bot_not_found() -> ClientError {
    ClientError::rejected(404, "Bot not found")
}

fn account_not_found() -> ClientError {
    ClientError::rejected(404, "Account not found")
}

impl ResourceClient for FakeResourceClient {
    async fn list_bots(&self) -> ClientResult<Vec<Bot>> {
        let state = self.begin(Operation::ListBots, None)?;
        Ok(state.bots.clone())
    }

    async fn get_bot(&self, id: &BotId) -> ClientResult<Bot> {
        let state = self.begin(Operation::GetBot, Some(id.to_string()))?;
        state
            .bots
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(bot_not_found)
    }

    async fn create_bot(&self, request: &CreateBotRequest) -> ClientResult<CreatedBot> {
        let mut state = self.begin(Operation::CreateBot, None)?;
        state.next_bot += 1;
        let id = BotId::new(format!("b{}", state.next_bot));
        state.bots.push(Bot {
            id: id.clone(),
            name: request.name.clone(),
            description: request.description.clone(),
            status: BotStatus::Created,
            bot_type: request.bot_type,
            config: request.config.clone(),
            phone_number: request.phone_number.clone(),
            total_messages: 0,
            last_activity: None,
            is_authenticated: false,
        });
        Ok(CreatedBot {
            id: Some(id),
            message: None,
        })
    }

    async fn delete_bot(&self, id: &BotId) -> ClientResult<()> {
        let mut state = self.begin(Operation::DeleteBot, Some(id.to_string()))?;
        let before = state.bots.len();
        state.bots.retain(|b| &b.id != id);
        if state.bots.len() == before {
            return Err(bot_not_found());
        }
        Ok(())
    }

    async fn start_bot(&self, id: &BotId) -> ClientResult<()> {
        let mut state = self.begin(Operation::StartBot, Some(id.to_string()))?;
        let bot = state
            .bots
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(bot_not_found)?;
        bot.status = BotStatus::Running;
        Ok(())
    }

    async fn stop_bot(&self, id: &BotId) -> ClientResult<()> {
        let mut state = self.begin(Operation::StopBot, Some(id.to_string()))?;
        let bot = state
            .bots
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(bot_not_found)?;
        bot.status = BotStatus::Stopped;
        Ok(())
    }

    async fn list_accounts(&self) -> ClientResult<Vec<Account>> {
        let state = self.begin(Operation::ListAccounts, None)?;
        Ok(state.accounts.clone())
    }

    async fn create_account(&self, request: &CreateAccountRequest) -> ClientResult<()> {
        let mut state = self.begin(Operation::CreateAccount, None)?;
        state.next_account += 1;
        let id = AccountId(state.next_account);
        state.accounts.push(Account {
            id,
            phone_number: request.phone_number.clone(),
            api_id: request.api_id.clone(),
            is_authenticated: false,
            auth_status: None,
        });
        Ok(())
    }

    async fn delete_account(&self, id: AccountId) -> ClientResult<()> {
        let mut state = self.begin(Operation::DeleteAccount, Some(id.to_string()))?;
        let before = state.accounts.len();
        state.accounts.retain(|a| a.id != id);
        if state.accounts.len() == before {
            return Err(account_not_found());
        }
        Ok(())
    }

    async fn test_account_connection(&self, id: AccountId) -> ClientResult<ConnectionTest> {
        let state = self.begin(Operation::TestAccountConnection, Some(id.to_string()))?;
        if !state.accounts.iter().any(|a| a.id == id) {
            return Err(account_not_found());
        }
        Ok(state.connection_result.clone().unwrap_or(ConnectionTest {
            success: true,
            message: "Connection successful".to_string(),
        }))
    }

    async fn get_stats(&self) -> ClientResult<Stats> {
        let state = self.begin(Operation::GetStats, None)?;
        Ok(Self::stats_of(&state))
    }
}

/// Creates a token-based test bot with the given id, name and status.
pub fn test_bot(id: &str, name: &str, status: BotStatus) -> Bot {
    Bot {
        id: BotId::new(id),
        name: name.to_string(),
        description: None,
        status,
        bot_type: BotType::TokenBased,
        config: Map::new(),
        phone_number: None,
        total_messages: 0,
        last_activity: None,
        is_authenticated: false,
    }
}

/// Creates a test account with the given id and phone number.
pub fn test_account(id: i64, phone_number: &str) -> Account {
    Account {
        id: AccountId(id),
        phone_number: phone_number.to_string(),
        api_id: "12345".to_string(),
        is_authenticated: false,
        auth_status: None,
    }
}
