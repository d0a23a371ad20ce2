//! The service boundary used by the lifecycle controller

use botdash_core::{Account, AccountId, Bot, BotId, Stats};

use crate::error::ClientResult;
use crate::payload::{ConnectionTest, CreateAccountRequest, CreateBotRequest, CreatedBot};

/// Bot-management service operations.
///
/// Every method issues exactly one request. Implementations are stateless
/// with respect to the dashboard: they never read or write cached snapshots.
#[trait_variant::make(ResourceClient: Send)]
pub trait LocalResourceClient {
    /// `GET /api/bots`
    async fn list_bots(&self) -> ClientResult<Vec<Bot>>;

    /// `GET /api/bots/{id}`
    async fn get_bot(&self, id: &BotId) -> ClientResult<Bot>;

    /// `POST /api/bots`
    async fn create_bot(&self, request: &CreateBotRequest) -> ClientResult<CreatedBot>;

    /// `DELETE /api/bots/{id}`
    async fn delete_bot(&self, id: &BotId) -> ClientResult<()>;

    /// `POST /api/bots/{id}/start`
    async fn start_bot(&self, id: &BotId) -> ClientResult<()>;

    /// `POST /api/bots/{id}/stop`
    async fn stop_bot(&self, id: &BotId) -> ClientResult<()>;

    /// `GET /api/accounts`
    async fn list_accounts(&self) -> ClientResult<Vec<Account>>;

    /// `POST /api/accounts`
    async fn create_account(&self, request: &CreateAccountRequest) -> ClientResult<()>;

    /// `DELETE /api/accounts/{id}`
    async fn delete_account(&self, id: AccountId) -> ClientResult<()>;

    /// `GET /api/accounts/{id}/test-connection`
    async fn test_account_connection(&self, id: AccountId) -> ClientResult<ConnectionTest>;

    /// `GET /api/stats`
    async fn get_stats(&self) -> ClientResult<Stats>;
}
