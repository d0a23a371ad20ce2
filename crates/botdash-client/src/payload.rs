//! Request and response bodies for mutating endpoints

use botdash_core::{BotId, BotType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/bots`.
///
/// Optional fields are sent as `null` when empty; which of them the service
/// requires depends on `bot_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBotRequest {
    pub name: String,
    pub description: Option<String>,
    pub bot_type: BotType,
    pub token: Option<String>,
    pub api_id: Option<String>,
    pub api_hash: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl CreateBotRequest {
    /// Minimal token-based request
    pub fn token_based(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            bot_type: BotType::TokenBased,
            token: Some(token.into()),
            api_id: None,
            api_hash: None,
            phone_number: None,
            config: Map::new(),
        }
    }
}

/// Body of `POST /api/accounts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub phone_number: String,
    pub api_id: String,
    pub api_hash: String,
}

/// Successful `POST /api/bots` response.
///
/// The service answers either with the full bot object or with
/// `{message, bot_id}`; only the id is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreatedBot {
    #[serde(default, alias = "bot_id")]
    pub id: Option<BotId>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `GET /api/accounts/{id}/test-connection`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTest {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
