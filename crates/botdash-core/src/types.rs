//! Resource snapshot types exchanged with the bot-management service

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Opaque bot identifier.
///
/// The service has shipped both string ids (`"b1"`) and integer ids (`7`);
/// both deserialize into the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BotId(String);

impl BotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BotId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for BotId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => BotId(text),
            RawId::Number(n) => BotId(n.to_string()),
        })
    }
}

/// Account identifier (integer primary key on the service side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bot lifecycle status as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    Created,
    #[serde(alias = "active")]
    Running,
    #[serde(alias = "inactive")]
    Stopped,
    Error,
}

impl BotStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BotStatus::Created => "created",
            BotStatus::Running => "running",
            BotStatus::Stopped => "stopped",
            BotStatus::Error => "error",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, BotStatus::Running)
    }
}

/// How a bot authenticates with the messaging platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BotType {
    #[default]
    TokenBased,
    AccountBased,
}

impl BotType {
    pub fn label(&self) -> &'static str {
        match self {
            BotType::TokenBased => "token-based",
            BotType::AccountBased => "account-based",
        }
    }

    /// The other variant (form selectors only ever have two choices)
    pub fn toggled(&self) -> Self {
        match self {
            BotType::TokenBased => BotType::AccountBased,
            BotType::AccountBased => BotType::TokenBased,
        }
    }
}

/// A bot resource snapshot. Never patched locally; replaced from list fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: BotStatus,
    pub bot_type: BotType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_messages: u64,
    #[serde(default)]
    pub last_activity: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_authenticated: bool,
}

impl Bot {
    /// Description for display, with a placeholder for empty values
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "No description",
        }
    }
}

/// A linked account. The API hash is write-only and never part of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub phone_number: String,
    #[serde(deserialize_with = "string_or_number")]
    pub api_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_authenticated: bool,
    #[serde(default)]
    pub auth_status: Option<String>,
}

impl Account {
    pub fn auth_label(&self) -> &str {
        match self.auth_status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ if self.is_authenticated => "authenticated",
            _ => "pending",
        }
    }
}

/// Aggregate usage statistics; replaced wholesale on every fetch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_bots: u64,
    #[serde(default)]
    pub active_bots: u64,
    #[serde(default)]
    pub total_messages: u64,
    #[serde(default)]
    pub uptime: String,
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
