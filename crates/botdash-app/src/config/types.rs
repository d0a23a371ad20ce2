//! Configuration types for the bot dashboard

use serde::{Deserialize, Serialize};

use botdash_client::DEFAULT_BASE_URL;

use crate::notifications::{NotificationTiming, DEFAULT_DISPLAY_MS, DEFAULT_TRANSITION_MS};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the bot-management service lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationSettings {
    /// How long a notification stays fully visible
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,

    /// Exit transition after the display window
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl NotificationSettings {
    pub fn timing(&self) -> NotificationTiming {
        NotificationTiming::from_millis(self.display_ms, self.transition_ms)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
            transition_ms: default_transition_ms(),
        }
    }
}

fn default_display_ms() -> u64 {
    DEFAULT_DISPLAY_MS
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Load bots and stats as soon as the dashboard starts
    #[serde(default = "default_true")]
    pub refresh_on_start: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            refresh_on_start: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Input poll timeout; one tick per timeout
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}
