//! botdash-app - Application state and orchestration for the bot dashboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the event vocabulary and
//! [`handler::update`] the only place state changes. Service calls run as
//! spawned tasks that report back as completion messages, so the cache is
//! only ever replaced from fresh list fetches.

pub mod actions;
pub mod cache;
pub mod clock;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod forms;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod modal;
pub mod notifications;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::Engine;
pub use handler::{RefreshTarget, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use modal::Modal;
pub use state::{AppPhase, AppState};
