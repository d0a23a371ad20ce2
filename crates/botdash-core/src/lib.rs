//! # botdash-core - Core Domain Types
//!
//! Foundation crate for the bot dashboard. Provides the resource snapshot
//! types exchanged with the bot-management service, error handling, and the
//! logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Bot`] - A bot resource as reported by the service
//! - [`BotId`] - Opaque bot identifier (string or integer on the wire)
//! - [`BotStatus`] - created / running / stopped / error
//! - [`BotType`] - token-based / account-based
//! - [`Account`] - A linked phone/API-credential record
//! - [`Stats`] - Aggregate usage counters
//! - [`Severity`] - Notification severity (success, error, warning, info)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use botdash_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
pub use types::{Account, AccountId, Bot, BotId, BotStatus, BotType, Severity, Stats};
