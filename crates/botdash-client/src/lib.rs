//! # botdash-client - Remote Resource Client
//!
//! Thin request layer over the bot-management REST service. Each operation is
//! exactly one HTTP request; the client keeps no state between calls and never
//! retries.
//!
//! Depends on [`botdash_core`] for the resource snapshot types.
//!
//! ## Public API
//!
//! - [`ResourceClient`] / [`LocalResourceClient`] - The service boundary
//! - [`HttpResourceClient`] - `reqwest` implementation against a base URL
//! - [`ClientError`] - Rejection (non-2xx with a detail) vs transport failure
//! - [`CreateBotRequest`], [`CreateAccountRequest`] - Mutation payloads
//! - [`CreatedBot`], [`ConnectionTest`] - Mutation responses
//!
//! With the `test-helpers` feature, `test_utils::FakeResourceClient` provides an
//! in-memory service with scripted failures and a call log.

pub mod client;
pub mod error;
pub mod http;
pub mod payload;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{LocalResourceClient, ResourceClient};
pub use error::{ClientError, ClientResult};
pub use http::{HttpResourceClient, DEFAULT_BASE_URL};
pub use payload::{ConnectionTest, CreateAccountRequest, CreateBotRequest, CreatedBot};
