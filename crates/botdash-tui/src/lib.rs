//! botdash-tui - Terminal UI for the bot dashboard
//!
//! This crate drives an [`botdash_app::Engine`] from a terminal: it polls
//! crossterm for keys, turns them into messages and renders the state after
//! every batch.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
