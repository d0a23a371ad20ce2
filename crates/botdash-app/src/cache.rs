//! Last-known snapshots of service resources.
//!
//! Snapshots are only ever replaced wholesale from a list fetch; nothing here
//! mutates an individual bot or account. A failed refresh simply never calls
//! `replace_*`, leaving the previous snapshot in place.

use botdash_core::{Account, AccountId, Bot, BotId, Stats};
use chrono::{DateTime, Local};

#[derive(Debug, Default)]
pub struct ResourceCache {
    bots: Vec<Bot>,
    accounts: Vec<Account>,
    stats: Option<Stats>,
    bots_refreshed_at: Option<DateTime<Local>>,
    accounts_refreshed_at: Option<DateTime<Local>>,
    stats_refreshed_at: Option<DateTime<Local>>,
    selected_bot: usize,
    selected_account: usize,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Replacement
    // ─────────────────────────────────────────────────────────

    pub fn replace_bots(&mut self, bots: Vec<Bot>) {
        self.bots = bots;
        self.bots_refreshed_at = Some(Local::now());
        self.selected_bot = clamp(self.selected_bot, self.bots.len());
    }

    pub fn replace_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
        self.accounts_refreshed_at = Some(Local::now());
        self.selected_account = clamp(self.selected_account, self.accounts.len());
    }

    pub fn replace_stats(&mut self, stats: Stats) {
        self.stats = Some(stats);
        self.stats_refreshed_at = Some(Local::now());
    }

    // ─────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    pub fn bot(&self, id: &BotId) -> Option<&Bot> {
        self.bots.iter().find(|b| &b.id == id)
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn bots_refreshed_at(&self) -> Option<DateTime<Local>> {
        self.bots_refreshed_at
    }

    pub fn accounts_refreshed_at(&self) -> Option<DateTime<Local>> {
        self.accounts_refreshed_at
    }

    pub fn stats_refreshed_at(&self) -> Option<DateTime<Local>> {
        self.stats_refreshed_at
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    pub fn selected_bot_index(&self) -> usize {
        self.selected_bot
    }

    pub fn selected_bot(&self) -> Option<&Bot> {
        self.bots.get(self.selected_bot)
    }

    pub fn select_next_bot(&mut self) {
        if self.selected_bot + 1 < self.bots.len() {
            self.selected_bot += 1;
        }
    }

    pub fn select_previous_bot(&mut self) {
        self.selected_bot = self.selected_bot.saturating_sub(1);
    }

    pub fn selected_account_index(&self) -> usize {
        self.selected_account
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.accounts.get(self.selected_account)
    }

    pub fn select_next_account(&mut self) {
        if self.selected_account + 1 < self.accounts.len() {
            self.selected_account += 1;
        }
    }

    pub fn select_previous_account(&mut self) {
        self.selected_account = self.selected_account.saturating_sub(1);
    }
}

fn clamp(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
