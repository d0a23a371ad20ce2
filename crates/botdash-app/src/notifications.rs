//! Transient user-facing notifications with timed expiry.
//!
//! Each notification shows for `display`, then spends `transition` in an
//! exiting phase (rendered dimmed), then disappears. Expiry records are kept
//! per notification id so a single notification can be dismissed early
//! without disturbing the others.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use botdash_core::Severity;
use tracing::{error, info, warn};

use crate::clock::Clock;

pub const DEFAULT_DISPLAY_MS: u64 = 5000;
pub const DEFAULT_TRANSITION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Showing,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display: Duration,
    pub transition: Duration,
}

impl NotificationTiming {
    pub fn from_millis(display_ms: u64, transition_ms: u64) -> Self {
        Self {
            display: Duration::from_millis(display_ms),
            transition: Duration::from_millis(transition_ms),
        }
    }

    fn lifetime(&self) -> Duration {
        self.display + self.transition
    }
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DISPLAY_MS, DEFAULT_TRANSITION_MS)
    }
}

/// Ordered notification stack (oldest first)
#[derive(Debug)]
pub struct NotificationQueue {
    clock: Arc<dyn Clock>,
    timing: NotificationTiming,
    items: Vec<Notification>,
    /// Scheduled removal instant per live notification
    expiries: HashMap<NotificationId, Instant>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new(clock: Arc<dyn Clock>, timing: NotificationTiming) -> Self {
        Self {
            clock,
            timing,
            items: Vec::new(),
            expiries: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// Append a notification and schedule its removal
    pub fn emit(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let message = message.into();
        match severity {
            Severity::Error => error!("[notification] {}", message),
            Severity::Warning => warn!("[notification] {}", message),
            Severity::Success | Severity::Info => info!("[notification] {}", message),
        }

        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let created_at = self.clock.now();

        self.expiries
            .insert(id, created_at + self.timing.lifetime());
        self.items.push(Notification {
            id,
            message,
            severity,
            created_at,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.emit(message, Severity::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.emit(message, Severity::Error)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.emit(message, Severity::Warning)
    }

    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.emit(message, Severity::Info)
    }

    /// Phase of a notification at `now`, or `None` once it is gone
    pub fn phase(&self, id: NotificationId, now: Instant) -> Option<NotificationPhase> {
        let expires_at = *self.expiries.get(&id)?;
        if now >= expires_at {
            return None;
        }
        let exiting_from = expires_at - self.timing.transition;
        if now >= exiting_from {
            Some(NotificationPhase::Exiting)
        } else {
            Some(NotificationPhase::Showing)
        }
    }

    /// Notifications still in their display window
    pub fn visible(&self, now: Instant) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| self.phase(n.id, now) == Some(NotificationPhase::Showing))
            .collect()
    }

    /// Notifications that should be drawn, with their phase
    pub fn rendered(&self, now: Instant) -> Vec<(&Notification, NotificationPhase)> {
        self.items
            .iter()
            .filter_map(|n| self.phase(n.id, now).map(|phase| (n, phase)))
            .collect()
    }

    /// Drop everything whose removal time has passed. Returns how many went.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        let expiries = &mut self.expiries;
        self.items.retain(|n| match expiries.get(&n.id) {
            Some(expires_at) if now < *expires_at => true,
            _ => {
                expiries.remove(&n.id);
                false
            }
        });
        before - self.items.len()
    }

    /// Cancel a notification's scheduled removal and remove it now
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.expiries.remove(&id).is_none() {
            return false;
        }
        self.items.retain(|n| n.id != id);
        true
    }

    /// Dismiss the most recently emitted notification, if any
    pub fn dismiss_latest(&mut self) -> bool {
        match self.items.last().map(|n| n.id) {
            Some(id) => self.dismiss(id),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }
}
