//! Application state (Model in TEA pattern)

use std::sync::Arc;

use crate::cache::ResourceCache;
use crate::clock::Clock;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmationState;
use crate::modal::ModalCoordinator;
use crate::notifications::NotificationQueue;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// Last-known service snapshots
    pub cache: ResourceCache,

    pub modal: ModalCoordinator,
    pub confirmation: ConfirmationState,
    pub notifications: NotificationQueue,

    /// Service requests dispatched but not yet reported back
    pub in_flight: usize,
}

impl AppState {
    pub fn new(settings: Settings, clock: Arc<dyn Clock>) -> Self {
        let timing = settings.notifications.timing();
        Self {
            phase: AppPhase::Running,
            settings,
            cache: ResourceCache::new(),
            modal: ModalCoordinator::new(),
            confirmation: ConfirmationState::new(),
            notifications: NotificationQueue::new(clock, timing),
            in_flight: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn begin_request(&mut self) {
        self.in_flight += 1;
    }

    pub fn finish_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Whether any service request is still outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
