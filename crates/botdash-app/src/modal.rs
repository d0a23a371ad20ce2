//! Single-slot modal coordinator.
//!
//! At most one modal is open at a time. The coordinator owns the two input
//! forms so that closing their modal is the one place they get reset.

use tracing::{debug, warn};

use crate::forms::{AddAccountForm, CreateBotForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    CreateBot,
    AddAccount,
    AccountsList,
    Confirm,
}

#[derive(Debug, Default)]
pub struct ModalCoordinator {
    open: Option<Modal>,
    pub create_bot: CreateBotForm,
    pub add_account: AddAccountForm,
}

impl ModalCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `modal`. Opening over a different modal replaces it; callers are
    /// expected to close the current one first.
    pub fn open(&mut self, modal: Modal) {
        if let Some(current) = self.open {
            if current != modal {
                warn!(
                    "Opening {:?} while {:?} is open; replacing it",
                    modal, current
                );
                self.reset_form(current);
            }
        }
        debug!("Modal opened: {:?}", modal);
        self.open = Some(modal);
    }

    /// Close `modal` if it is the open one. Returns whether anything closed.
    pub fn close(&mut self, modal: Modal) -> bool {
        if self.open != Some(modal) {
            return false;
        }
        self.open = None;
        self.reset_form(modal);
        debug!("Modal closed: {:?}", modal);
        true
    }

    pub fn current(&self) -> Option<Modal> {
        self.open
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.open == Some(modal)
    }

    /// Background list scrolling is disabled while any modal is open
    pub fn scroll_locked(&self) -> bool {
        self.open.is_some()
    }

    fn reset_form(&mut self, modal: Modal) {
        match modal {
            Modal::CreateBot => self.create_bot = CreateBotForm::default(),
            Modal::AddAccount => self.add_account = AddAccountForm::default(),
            Modal::AccountsList | Modal::Confirm => {}
        }
    }
}
