//! Key hint bar along the bottom edge

use botdash_app::Modal;
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct Footer {
    modal: Option<Modal>,
    refreshed_at: Option<DateTime<Local>>,
}

impl Footer {
    pub fn new(modal: Option<Modal>) -> Self {
        Self {
            modal,
            refreshed_at: None,
        }
    }

    pub fn refreshed_at(mut self, at: Option<DateTime<Local>>) -> Self {
        self.refreshed_at = at;
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.modal {
            None => &[
                ("j/k", "Select"),
                ("n", "New bot"),
                ("s", "Start"),
                ("x", "Stop"),
                ("d", "Delete"),
                ("e", "Edit"),
                ("a", "Accounts"),
                ("r", "Refresh"),
                ("q", "Quit"),
            ],
            Some(Modal::CreateBot) => &[
                ("Tab", "Next"),
                ("←/→", "Type"),
                ("Enter", "Create"),
                ("Esc", "Cancel"),
            ],
            Some(Modal::AddAccount) => &[("Tab", "Next"), ("Enter", "Add"), ("Esc", "Back")],
            Some(Modal::AccountsList) => &[
                ("j/k", "Select"),
                ("n", "Add"),
                ("t", "Test"),
                ("d", "Delete"),
                ("Esc", "Close"),
            ],
            Some(Modal::Confirm) => &[("y", "Confirm"), ("n", "Cancel")],
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, label) in self.hints() {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", label), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);

        if let Some(at) = self.refreshed_at {
            Line::from(Span::styled(
                format!("updated {} ", at.format("%H:%M:%S")),
                styles::text_muted(),
            ))
            .right_aligned()
            .render(area, buf);
        }
    }
}
