//! Linked accounts modal

use botdash_core::Account;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct AccountsList<'a> {
    accounts: &'a [Account],
    selected: usize,
}

impl<'a> AccountsList<'a> {
    pub fn new(accounts: &'a [Account], selected: usize) -> Self {
        Self { accounts, selected }
    }

    fn account_line(account: &Account, selected: bool) -> Line<'_> {
        let auth_style = if account.is_authenticated {
            Style::default().fg(palette::STATUS_GREEN)
        } else {
            Style::default().fg(palette::STATUS_YELLOW)
        };
        let marker = if selected { "▸ " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, styles::accent_bold()),
            Span::styled(format!("{:<18}", account.phone_number), styles::text_primary()),
            Span::styled(format!("API {:<10}", account.api_id), styles::text_secondary()),
            Span::styled(account.auth_label(), auth_style),
        ]);
        if selected {
            line.style(styles::focused_selected())
        } else {
            line
        }
    }
}

impl Widget for AccountsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::modal_block("Accounts");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 {
            return;
        }

        let [list_area, hint_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        if self.accounts.is_empty() {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled("No accounts linked yet", styles::text_secondary())),
            ];
            Paragraph::new(lines).centered().render(list_area, buf);
        } else {
            let visible = list_area.height as usize;
            let offset = (self.selected + 1).saturating_sub(visible);
            let lines: Vec<Line> = self
                .accounts
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .map(|(index, account)| Self::account_line(account, index == self.selected))
                .collect();
            Paragraph::new(lines).render(list_area, buf);
        }

        let mut hints = Vec::new();
        for (key, label) in [
            ("n", "Add"),
            ("t", "Test"),
            ("d", "Delete"),
            ("r", "Refresh"),
            ("Esc", "Close"),
        ] {
            hints.push(Span::styled(format!(" [{}]", key), styles::keybinding()));
            hints.push(Span::styled(format!(" {}", label), styles::text_muted()));
        }
        Line::from(hints).render(hint_area, buf);
    }
}
