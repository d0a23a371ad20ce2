//! Toast stack drawn over the top-right corner

use botdash_app::notifications::{Notification, NotificationPhase};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

const MAX_WIDTH: u16 = 48;
const MIN_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;

pub struct NotificationStack<'a> {
    items: Vec<(&'a Notification, NotificationPhase)>,
}

impl<'a> NotificationStack<'a> {
    pub fn new(items: Vec<(&'a Notification, NotificationPhase)>) -> Self {
        Self { items }
    }

    fn toast_width(notification: &Notification, area: Rect) -> u16 {
        // icon + space + message + borders and padding
        let wanted = u16::try_from(notification.message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(6);
        wanted.clamp(MIN_WIDTH, MAX_WIDTH).min(area.width)
    }
}

impl Widget for NotificationStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y + 1;

        // Newest first
        for (notification, phase) in self.items.into_iter().rev() {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }

            let width = Self::toast_width(notification, area);
            let x = area.right().saturating_sub(width + 1).max(area.x);
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);

            let mut accent = styles::severity_style(notification.severity);
            let mut text = styles::text_primary();
            if phase == NotificationPhase::Exiting {
                accent = accent.add_modifier(Modifier::DIM);
                text = text.add_modifier(Modifier::DIM);
            }

            Clear.render(rect, buf);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(accent)
                .style(Style::default().bg(palette::POPUP_BG));
            let inner = block.inner(rect);
            block.render(rect, buf);

            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(notification.severity.icon(), accent),
                Span::raw(" "),
                Span::styled(notification.message.as_str(), text),
            ]))
            .render(inner, buf);

            y += TOAST_HEIGHT;
        }
    }
}
