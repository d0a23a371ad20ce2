//! Header with the dashboard title and aggregate stats cards

use botdash_core::Stats;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const PLACEHOLDER: &str = "—";

pub struct StatsHeader<'a> {
    stats: Option<&'a Stats>,
    busy: bool,
}

impl<'a> StatsHeader<'a> {
    pub fn new(stats: Option<&'a Stats>) -> Self {
        Self { stats, busy: false }
    }

    /// Show a spinner glyph while requests are outstanding
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    fn cards(&self) -> [(&'static str, String); 4] {
        match self.stats {
            Some(stats) => [
                ("Total Bots", stats.total_bots.to_string()),
                ("Active Bots", stats.active_bots.to_string()),
                ("Messages", stats.total_messages.to_string()),
                ("Uptime", stats.uptime.clone()),
            ],
            None => [
                ("Total Bots", PLACEHOLDER.to_string()),
                ("Active Bots", PLACEHOLDER.to_string()),
                ("Messages", PLACEHOLDER.to_string()),
                ("Uptime", PLACEHOLDER.to_string()),
            ],
        }
    }
}

impl Widget for StatsHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [title_area, cards_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let status = if self.busy { "↻" } else { "●" };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(status, Style::default().fg(palette::STATUS_GREEN)),
            Span::raw(" "),
            Span::styled("Bot Dashboard", styles::accent_bold()),
        ])
        .render(title_area, buf);

        if cards_area.height == 0 {
            return;
        }

        let slots = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(cards_area);
        for ((label, value), slot) in self.cards().into_iter().zip(slots.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(palette::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(label, styles::text_muted())),
            ];
            Paragraph::new(lines).centered().render(*slot, buf);
        }
    }
}
