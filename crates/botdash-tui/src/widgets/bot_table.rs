//! Bot list table with selection and an empty state

use botdash_core::Bot;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, Widget},
};

use crate::theme::{palette, styles};

pub struct BotTable<'a> {
    bots: &'a [Bot],
    selected: usize,
    focused: bool,
}

impl<'a> BotTable<'a> {
    pub fn new(bots: &'a [Bot], selected: usize) -> Self {
        Self {
            bots,
            selected,
            focused: true,
        }
    }

    /// Unfocused tables (a modal is open) draw no selection highlight
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_empty(area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("No bots created yet", styles::text_secondary())),
            Line::from(vec![
                Span::styled("Press ", styles::text_muted()),
                Span::styled("n", styles::keybinding()),
                Span::styled(" to create your first bot", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines).centered().render(area, buf);
    }
}

impl Widget for BotTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Bots ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.bots.is_empty() {
            Self::render_empty(inner, buf);
            return;
        }

        // Header takes one row; keep the selection in view
        let visible = inner.height.saturating_sub(1).max(1) as usize;
        let offset = (self.selected + 1).saturating_sub(visible);

        let rows = self
            .bots
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, bot)| {
                let (icon, label, status_style) = styles::status_indicator(bot.status);
                let row = Row::new(vec![
                    Line::from(bot.name.as_str()),
                    Line::from(Span::styled(bot.bot_type.label(), styles::text_secondary())),
                    Line::from(vec![
                        Span::styled(icon, status_style),
                        Span::raw(" "),
                        Span::styled(label, status_style),
                    ]),
                    Line::from(Span::styled(
                        bot.display_description(),
                        styles::text_muted(),
                    )),
                    Line::from(bot.total_messages.to_string()).right_aligned(),
                ]);
                if self.focused && index == self.selected {
                    row.style(styles::focused_selected())
                } else {
                    row
                }
            });

        let header = Row::new(vec!["Name", "Type", "Status", "Description", "Messages"])
            .style(Style::default().fg(palette::ACCENT));

        Table::new(
            rows,
            [
                Constraint::Percentage(22),
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Fill(1),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .column_spacing(1)
        .render(inner, buf);
    }
}
