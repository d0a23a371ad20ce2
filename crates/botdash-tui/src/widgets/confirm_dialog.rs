//! Destructive-action confirmation dialog

use botdash_app::confirm_dialog::ConfirmPrompt;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub const HEIGHT: u16 = 9;

pub struct ConfirmDialog<'a> {
    prompt: &'a ConfirmPrompt,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(prompt: &'a ConfirmPrompt) -> Self {
        Self { prompt }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::modal_block(&self.prompt.title)
            .border_style(Style::default().fg(palette::STATUS_RED));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.prompt.message.as_str(), styles::text_primary())),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(palette::STATUS_RED)),
                Span::styled(format!(" {}  ", self.prompt.confirm_label), styles::text_secondary()),
                Span::styled("[n]", styles::keybinding()),
                Span::styled(" Cancel", styles::text_secondary()),
            ])
            .centered(),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_shows_prompt_and_choices() {
        let prompt = ConfirmPrompt::delete_bot("Echo");
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&prompt), Rect::new(0, 0, 70, HEIGHT));

        assert!(term.buffer_contains("Delete Bot"));
        assert!(term.buffer_contains("\"Echo\""));
        assert!(term.buffer_contains("[y] Delete"));
        assert!(term.buffer_contains("[n] Cancel"));
    }
}
