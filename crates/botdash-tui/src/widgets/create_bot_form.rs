//! Create-bot modal form

use botdash_app::forms::{CreateBotField, CreateBotForm};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::form_fields::{choice_line, field_line};
use crate::theme::styles;

pub struct CreateBotFormView<'a> {
    form: &'a CreateBotForm,
}

impl<'a> CreateBotFormView<'a> {
    pub fn new(form: &'a CreateBotForm) -> Self {
        Self { form }
    }

    /// Rows needed including borders, hint and spacing
    pub fn height(&self) -> u16 {
        self.form.fields().len() as u16 + 5
    }
}

impl Widget for CreateBotFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::modal_block("Create New Bot");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::with_capacity(self.form.fields().len() + 3);
        lines.push(Line::from(""));
        for &field in self.form.fields() {
            let focused = self.form.focus == field;
            let line = if field == CreateBotField::BotType {
                choice_line(field.label(), self.form.value(field), focused)
            } else {
                field_line(
                    field.label(),
                    self.form.value(field),
                    focused,
                    self.form.is_required(field),
                )
            };
            lines.push(line);
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" [Enter]", styles::keybinding()),
            Span::styled(" Create  ", styles::text_muted()),
            Span::styled("[Tab]", styles::keybinding()),
            Span::styled(" Next field  ", styles::text_muted()),
            Span::styled("[Esc]", styles::keybinding()),
            Span::styled(" Cancel", styles::text_muted()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
