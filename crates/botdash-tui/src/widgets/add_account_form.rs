//! Add-account modal form

use botdash_app::forms::{AccountField, AddAccountForm};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::form_fields::field_line;
use crate::theme::styles;

pub const HEIGHT: u16 = 8;

pub struct AddAccountFormView<'a> {
    form: &'a AddAccountForm,
}

impl<'a> AddAccountFormView<'a> {
    pub fn new(form: &'a AddAccountForm) -> Self {
        Self { form }
    }
}

impl Widget for AddAccountFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::modal_block("Add Account");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from("")];
        lines.extend(AccountField::ALL.iter().map(|&field| {
            field_line(
                field.label(),
                self.form.value(field),
                self.form.focus == field,
                true,
            )
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" [Enter]", styles::keybinding()),
            Span::styled(" Add  ", styles::text_muted()),
            Span::styled("[Esc]", styles::keybinding()),
            Span::styled(" Back to accounts", styles::text_muted()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
