//! Line rendering shared by the two input forms

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

const LABEL_WIDTH: usize = 14;

/// One `label: value` row. The focused row gets an accent marker and cursor.
pub fn field_line<'a>(label: &'a str, value: &'a str, focused: bool, required: bool) -> Line<'a> {
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };

    let padding = LABEL_WIDTH.saturating_sub(label.width() + usize::from(required));

    let mut spans = vec![
        Span::styled(marker, styles::accent_bold()),
        Span::styled(label, label_style),
    ];
    if required {
        spans.push(Span::styled("*", Style::default().fg(palette::STATUS_RED)));
    }
    spans.push(Span::raw(" ".repeat(padding + 1)));
    spans.push(Span::styled(value, styles::text_primary()));
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

/// A two-choice selector row, e.g. `◀ token-based ▶`
pub fn choice_line<'a>(label: &'a str, choice: &'a str, focused: bool) -> Line<'a> {
    let marker = if focused { "▸ " } else { "  " };
    let (label_style, choice_style) = if focused {
        (styles::accent_bold(), styles::focused_selected())
    } else {
        (styles::text_secondary(), styles::text_primary())
    };
    let padding = LABEL_WIDTH.saturating_sub(label.width());

    Line::from(vec![
        Span::styled(marker, styles::accent_bold()),
        Span::styled(label, label_style),
        Span::raw(" ".repeat(padding + 1)),
        Span::styled(format!("◀ {} ▶", choice), choice_style),
    ])
}
