//! Semantic style builders.

use botdash_core::{BotStatus, Severity};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the selected row in lists
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status mapping ---

/// Returns `(icon, label, Style)` for a bot status badge.
pub fn status_indicator(status: BotStatus) -> (&'static str, &'static str, Style) {
    match status {
        BotStatus::Running => (
            "●",
            status.label(),
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        BotStatus::Created => ("○", status.label(), Style::default().fg(palette::STATUS_BLUE)),
        BotStatus::Stopped => ("○", status.label(), text_muted()),
        BotStatus::Error => (
            "✗",
            status.label(),
            Style::default().fg(palette::STATUS_RED),
        ),
    }
}

pub fn severity_style(severity: Severity) -> Style {
    let color = match severity {
        Severity::Success => palette::STATUS_GREEN,
        Severity::Error => palette::STATUS_RED,
        Severity::Warning => palette::STATUS_YELLOW,
        Severity::Info => palette::STATUS_BLUE,
    };
    Style::default().fg(color)
}
