//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Stats header height including borders
pub const HEADER_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and stats cards
    pub header: Rect,

    /// Bot table
    pub body: Rect,

    /// Single-row key hints
    pub footer: Rect,
}

/// Split the screen into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}
