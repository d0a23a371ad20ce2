//! Rendering harness for widget and frame tests
//!
//! Everything draws into ratatui's `TestBackend`; assertions read the
//! resulting cell buffer as plain text rows.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

const DEFAULT_SIZE: (u16, u16) = (80, 24);

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24, the size the dashboard layout is tuned for
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE.0, DEFAULT_SIZE.1)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    /// Full-frame draw, used with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw to test backend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        (0..self.area().height).any(|row| self.row_text(row).contains(text))
    }

    /// Rows past the bottom edge read as empty
    pub fn line_contains(&self, row: u16, text: &str) -> bool {
        self.row_text(row).contains(text)
    }

    fn row_text(&self, row: u16) -> String {
        let buffer = self.buffer();
        if row >= buffer.area.height {
            return String::new();
        }
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_default_size() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("\nhello"), Rect::new(0, 0, 20, 3));

        assert!(term.line_contains(1, "hello"));
        assert!(!term.line_contains(0, "hello"));
        assert!(!term.line_contains(9, "hello"));
        assert!(term.buffer_contains("hello"));
    }
}
