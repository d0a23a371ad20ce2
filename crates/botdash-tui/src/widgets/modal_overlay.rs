//! Shared modal overlay utilities.
//!
//! Centering, background dimming and drop shadows for the dashboard's
//! dialogs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// ```
/// use ratatui::layout::Rect;
/// use botdash_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so the dialog on top stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = modal_rect.right();
    for y in modal_rect.y.saturating_add(1)..modal_rect.bottom().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = modal_rect.bottom();
    for x in modal_rect.x.saturating_add(1)..modal_rect.right().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Dim the screen, then clear and shadow the dialog rect
pub fn prepare_modal(buf: &mut Buffer, screen: Rect, modal_rect: Rect) {
    dim_background(buf, screen);
    render_shadow(buf, modal_rect);
    Clear.render(modal_rect, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(centered_rect(60, 20, area), Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn test_shadow_stays_inside_buffer() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::filled(area, ratatui::buffer::Cell::new("x"));

        // Touching the edges: every shadow cell falls outside and is skipped
        render_shadow(&mut buf, area);
        assert_eq!(buf[(9, 4)].symbol(), "x");

        prepare_modal(&mut buf, area, Rect::new(2, 1, 4, 2));
        assert_eq!(buf[(6, 2)].symbol(), " ");
        assert_eq!(buf[(3, 1)].symbol(), " ");
        assert_eq!(buf[(0, 0)].symbol(), "x");
    }
}
