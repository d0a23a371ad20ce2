//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use botdash_app::{AppState, Modal};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    self, modal_overlay, AccountsList, AddAccountFormView, BotTable, ConfirmDialog,
    CreateBotFormView, Footer, NotificationStack, StatsHeader,
};

const MODAL_WIDTH: u16 = 64;
const ACCOUNTS_HEIGHT: u16 = 14;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: notification phases are computed from the
/// queue's clock at draw time.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let modal = state.modal.current();

    frame.render_widget(
        StatsHeader::new(state.cache.stats()).busy(state.is_busy()),
        areas.header,
    );
    frame.render_widget(
        BotTable::new(state.cache.bots(), state.cache.selected_bot_index())
            .focused(modal.is_none()),
        areas.body,
    );
    frame.render_widget(
        Footer::new(modal).refreshed_at(state.cache.bots_refreshed_at()),
        areas.footer,
    );

    if let Some(modal) = modal {
        render_modal(frame, state, modal, area);
    }

    let now = state.notifications.now();
    frame.render_widget(NotificationStack::new(state.notifications.rendered(now)), area);
}

fn render_modal(frame: &mut Frame, state: &AppState, modal: Modal, area: Rect) {
    let height = match modal {
        Modal::CreateBot => CreateBotFormView::new(&state.modal.create_bot).height(),
        Modal::AddAccount => widgets::add_account_form::HEIGHT,
        Modal::AccountsList => ACCOUNTS_HEIGHT,
        Modal::Confirm => widgets::confirm_dialog::HEIGHT,
    };
    let rect = modal_overlay::centered_rect(MODAL_WIDTH, height, area);
    modal_overlay::prepare_modal(frame.buffer_mut(), area, rect);

    match modal {
        Modal::CreateBot => {
            frame.render_widget(CreateBotFormView::new(&state.modal.create_bot), rect)
        }
        Modal::AddAccount => {
            frame.render_widget(AddAccountFormView::new(&state.modal.add_account), rect)
        }
        Modal::AccountsList => frame.render_widget(
            AccountsList::new(
                state.cache.accounts(),
                state.cache.selected_account_index(),
            ),
            rect,
        ),
        Modal::Confirm => {
            if let Some(prompt) = state.confirmation.prompt() {
                frame.render_widget(ConfirmDialog::new(prompt), rect);
            }
        }
    }
}
