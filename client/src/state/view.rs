#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use model::order::Order;

/// Default width of the chat panel, in logical pixels.
pub const DEFAULT_CHAT_WIDTH: f64 = 380.0;
/// Floor below which the chat panel never shrinks.
pub const MIN_CHAT_WIDTH: f64 = 280.0;
/// Fraction of the window width at which a drag promotes to fullscreen chat.
pub const FULLSCREEN_RATIO: f64 = 0.70;

/// The active workspace view. Exactly one is mounted at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    /// Insights dashboard (KPIs, funnel, sector load, stock, finance).
    #[default]
    Home,
    /// Order queue with the urgency lanes.
    Orders,
    /// Chat panel expanded to the full workspace width.
    FullscreenChat,
}

/// Navigation, order selection and chat-panel width.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub view: AppView,
    /// Order shown in the detail modal, when one is selected.
    pub selected_order: Option<Order>,
    /// Current chat panel width in logical pixels (ignored in fullscreen).
    pub chat_width: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { view: AppView::Home, selected_order: None, chat_width: DEFAULT_CHAT_WIDTH }
    }
}

impl ViewState {
    /// Switch the active view. Leaving fullscreen chat restores the default
    /// panel width so the next open starts from a sane size.
    pub fn set_view(&mut self, view: AppView) {
        if self.view == AppView::FullscreenChat && view != AppView::FullscreenChat {
            self.chat_width = DEFAULT_CHAT_WIDTH;
        }
        self.view = view;
    }

    /// Set or clear the order shown in the detail modal. Existence in the
    /// dataset is the caller's contract; nothing is validated here.
    pub fn select_order(&mut self, order: Option<Order>) {
        self.selected_order = order;
    }
}
