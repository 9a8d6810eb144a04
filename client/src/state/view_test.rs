use super::*;
use model::order::mock_orders;

// =============================================================
// defaults
// =============================================================

#[test]
fn view_state_defaults_to_home_and_default_width() {
    let state = ViewState::default();
    assert_eq!(state.view, AppView::Home);
    assert!(state.selected_order.is_none());
    assert!((state.chat_width - DEFAULT_CHAT_WIDTH).abs() < f64::EPSILON);
}

// =============================================================
// set_view
// =============================================================

#[test]
fn leaving_fullscreen_resets_chat_width() {
    let mut state = ViewState::default();
    state.chat_width = 300.0;
    state.set_view(AppView::FullscreenChat);
    assert!((state.chat_width - 300.0).abs() < f64::EPSILON);

    state.set_view(AppView::Home);
    assert!((state.chat_width - DEFAULT_CHAT_WIDTH).abs() < f64::EPSILON);
}

#[test]
fn switching_between_docked_views_keeps_width() {
    let mut state = ViewState::default();
    state.chat_width = 420.0;
    state.set_view(AppView::Orders);
    state.set_view(AppView::Home);
    assert!((state.chat_width - 420.0).abs() < f64::EPSILON);
}

#[test]
fn re_entering_fullscreen_is_not_a_reset() {
    let mut state = ViewState::default();
    state.chat_width = 500.0;
    state.set_view(AppView::FullscreenChat);
    state.set_view(AppView::FullscreenChat);
    assert!((state.chat_width - 500.0).abs() < f64::EPSILON);
}

// =============================================================
// select_order
// =============================================================

#[test]
fn select_then_clear_leaves_dataset_untouched() {
    let before = mock_orders();
    let mut state = ViewState::default();

    let order = before.iter().find(|o| o.id == "104").unwrap().clone();
    state.select_order(Some(order));
    assert_eq!(state.selected_order.as_ref().map(|o| o.id.as_str()), Some("104"));

    state.select_order(None);
    assert!(state.selected_order.is_none());
    assert_eq!(mock_orders(), before);
}
