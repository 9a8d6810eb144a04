use super::*;

// =============================================================
// idle behaviour
// =============================================================

#[test]
fn idle_controller_ignores_every_move() {
    let mut ctl = ResizeController::new();
    assert_eq!(ctl.phase(), ResizePhase::Idle);
    assert_eq!(ctl.track(1200.0, 100.0), ResizeAction::Ignore);
    assert_eq!(ctl.track(1200.0, 900.0), ResizeAction::Ignore);
}

// =============================================================
// width tracking
// =============================================================

#[test]
fn width_is_distance_from_pointer_to_right_edge() {
    let mut ctl = ResizeController::new();
    ctl.begin();
    assert_eq!(ctl.track(1200.0, 800.0), ResizeAction::SetWidth(400.0));
    assert_eq!(ctl.track(1200.0, 750.0), ResizeAction::SetWidth(450.0));
    assert_eq!(ctl.phase(), ResizePhase::Resizing);
}

#[test]
fn widths_at_or_below_the_floor_are_ignored() {
    let mut ctl = ResizeController::new();
    ctl.begin();
    // Exactly 280 does not pass the strict floor.
    assert_eq!(ctl.track(1200.0, 920.0), ResizeAction::Ignore);
    assert_eq!(ctl.track(1200.0, 1100.0), ResizeAction::Ignore);
    // Still resizing: a later move back into range applies.
    assert_eq!(ctl.track(1200.0, 900.0), ResizeAction::SetWidth(300.0));
}

// =============================================================
// fullscreen promotion
// =============================================================

#[test]
fn seventy_percent_of_the_window_promotes_to_fullscreen() {
    let mut ctl = ResizeController::new();
    ctl.begin();
    // 1200 * 0.70 = 840, met exactly at pointer_x 360.
    assert_eq!(ctl.track(1200.0, 360.0), ResizeAction::Fullscreen);
    assert_eq!(ctl.phase(), ResizePhase::Idle);
}

#[test]
fn promotion_is_one_way_until_a_new_gesture() {
    let mut ctl = ResizeController::new();
    ctl.begin();
    assert_eq!(ctl.track(1000.0, 100.0), ResizeAction::Fullscreen);

    // Stale moves from the finished gesture do nothing.
    assert_eq!(ctl.track(1000.0, 600.0), ResizeAction::Ignore);

    ctl.begin();
    assert_eq!(ctl.track(1000.0, 600.0), ResizeAction::SetWidth(400.0));
}

#[test]
fn just_under_the_threshold_still_sets_width() {
    let mut ctl = ResizeController::new();
    ctl.begin();
    assert_eq!(ctl.track(1000.0, 301.0), ResizeAction::SetWidth(699.0));
}

// =============================================================
// finish
// =============================================================

#[test]
fn finish_returns_to_idle_mid_drag() {
    let mut ctl = ResizeController::new();
    ctl.begin();
    assert_eq!(ctl.track(1200.0, 800.0), ResizeAction::SetWidth(400.0));
    ctl.finish();
    assert_eq!(ctl.phase(), ResizePhase::Idle);
    assert_eq!(ctl.track(1200.0, 800.0), ResizeAction::Ignore);
}
