#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use super::view::{FULLSCREEN_RATIO, MIN_CHAT_WIDTH};

/// Phase of the drag gesture on the chat panel handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizePhase {
    #[default]
    Idle,
    Resizing,
}

/// Outcome of one pointer-move while resizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResizeAction {
    /// Promote the view to fullscreen chat; the gesture is over.
    Fullscreen,
    /// Apply this new panel width.
    SetWidth(f64),
    /// Below the floor, or not resizing. Width stays as it was.
    Ignore,
}

/// Drag-to-resize state machine for the right-anchored chat panel.
///
/// The consuming component owns the window listener handles; this model only
/// decides what each pointer event means. Fullscreen promotion is a one-way
/// trigger: the machine returns to idle and further moves are ignored until
/// a new gesture begins.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResizeController {
    phase: ResizePhase,
}

impl ResizeController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ResizePhase {
        self.phase
    }

    /// Pointer-down on the handle.
    pub fn begin(&mut self) {
        self.phase = ResizePhase::Resizing;
    }

    /// Pointer-up, or the consuming view unmounting mid-drag.
    pub fn finish(&mut self) {
        self.phase = ResizePhase::Idle;
    }

    /// Interpret a pointer-move. The panel is right-anchored, so the new
    /// width is the distance from the pointer to the right viewport edge.
    pub fn track(&mut self, window_width: f64, pointer_x: f64) -> ResizeAction {
        if self.phase != ResizePhase::Resizing {
            return ResizeAction::Ignore;
        }

        let new_width = window_width - pointer_x;

        if new_width >= FULLSCREEN_RATIO * window_width {
            self.phase = ResizePhase::Idle;
            return ResizeAction::Fullscreen;
        }

        if new_width > MIN_CHAT_WIDTH {
            ResizeAction::SetWidth(new_width)
        } else {
            ResizeAction::Ignore
        }
    }
}
