//! User gestures replayed in the order a browser dispatches dialog events.
//!
//! Escape arrives as `keydown` then `cancel`; a light dismiss arrives as
//! `cancel` alone. When neither is prevented the host hides the element and
//! fires `close`. Each gesture is one host task and ends with
//! [`DialogController::settle`].

use otui_core::{DialogController, SurfaceEvent};

use crate::surface::RecordingSurface;

/// Result of a replayed gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The surface was dismissed and `close` was dispatched.
    Dismissed,
    /// A listener prevented the default and the surface stayed open.
    Suppressed,
}

/// Press Escape while the dialog has focus.
pub fn press_escape(controller: &mut DialogController<RecordingSurface>) -> GestureOutcome {
    let outcome = if controller.dispatch(SurfaceEvent::escape()).finish().is_suppressed() {
        GestureOutcome::Suppressed
    } else {
        cancel_then_close(controller)
    };
    controller.settle();
    outcome
}

/// Press Escape inside a nested element that consumes it, such as an open
/// popover. The key-down bubbles to the dialog but no `cancel` follows.
pub fn press_escape_consumed(controller: &mut DialogController<RecordingSurface>) {
    controller.dispatch(SurfaceEvent::escape()).finish();
    controller.settle();
}

/// Click outside the dialog box.
pub fn click_backdrop(controller: &mut DialogController<RecordingSurface>) -> GestureOutcome {
    let outcome = cancel_then_close(controller);
    controller.settle();
    outcome
}

/// Deliver the `close` event the host fires after a programmatic close.
pub fn native_close(controller: &mut DialogController<RecordingSurface>) {
    controller.dispatch(SurfaceEvent::Close).finish();
}

fn cancel_then_close(controller: &mut DialogController<RecordingSurface>) -> GestureOutcome {
    if controller.dispatch(SurfaceEvent::Cancel).finish().is_suppressed() {
        return GestureOutcome::Suppressed;
    }
    controller.surface().native_dismiss();
    controller.dispatch(SurfaceEvent::Close).finish();
    GestureOutcome::Dismissed
}
