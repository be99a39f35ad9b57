//! Abstraction over the host's native modal primitive.

use thiserror::Error;

/// Key reported by the host for the Escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// Failure reported by the host while showing a modal surface.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("modal surface failed to open: {message}")]
pub struct SurfaceError {
    message: String,
}

impl SurfaceError {
    /// Wrap a host-provided failure description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Host-provided failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A native modal surface (for example an HTML `<dialog>` element).
///
/// Showing establishes focus trapping and top-layer stacking; both are the
/// host's job, not the controller's.
pub trait ModalSurface {
    /// Show the surface as a modal.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the host refuses to open the surface.
    fn show_modal(&self) -> Result<(), SurfaceError>;

    /// Hide the surface.
    fn close(&self);

    /// Whether the surface is currently shown.
    fn is_open(&self) -> bool;
}

/// Events delivered by the native surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface closed, whatever the reason.
    Close,
    /// The user attempted an implicit dismissal (backdrop or Escape).
    Cancel,
    /// A key was pressed while the surface had focus.
    KeyDown(String),
}

impl SurfaceEvent {
    /// Key-down event for the Escape key.
    #[must_use]
    pub fn escape() -> Self {
        Self::KeyDown(ESCAPE_KEY.to_string())
    }
}

/// Gesture a cancel event was attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelTrigger {
    /// Cancel followed an Escape key-down.
    Escape,
    /// Cancel with no preceding Escape (light dismiss on the backdrop).
    Backdrop,
}

/// Answer returned to the host for an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DismissAction {
    /// Let the native default run.
    #[default]
    Allow,
    /// Prevent the native default (the host calls `preventDefault`).
    Suppress,
}

impl DismissAction {
    /// Map an allow flag to an action.
    #[must_use]
    pub const fn allow_if(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Suppress }
    }

    /// Whether the host should prevent the default behaviour.
    #[must_use]
    pub const fn is_suppressed(self) -> bool {
        matches!(self, Self::Suppress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_if_maps_flags() {
        assert_eq!(DismissAction::allow_if(true), DismissAction::Allow);
        assert!(DismissAction::allow_if(false).is_suppressed());
    }

    #[test]
    fn escape_event_uses_host_key_name() {
        assert_eq!(SurfaceEvent::escape(), SurfaceEvent::KeyDown("Escape".into()));
    }
}
