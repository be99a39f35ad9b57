//! In-memory stand-in for a native modal element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use otui_core::{ModalSurface, SurfaceError};

#[derive(Debug, Default)]
struct SurfaceLog {
    open: Cell<bool>,
    show_calls: Cell<u32>,
    close_calls: Cell<u32>,
    fail_next_show: RefCell<Option<String>>,
}

/// Fake modal surface counting every show and close request.
///
/// Clones share state, so a test can keep a handle after moving the surface
/// into a controller.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    log: Rc<SurfaceLog>,
}

impl RecordingSurface {
    /// New hidden surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `show_modal` calls that succeeded.
    #[must_use]
    pub fn show_calls(&self) -> u32 {
        self.log.show_calls.get()
    }

    /// Number of programmatic `close` calls.
    #[must_use]
    pub fn close_calls(&self) -> u32 {
        self.log.close_calls.get()
    }

    /// Make the next `show_modal` fail with `message`.
    pub fn fail_next_show(&self, message: &str) {
        *self.log.fail_next_show.borrow_mut() = Some(message.to_string());
    }

    /// Hide the surface the way the host does for a native dismissal, without
    /// counting a programmatic close.
    pub fn native_dismiss(&self) {
        self.log.open.set(false);
    }
}

impl ModalSurface for RecordingSurface {
    fn show_modal(&self) -> Result<(), SurfaceError> {
        if let Some(message) = self.log.fail_next_show.borrow_mut().take() {
            return Err(SurfaceError::new(message));
        }
        if self.log.open.get() {
            return Err(SurfaceError::new("already open"));
        }
        self.log.open.set(true);
        self.log.show_calls.set(self.log.show_calls.get() + 1);
        Ok(())
    }

    fn close(&self) {
        self.log.open.set(false);
        self.log.close_calls.set(self.log.close_calls.get() + 1);
    }

    fn is_open(&self) -> bool {
        self.log.open.get()
    }
}
