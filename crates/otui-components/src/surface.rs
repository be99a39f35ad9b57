//! `<dialog>` element bound to the core [`ModalSurface`] contract.

use otui_core::{ModalSurface, SurfaceError, SurfaceEvent};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlDialogElement, KeyboardEvent};

/// Native `<dialog>` element driven as a modal surface.
#[derive(Clone, Debug)]
pub struct DomSurface {
    element: HtmlDialogElement,
}

impl DomSurface {
    /// Wrap a mounted dialog element.
    #[must_use]
    pub const fn new(element: HtmlDialogElement) -> Self {
        Self { element }
    }
}

impl ModalSurface for DomSurface {
    fn show_modal(&self) -> Result<(), SurfaceError> {
        self.element
            .show_modal()
            .map_err(|err| SurfaceError::new(format!("{err:?}")))
    }

    fn close(&self) {
        self.element.close();
    }

    fn is_open(&self) -> bool {
        self.element.open()
    }
}

/// DOM event names the dialog listens to.
pub(crate) const DIALOG_EVENTS: [&str; 3] = ["close", "cancel", "keydown"];

/// Translate a DOM event into a surface event.
pub(crate) fn surface_event(kind: &str, event: &Event) -> Option<SurfaceEvent> {
    match kind {
        "close" => Some(SurfaceEvent::Close),
        "cancel" => Some(SurfaceEvent::Cancel),
        "keydown" => event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| SurfaceEvent::KeyDown(key.key())),
        _ => None,
    }
}
