//! Ordered recorder for caller callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use otui_core::Handler;

/// Records callback invocations by name, in call order.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    entries: Rc<RefCell<Vec<&'static str>>>,
}

impl CallLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that appends `name` to the log when invoked.
    #[must_use]
    pub fn handler(&self, name: &'static str) -> Handler {
        let entries = Rc::clone(&self.entries);
        Rc::new(move || entries.borrow_mut().push(name))
    }

    /// How many times `name` was invoked.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| **entry == name)
            .count()
    }

    /// All invocations in order.
    #[must_use]
    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.borrow().clone()
    }
}
