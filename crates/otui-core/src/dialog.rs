//! Modal dialog controller.
//!
//! The controller keeps a native modal surface in step with a caller-owned
//! `is_open` flag and routes the surface's dismissal channels to caller
//! callbacks. Visibility is never stored here: [`DialogController::state`]
//! reads the surface, and the controller only asks the caller to change
//! `is_open` through `on_close`.
//!
//! Callbacks never run while the controller is borrowed. Every operation
//! returns a [`Dispatch`] holding the pending callbacks, and the host runs them
//! with [`Dispatch::finish`] once its own borrow is released.

use std::fmt;
use std::mem;
use std::rc::Rc;

use otui_config::DialogDefaults;
use tracing::{debug, trace};

use crate::surface::{
    CancelTrigger, DismissAction, ESCAPE_KEY, ModalSurface, SurfaceError, SurfaceEvent,
};

/// Zero-argument caller callback.
pub type Handler = Rc<dyn Fn()>;

/// Which implicit dismissal gestures are honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissPolicy {
    /// Honour a backdrop (light dismiss) cancel.
    pub close_by_backdrop: bool,
    /// Honour the Escape key.
    pub close_by_escape: bool,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self::from(&DialogDefaults::default())
    }
}

impl From<&DialogDefaults> for DismissPolicy {
    fn from(defaults: &DialogDefaults) -> Self {
        Self {
            close_by_backdrop: defaults.close_by_backdrop,
            close_by_escape: defaults.close_by_escape,
        }
    }
}

impl DismissPolicy {
    /// Whether a cancel attributed to `trigger` may dismiss the surface.
    #[must_use]
    pub const fn allows(self, trigger: CancelTrigger) -> bool {
        match trigger {
            CancelTrigger::Escape => self.close_by_escape,
            CancelTrigger::Backdrop => self.close_by_backdrop,
        }
    }

    /// Value for the `<dialog closedby>` attribute that lets the host raise
    /// exactly the cancel requests this policy may honour.
    #[must_use]
    pub const fn closed_by(self) -> &'static str {
        match (self.close_by_backdrop, self.close_by_escape) {
            (true, _) => "any",
            (false, true) => "closerequest",
            (false, false) => "none",
        }
    }
}

/// Button labels rendered in the dialog footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogText {
    /// Confirm button label.
    pub confirm: String,
    /// Cancel button label.
    pub cancel: String,
}

impl Default for DialogText {
    fn default() -> Self {
        Self::from(&DialogDefaults::default())
    }
}

impl From<&DialogDefaults> for DialogText {
    fn from(defaults: &DialogDefaults) -> Self {
        Self {
            confirm: defaults.confirm_text.clone(),
            cancel: defaults.cancel_text.clone(),
        }
    }
}

impl DialogText {
    /// Apply per-dialog label overrides on top of the defaults.
    #[must_use]
    pub fn with_overrides(mut self, confirm: Option<&str>, cancel: Option<&str>) -> Self {
        if let Some(confirm) = confirm {
            self.confirm = confirm.to_string();
        }
        if let Some(cancel) = cancel {
            self.cancel = cancel.to_string();
        }
        self
    }

    /// Plan the footer. No confirm control is offered without a handler.
    #[must_use]
    pub fn footer(self, has_confirm: bool) -> DialogFooter {
        DialogFooter {
            cancel: self.cancel,
            confirm: has_confirm.then_some(self.confirm),
        }
    }
}

/// Footer controls the dialog offers, with their labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogFooter {
    /// Cancel button label. The cancel button is always offered.
    pub cancel: String,
    /// Confirm button label, present only when a confirm handler exists.
    pub confirm: Option<String>,
}

/// Observable dialog state, derived from the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    /// Surface hidden.
    Closed,
    /// Surface shown as a modal.
    Open,
}

/// Effect of a [`DialogController::synchronize`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The surface was shown.
    Shown,
    /// The surface was hidden.
    Hidden,
    /// The surface already matched the requested state.
    Unchanged,
}

/// Callbacks and policy bound to the surface's event channels.
#[derive(Clone)]
pub struct ListenerBindings {
    /// Invoked when the surface closes.
    pub on_close: Handler,
    /// Gates for implicit dismissal.
    pub policy: DismissPolicy,
}

impl ListenerBindings {
    /// Bundle a close callback with its dismissal policy.
    #[must_use]
    pub const fn new(on_close: Handler, policy: DismissPolicy) -> Self {
        Self { on_close, policy }
    }
}

impl fmt::Debug for ListenerBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerBindings")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Attach/detach counters for the listener set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerStats {
    /// Number of times listeners were attached.
    pub attached: u32,
    /// Number of times listeners were detached.
    pub detached: u32,
}

impl ListenerStats {
    /// Whether a listener set is currently bound.
    #[must_use]
    pub const fn active(self) -> bool {
        self.attached > self.detached
    }
}

/// Outcome of a controller operation.
#[must_use = "pending callbacks only run when the dispatch is finished"]
pub struct Dispatch {
    action: DismissAction,
    pending: Vec<Handler>,
}

impl Dispatch {
    const fn new(action: DismissAction, pending: Vec<Handler>) -> Self {
        Self { action, pending }
    }

    const fn ignored() -> Self {
        Self::new(DismissAction::Allow, Vec::new())
    }

    /// Answer the host should give the native event.
    #[must_use]
    pub const fn action(&self) -> DismissAction {
        self.action
    }

    /// Number of callbacks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run the pending callbacks in order and return the host answer.
    ///
    /// Panics raised by a callback propagate to the caller untouched.
    pub fn finish(self) -> DismissAction {
        for handler in &self.pending {
            handler();
        }
        self.action
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("action", &self.action)
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// Drives one native modal surface for the lifetime of a mounted dialog.
pub struct DialogController<S: ModalSurface> {
    surface: S,
    bindings: Option<ListenerBindings>,
    stats: ListenerStats,
    escape_pending: bool,
    close_notified: bool,
}

impl<S: ModalSurface> DialogController<S> {
    /// Take exclusive ownership of `surface`.
    #[must_use]
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            bindings: None,
            stats: ListenerStats {
                attached: 0,
                detached: 0,
            },
            escape_pending: false,
            close_notified: false,
        }
    }

    /// Borrow the owned surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Current state, read from the surface.
    #[must_use]
    pub fn state(&self) -> DialogState {
        if self.surface.is_open() {
            DialogState::Open
        } else {
            DialogState::Closed
        }
    }

    /// Listener attach/detach counters.
    #[must_use]
    pub const fn listener_stats(&self) -> ListenerStats {
        self.stats
    }

    /// Bring the surface in line with the caller's `is_open`.
    ///
    /// Calling this twice with the same value is a no-op the second time.
    ///
    /// # Errors
    ///
    /// Returns the host's [`SurfaceError`] when the surface refuses to open.
    pub fn synchronize(&mut self, is_open: bool) -> Result<Transition, SurfaceError> {
        match (is_open, self.surface.is_open()) {
            (true, false) => {
                self.surface.show_modal()?;
                self.close_notified = false;
                self.escape_pending = false;
                debug!("dialog surface shown");
                Ok(Transition::Shown)
            }
            (false, true) => {
                self.surface.close();
                debug!("dialog surface hidden");
                Ok(Transition::Hidden)
            }
            _ => Ok(Transition::Unchanged),
        }
    }

    /// Bind the event channels, replacing any previous binding.
    pub fn attach_listeners(&mut self, bindings: ListenerBindings) {
        if self.detach_listeners() {
            trace!("dialog listeners replaced");
        }
        debug!(policy = ?bindings.policy, "dialog listeners attached");
        self.bindings = Some(bindings);
        self.stats.attached += 1;
    }

    /// Release the current binding. Returns `false` when nothing was bound.
    pub fn detach_listeners(&mut self) -> bool {
        if self.bindings.take().is_none() {
            return false;
        }
        self.stats.detached += 1;
        self.escape_pending = false;
        debug!("dialog listeners detached");
        true
    }

    /// Route a native event through the bound listeners.
    ///
    /// Events arriving while nothing is bound are ignored.
    pub fn dispatch(&mut self, event: SurfaceEvent) -> Dispatch {
        let Some(bindings) = self.bindings.as_ref() else {
            trace!(?event, "dialog event ignored without listeners");
            return Dispatch::ignored();
        };
        let policy = bindings.policy;
        let on_close = Rc::clone(&bindings.on_close);

        match event {
            SurfaceEvent::KeyDown(key) => {
                let is_escape = key == ESCAPE_KEY;
                let allowed = !is_escape || policy.close_by_escape;
                // A prevented Escape never produces a `cancel`.
                self.escape_pending = is_escape && allowed;
                Dispatch::new(DismissAction::allow_if(allowed), Vec::new())
            }
            SurfaceEvent::Cancel => {
                let trigger = if mem::take(&mut self.escape_pending) {
                    CancelTrigger::Escape
                } else {
                    CancelTrigger::Backdrop
                };
                let allowed = policy.allows(trigger);
                debug!(?trigger, allowed, "dialog cancel");
                Dispatch::new(DismissAction::allow_if(allowed), Vec::new())
            }
            SurfaceEvent::Close => {
                self.escape_pending = false;
                self.notify_close(Vec::new(), on_close)
            }
        }
    }

    /// End of the host task that delivered the last key-down.
    ///
    /// A `cancel` caused by Escape arrives in the same task as its key-down.
    /// If another element consumed the Escape no `cancel` follows, and the
    /// next `cancel` belongs to some other gesture.
    pub fn settle(&mut self) {
        if mem::take(&mut self.escape_pending) {
            trace!("dialog escape settled without cancel");
        }
    }

    /// Confirm action: `on_confirm` (when supplied), then `on_close`.
    pub fn confirm_submit(&mut self, on_confirm: Option<Handler>, on_close: Handler) -> Dispatch {
        self.notify_close(on_confirm.into_iter().collect(), on_close)
    }

    /// Explicit cancel button: `on_close`, regardless of the dismissal policy.
    pub fn cancel_click(&mut self, on_close: Handler) -> Dispatch {
        self.notify_close(Vec::new(), on_close)
    }

    fn notify_close(&mut self, mut pending: Vec<Handler>, on_close: Handler) -> Dispatch {
        if self.close_notified {
            trace!("dialog close already reported for this cycle");
            return Dispatch::ignored();
        }
        self.close_notified = true;
        pending.push(on_close);
        Dispatch::new(DismissAction::Allow, pending)
    }
}

impl<S: ModalSurface> Drop for DialogController<S> {
    fn drop(&mut self) {
        self.detach_listeners();
        if self.surface.is_open() {
            self.surface.close();
            debug!("dialog surface released while open");
        }
    }
}

impl<S: ModalSurface> fmt::Debug for DialogController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogController")
            .field("state", &self.state())
            .field("bindings", &self.bindings)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
