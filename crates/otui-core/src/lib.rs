#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::cargo_common_metadata)]

//! Core, DOM-free primitives behind the otui components.
//!
//! Everything here runs on native targets so the behaviour can be tested
//! without a browser. The component crate binds these types to `web-sys`.

pub mod button;
pub mod dialog;
pub mod dropdown;
pub mod ids;
pub mod surface;
pub mod switch;
pub mod table;
pub mod tabs;

pub use dialog::{
    DialogController, DialogFooter, DialogState, DialogText, Dispatch, DismissPolicy, Handler,
    ListenerBindings, ListenerStats, Transition,
};
pub use surface::{CancelTrigger, DismissAction, ModalSurface, SurfaceError, SurfaceEvent};
