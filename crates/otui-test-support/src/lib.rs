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
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::cargo_common_metadata)]

//! Shared test helpers used across integration suites.
//! Layout: surface.rs (fake native modal), calls.rs (callback recorder),
//! gestures.rs (user gestures replayed the way a browser dispatches them).

pub mod calls;
pub mod gestures;
pub mod surface;

pub use calls::CallLog;
pub use gestures::{
    GestureOutcome, click_backdrop, native_close, press_escape, press_escape_consumed,
};
pub use surface::RecordingSurface;
