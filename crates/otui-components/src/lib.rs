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
//! Yew components wrapping native markup elements.
//!
//! The stateful behaviour lives in `otui-core`; this crate binds it to the DOM
//! and is only built for wasm32.

pub use otui_config::UiDefaults;
pub use otui_core::button::{ButtonStyle, ButtonVariant};
pub use otui_core::dropdown::DropdownItem;
pub use otui_core::table::{Column, RowClass, TableRow};

#[cfg(target_arch = "wasm32")]
pub mod atoms;
#[cfg(target_arch = "wasm32")]
pub mod defaults;
#[cfg(target_arch = "wasm32")]
pub mod foundations;
#[cfg(target_arch = "wasm32")]
pub mod molecules;
#[cfg(target_arch = "wasm32")]
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use atoms::{Button, ButtonProps, Switch, SwitchProps};
#[cfg(target_arch = "wasm32")]
pub use defaults::{UiDefaultsProvider, UiDefaultsProviderProps, use_ui_defaults};
#[cfg(target_arch = "wasm32")]
pub use molecules::{
    Dialog, DialogProps, Dropdown, DropdownProps, MenuItem, TabItem, Table, TableProps, Tabs,
    TabsProps,
};
#[cfg(target_arch = "wasm32")]
pub use surface::DomSurface;
