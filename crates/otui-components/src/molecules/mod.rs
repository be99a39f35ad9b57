//! Composite components built from several native elements.

pub mod dialog;
pub mod dropdown;
pub mod table;
pub mod tabs;

pub use dialog::{Dialog, DialogProps};
pub use dropdown::{Dropdown, DropdownProps, MenuItem};
pub use table::{Table, TableProps};
pub use tabs::{TabItem, Tabs, TabsProps};
