//! Single-element controls.

pub mod button;
pub mod switch;

pub use button::{Button, ButtonProps};
pub use switch::{Switch, SwitchProps};
