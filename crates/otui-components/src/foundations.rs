//! Shared helpers for component markup.

use yew::prelude::*;

/// Merge a base class with any consumer-provided classes.
#[must_use]
pub fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    if extra.is_empty() {
        Classes::from(base)
    } else {
        let mut classes = Classes::from(base);
        classes.push(extra.clone());
        classes
    }
}

/// Class attribute from an optional caller string.
#[must_use]
pub fn optional_class(class: Option<&str>) -> Classes {
    class.map_or_else(Classes::new, |class| Classes::from(class.to_string()))
}
