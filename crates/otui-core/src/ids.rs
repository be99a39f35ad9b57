//! Per-instance DOM id generation.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Return a page-unique id such as `tabs-3`.
#[must_use]
pub fn next_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[cfg(test)]
mod tests {
    use super::next_id;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let first = next_id("menu");
        let second = next_id("menu");
        assert!(first.starts_with("menu-"));
        assert_ne!(first, second);
    }
}
