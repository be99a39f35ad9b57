//! Tab selection state and WAI-ARIA keyboard navigation.

/// Selection state for a tab list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsState {
    active: usize,
    len: usize,
}

impl TabsState {
    /// First tab selected.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Index of the selected tab.
    #[must_use]
    pub const fn active(self) -> usize {
        self.active
    }

    /// Number of tabs.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Whether the list has no tabs.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Whether `index` is the selected tab.
    #[must_use]
    pub const fn is_active(self, index: usize) -> bool {
        self.len > 0 && self.active == index
    }

    /// Select `index`. Out-of-range indices are ignored.
    #[must_use]
    pub const fn select(self, index: usize) -> Self {
        if index < self.len {
            Self {
                active: index,
                len: self.len,
            }
        } else {
            self
        }
    }

    /// Follow a change in the number of tabs, clamping the selection.
    #[must_use]
    pub const fn resize(self, len: usize) -> Self {
        let active = if self.active < len { self.active } else { 0 };
        Self { active, len }
    }

    /// Target index for a navigation key, if the key navigates.
    #[must_use]
    pub fn key_target(self, key: &str) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match key {
            "ArrowRight" => Some((self.active + 1) % self.len),
            "ArrowLeft" => Some((self.active + self.len - 1) % self.len),
            "Home" => Some(0),
            "End" => Some(self.len - 1),
            _ => None,
        }
    }
}

/// Id of the tab button at `index`.
#[must_use]
pub fn tab_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-tab-{index}")
}

/// Id of the panel controlled by the tab at `index`.
#[must_use]
pub fn panel_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-tabpanel-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_ignores_out_of_range() {
        let state = TabsState::new(3).select(2);
        assert_eq!(state.active(), 2);
        assert_eq!(state.select(7).active(), 2);
    }

    #[test]
    fn arrows_wrap_around() {
        let state = TabsState::new(3);
        assert_eq!(state.key_target("ArrowLeft"), Some(2));
        assert_eq!(state.select(2).key_target("ArrowRight"), Some(0));
        assert_eq!(state.key_target("End"), Some(2));
        assert_eq!(state.select(1).key_target("Home"), Some(0));
        assert_eq!(state.key_target("Enter"), None);
    }

    #[test]
    fn empty_list_has_no_selection() {
        let state = TabsState::new(0);
        assert!(state.is_empty());
        assert!(!state.is_active(0));
        assert_eq!(state.key_target("ArrowRight"), None);
    }

    #[test]
    fn resize_clamps_selection() {
        let state = TabsState::new(4).select(3);
        assert_eq!(state.resize(2).active(), 0);
        assert_eq!(state.resize(5).active(), 3);
    }

    #[test]
    fn ids_pair_tabs_with_panels() {
        assert_eq!(tab_id("tabs-1", 0), "tabs-1-tab-0");
        assert_eq!(panel_id("tabs-1", 2), "tabs-1-tabpanel-2");
    }
}
