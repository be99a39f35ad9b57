//! Dropdown menu entries.

/// One entry of a dropdown menu. `L` is the label, `A` the action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropdownItem<L, A> {
    /// Clickable entry.
    Action {
        /// Entry label.
        label: L,
        /// Action run on activation.
        action: Option<A>,
        /// Whether the entry is disabled.
        disabled: bool,
    },
    /// Horizontal separator.
    Divider,
}

impl<L, A> DropdownItem<L, A> {
    /// Enabled entry running `action`.
    #[must_use]
    pub const fn item(label: L, action: A) -> Self {
        Self::Action {
            label,
            action: Some(action),
            disabled: false,
        }
    }

    /// Enabled entry without an action.
    #[must_use]
    pub const fn label(label: L) -> Self {
        Self::Action {
            label,
            action: None,
            disabled: false,
        }
    }

    /// Mark the entry disabled. Dividers are unchanged.
    #[must_use]
    pub fn disabled(self) -> Self {
        match self {
            Self::Action { label, action, .. } => Self::Action {
                label,
                action,
                disabled: true,
            },
            Self::Divider => Self::Divider,
        }
    }

    /// Whether the entry is a separator.
    #[must_use]
    pub const fn is_divider(&self) -> bool {
        matches!(self, Self::Divider)
    }

    /// Action to run when the entry is activated, if it is enabled.
    #[must_use]
    pub const fn activate(&self) -> Option<&A> {
        match self {
            Self::Action {
                action: Some(action),
                disabled: false,
                ..
            } => Some(action),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DropdownItem;

    #[test]
    fn only_enabled_entries_activate() {
        let edit: DropdownItem<&str, u8> = DropdownItem::item("Edit", 1);
        assert_eq!(edit.activate(), Some(&1));
        assert_eq!(edit.clone().disabled().activate(), None);
        assert_eq!(DropdownItem::<&str, u8>::label("Info").activate(), None);
        assert_eq!(DropdownItem::<&str, u8>::Divider.activate(), None);
    }

    #[test]
    fn dividers_stay_dividers() {
        let divider: DropdownItem<&str, u8> = DropdownItem::Divider;
        assert!(divider.disabled().is_divider());
    }
}
