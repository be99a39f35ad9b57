//! Checked-state resolution for controlled and uncontrolled switches.

/// Switch state owned either by the caller or by the switch itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitchModel {
    controlled: Option<bool>,
    internal: bool,
    disabled: bool,
}

impl SwitchModel {
    /// Build a model. `controlled` wins over `default_checked` when set.
    #[must_use]
    pub const fn new(controlled: Option<bool>, default_checked: bool, disabled: bool) -> Self {
        Self {
            controlled,
            internal: default_checked,
            disabled,
        }
    }

    /// Whether the caller owns the checked state.
    #[must_use]
    pub const fn is_controlled(self) -> bool {
        self.controlled.is_some()
    }

    /// Checked value to render.
    #[must_use]
    pub const fn checked(self) -> bool {
        match self.controlled {
            Some(checked) => checked,
            None => self.internal,
        }
    }

    /// Value the switch keeps for itself when uncontrolled.
    #[must_use]
    pub const fn internal_checked(self) -> bool {
        self.internal
    }

    /// Apply a user toggle. Returns the new model and the value to report,
    /// or `None` when the switch is disabled.
    #[must_use]
    pub const fn toggle(self, next: bool) -> Option<(Self, bool)> {
        if self.disabled {
            return None;
        }
        let internal = if self.controlled.is_some() {
            self.internal
        } else {
            next
        };
        Some((
            Self {
                controlled: self.controlled,
                internal,
                disabled: self.disabled,
            },
            next,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::SwitchModel;

    #[test]
    fn uncontrolled_switch_tracks_its_own_value() {
        let model = SwitchModel::new(None, true, false);
        assert!(model.checked());
        let (model, reported) = model.toggle(false).expect("enabled");
        assert!(!reported);
        assert!(!model.checked());
    }

    #[test]
    fn controlled_switch_waits_for_caller() {
        let model = SwitchModel::new(Some(false), true, false);
        assert!(model.is_controlled());
        assert!(!model.checked());
        let (model, reported) = model.toggle(true).expect("enabled");
        assert!(reported);
        assert!(!model.checked());
        assert!(model.internal_checked());
    }

    #[test]
    fn disabled_switch_reports_nothing() {
        assert!(SwitchModel::new(None, false, true).toggle(true).is_none());
    }
}
