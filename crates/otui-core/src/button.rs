//! Button variant and style tokens exposed as `data-*` attributes.

/// Color variant of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action.
    #[default]
    Primary,
    /// Secondary action.
    Secondary,
    /// Destructive action.
    Danger,
}

impl ButtonVariant {
    /// Value for the `data-variant` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

/// Fill style of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled background.
    #[default]
    Solid,
    /// Border only.
    Outline,
    /// No border or background.
    Ghost,
}

impl ButtonStyle {
    /// Value for the `data-style` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_primary_solid() {
        assert_eq!(ButtonVariant::default().as_str(), "primary");
        assert_eq!(ButtonStyle::default().as_str(), "solid");
        assert_eq!(ButtonVariant::Danger.as_str(), "danger");
        assert_eq!(ButtonStyle::Ghost.as_str(), "ghost");
    }
}
