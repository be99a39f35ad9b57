//! Typed component defaults.
//!
//! Every section deserializes with `#[serde(default)]`, so a document only
//! needs to name the values it overrides.

use serde::{Deserialize, Serialize};

/// Defaults applied to every dialog that does not override them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialogDefaults {
    /// Label of the confirm button.
    pub confirm_text: String,
    /// Label of the cancel button.
    pub cancel_text: String,
    /// Whether a backdrop gesture dismisses the dialog.
    pub close_by_backdrop: bool,
    /// Whether the Escape key dismisses the dialog.
    pub close_by_escape: bool,
}

impl Default for DialogDefaults {
    fn default() -> Self {
        Self {
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            close_by_backdrop: true,
            close_by_escape: true,
        }
    }
}

/// Defaults for dropdown triggers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownDefaults {
    /// Trigger label when none is supplied.
    pub label: String,
    /// Trigger class (button style).
    pub variant: String,
    /// Whether the chevron icon is drawn next to the label.
    pub show_icon: bool,
}

impl Default for DropdownDefaults {
    fn default() -> Self {
        Self {
            label: "Options".to_string(),
            variant: "outline".to_string(),
            show_icon: true,
        }
    }
}

/// Defaults for data tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableDefaults {
    /// Message rendered when the table has no rows.
    pub empty_message: String,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            empty_message: "No data available".to_string(),
        }
    }
}

/// Root defaults document consumed by the component layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiDefaults {
    /// Dialog defaults.
    pub dialog: DialogDefaults,
    /// Dropdown defaults.
    pub dropdown: DropdownDefaults,
    /// Table defaults.
    pub table: TableDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_defaults_match_documented_labels() {
        let defaults = DialogDefaults::default();
        assert_eq!(defaults.confirm_text, "Confirm");
        assert_eq!(defaults.cancel_text, "Cancel");
        assert!(defaults.close_by_backdrop);
        assert!(defaults.close_by_escape);
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let parsed: UiDefaults =
            serde_json::from_str(r#"{"dialog":{"close_by_escape":false}}"#).expect("parse");
        assert!(!parsed.dialog.close_by_escape);
        assert_eq!(parsed.dialog.confirm_text, "Confirm");
        assert_eq!(parsed.dropdown, DropdownDefaults::default());
        assert_eq!(parsed.table.empty_message, "No data available");
    }
}
