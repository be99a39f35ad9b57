//! Loading and validation of defaults documents.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::model::UiDefaults;

/// Parse and validate a JSON defaults document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
/// [`ConfigError::InvalidField`] when a value fails validation.
pub fn load_from_str(document: &str) -> ConfigResult<UiDefaults> {
    let defaults: UiDefaults =
        serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
    validate(&defaults)?;
    debug!(bytes = document.len(), "parsed ui defaults document");
    Ok(defaults)
}

/// Read, parse, and validate a JSON defaults document from disk.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
/// same errors as [`load_from_str`].
pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<UiDefaults> {
    let path = path.as_ref();
    let document = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let defaults = load_from_str(&document)?;
    info!(path = %path.display(), "loaded ui defaults");
    Ok(defaults)
}

/// Reject values components cannot render meaningfully.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for the first blank label found.
pub fn validate(defaults: &UiDefaults) -> ConfigResult<()> {
    let labels = [
        ("dialog", "confirm_text", defaults.dialog.confirm_text.as_str()),
        ("dialog", "cancel_text", defaults.dialog.cancel_text.as_str()),
        ("dropdown", "label", defaults.dropdown.label.as_str()),
        ("dropdown", "variant", defaults.dropdown.variant.as_str()),
    ];
    for (section, field, value) in labels {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                section,
                field,
                message: "must not be blank",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let defaults = load_from_str("{}").expect("defaults");
        assert_eq!(defaults, UiDefaults::default());
    }

    #[test]
    fn blank_labels_are_rejected() {
        let err = load_from_str(r#"{"dialog":{"cancel_text":"  "}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                section: "dialog",
                field: "cancel_text",
                ..
            }
        ));
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        let err = load_from_str(r#"{"dialog":{"close_on_click":true}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_table_message_is_allowed() {
        let defaults = load_from_str(r#"{"table":{"empty_message":""}}"#).expect("defaults");
        assert!(defaults.table.empty_message.is_empty());
    }
}
