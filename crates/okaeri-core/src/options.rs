use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One entry of the native selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    /// Submitted form value; unique within a catalog.
    pub value: String,
    /// Display label shown to the user.
    pub text: String,
    /// Whether the native control had this entry selected when the catalog was taken.
    #[serde(default)]
    pub selected: bool,
}

impl LocationOption {
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            selected: false,
        }
    }

    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// Immutable, ordered snapshot of the native control's entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    options: Vec<LocationOption>,
}

impl Catalog {
    #[must_use]
    pub fn new(options: Vec<LocationOption>) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &[LocationOption] {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, LocationOption> {
        self.options.iter()
    }

    /// Look up an entry by its form value.
    #[must_use]
    pub fn find(&self, value: &str) -> Option<&LocationOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// The entry the native control had selected at snapshot time.
    #[must_use]
    pub fn initially_selected(&self) -> Option<&LocationOption> {
        self.options.iter().find(|o| o.selected)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a LocationOption;
    type IntoIter = std::slice::Iter<'a, LocationOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    options: Vec<LocationOption>,
}

/// Load a catalog from a YAML file of the form `options: [{value, text, selected}]`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or contains
/// duplicate values or more than one selected entry.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: CatalogFile = serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
        path: path.display().to_string(),
        source: e,
    })?;
    validate_catalog(&file.options)?;
    Ok(Catalog::new(file.options))
}

fn validate_catalog(options: &[LocationOption]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.value.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate option value: '{}'",
                option.value
            )));
        }
    }

    let selected = options.iter().filter(|o| o.selected).count();
    if selected > 1 {
        return Err(ConfigError::Validation(format!(
            "at most one option may be selected, found {selected}"
        )));
    }

    Ok(())
}
