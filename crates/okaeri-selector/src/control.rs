//! The seam between the selector and the host page's own selection widget.

use okaeri_core::LocationOption;

/// A host-page selection control whose value is the source of truth for the
/// page's own form logic.
pub trait NativeControl {
    /// Current entries, in document order, with their present selectedness.
    fn options(&self) -> Vec<LocationOption>;
    /// Currently selected value; empty when nothing is selected.
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    /// Notify the host page that the value changed, as a user edit would.
    fn dispatch_change(&mut self);
}

/// In-memory control with HTML `<select>` semantics.
///
/// With no entry flagged selected the first entry is selected. Setting a
/// value that matches no entry clears the selection. Every dispatched change
/// is recorded with the value at dispatch time.
#[derive(Debug, Clone, Default)]
pub struct SelectControl {
    options: Vec<LocationOption>,
    selected_index: Option<usize>,
    changes: Vec<String>,
}

impl SelectControl {
    #[must_use]
    pub fn new(options: Vec<LocationOption>) -> Self {
        let selected_index = options
            .iter()
            .position(|o| o.selected)
            .or_else(|| (!options.is_empty()).then_some(0));
        Self {
            options,
            selected_index,
            changes: Vec::new(),
        }
    }

    /// Values carried by each change notification, oldest first.
    #[must_use]
    pub fn changes(&self) -> &[String] {
        &self.changes
    }
}

impl NativeControl for SelectControl {
    fn options(&self) -> Vec<LocationOption> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, o)| LocationOption {
                selected: Some(i) == self.selected_index,
                ..o.clone()
            })
            .collect()
    }

    fn value(&self) -> String {
        self.selected_index
            .and_then(|i| self.options.get(i))
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: &str) {
        self.selected_index = self.options.iter().position(|o| o.value == value);
    }

    fn dispatch_change(&mut self) {
        let value = self.value();
        self.changes.push(value);
    }
}
