// File: bookform/src/memory.rs
// Purpose: In-memory form host for headless use and tests

use std::collections::BTreeMap;

use bookform_validation::FieldName;

use crate::field::Presentation;
use crate::host::FormHost;

/// A `FormHost` that keeps the whole form state in memory.
///
/// Defaults (the values `reset_values` restores) start empty, like a form
/// whose controls carry no `value` attribute.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    values: BTreeMap<FieldName, String>,
    defaults: BTreeMap<FieldName, String>,
    presentation: BTreeMap<FieldName, Presentation>,
    errors: BTreeMap<FieldName, String>,
    hints: BTreeMap<FieldName, String>,
    result: String,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style value setter
    pub fn with_value(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set_value(field, value);
        self
    }

    /// Sets the value a control resets to
    pub fn with_default(mut self, field: FieldName, value: impl Into<String>) -> Self {
        let value = value.into();
        self.values.insert(field, value.clone());
        self.defaults.insert(field, value);
        self
    }

    /// Simulates the user editing a control
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn presentation(&self, field: FieldName) -> Presentation {
        self.presentation.get(&field).copied().unwrap_or_default()
    }

    pub fn error_text(&self, field: FieldName) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Current native validity hint, empty when cleared
    pub fn hint(&self, field: FieldName) -> &str {
        self.hints.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Markup last rendered into the result area
    pub fn result_markup(&self) -> &str {
        &self.result
    }
}

impl FormHost for MemoryHost {
    fn value(&self, field: FieldName) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_presentation(&mut self, field: FieldName, state: Presentation) {
        self.presentation.insert(field, state);
    }

    fn set_error_text(&mut self, field: FieldName, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn set_custom_validity(&mut self, field: FieldName, message: &str) {
        self.hints.insert(field, message.to_string());
    }

    fn render_result(&mut self, markup: &str) {
        self.result = markup.to_string();
    }

    fn reset_values(&mut self) {
        self.values = self.defaults.clone();
    }
}
