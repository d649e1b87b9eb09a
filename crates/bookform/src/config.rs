// File: bookform/src/config.rs
// Purpose: Element ids, class names and log level for a form binding, parsed from TOML

use std::str::FromStr;

use anyhow::{Context, Result};
use bookform_validation::FieldName;
use serde::{Deserialize, Serialize};

use crate::field::Presentation;

/// Binding configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSection,

    #[serde(default)]
    pub classes: ClassConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the form and its output targets live in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    /// `name` of the form element
    #[serde(default = "default_form_name")]
    pub name: String,

    /// Id of the element receiving the summary or error notice
    #[serde(default = "default_result_area")]
    pub result_area: String,

    /// Error slot ids are this prefix followed by the field name
    #[serde(default = "default_error_slot_prefix")]
    pub error_slot_prefix: String,
}

/// CSS classes applied for each presentation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassConfig {
    #[serde(default = "default_valid_class")]
    pub valid: String,

    #[serde(default = "default_invalid_class")]
    pub invalid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
}

// Default values
fn default_form_name() -> String {
    "bookForm".to_string()
}

fn default_result_area() -> String {
    "resultArea".to_string()
}

fn default_error_slot_prefix() -> String {
    "err-".to_string()
}

fn default_valid_class() -> String {
    "valid".to_string()
}

fn default_invalid_class() -> String {
    "invalid".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            name: default_form_name(),
            result_area: default_result_area(),
            error_slot_prefix: default_error_slot_prefix(),
        }
    }
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            valid: default_valid_class(),
            invalid: default_invalid_class(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl FormSection {
    /// Id of a field's error container, e.g. `err-title`
    pub fn error_slot_id(&self, field: FieldName) -> String {
        format!("{}{}", self.error_slot_prefix, field.as_str())
    }
}

impl ClassConfig {
    /// Class for a state; neutral has none
    pub fn class_for(&self, state: Presentation) -> Option<&str> {
        match state {
            Presentation::Neutral => None,
            Presentation::Valid => Some(&self.valid),
            Presentation::Invalid => Some(&self.invalid),
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(&self.level)
            .with_context(|| format!("Invalid log level: {:?}", self.level))
    }
}

impl FormConfig {
    /// Parse configuration from TOML text; empty text yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig =
            toml::from_str(content).context("Failed to parse form configuration")?;

        config.logging.max_level()?;

        Ok(config)
    }
}
