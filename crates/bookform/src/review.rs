// File: bookform/src/review.rs
// Purpose: The submitted review payload and struct-level validation

use bookform_validation::{garde_validators, FieldName};
use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::host::FormHost;

/// The five raw field values of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct BookReview {
    #[garde(custom(garde_validators::title))]
    pub title: String,
    #[garde(custom(garde_validators::author))]
    pub author: String,
    #[garde(custom(garde_validators::genre))]
    pub genre: String,
    #[garde(custom(garde_validators::rating))]
    pub rating: String,
    #[garde(custom(garde_validators::review))]
    pub review: String,
}

/// A field-scoped validation message, as handed to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl BookReview {
    /// Reads the current values of all five controls, untrimmed
    pub fn read_from<H: FormHost + ?Sized>(host: &H) -> Self {
        Self {
            title: host.value(FieldName::Title),
            author: host.value(FieldName::Author),
            genre: host.value(FieldName::Genre),
            rating: host.value(FieldName::Rating),
            review: host.value(FieldName::Review),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::Author => &self.author,
            FieldName::Genre => &self.genre,
            FieldName::Rating => &self.rating,
            FieldName::Review => &self.review,
        }
    }

    /// Field/value pairs in form order
    pub fn entries(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Checks every field and collects one message per failing field.
    ///
    /// Returns an empty list for a valid review.
    pub fn errors(&self) -> Vec<ValidationError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(report) => report
                .iter()
                .map(|(path, error)| ValidationError {
                    field: path.to_string(),
                    message: error.message().to_string(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
