// File: bookform/src/validator.rs
// Purpose: Live field validation, feedback and submit-time aggregation

use bookform_validation::FieldName;
use serde::Serialize;
use tracing::{debug, info};

use crate::field::{binding, EventKind, Presentation, FIELD_BINDINGS};
use crate::host::FormHost;
use crate::render;
use crate::review::BookReview;

/// Outcome of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "review", rename_all = "lowercase")]
pub enum SubmissionResult {
    /// At least one field failed; the form keeps its values and marks
    Rejected,
    /// Every field passed; carries the values as they were submitted
    Accepted(BookReview),
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted(_))
    }
}

/// Validates the review form held by a host and reflects the results into it.
///
/// Created once per form and kept for the lifetime of the page. Every
/// operation runs to completion synchronously.
#[derive(Debug)]
pub struct FormValidator<H> {
    host: H,
}

impl<H: FormHost> FormValidator<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Runs a field's rule and updates its presentation, error slot and hint.
    ///
    /// Returns whether the field passed.
    pub fn validate(&mut self, field: FieldName) -> bool {
        let value = self.host.value(field);
        self.host.set_custom_validity(field, "");

        match binding(field).rule()(&value) {
            Ok(()) => {
                debug!(%field, "field valid");
                self.mark_valid(field);
                true
            }
            Err(violation) => {
                let message = violation.to_string();
                debug!(%field, kind = ?violation.kind(), "field invalid");
                self.host.set_custom_validity(field, &message);
                self.mark_invalid(field, &message);
                false
            }
        }
    }

    pub fn validate_title(&mut self) -> bool {
        self.validate(FieldName::Title)
    }

    pub fn validate_author(&mut self) -> bool {
        self.validate(FieldName::Author)
    }

    pub fn validate_genre(&mut self) -> bool {
        self.validate(FieldName::Genre)
    }

    pub fn validate_rating(&mut self) -> bool {
        self.validate(FieldName::Rating)
    }

    pub fn validate_review(&mut self) -> bool {
        self.validate(FieldName::Review)
    }

    /// Marks a field valid and empties its error slot
    pub fn mark_valid(&mut self, field: FieldName) {
        self.host.set_presentation(field, Presentation::Valid);
        self.host.set_error_text(field, "");
    }

    /// Marks a field invalid and writes `message` into its error slot
    pub fn mark_invalid(&mut self, field: FieldName, message: &str) {
        self.host.set_presentation(field, Presentation::Invalid);
        self.host.set_error_text(field, message);
    }

    /// Clears a control's native validity hint without re-validating it
    pub fn clear_hint(&mut self, field: FieldName) {
        self.host.set_custom_validity(field, "");
    }

    /// Handles a raw input/change event on a control.
    ///
    /// The hint is always cleared. The field is validated only when `event`
    /// is the trigger registered for it; the result is returned in that case.
    pub fn on_field_event(&mut self, field: FieldName, event: EventKind) -> Option<bool> {
        self.clear_hint(field);
        if binding(field).trigger == event {
            Some(self.validate(field))
        } else {
            None
        }
    }

    /// Validates all five fields and either renders a summary and resets the
    /// form, or renders the combined error notice.
    ///
    /// Suppressing the document's own submit action is left to the caller.
    pub fn on_submit(&mut self) -> SubmissionResult {
        // every field must be re-evaluated, so no short circuit here
        let outcomes: Vec<bool> = FIELD_BINDINGS
            .iter()
            .map(|row| self.validate(row.field))
            .collect();

        if !outcomes.iter().all(|passed| *passed) {
            let failed = outcomes.iter().filter(|passed| !**passed).count();
            info!(failed, "submission rejected");
            self.host
                .render_result(&render::rejected_notice().into_string());
            return SubmissionResult::Rejected;
        }

        let review = BookReview::read_from(&self.host);
        self.host
            .render_result(&render::summary(&review).into_string());
        self.reset();
        info!(title = %review.title, "submission accepted");

        SubmissionResult::Accepted(review)
    }

    /// Restores default values and returns every field to neutral
    fn reset(&mut self) {
        self.host.reset_values();
        for field in FieldName::ALL {
            self.host.set_presentation(field, Presentation::Neutral);
            self.host.set_error_text(field, "");
            self.host.set_custom_validity(field, "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;

    fn validator_with(field: FieldName, value: &str) -> FormValidator<MemoryHost> {
        FormValidator::new(MemoryHost::new().with_value(field, value))
    }

    #[test]
    fn test_invalid_sets_state_slot_and_hint() {
        let mut validator = validator_with(FieldName::Title, "A");

        assert!(!validator.validate_title());

        let host = validator.host();
        assert_eq!(host.presentation(FieldName::Title), Presentation::Invalid);
        assert_eq!(host.error_text(FieldName::Title), "Title must be at least 2 characters.");
        assert_eq!(host.hint(FieldName::Title), "Title must be at least 2 characters.");
    }

    #[test]
    fn test_valid_clears_slot_and_hint() {
        let mut validator = validator_with(FieldName::Author, "J");
        assert!(!validator.validate_author());

        validator.host_mut().set_value(FieldName::Author, "Jane Doe");
        assert!(validator.validate_author());

        let host = validator.host();
        assert_eq!(host.presentation(FieldName::Author), Presentation::Valid);
        assert_eq!(host.error_text(FieldName::Author), "");
        assert_eq!(host.hint(FieldName::Author), "");
    }

    #[test]
    fn test_validation_touches_only_its_own_field() {
        let mut validator = validator_with(FieldName::Genre, "");
        validator.validate_genre();

        for field in [FieldName::Title, FieldName::Author, FieldName::Rating, FieldName::Review] {
            assert_eq!(validator.host().presentation(field), Presentation::Neutral);
        }
    }

    #[test]
    fn test_field_event_only_validates_on_its_trigger() {
        let mut validator = validator_with(FieldName::Genre, "");

        assert_eq!(validator.on_field_event(FieldName::Genre, EventKind::Input), None);
        assert_eq!(validator.host().presentation(FieldName::Genre), Presentation::Neutral);

        assert_eq!(validator.on_field_event(FieldName::Genre, EventKind::Change), Some(false));
        assert_eq!(validator.host().presentation(FieldName::Genre), Presentation::Invalid);
    }

    #[test]
    fn test_field_event_clears_stale_hint() {
        let mut validator = validator_with(FieldName::Genre, "");
        validator.validate_genre();
        assert_eq!(validator.host().hint(FieldName::Genre), "Please select a genre.");

        validator.on_field_event(FieldName::Genre, EventKind::Input);
        assert_eq!(validator.host().hint(FieldName::Genre), "");
        // the visible error stays until the field is re-validated
        assert_eq!(validator.host().error_text(FieldName::Genre), "Please select a genre.");
    }

    #[test]
    fn test_submission_result_serializes_with_status_tag() {
        let json = serde_json::to_value(SubmissionResult::Rejected).unwrap();
        assert_eq!(json["status"], "rejected");
    }
}
