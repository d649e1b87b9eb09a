// File: bookform/src/host.rs
// Purpose: Rendering contract between the validator and the document it drives

use bookform_validation::FieldName;

use crate::field::Presentation;

/// The document a `FormValidator` reads from and writes feedback into.
///
/// Implementations own the handles to the five controls, their error slots and
/// the result area. None of these operations can fail from the validator's
/// point of view; hosts log and swallow their own rendering errors.
pub trait FormHost {
    /// Current raw (untrimmed) value of a control
    fn value(&self, field: FieldName) -> String;

    /// Applies a presentation state to a control, replacing the previous one
    fn set_presentation(&mut self, field: FieldName, state: Presentation);

    /// Writes plain text into a field's error slot
    fn set_error_text(&mut self, field: FieldName, message: &str);

    /// Sets the native validity hint of a control; an empty message clears it
    fn set_custom_validity(&mut self, field: FieldName, message: &str);

    /// Replaces the content of the result area with markup
    fn render_result(&mut self, markup: &str);

    /// Restores every control to its default value
    fn reset_values(&mut self);
}
