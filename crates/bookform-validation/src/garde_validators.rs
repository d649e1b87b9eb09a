//! Custom garde validators for the review form fields
//!
//! Wraps each field rule so a whole submission struct can be checked with
//! `#[derive(garde::Validate)]` and produce the same messages the live form shows.
//!
//! # Example
//!
//! ```ignore
//! use garde::Validate;
//!
//! #[derive(Validate)]
//! struct Review {
//!     #[garde(custom(bookform_validation::garde_validators::title))]
//!     title: String,
//! }
//! ```

use alloc::string::ToString;

use crate::rules::{self, Violation};

fn to_garde(result: Result<(), Violation>) -> Result<(), garde::Error> {
    result.map_err(|violation| garde::Error::new(violation.to_string()))
}

/// Validator: title length
pub fn title(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(rules::title(value))
}

/// Validator: author length
pub fn author(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(rules::author(value))
}

/// Validator: genre selected
pub fn genre(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(rules::genre(value))
}

/// Validator: rating within 1..=5
pub fn rating(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(rules::rating(value))
}

/// Validator: review length
pub fn review(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(rules::review(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validators_carry_rule_messages() {
        let err = title("A", &()).unwrap_err();
        assert_eq!(err.message(), "Title must be at least 2 characters.");

        let err = rating("six", &()).unwrap_err();
        assert_eq!(err.message(), "Rating must be a number between 1 and 5.");
    }

    #[test]
    fn test_validators_pass_valid_values() {
        assert!(title("Valid Title", &()).is_ok());
        assert!(author("Jane Doe", &()).is_ok());
        assert!(genre("Fiction", &()).is_ok());
        assert!(rating("3", &()).is_ok());
        assert!(review("This book was quite good overall.", &()).is_ok());
    }
}
