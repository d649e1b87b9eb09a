//! Per-field rules of the book review form
//!
//! Each field has exactly one rule: a pure function from the field's raw value
//! to `Ok(())` or the single [`Violation`] it reports. Rules never look at any
//! other field.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::numeric::{in_range, parse_number};
use crate::text::{check_trimmed_len, LengthBound};

pub const TITLE_MIN_LEN: usize = 2;
pub const TITLE_MAX_LEN: usize = 100;
pub const AUTHOR_MIN_LEN: usize = 2;
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;
pub const REVIEW_MIN_LEN: usize = 10;
pub const REVIEW_MAX_LEN: usize = 250;

/// A field's validation rule
pub type Rule = fn(&str) -> Result<(), Violation>;

/// The five fields of the review form, by their control name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldName {
    Title,
    Author,
    Genre,
    Rating,
    Review,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 5] = [
        FieldName::Title,
        FieldName::Author,
        FieldName::Genre,
        FieldName::Rating,
        FieldName::Review,
    ];

    /// Control name in the form
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Author => "author",
            FieldName::Genre => "genre",
            FieldName::Rating => "rating",
            FieldName::Review => "review",
        }
    }

    /// Label used in the submission summary
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Title => "Title",
            FieldName::Author => "Author",
            FieldName::Genre => "Genre",
            FieldName::Rating => "Rating",
            FieldName::Review => "Review",
        }
    }

    /// The rule that governs this field
    pub fn rule(self) -> Rule {
        match self {
            FieldName::Title => title,
            FieldName::Author => author,
            FieldName::Genre => genre,
            FieldName::Rating => rating,
            FieldName::Review => review,
        }
    }

    /// Runs this field's rule against a raw value
    pub fn validate(self, value: &str) -> Result<(), Violation> {
        (self.rule())(value)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a control name is not one of the five form fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Category of a rule failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    TooShort,
    TooLong,
    Missing,
    NotANumberOrOutOfRange,
}

/// A rule failure; `Display` yields the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Title must be at least 2 characters.")]
    TitleTooShort,
    #[error("Title cannot exceed 100 characters.")]
    TitleTooLong,
    #[error("Author name must be at least 2 characters.")]
    AuthorTooShort,
    #[error("Please select a genre.")]
    GenreMissing,
    #[error("Rating must be a number between 1 and 5.")]
    RatingNotANumberOrOutOfRange,
    #[error("Review must be at least 10 characters.")]
    ReviewTooShort,
    #[error("Review cannot exceed 250 characters.")]
    ReviewTooLong,
}

impl Violation {
    pub fn kind(self) -> ViolationKind {
        match self {
            Violation::TitleTooShort | Violation::AuthorTooShort | Violation::ReviewTooShort => {
                ViolationKind::TooShort
            }
            Violation::TitleTooLong | Violation::ReviewTooLong => ViolationKind::TooLong,
            Violation::GenreMissing => ViolationKind::Missing,
            Violation::RatingNotANumberOrOutOfRange => ViolationKind::NotANumberOrOutOfRange,
        }
    }

    /// The field this failure belongs to
    pub fn field(self) -> FieldName {
        match self {
            Violation::TitleTooShort | Violation::TitleTooLong => FieldName::Title,
            Violation::AuthorTooShort => FieldName::Author,
            Violation::GenreMissing => FieldName::Genre,
            Violation::RatingNotANumberOrOutOfRange => FieldName::Rating,
            Violation::ReviewTooShort | Violation::ReviewTooLong => FieldName::Review,
        }
    }
}

/// Title: 2 to 100 characters after trimming
pub fn title(value: &str) -> Result<(), Violation> {
    check_trimmed_len(value, TITLE_MIN_LEN, Some(TITLE_MAX_LEN)).map_err(|bound| match bound {
        LengthBound::Below => Violation::TitleTooShort,
        LengthBound::Above => Violation::TitleTooLong,
    })
}

/// Author: at least 2 characters after trimming
pub fn author(value: &str) -> Result<(), Violation> {
    check_trimmed_len(value, AUTHOR_MIN_LEN, None).map_err(|_| Violation::AuthorTooShort)
}

/// Genre: any selection except the empty option. Not trimmed.
pub fn genre(value: &str) -> Result<(), Violation> {
    if value.is_empty() {
        Err(Violation::GenreMissing)
    } else {
        Ok(())
    }
}

/// Rating: a number between 1 and 5 inclusive; decimals are allowed
pub fn rating(value: &str) -> Result<(), Violation> {
    match parse_number(value) {
        Some(n) if in_range(n, RATING_MIN, RATING_MAX) => Ok(()),
        _ => Err(Violation::RatingNotANumberOrOutOfRange),
    }
}

/// Review: 10 to 250 characters after trimming
pub fn review(value: &str) -> Result<(), Violation> {
    check_trimmed_len(value, REVIEW_MIN_LEN, Some(REVIEW_MAX_LEN)).map_err(|bound| match bound {
        LengthBound::Below => Violation::ReviewTooShort,
        LengthBound::Above => Violation::ReviewTooLong,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chars(n: usize) -> String {
        "x".repeat(n)
    }

    #[rstest]
    #[case(1, Err(Violation::TitleTooShort))]
    #[case(2, Ok(()))]
    #[case(100, Ok(()))]
    #[case(101, Err(Violation::TitleTooLong))]
    fn test_title_bounds(#[case] len: usize, #[case] expected: Result<(), Violation>) {
        assert_eq!(title(&chars(len)), expected);
    }

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(title("  A  "), Err(Violation::TitleTooShort));
        // NEL is not trimmed, so it counts toward the length
        assert_eq!(title("\u{85}A"), Ok(()));
        assert_eq!(title(&alloc::format!("  {}  ", chars(100))), Ok(()));
    }

    #[rstest]
    #[case("A", Err(Violation::AuthorTooShort))]
    #[case(" J ", Err(Violation::AuthorTooShort))]
    #[case("Jo", Ok(()))]
    #[case("Jane Doe", Ok(()))]
    fn test_author(#[case] value: &str, #[case] expected: Result<(), Violation>) {
        assert_eq!(author(value), expected);
    }

    #[test]
    fn test_author_has_no_upper_bound() {
        assert_eq!(author(&chars(5000)), Ok(()));
    }

    #[test]
    fn test_genre() {
        assert_eq!(genre(""), Err(Violation::GenreMissing));
        assert_eq!(genre("Fiction"), Ok(()));
        // only the empty option counts as unselected
        assert_eq!(genre(" "), Ok(()));
    }

    #[rstest]
    #[case("1", true)]
    #[case("5", true)]
    #[case("3.5", true)]
    #[case("0.999", false)]
    #[case("5.001", false)]
    #[case("six", false)]
    #[case("", false)]
    #[case("0", false)]
    #[case("-3", false)]
    #[case("Infinity", false)]
    #[case("\u{85}3", false)]
    #[case(" 3 ", true)]
    fn test_rating(#[case] value: &str, #[case] passes: bool) {
        assert_eq!(rating(value).is_ok(), passes);
    }

    #[rstest]
    #[case(9, Err(Violation::ReviewTooShort))]
    #[case(10, Ok(()))]
    #[case(250, Ok(()))]
    #[case(251, Err(Violation::ReviewTooLong))]
    fn test_review_bounds(#[case] len: usize, #[case] expected: Result<(), Violation>) {
        assert_eq!(review(&chars(len)), expected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Violation::TitleTooShort.to_string(), "Title must be at least 2 characters.");
        assert_eq!(Violation::TitleTooLong.to_string(), "Title cannot exceed 100 characters.");
        assert_eq!(
            Violation::AuthorTooShort.to_string(),
            "Author name must be at least 2 characters."
        );
        assert_eq!(Violation::GenreMissing.to_string(), "Please select a genre.");
        assert_eq!(
            Violation::RatingNotANumberOrOutOfRange.to_string(),
            "Rating must be a number between 1 and 5."
        );
        assert_eq!(Violation::ReviewTooShort.to_string(), "Review must be at least 10 characters.");
        assert_eq!(Violation::ReviewTooLong.to_string(), "Review cannot exceed 250 characters.");
    }

    #[test]
    fn test_violation_kind_and_field() {
        assert_eq!(Violation::ReviewTooLong.kind(), ViolationKind::TooLong);
        assert_eq!(Violation::GenreMissing.kind(), ViolationKind::Missing);
        assert_eq!(
            Violation::RatingNotANumberOrOutOfRange.kind(),
            ViolationKind::NotANumberOrOutOfRange
        );
        assert_eq!(Violation::AuthorTooShort.field(), FieldName::Author);
    }

    #[test]
    fn test_field_name_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert_eq!(
            "isbn".parse::<FieldName>(),
            Err(UnknownField("isbn".to_string()))
        );
    }

    #[test]
    fn test_field_dispatches_to_its_rule() {
        assert_eq!(FieldName::Title.validate("A"), Err(Violation::TitleTooShort));
        assert_eq!(FieldName::Genre.validate(""), Err(Violation::GenreMissing));
        assert!(FieldName::Rating.validate("3").is_ok());
    }
}
