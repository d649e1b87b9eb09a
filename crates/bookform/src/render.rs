// File: bookform/src/render.rs
// Purpose: Markup written into the result area

use maud::{html, Markup};

use crate::review::BookReview;

/// Shown when at least one field fails on submit
pub const REJECTED_NOTICE: &str = "Fix errors above.";

/// Heading of the accepted-submission summary
pub const SUMMARY_HEADING: &str = "Submitted Review";

/// Single combined notice for a rejected submission
pub fn rejected_notice() -> Markup {
    html! {
        p style="color:red" { (REJECTED_NOTICE) }
    }
}

/// Heading plus one labeled line per field. Values are HTML-escaped.
pub fn summary(review: &BookReview) -> Markup {
    html! {
        h3 { (SUMMARY_HEADING) }
        @for (field, value) in review.entries() {
            p { b { (field.label()) ":" } " " (value) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejected_notice() {
        assert_eq!(
            rejected_notice().into_string(),
            r#"<p style="color:red">Fix errors above.</p>"#
        );
    }

    #[test]
    fn test_summary_lines() {
        let review = BookReview {
            title: "Valid Title".to_string(),
            author: "Jane Doe".to_string(),
            genre: "Fiction".to_string(),
            rating: "3".to_string(),
            review: "This book was quite good overall.".to_string(),
        };

        assert_eq!(
            summary(&review).into_string(),
            concat!(
                "<h3>Submitted Review</h3>",
                "<p><b>Title:</b> Valid Title</p>",
                "<p><b>Author:</b> Jane Doe</p>",
                "<p><b>Genre:</b> Fiction</p>",
                "<p><b>Rating:</b> 3</p>",
                "<p><b>Review:</b> This book was quite good overall.</p>",
            )
        );
    }

    #[test]
    fn test_summary_escapes_values() {
        let review = BookReview {
            title: "<script>x</script>".to_string(),
            ..BookReview::default()
        };
        let markup = summary(&review).into_string();
        assert!(markup.contains("<p><b>Title:</b> &lt;script&gt;x&lt;/script&gt;</p>"));
    }
}
