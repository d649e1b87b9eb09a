// bookform - live validation for the book review form
//
// The validator is host-agnostic: it reads values from and writes feedback into
// a `FormHost`. The browser binding lives in `bookform-wasm`; `MemoryHost`
// backs headless use and tests.

pub mod config;
pub mod field;
pub mod host;
pub mod memory;
pub mod render;
pub mod review;
pub mod validator;

pub use bookform_validation::{FieldName, UnknownField, Violation, ViolationKind};
pub use config::FormConfig;
pub use field::{binding, EventKind, FieldBinding, Presentation, FIELD_BINDINGS};
pub use host::FormHost;
pub use memory::MemoryHost;
pub use review::{BookReview, ValidationError};
pub use validator::{FormValidator, SubmissionResult};
