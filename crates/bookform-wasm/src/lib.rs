//! Bookform WASM
//!
//! WebAssembly binding for the book review form. Attaches the validator to the
//! live document and exposes the field rules to JavaScript.

use std::cell::Cell;

use bookform::{BookReview, FieldName, FormConfig, FormValidator, UnknownField};
use tracing::info;
use wasm_bindgen::prelude::*;

mod dom;
mod listeners;
mod logging;

pub use dom::DomHost;

thread_local! {
    static ATTACHED: Cell<bool> = const { Cell::new(false) };
}

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Attach live validation to the review form
///
/// # Arguments
/// * `config` - optional TOML overriding element ids, class names and log level
///
/// # Example (JavaScript)
/// ```javascript
/// attachBookForm();
/// attachBookForm('[classes]\ninvalid = "is-invalid"');
/// ```
#[wasm_bindgen(js_name = attachBookForm)]
pub fn attach_book_form(config: Option<String>) -> Result<(), JsValue> {
    let config = FormConfig::from_toml_str(config.as_deref().unwrap_or(""))
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    logging::init(&config.logging);

    if ATTACHED.with(Cell::get) {
        return Err(JsValue::from_str("Book form is already attached"));
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let host = DomHost::attach(&document, &config)?;
    listeners::register(FormValidator::new(host))?;
    ATTACHED.with(|attached| attached.set(true));

    info!(form = %config.form.name, "book form attached");
    Ok(())
}

/// Message for a single field value, `None` when it passes
pub fn field_message(field: &str, value: &str) -> Result<Option<String>, UnknownField> {
    let field: FieldName = field.parse()?;
    Ok(field.validate(value).err().map(|violation| violation.to_string()))
}

/// Validate one field value without touching the document
///
/// # Example (JavaScript)
/// ```javascript
/// validateField('title', 'A'); // "Title must be at least 2 characters."
/// validateField('title', 'Dune'); // undefined
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(field: &str, value: &str) -> Result<Option<String>, JsValue> {
    field_message(field, value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate a whole review object
///
/// # Returns
/// Array of `{ field, message }` (empty if valid)
#[wasm_bindgen(js_name = validateReview)]
pub fn validate_review_js(review: JsValue) -> Result<JsValue, JsValue> {
    let review: BookReview = serde_wasm_bindgen::from_value(review)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse review: {}", e)))?;

    Ok(serde_wasm_bindgen::to_value(&review.errors())?)
}
