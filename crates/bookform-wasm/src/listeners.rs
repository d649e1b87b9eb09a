//! Event listener registration driven by the field binding table

use std::cell::RefCell;
use std::rc::Rc;

use bookform::{FieldName, FormValidator, FIELD_BINDINGS};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::dom::DomHost;

/// Wires every control and the form to the validator.
///
/// Per-field listeners are registered first so that, for a bubbling `input`
/// event, the field validates before the form-level listener clears its hint.
pub fn register(validator: FormValidator<DomHost>) -> Result<(), JsValue> {
    let form = validator.host().form().clone();
    let targets: Vec<_> = FIELD_BINDINGS
        .iter()
        .map(|row| (row.field, row.trigger, validator.host().control_element(row.field).clone()))
        .collect();
    let validator = Rc::new(RefCell::new(validator));

    for (field, trigger, target) in targets {
        let validator = Rc::clone(&validator);
        listen(&target, trigger.as_str(), move |_event| {
            validator.borrow_mut().on_field_event(field, trigger);
        })?;
    }

    {
        let validator = Rc::clone(&validator);
        listen(&form, "input", move |event| {
            if let Some(field) = target_field(&event) {
                validator.borrow_mut().clear_hint(field);
            }
        })?;
    }

    listen(&form, "submit", move |event| {
        event.prevent_default();
        let result = validator.borrow_mut().on_submit();
        debug!(accepted = result.is_accepted(), "submit handled");
    })?;

    Ok(())
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // listeners stay registered for the lifetime of the page
    closure.forget();
    Ok(())
}

/// Field named by the event target's `name` attribute, if it is one of ours
fn target_field(event: &Event) -> Option<FieldName> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .get_attribute("name")?
        .parse()
        .ok()
}
