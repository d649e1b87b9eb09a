//! `FormHost` over the live document

use bookform::config::ClassConfig;
use bookform::{FieldName, FormConfig, FormHost, Presentation};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

/// One of the control kinds the review form uses
enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn lookup(form: &HtmlFormElement, field: FieldName) -> Result<Self, JsValue> {
        let element = form
            .query_selector(&format!("[name=\"{}\"]", field.as_str()))?
            .ok_or_else(|| JsValue::from_str(&format!("Form control not found: {}", field)))?;

        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(Control::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Ok(Control::Select(select)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlTextAreaElement>()
            .map(Control::TextArea)
            .map_err(|_| JsValue::from_str(&format!("Unsupported control type for {}", field)))
    }

    fn value(&self) -> String {
        match self {
            Control::Input(input) => input.value(),
            Control::Select(select) => select.value(),
            Control::TextArea(area) => area.value(),
        }
    }

    fn set_custom_validity(&self, message: &str) {
        match self {
            Control::Input(input) => input.set_custom_validity(message),
            Control::Select(select) => select.set_custom_validity(message),
            Control::TextArea(area) => area.set_custom_validity(message),
        }
    }

    fn element(&self) -> &Element {
        match self {
            Control::Input(input) => input.as_ref(),
            Control::Select(select) => select.as_ref(),
            Control::TextArea(area) => area.as_ref(),
        }
    }
}

struct FieldSlot {
    control: Control,
    error_slot: Element,
}

/// The review form and its output targets, resolved once at attach time
pub struct DomHost {
    form: HtmlFormElement,
    // one slot per field, in FieldName::ALL order
    slots: Vec<FieldSlot>,
    result_area: Element,
    classes: ClassConfig,
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element not found: #{}", id)))
}

impl DomHost {
    /// Resolves the form, its five controls and every output target
    pub fn attach(document: &Document, config: &FormConfig) -> Result<Self, JsValue> {
        let form = document
            .forms()
            .named_item(&config.form.name)
            .ok_or_else(|| JsValue::from_str(&format!("Form not found: {}", config.form.name)))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| JsValue::from_str(&format!("Not a form: {}", config.form.name)))?;

        let slots = FieldName::ALL
            .iter()
            .map(|&field| {
                Ok(FieldSlot {
                    control: Control::lookup(&form, field)?,
                    error_slot: element_by_id(document, &config.form.error_slot_id(field))?,
                })
            })
            .collect::<Result<Vec<_>, JsValue>>()?;

        let result_area = element_by_id(document, &config.form.result_area)?;

        Ok(Self {
            form,
            slots,
            result_area,
            classes: config.classes.clone(),
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// The control element listeners are registered on
    pub fn control_element(&self, field: FieldName) -> &Element {
        self.slot(field).control.element()
    }

    fn slot(&self, field: FieldName) -> &FieldSlot {
        &self.slots[field as usize]
    }
}

impl FormHost for DomHost {
    fn value(&self, field: FieldName) -> String {
        self.slot(field).control.value()
    }

    fn set_presentation(&mut self, field: FieldName, state: Presentation) {
        let class_list = self.slot(field).control.element().class_list();
        let result = class_list
            .remove_2(&self.classes.valid, &self.classes.invalid)
            .and_then(|()| match self.classes.class_for(state) {
                Some(class) => class_list.add_1(class),
                None => Ok(()),
            });
        if let Err(err) = result {
            warn!(%field, ?err, "failed to update field classes");
        }
    }

    fn set_error_text(&mut self, field: FieldName, message: &str) {
        self.slot(field).error_slot.set_text_content(Some(message));
    }

    fn set_custom_validity(&mut self, field: FieldName, message: &str) {
        self.slot(field).control.set_custom_validity(message);
    }

    fn render_result(&mut self, markup: &str) {
        self.result_area.set_inner_html(markup);
    }

    fn reset_values(&mut self) {
        self.form.reset();
    }
}
