//! Browser implementations of the page capabilities, backed by `web-sys`.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::adapter::{section_id, FormAdapter};
use crate::binder::{Cancelable, SubmitTarget};
use crate::error::FormError;
use crate::reporter::{ErrorScope, ERROR_CLASS};
use crate::{donation_tracker, event_signup};

fn js_error(value: JsValue) -> FormError {
    FormError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl From<FormError> for JsValue {
    fn from(e: FormError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

impl Cancelable for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self)
    }
}

impl SubmitTarget for HtmlFormElement {
    type Event = Event;

    fn add_submit_listener(&self, listener: Box<dyn FnMut(&Event)>) -> Result<(), FormError> {
        let mut listener = listener;
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| listener(&event));
        self.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        // The listener lives as long as the page
        closure.forget();
        Ok(())
    }
}

impl ErrorScope for Element {
    fn display_error(&self, message: &str) -> Result<(), FormError> {
        let document = self
            .owner_document()
            .ok_or_else(|| FormError::Dom("error scope has no owner document".to_string()))?;
        let annotation = document.create_element("div").map_err(js_error)?;
        annotation.set_text_content(Some(message));
        annotation.set_class_name(ERROR_CLASS);
        self.append_child(&annotation).map_err(js_error)?;
        Ok(())
    }

    fn clear_errors(&self) -> Result<(), FormError> {
        let annotations = self
            .query_selector_all(&format!(".{}", ERROR_CLASS))
            .map_err(js_error)?;
        // querySelectorAll returns a static list, so removal does not shift it
        for i in 0..annotations.length() {
            if let Some(element) = annotations
                .item(i)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                element.remove();
            }
        }
        Ok(())
    }
}

/// Adapter over the browser document
#[derive(Clone)]
pub struct WebAdapter {
    document: Document,
}

impl WebAdapter {
    pub fn new(document: Document) -> Self {
        WebAdapter { document }
    }

    fn element(&self, id: &str) -> Result<Element, FormError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| FormError::MissingElement(id.to_string()))
    }
}

impl FormAdapter for WebAdapter {
    type Scope = Element;

    fn value(&self, field_id: &str) -> Result<String, FormError> {
        let element = self.element(field_id)?;
        let value = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            element.text_content().unwrap_or_default()
        };
        Ok(value)
    }

    fn scope(&self, field_id: &str) -> Result<Element, FormError> {
        self.element(&section_id(field_id))
    }

    fn clear_errors(&self, form_id: &str) -> Result<(), FormError> {
        self.element(form_id)?.clear_errors()
    }
}

/// Writes an assembled record to the browser console as JSON
fn log_record<R: Serialize>(label: &str, record: &R) {
    match serde_json::to_string(record) {
        Ok(json) => console::log_1(&JsValue::from_str(&format!("{}: {}", label, json))),
        Err(e) => console::error_1(&JsValue::from_str(&format!(
            "failed to encode {}: {}",
            label, e
        ))),
    }
}

fn find_form(document: &Document, id: &str) -> Result<Option<HtmlFormElement>, FormError> {
    match document.get_element_by_id(id) {
        Some(element) => element
            .dyn_into::<HtmlFormElement>()
            .map(Some)
            .map_err(|_| FormError::Dom(format!("#{} is not a form", id))),
        None => Ok(None),
    }
}

/// Binds every form of this crate that is present on the current page.
/// Called by the page once the document has loaded. Assembled records are
/// written to the browser console.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let adapter = WebAdapter::new(document.clone());

    if let Some(form) = find_form(&document, event_signup::FORM_ID)? {
        event_signup::init(&form, adapter.clone(), |record| {
            log_record("event sign-up recorded", &record)
        })?;
    }
    if let Some(form) = find_form(&document, donation_tracker::FORM_ID)? {
        donation_tracker::init(&form, adapter, |record| {
            log_record("donation recorded", &record)
        })?;
    }

    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAGE: &str = r#"
        <form id="event-signup">
            <section id="event-name-section"><input id="event-name" value=""></section>
            <section id="representative-name-section"><input id="representative-name" value="Ada"></section>
            <section id="representative-email-section"><input id="representative-email" value="ada@example.com"></section>
            <section id="role-selection-section">
                <select id="role-selection">
                    <option value="">Choose a role</option>
                    <option value="vendor" selected>Vendor</option>
                </select>
            </section>
        </form>"#;

    fn document() -> Document {
        let document = web_sys::window().unwrap().document().unwrap();
        document.body().unwrap().set_inner_html(PAGE);
        document
    }

    #[wasm_bindgen_test]
    fn test_empty_event_name_is_annotated() {
        let document = document();
        let adapter = WebAdapter::new(document.clone());

        assert_eq!(event_signup::validate_form(&adapter).unwrap(), None);
        assert_eq!(event_signup::validate_form(&adapter).unwrap(), None);

        let annotations = document.query_selector_all(".error-message").unwrap();
        assert_eq!(annotations.length(), 1);
        let section = document.get_element_by_id("event-name-section").unwrap();
        assert_eq!(
            section.last_element_child().unwrap().text_content().unwrap(),
            "Please enter an event name"
        );
    }

    #[wasm_bindgen_test]
    fn test_scope_display_and_clear() {
        let section = document().create_element("section").unwrap();
        section.display_error("shown").unwrap();
        assert_eq!(section.child_element_count(), 1);
        section.clear_errors().unwrap();
        assert_eq!(section.child_element_count(), 0);

        let adapter = WebAdapter::new(document());
        assert_eq!(
            adapter.clear_errors("donation-tracker"),
            Err(FormError::MissingElement("donation-tracker".to_string()))
        );
    }

    #[wasm_bindgen_test]
    fn test_reads_select_value() {
        let adapter = WebAdapter::new(document());

        assert_eq!(adapter.value("role-selection").unwrap(), "vendor");
        assert_eq!(
            adapter.value("missing"),
            Err(FormError::MissingElement("missing".to_string()))
        );
    }
}
