use std::collections::HashMap;
use std::fmt;

use validation::FieldKind;

use crate::adapter::section_id;
use crate::dom::{Document, Element};

/// The kind of element a field is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Input,
    Select,
    TextArea,
}

impl Control {
    pub fn tag(&self) -> &'static str {
        match self {
            Control::Input => "input",
            Control::Select => "select",
            Control::TextArea => "textarea",
        }
    }
}

/// Static declaration of one field of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Element id of the control; its error region is `<id>-section`
    pub id: &'static str,
    /// Key the value is stored under in [`FieldValues`] and the record
    pub key: &'static str,
    pub control: Control,
    pub kind: FieldKind,
}

/// Raw values read during one submission attempt, keyed by record key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: Vec<(&'static str, String)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: String) {
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((key, value)),
        }
    }

    /// The value stored under `key`, or `""` if no field has that key
    pub fn get(&self, key: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }
}

/// A form type: its element id, its fields in validation order, and how a
/// fully valid set of values becomes a record.
pub trait Form {
    const FORM_ID: &'static str;
    type Record: fmt::Debug;

    fn fields() -> &'static [FieldDescriptor];

    fn assemble(values: &FieldValues) -> Self::Record;
}

/// Builds an in-memory page holding the form `F`: a `form` element with one
/// `section` per field, each wrapping the field's control. Controls are
/// filled from `values` by field id and left empty otherwise.
pub fn build_page<F: Form>(values: &HashMap<String, String>) -> Document {
    let document = Document::new();
    let form = Element::with_id("form", F::FORM_ID);

    for field in F::fields() {
        let section = Element::with_id("section", &section_id(field.id));
        let control = Element::with_id(field.control.tag(), field.id);
        if let Some(value) = values.get(field.id) {
            control.set_value(value);
        }
        section.append_child(&control);
        form.append_child(&section);
    }

    document.body().append_child(&form);
    document
}
