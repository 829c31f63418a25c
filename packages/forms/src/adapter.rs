use crate::dom::{Document, Element};
use crate::error::FormError;
use crate::reporter::ErrorScope;

/// Id of the region that holds a field's error annotations
pub fn section_id(field_id: &str) -> String {
    format!("{}-section", field_id)
}

/// Everything the validator needs from a page
pub trait FormAdapter {
    type Scope: ErrorScope;

    /// Current value of the control with id `field_id`
    fn value(&self, field_id: &str) -> Result<String, FormError>;

    /// The error-display region of `field_id`, found at `#<field_id>-section`
    fn scope(&self, field_id: &str) -> Result<Self::Scope, FormError>;

    /// Removes every annotation under the form with id `form_id`
    fn clear_errors(&self, form_id: &str) -> Result<(), FormError>;

    fn show_error(&self, field_id: &str, message: &str) -> Result<(), FormError> {
        self.scope(field_id)?.display_error(message)
    }
}

/// Adapter over an in-memory [`Document`]
#[derive(Clone, Debug)]
pub struct DocumentAdapter {
    document: Document,
}

impl DocumentAdapter {
    pub fn new(document: Document) -> Self {
        DocumentAdapter { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element, FormError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| FormError::MissingElement(id.to_string()))
    }
}

impl FormAdapter for DocumentAdapter {
    type Scope = Element;

    fn value(&self, field_id: &str) -> Result<String, FormError> {
        Ok(self.element(field_id)?.value())
    }

    fn scope(&self, field_id: &str) -> Result<Element, FormError> {
        self.element(&section_id(field_id))
    }

    fn clear_errors(&self, form_id: &str) -> Result<(), FormError> {
        self.element(form_id)?.clear_errors()
    }
}
