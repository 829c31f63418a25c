use crate::dom::Element;
use crate::error::FormError;

/// Class carried by every error annotation, used to find them again for removal
pub const ERROR_CLASS: &str = "error-message";

/// A region of the page that error annotations can be attached to
#[cfg_attr(test, mockall::automock)]
pub trait ErrorScope {
    /// Appends an annotation carrying `message` as the last child of the scope
    fn display_error(&self, message: &str) -> Result<(), FormError>;

    /// Removes every annotation anywhere under the scope
    fn clear_errors(&self) -> Result<(), FormError>;
}

pub fn display_error(scope: &Element, message: &str) {
    let annotation = Element::new("div");
    annotation.set_text_content(message);
    annotation.set_class_name(ERROR_CLASS);
    scope.append_child(&annotation);
}

pub fn clear_errors(form: &Element) {
    for annotation in form.query_all_by_class(ERROR_CLASS) {
        annotation.remove();
    }
}

impl ErrorScope for Element {
    fn display_error(&self, message: &str) -> Result<(), FormError> {
        display_error(self, message);
        Ok(())
    }

    fn clear_errors(&self) -> Result<(), FormError> {
        clear_errors(self);
        Ok(())
    }
}
