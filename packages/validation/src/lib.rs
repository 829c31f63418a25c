pub mod amount;
pub mod email;
pub mod error;
pub mod escape;
pub mod field_validators;
pub mod validation_errors;

// Re-export common types and functions
pub use amount::{parse_amount, MINIMUM_DONATION};
pub use email::is_valid_email;
pub use error::RuleViolation;
pub use escape::escape_html;
pub use field_validators::FieldKind;
pub use validation_errors::{ValidationErrors, ValidationErrorsExt};
