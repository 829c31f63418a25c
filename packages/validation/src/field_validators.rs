use rust_decimal::Decimal;

use super::amount::parse_amount;
use super::email::is_valid_email;
use super::error::RuleViolation;
use super::escape::escape_html;

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter an email address";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// The rule a form field is checked against, together with the messages it
/// reports on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text that must not be empty
    Required { message: &'static str },
    /// An email address matching the form's email pattern
    Email,
    /// A currency amount no lower than `minimum`
    Amount {
        minimum: Decimal,
        empty: &'static str,
        invalid: &'static str,
    },
    /// A date input; only presence is checked
    Date { message: &'static str },
    /// A dropdown where an option other than the placeholder must be chosen
    Selection { message: &'static str },
}

impl FieldKind {
    /// Checks a raw field value. The value is HTML-escaped before any rule
    /// looks at it.
    pub fn check(&self, raw: &str) -> Result<(), RuleViolation> {
        let value = escape_html(raw);

        match *self {
            FieldKind::Required { message }
            | FieldKind::Date { message }
            | FieldKind::Selection { message } => {
                if value.is_empty() {
                    return Err(RuleViolation::new(message));
                }
            }
            FieldKind::Email => {
                if value.is_empty() {
                    return Err(RuleViolation::new(EMPTY_EMAIL_MESSAGE));
                }
                if !is_valid_email(&value) {
                    return Err(RuleViolation::new(INVALID_EMAIL_MESSAGE));
                }
            }
            FieldKind::Amount {
                minimum,
                empty,
                invalid,
            } => {
                if value.is_empty() {
                    return Err(RuleViolation::new(empty));
                }
                match parse_amount(&value) {
                    Some(amount) if amount >= minimum => {}
                    _ => return Err(RuleViolation::new(invalid)),
                }
            }
        }

        Ok(())
    }
}
