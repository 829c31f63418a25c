use validation::{FieldKind, RuleViolation, ValidationErrors, ValidationErrorsExt};

use crate::adapter::FormAdapter;
use crate::binder::{attach_event_listener, SubmitTarget};
use crate::error::FormError;
use crate::form::{FieldValues, Form};
use crate::reporter::ErrorScope;

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<R> {
    /// Every field passed and the record was assembled
    Assembled(R),
    /// At least one field failed; its messages are shown on the page
    Rejected(ValidationErrors),
}

impl<R> Submission<R> {
    pub fn record(self) -> Option<R> {
        match self {
            Submission::Assembled(record) => Some(record),
            Submission::Rejected(_) => None,
        }
    }
}

// The violation, if any, after it has been shown in `scope`
fn check_and_report(
    kind: &FieldKind,
    value: &str,
    scope: &impl ErrorScope,
) -> Result<Option<RuleViolation>, FormError> {
    match kind.check(value) {
        Ok(()) => Ok(None),
        Err(violation) => {
            scope.display_error(&violation.message)?;
            Ok(Some(violation))
        }
    }
}

/// Checks one raw value against `kind`, appending the failure message to
/// `scope` when it does not pass. A scope that cannot show the message is
/// logged and still counts as a failure.
pub fn validate_field(kind: &FieldKind, value: &str, scope: &impl ErrorScope) -> bool {
    match check_and_report(kind, value, scope) {
        Ok(violation) => violation.is_none(),
        Err(e) => {
            tracing::error!(error = %e, "could not display field error");
            false
        }
    }
}

/// Runs one validation pass over every field of `F`.
///
/// Old annotations are cleared first. All fields are checked even after a
/// failure, so each failing field shows its own message. The record is
/// assembled from the raw values only when every field passed.
pub fn validate_form<F, A>(adapter: &A) -> Result<Submission<F::Record>, FormError>
where
    F: Form,
    A: FormAdapter,
{
    adapter.clear_errors(F::FORM_ID)?;

    let mut values = FieldValues::new();
    let mut errors = ValidationErrors::new();

    for field in F::fields() {
        let value = adapter.value(field.id)?;
        let scope = adapter.scope(field.id)?;

        match check_and_report(&field.kind, &value, &scope)? {
            None => tracing::debug!(form = F::FORM_ID, field = field.id, "field valid"),
            Some(violation) => {
                tracing::debug!(
                    form = F::FORM_ID,
                    field = field.id,
                    reason = %violation,
                    "field invalid"
                );
                errors.add_error(field.id, violation.message);
            }
        }

        values.insert(field.key, value);
    }

    if !errors.is_empty() {
        tracing::warn!(
            form = F::FORM_ID,
            failed = errors.len(),
            errors = %errors.to_message(),
            "submission rejected"
        );
        return Ok(Submission::Rejected(errors));
    }

    Ok(Submission::Assembled(F::assemble(&values)))
}

/// Binds `F`'s validation to submissions of `form`. Each assembled record is
/// handed to `on_record`; page errors are logged.
pub fn bind<F, A, T, H>(form: &T, adapter: A, mut on_record: H) -> Result<(), FormError>
where
    F: Form + 'static,
    A: FormAdapter + 'static,
    T: SubmitTarget,
    H: FnMut(F::Record) + 'static,
{
    attach_event_listener(form, move || match validate_form::<F, A>(&adapter) {
        Ok(Submission::Assembled(record)) => {
            tracing::info!(form = F::FORM_ID, record = ?record, "submission assembled");
            on_record(record);
        }
        Ok(Submission::Rejected(_)) => {}
        Err(e) => tracing::error!(form = F::FORM_ID, error = %e, "form validation failed"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Control, FieldDescriptor};
    use crate::reporter::MockErrorScope;
    use mockall::predicate::eq;
    use validation::MINIMUM_DONATION;

    const NAME: FieldDescriptor = FieldDescriptor {
        id: "donor-name",
        key: "name",
        control: Control::Input,
        kind: FieldKind::Required {
            message: "Please enter a name",
        },
    };

    static FIELDS: [FieldDescriptor; 1] = [NAME];

    struct NameForm;

    impl Form for NameForm {
        const FORM_ID: &'static str = "name-form";
        type Record = String;

        fn fields() -> &'static [FieldDescriptor] {
            &FIELDS
        }

        fn assemble(values: &FieldValues) -> String {
            values.get(NAME.key).to_string()
        }
    }

    /// Adapter whose every field reads `value` and reports into a scope
    /// built by `scope`.
    struct FixedAdapter {
        value: &'static str,
        scope: fn() -> MockErrorScope,
    }

    impl FormAdapter for FixedAdapter {
        type Scope = MockErrorScope;

        fn value(&self, _field_id: &str) -> Result<String, FormError> {
            Ok(self.value.to_string())
        }

        fn scope(&self, _field_id: &str) -> Result<MockErrorScope, FormError> {
            Ok((self.scope)())
        }

        fn clear_errors(&self, _form_id: &str) -> Result<(), FormError> {
            Ok(())
        }
    }

    fn detached_scope() -> MockErrorScope {
        let mut scope = MockErrorScope::new();
        scope
            .expect_display_error()
            .returning(|_| Err(FormError::Dom("scope detached".to_string())));
        scope
    }

    fn silent_scope() -> MockErrorScope {
        let mut scope = MockErrorScope::new();
        scope.expect_display_error().times(0);
        scope
    }

    #[test]
    fn test_failing_field_reports_once() {
        let mut scope = MockErrorScope::new();
        scope
            .expect_display_error()
            .with(eq("Please enter a date"))
            .times(1)
            .returning(|_| Ok(()));

        let kind = FieldKind::Date {
            message: "Please enter a date",
        };
        assert!(!validate_field(&kind, "", &scope));
    }

    #[test]
    fn test_passing_field_reports_nothing() {
        let mut scope = MockErrorScope::new();
        scope.expect_display_error().times(0);

        let kind = FieldKind::Amount {
            minimum: MINIMUM_DONATION,
            empty: "empty",
            invalid: "invalid",
        };
        assert!(validate_field(&kind, "2.00", &scope));
    }

    #[test]
    fn test_field_fails_when_scope_cannot_display() {
        let scope = detached_scope();
        assert!(!validate_field(&NAME.kind, "", &scope));
    }

    #[test]
    fn test_form_propagates_display_failure() {
        let adapter = FixedAdapter {
            value: "",
            scope: detached_scope,
        };

        assert_eq!(
            validate_form::<NameForm, _>(&adapter),
            Err(FormError::Dom("scope detached".to_string()))
        );
    }

    #[test]
    fn test_form_assembles_by_record_key() {
        let adapter = FixedAdapter {
            value: "Jane Doe",
            scope: silent_scope,
        };

        assert_eq!(
            validate_form::<NameForm, _>(&adapter),
            Ok(Submission::Assembled("Jane Doe".to_string()))
        );
    }

    #[test]
    fn test_submission_record() {
        let assembled: Submission<u8> = Submission::Assembled(7);
        let rejected: Submission<u8> = Submission::Rejected(ValidationErrors::new());

        assert_eq!(assembled.record(), Some(7));
        assert_eq!(rejected.record(), None);
    }
}
