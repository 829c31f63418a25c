//! The event sign-up form: event name, representative name and email, and
//! the representative's role.

use models::EventSignup;
use validation::FieldKind;

use crate::adapter::FormAdapter;
use crate::binder::SubmitTarget;
use crate::error::FormError;
use crate::form::{Control, FieldDescriptor, FieldValues, Form};
use crate::reporter::ErrorScope;
use crate::validator::{bind, validate_field};

pub const FORM_ID: &str = "event-signup";

pub const EVENT_NAME: FieldDescriptor = FieldDescriptor {
    id: "event-name",
    key: "event",
    control: Control::Input,
    kind: FieldKind::Required {
        message: "Please enter an event name",
    },
};

pub const REPRESENTATIVE_NAME: FieldDescriptor = FieldDescriptor {
    id: "representative-name",
    key: "name",
    control: Control::Input,
    kind: FieldKind::Required {
        message: "Please enter a name",
    },
};

pub const REPRESENTATIVE_EMAIL: FieldDescriptor = FieldDescriptor {
    id: "representative-email",
    key: "email",
    control: Control::Input,
    kind: FieldKind::Email,
};

pub const ROLE_SELECTION: FieldDescriptor = FieldDescriptor {
    id: "role-selection",
    key: "role",
    control: Control::Select,
    kind: FieldKind::Selection {
        message: "Please select a role",
    },
};

static FIELDS: [FieldDescriptor; 4] = [
    EVENT_NAME,
    REPRESENTATIVE_NAME,
    REPRESENTATIVE_EMAIL,
    ROLE_SELECTION,
];

pub struct EventSignupForm;

impl Form for EventSignupForm {
    const FORM_ID: &'static str = FORM_ID;
    type Record = EventSignup;

    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn assemble(values: &FieldValues) -> EventSignup {
        form_data_object(
            values.get(EVENT_NAME.key),
            values.get(REPRESENTATIVE_NAME.key),
            values.get(REPRESENTATIVE_EMAIL.key),
            values.get(ROLE_SELECTION.key),
        )
    }
}

/// Builds the sign-up record from already validated values
pub fn form_data_object(event: &str, name: &str, email: &str, role: &str) -> EventSignup {
    EventSignup::new(event, name, email, role)
}

pub fn validate_event_name(event_name: &str, scope: &impl ErrorScope) -> bool {
    validate_field(&EVENT_NAME.kind, event_name, scope)
}

pub fn validate_representative_name(name: &str, scope: &impl ErrorScope) -> bool {
    validate_field(&REPRESENTATIVE_NAME.kind, name, scope)
}

pub fn validate_representative_email(email: &str, scope: &impl ErrorScope) -> bool {
    validate_field(&REPRESENTATIVE_EMAIL.kind, email, scope)
}

pub fn validate_role_selection(role: &str, scope: &impl ErrorScope) -> bool {
    validate_field(&ROLE_SELECTION.kind, role, scope)
}

/// Validates the whole form once, returning the record if every field passed
pub fn validate_form<A: FormAdapter>(adapter: &A) -> Result<Option<EventSignup>, FormError> {
    crate::validator::validate_form::<EventSignupForm, A>(adapter).map(|s| s.record())
}

/// Binds the sign-up form's validation to submissions of `form`
pub fn init<T, A, H>(form: &T, adapter: A, on_record: H) -> Result<(), FormError>
where
    T: SubmitTarget,
    A: FormAdapter + 'static,
    H: FnMut(EventSignup) + 'static,
{
    bind::<EventSignupForm, A, T, H>(form, adapter, on_record)
}
