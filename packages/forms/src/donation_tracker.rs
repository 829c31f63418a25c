//! The donation tracker form: charity, amount, date and a donor comment.

use models::Donation;
use validation::{FieldKind, MINIMUM_DONATION};

use crate::adapter::FormAdapter;
use crate::binder::SubmitTarget;
use crate::error::FormError;
use crate::form::{Control, FieldDescriptor, FieldValues, Form};
use crate::reporter::ErrorScope;
use crate::validator::{bind, validate_field};

pub const FORM_ID: &str = "donation-tracker";

pub const CHARITY_NAME: FieldDescriptor = FieldDescriptor {
    id: "charity-name",
    key: "name",
    control: Control::Input,
    kind: FieldKind::Required {
        message: "Please enter a name",
    },
};

pub const DONATION_AMOUNT: FieldDescriptor = FieldDescriptor {
    id: "donation-amt",
    key: "donation",
    control: Control::Input,
    kind: FieldKind::Amount {
        minimum: MINIMUM_DONATION,
        empty: "Please enter a donation amount",
        invalid: "Please enter a donation of at least $1.00",
    },
};

pub const DONATION_DATE: FieldDescriptor = FieldDescriptor {
    id: "donation-date",
    key: "date",
    control: Control::Input,
    kind: FieldKind::Date {
        message: "Please enter a date",
    },
};

pub const DONOR_COMMENT: FieldDescriptor = FieldDescriptor {
    id: "donor-comment",
    key: "comment",
    control: Control::TextArea,
    kind: FieldKind::Required {
        message: "Please enter a comment",
    },
};

static FIELDS: [FieldDescriptor; 4] = [
    CHARITY_NAME,
    DONATION_AMOUNT,
    DONATION_DATE,
    DONOR_COMMENT,
];

pub struct DonationTrackerForm;

impl Form for DonationTrackerForm {
    const FORM_ID: &'static str = FORM_ID;
    type Record = Donation;

    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn assemble(values: &FieldValues) -> Donation {
        create_data_object(
            values.get(CHARITY_NAME.key),
            values.get(DONATION_AMOUNT.key),
            values.get(DONATION_DATE.key),
            values.get(DONOR_COMMENT.key),
        )
    }
}

/// Builds the donation record from already validated values
pub fn create_data_object(name: &str, donation: &str, date: &str, comment: &str) -> Donation {
    Donation::new(name, donation, date, comment)
}

pub fn validate_charity_name(name: &str, scope: &impl ErrorScope) -> bool {
    validate_field(&CHARITY_NAME.kind, name, scope)
}

pub fn validate_donation(donation: &str, scope: &impl ErrorScope) -> bool {
    validate_field(&DONATION_AMOUNT.kind, donation, scope)
}

pub fn validate_date(date: &str, scope: &impl ErrorScope) -> bool {
    validate_field(&DONATION_DATE.kind, date, scope)
}

pub fn validate_donor_comment(comment: &str, scope: &impl ErrorScope) -> bool {
    validate_field(&DONOR_COMMENT.kind, comment, scope)
}

/// Validates the whole form once, returning the record if every field passed
pub fn validate_form_submit<A: FormAdapter>(adapter: &A) -> Result<Option<Donation>, FormError> {
    crate::validator::validate_form::<DonationTrackerForm, A>(adapter).map(|s| s.record())
}

/// Binds the donation form's validation to submissions of `form`
pub fn init<T, A, H>(form: &T, adapter: A, on_record: H) -> Result<(), FormError>
where
    T: SubmitTarget,
    A: FormAdapter + 'static,
    H: FnMut(Donation) + 'static,
{
    bind::<DonationTrackerForm, A, T, H>(form, adapter, on_record)
}
