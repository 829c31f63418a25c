pub mod adapter;
pub mod binder;
pub mod dom;
pub mod donation_tracker;
pub mod error;
pub mod event_signup;
pub mod form;
pub mod reporter;
pub mod validator;
#[cfg(feature = "web")]
pub mod web;

pub use adapter::{DocumentAdapter, FormAdapter};
pub use binder::{attach_event_listener, Cancelable, SubmitTarget};
pub use donation_tracker::DonationTrackerForm;
pub use error::FormError;
pub use event_signup::EventSignupForm;
pub use form::{build_page, Control, FieldDescriptor, FieldValues, Form};
pub use reporter::{clear_errors, display_error, ErrorScope, ERROR_CLASS};
pub use validator::{bind, validate_field, validate_form, Submission};
