pub mod donation;
pub mod event_signup;

pub use donation::Donation;
pub use event_signup::EventSignup;
