use serde::{Deserialize, Serialize};

/// A validated sign-up for an event, as collected from the sign-up form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSignup {
    pub event: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl EventSignup {
    pub fn new(event: &str, name: &str, email: &str, role: &str) -> Self {
        EventSignup {
            event: event.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }
}
