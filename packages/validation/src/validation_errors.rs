use std::collections::HashMap;

/// Field ids mapped to the messages reported for them in one validation pass
pub type ValidationErrors = HashMap<String, Vec<String>>;

pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);

    /// Every message on one line, ordered by field id
    fn to_message(&self) -> String;
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string()).or_default().push(message);
    }

    fn to_message(&self) -> String {
        let mut fields: Vec<&String> = self.keys().collect();
        fields.sort();
        fields
            .into_iter()
            .flat_map(|field| self[field].iter().map(String::as_str))
            .collect::<Vec<&str>>()
            .join(", ")
    }
}
