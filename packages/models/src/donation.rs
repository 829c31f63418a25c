use serde::{Deserialize, Serialize};

/// A validated donation entry from the donation tracker form.
///
/// The amount and date are kept as the text the donor entered; they have
/// already passed validation by the time a `Donation` exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub name: String,
    pub donation: String,
    pub date: String,
    pub comment: String,
}

impl Donation {
    pub fn new(name: &str, donation: &str, date: &str, comment: &str) -> Self {
        Donation {
            name: name.to_string(),
            donation: donation.to_string(),
            date: date.to_string(),
            comment: comment.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donation_json_shape() {
        let donation = Donation::new("charity", "2.00", "2020-11-11", "hello");
        let json = serde_json::to_value(&donation).unwrap();

        assert_eq!(json["name"], "charity");
        assert_eq!(json["donation"], "2.00");
        assert_eq!(json["date"], "2020-11-11");
        assert_eq!(json["comment"], "hello");
    }

    #[test]
    fn test_donation_from_json() {
        let donation: Donation = serde_json::from_str(
            r#"{"name":"a","donation":"5","date":"2021-01-01","comment":"c"}"#,
        )
        .unwrap();

        assert_eq!(donation, Donation::new("a", "5", "2021-01-01", "c"));
    }
}
