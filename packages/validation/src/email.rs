use once_cell::sync::Lazy;
use regex::Regex;

// Letters are listed in both cases instead of using a case-insensitive flag,
// which would also accept non-ASCII letters that fold to ASCII.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9._]+\.[A-Za-z]{2,4}$").unwrap()
});

/// Checks an address against the form's email pattern: a local part of
/// letters, digits and `._%+-`, an `@`, a domain of letters, digits and `._`,
/// and a final segment of two to four letters. The whole string must match.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("a_b%c-d@sub_domain.info"));
    }

    #[test]
    fn test_is_case_insensitive() {
        assert!(is_valid_email("USER@EXAMPLE.COM"));
        assert!(is_valid_email("User@Example.Com"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.museum"));
        assert!(!is_valid_email("user@exam ple.com"));
    }

    #[test]
    fn test_requires_full_match() {
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com\n"));
        assert!(!is_valid_email("user@example.com trailing"));
    }

    #[test]
    fn test_rejects_non_ascii_letters() {
        assert!(!is_valid_email("user@example.\u{212A}om"));
        assert!(!is_valid_email("usér@example.com"));
    }
}
