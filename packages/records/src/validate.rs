//! Field validation for the user form.
//!
//! [`validate`] is a pure function: it inspects the candidate [`UserFields`]
//! and returns a map from field to error message. An empty map means the
//! fields are valid. Every field is checked independently, so the caller gets
//! all errors in one pass rather than the first one found.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Mode, UserFields};

/// The fields the form can report errors for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Username,
    Email,
    Password,
}

/// Per-field error messages. Empty means valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Validate candidate field values for the given mode.
///
/// The password rules depend on the mode: a password is required when
/// creating, while an empty password on edit means "leave unchanged" and is
/// valid. A non-empty password must be at least 6 characters in either mode.
pub fn validate(fields: &UserFields, mode: Mode) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.username.is_empty() {
        errors.insert(Field::Username, "Username is required".to_string());
    } else if fields.username.chars().count() < 3 {
        errors.insert(
            Field::Username,
            "Username must be at least 3 characters".to_string(),
        );
    }

    if fields.email.is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !is_valid_email(&fields.email) {
        errors.insert(Field::Email, "Invalid email format".to_string());
    }

    if fields.password.is_empty() {
        if mode == Mode::Create {
            errors.insert(Field::Password, "Password is required".to_string());
        }
    } else if fields.password.chars().count() < 6 {
        errors.insert(
            Field::Password,
            "Password must be at least 6 characters".to_string(),
        );
    }

    errors
}

/// Check for a local@domain.tld shape: non-empty local part, a single `@`,
/// a dotted domain with non-empty labels, and no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let first = labels.next();
    let rest: Vec<&str> = labels.collect();
    match first {
        Some(label) if !label.is_empty() => {
            !rest.is_empty() && rest.iter().all(|l| !l.is_empty())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(username: &str, email: &str, password: &str) -> UserFields {
        UserFields {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_create_fields() {
        let errors = validate(&fields("carol", "carol@example.com", "secret"), Mode::Create);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_username_required() {
        let errors = validate(&fields("", "a@b.com", "secret"), Mode::Create);
        assert_eq!(errors.get(&Field::Username).map(String::as_str), Some("Username is required"));
    }

    #[test]
    fn test_username_min_length() {
        let errors = validate(&fields("ab", "a@b.com", "secret"), Mode::Create);
        assert_eq!(
            errors.get(&Field::Username).map(String::as_str),
            Some("Username must be at least 3 characters")
        );

        // Exactly 3 is fine
        let errors = validate(&fields("abc", "a@b.com", "secret"), Mode::Create);
        assert!(!errors.contains_key(&Field::Username));
    }

    #[test]
    fn test_email_required() {
        let errors = validate(&fields("carol", "", "secret"), Mode::Create);
        assert_eq!(errors.get(&Field::Email).map(String::as_str), Some("Email is required"));
    }

    #[test]
    fn test_email_format() {
        for bad in ["no-at-sign", "@missing.local", "a@", "a@nodot", "a@.com", "a@b.", "a b@c.com", "a@@b.com"] {
            let errors = validate(&fields("carol", bad, "secret"), Mode::Create);
            assert_eq!(
                errors.get(&Field::Email).map(String::as_str),
                Some("Invalid email format"),
                "expected format error for {bad:?}"
            );
        }
        for good in ["a@b.com", "carol@example.co.uk", "first.last@sub.domain.org"] {
            let errors = validate(&fields("carol", good, "secret"), Mode::Create);
            assert!(!errors.contains_key(&Field::Email), "expected {good:?} to pass");
        }
    }

    #[test]
    fn test_password_required_on_create_only() {
        let errors = validate(&fields("carol", "a@b.com", ""), Mode::Create);
        assert_eq!(errors.get(&Field::Password).map(String::as_str), Some("Password is required"));

        // Empty password on edit means "leave unchanged"
        let errors = validate(&fields("carol", "a@b.com", ""), Mode::Edit);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_password_min_length_in_both_modes() {
        for mode in [Mode::Create, Mode::Edit] {
            let errors = validate(&fields("carol", "a@b.com", "12345"), mode);
            assert_eq!(
                errors.get(&Field::Password).map(String::as_str),
                Some("Password must be at least 6 characters")
            );
            let errors = validate(&fields("carol", "a@b.com", "123456"), mode);
            assert!(!errors.contains_key(&Field::Password));
        }
    }

    #[test]
    fn test_errors_reported_per_field() {
        // All three fields bad at once: every error shows up, no short-circuit
        let errors = validate(&fields("x", "nope", "123"), Mode::Create);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key(&Field::Username));
        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Password));
    }
}
