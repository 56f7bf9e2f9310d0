//! Password strength policy and sign-up form validation. Everything here runs
//! before a request is built; a form that fails never reaches the backend.

use crate::{app_lib::AppError, features::auth::pending::normalize_email};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Rough shape check; the backend owns real address validation.
#[must_use]
pub fn valid_email(email_normalized: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .is_some_and(|regex| regex.is_match(email_normalized))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Result of the five strength predicates for one password.
pub struct PasswordChecks {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub has_min_length: bool,
}

impl PasswordChecks {
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_lowercase: password.chars().any(char::is_lowercase),
            has_uppercase: password.chars().any(char::is_uppercase),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| c.is_ascii_punctuation()),
            has_min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
        }
    }

    #[must_use]
    pub fn is_strong(&self) -> bool {
        self.satisfied() == 5
    }

    /// Number of predicates met, for the strength meter.
    #[must_use]
    pub fn satisfied(&self) -> usize {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_special,
            self.has_min_length,
        ]
        .into_iter()
        .filter(|met| *met)
        .count()
    }

    /// Labels of the rules in display order, paired with whether each is met.
    #[must_use]
    pub fn rules(&self) -> [(&'static str, bool); 5] {
        [
            ("One lowercase letter", self.has_lowercase),
            ("One uppercase letter", self.has_uppercase),
            ("One number", self.has_digit),
            ("One special character", self.has_special),
            ("At least 6 characters", self.has_min_length),
        ]
    }
}

#[derive(Clone, Debug, Default)]
/// Sign-up form input. Passwords stay wrapped until the request is built.
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SignUpForm {
    /// Checks required fields, email shape, confirmation and password strength,
    /// in that order, returning the first problem found.
    pub fn validate(&self) -> Result<(), AppError> {
        let password = self.password.expose_secret();
        let confirm = self.confirm_password.expose_secret();

        if self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || password.trim().is_empty()
            || confirm.trim().is_empty()
        {
            return Err(AppError::validation("All fields are required."));
        }

        if !valid_email(&normalize_email(&self.email)) {
            return Err(AppError::validation("Email address looks invalid."));
        }

        if password != confirm {
            return Err(AppError::validation("Passwords do not match."));
        }

        if !PasswordChecks::evaluate(password).is_strong() {
            return Err(AppError::validation(
                "Password must include lowercase and uppercase letters, a number, a special character and at least 6 characters.",
            ));
        }

        Ok(())
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: SecretString::from(password.to_string()),
            confirm_password: SecretString::from(confirm.to_string()),
        }
    }

    #[test]
    fn lowercase_and_digits_only_is_weak() {
        let checks = PasswordChecks::evaluate("abc123");
        assert!(checks.has_lowercase);
        assert!(checks.has_digit);
        assert!(checks.has_min_length);
        assert!(!checks.has_uppercase);
        assert!(!checks.has_special);
        assert!(!checks.is_strong());

        let err = form("abc123", "abc123").validate().expect_err("weak password");
        assert!(err.is_validation());
        assert!(!form("abc123", "abc123").can_submit());
    }

    #[test]
    fn mixed_password_passes_all_predicates() {
        let checks = PasswordChecks::evaluate("Abc123!");
        assert_eq!(checks.satisfied(), 5);
        assert!(checks.is_strong());
        assert!(form("Abc123!", "Abc123!").can_submit());
    }

    #[test]
    fn length_is_counted_in_characters() {
        assert!(!PasswordChecks::evaluate("Ab1!é").has_min_length);
        assert!(PasswordChecks::evaluate("Ab1!éé").has_min_length);
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        assert_eq!(
            form("Abc123!", "Abc123?").validate(),
            Err(AppError::validation("Passwords do not match."))
        );
    }

    #[test]
    fn missing_fields_are_rejected_first() {
        let mut missing_name = form("abc", "xyz");
        missing_name.full_name = "  ".to_string();
        assert_eq!(
            missing_name.validate(),
            Err(AppError::validation("All fields are required."))
        );
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(valid_email("a@example.com"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("missing-domain@"));

        let mut bad_email = form("Abc123!", "Abc123!");
        bad_email.email = "ada.example.com".to_string();
        assert_eq!(
            bad_email.validate(),
            Err(AppError::validation("Email address looks invalid."))
        );
    }

    #[test]
    fn rules_follow_checks() {
        let rules = PasswordChecks::evaluate("A").rules();
        assert_eq!(rules[1], ("One uppercase letter", true));
        assert!(rules.iter().filter(|(_, met)| *met).count() == 1);
    }
}
