//! Request and response types for auth-related API calls. Request payloads
//! carry passwords and verification codes, so they implement `Serialize` only
//! and must never be logged.

use crate::{app_lib::AppError, features::auth::pending::PendingVerification};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Identity of the signed-in user as returned by the API. Contains no secrets.
pub struct User {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    pub email: String,
}

impl User {
    /// Name to greet the user with; falls back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() { &self.email } else { name }
    }
}

#[derive(Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Serialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SendCodeRequest {
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// Raw sign-up response. The flags are folded into [`SignUpOutcome`] before
/// anything else looks at them.
pub struct SignUpResponse {
    #[serde(default)]
    pub needs_verification: bool,
    #[serde(default)]
    pub should_redirect_to_sign_in: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The three ways a sign-up can end.
pub enum SignUpOutcome {
    /// Account created; the email address must be confirmed with a code.
    NeedsVerification(PendingVerification),
    /// An account already exists for the address; the visitor should sign in.
    AccountExists { message: Option<String> },
    /// Account created and signed in immediately.
    SignedIn(User),
}

impl SignUpResponse {
    /// Folds the response flags into a single outcome.
    ///
    /// `email` is the address that was submitted; it seeds the pending
    /// verification record. Responses that set both flags, or neither flag
    /// without a user, are rejected.
    pub fn into_outcome(self, email: &str) -> Result<SignUpOutcome, AppError> {
        match (self.needs_verification, self.should_redirect_to_sign_in, self.user) {
            (true, true, _) => Err(AppError::Parse(
                "Sign-up response asks for verification and sign-in at once.".to_string(),
            )),
            (true, false, _) => PendingVerification::new(email)
                .map(SignUpOutcome::NeedsVerification)
                .ok_or_else(|| AppError::validation("Email is required.")),
            (false, true, _) => Ok(SignUpOutcome::AccountExists {
                message: self.message,
            }),
            (false, false, Some(user)) => Ok(SignUpOutcome::SignedIn(user)),
            (false, false, None) => Err(AppError::Parse(
                "Sign-up response did not include an account.".to_string(),
            )),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Optional body of a verify-code response. An empty 2xx response means success.
pub struct VerifyCodeResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl VerifyCodeResponse {
    pub fn into_result(self) -> Result<(), AppError> {
        if self.success {
            Ok(())
        } else {
            Err(AppError::Rejected(self.message.unwrap_or_else(|| {
                "Verification failed. Check the code and try again.".to_string()
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u_1".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn user_deserializes_without_full_name() {
        let json = r#"{"id":"u_2","email":"bob@example.com"}"#;
        let user: User = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(user.full_name, "");
        assert_eq!(user.display_name(), "bob@example.com");
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(user().display_name(), "Ada Lovelace");
    }

    #[test]
    fn sign_up_response_needing_verification() {
        let response: SignUpResponse =
            serde_json::from_str(r#"{"needs_verification":true}"#).expect("Failed to deserialize");
        let outcome = response
            .into_outcome(" Ada@Example.com ")
            .expect("outcome");
        match outcome {
            SignUpOutcome::NeedsVerification(pending) => {
                assert_eq!(pending.email(), "ada@example.com");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn sign_up_response_for_existing_account() {
        let response: SignUpResponse = serde_json::from_str(
            r#"{"should_redirect_to_sign_in":true,"message":"Account exists"}"#,
        )
        .expect("Failed to deserialize");
        assert_eq!(
            response.into_outcome("ada@example.com"),
            Ok(SignUpOutcome::AccountExists {
                message: Some("Account exists".to_string())
            })
        );
    }

    #[test]
    fn sign_up_response_signed_in() {
        let response = SignUpResponse {
            user: Some(user()),
            ..SignUpResponse::default()
        };
        assert_eq!(
            response.into_outcome("ada@example.com"),
            Ok(SignUpOutcome::SignedIn(user()))
        );
    }

    #[test]
    fn ambiguous_sign_up_responses_are_rejected() {
        let both = SignUpResponse {
            needs_verification: true,
            should_redirect_to_sign_in: true,
            ..SignUpResponse::default()
        };
        assert!(matches!(
            both.into_outcome("ada@example.com"),
            Err(AppError::Parse(_))
        ));
        assert!(matches!(
            SignUpResponse::default().into_outcome("ada@example.com"),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn verify_code_response_without_flag_is_success() {
        let response: VerifyCodeResponse =
            serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(response.into_result(), Ok(()));
    }

    #[test]
    fn verify_code_response_failure_carries_message() {
        let response: VerifyCodeResponse =
            serde_json::from_str(r#"{"success":false,"message":"Code expired"}"#)
                .expect("Failed to deserialize");
        assert_eq!(
            response.into_result(),
            Err(AppError::Rejected("Code expired".to_string()))
        );
    }

    #[test]
    fn requests_serialize_with_snake_case_fields() {
        let request = SignUpRequest {
            email: "ada@example.com".to_string(),
            password: "Abc123!".to_string(),
            full_name: "Ada".to_string(),
        };
        let json = serde_json::to_value(&request).expect("Failed to serialize");
        assert_eq!(json["full_name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
    }
}
