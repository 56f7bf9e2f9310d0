//! Client wrappers for the MirrorX auth API endpoints. Every call carries the
//! session cookie; request bodies hold passwords or codes and are never logged.

use crate::{
    app_lib::{
        AppError, get_optional_json_with_credentials, post_empty_with_credentials,
        post_json_with_credentials, post_json_with_credentials_optional,
        post_json_with_credentials_response,
    },
    features::auth::{
        backend::AuthBackend,
        types::{
            SendCodeRequest, SignInRequest, SignUpOutcome, SignUpRequest, SignUpResponse, User,
            VerifyCodeRequest, VerifyCodeResponse,
        },
    },
};

#[derive(Clone, Copy, Debug, Default)]
/// [`AuthBackend`] that talks to the API over HTTP.
pub struct HttpAuthBackend;

impl AuthBackend for HttpAuthBackend {
    /// Returns `None` when the session is missing or expired.
    async fn fetch_session(&self) -> Result<Option<User>, AppError> {
        get_optional_json_with_credentials("/v1/auth/session").await
    }

    /// The server sets the `HttpOnly` session cookie on success.
    async fn sign_in(&self, request: &SignInRequest) -> Result<User, AppError> {
        post_json_with_credentials_response("/v1/auth/sign-in", request).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AppError> {
        let response: SignUpResponse =
            post_json_with_credentials_response("/v1/auth/sign-up", request).await?;
        response.into_outcome(&request.email)
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        post_empty_with_credentials("/v1/auth/sign-out").await
    }

    /// An empty success body counts as accepted.
    async fn verify_code(&self, request: &VerifyCodeRequest) -> Result<(), AppError> {
        let response: Option<VerifyCodeResponse> =
            post_json_with_credentials_optional("/v1/auth/verify-code", request).await?;
        response.map_or(Ok(()), VerifyCodeResponse::into_result)
    }

    async fn send_verification_code(&self, request: &SendCodeRequest) -> Result<(), AppError> {
        post_json_with_credentials("/v1/auth/send-code", request).await
    }
}
