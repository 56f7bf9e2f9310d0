//! Seam between the session store and the authentication service. The store
//! only talks to the service through this trait, so tests can swap in a fake
//! and the HTTP client stays out of the state logic.

use crate::{
    app_lib::AppError,
    features::auth::types::{
        SendCodeRequest, SignInRequest, SignUpOutcome, SignUpRequest, User, VerifyCodeRequest,
    },
};

/// Authentication operations provided by the backend.
///
/// Futures are not required to be `Send`: the client runs on the browser's
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Returns the signed-in user, or `None` when there is no session.
    async fn fetch_session(&self) -> Result<Option<User>, AppError>;

    async fn sign_in(&self, request: &SignInRequest) -> Result<User, AppError>;

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AppError>;

    async fn sign_out(&self) -> Result<(), AppError>;

    async fn verify_code(&self, request: &VerifyCodeRequest) -> Result<(), AppError>;

    async fn send_verification_code(&self, request: &SendCodeRequest) -> Result<(), AppError>;
}
