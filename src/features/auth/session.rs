//! Session store: the single source of truth for who is signed in.
//!
//! The store wraps a `watch` channel holding the current [`Session`]. Screens
//! read a snapshot or subscribe to changes; only the store's operations write.
//! One store is created at application start and handed to screens through
//! context, so tests can build their own around a fake backend.
//!
//! Flow Overview: the store starts in the loading state, `resolve` asks the
//! backend for the current session, and sign-in / sign-up / sign-out update the
//! user afterwards. A late answer to `resolve` never overrides a newer state.

use crate::{
    app_lib::AppError,
    features::auth::{
        backend::AuthBackend,
        password::SignUpForm,
        pending::normalize_email,
        types::{
            SendCodeRequest, SignInRequest, SignUpOutcome, SignUpRequest, User, VerifyCodeRequest,
        },
        verification::validate_code,
    },
};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
/// The client's belief about the current user's authentication status.
pub struct Session {
    pub user: Option<User>,
    /// True while the initial session check is in flight. `user` is not
    /// authoritative until this is false.
    pub is_loading: bool,
}

impl Session {
    #[must_use]
    pub const fn resolving() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    #[must_use]
    pub const fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.is_loading && self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::resolving()
    }
}

/// Shared handle to the session state and the backend that changes it.
pub struct SessionStore<B> {
    backend: Arc<B>,
    state: Arc<watch::Sender<Session>>,
}

impl<B> Clone for SessionStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
        }
    }
}

impl<B: AuthBackend> SessionStore<B> {
    /// Creates a store in the loading state; call [`Self::resolve`] next.
    pub fn new(backend: B) -> Self {
        Self::with_session(backend, Session::resolving())
    }

    /// Creates a store with a known session, skipping resolution.
    pub fn with_session(backend: B, session: Session) -> Self {
        let (state, _) = watch::channel(session);
        Self {
            backend: Arc::new(backend),
            state: Arc::new(state),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Receiver that is notified whenever the session changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Asks the backend for the current session and ends the loading phase.
    ///
    /// Backend failures resolve to signed out. The answer is ignored when the
    /// loading phase already ended, e.g. after a timeout or a sign-in.
    pub async fn resolve(&self) {
        let user = match self.backend.fetch_session().await {
            Ok(user) => user,
            Err(err) => {
                warn!("session check failed: {err}");
                None
            }
        };

        let signed_in = user.is_some();
        if self.complete_resolution(user) {
            debug!(signed_in, "session resolved");
        } else {
            debug!("late session check ignored");
        }
    }

    /// Ends a loading phase that is still pending as signed out.
    /// Returns `true` when the session changed.
    pub fn expire_resolution(&self) -> bool {
        let expired = self.complete_resolution(None);
        if expired {
            warn!("session check timed out; continuing signed out");
        }
        expired
    }

    fn complete_resolution(&self, user: Option<User>) -> bool {
        self.state.send_if_modified(|session| {
            if !session.is_loading {
                return false;
            }
            session.user = user;
            session.is_loading = false;
            true
        })
    }

    /// Signs in with email and password. On failure the session is untouched.
    pub async fn sign_in(&self, email: &str, password: SecretString) -> Result<User, AppError> {
        let email = normalize_email(email);
        if email.is_empty() || password.expose_secret().trim().is_empty() {
            return Err(AppError::validation("Email and password are required."));
        }

        let request = SignInRequest {
            email,
            password: password.expose_secret().to_string(),
        };
        let user = self.backend.sign_in(&request).await?;
        info!(user_id = %user.id, "signed in");
        self.state.send_replace(Session::authenticated(user.clone()));
        Ok(user)
    }

    /// Registers a new account after validating the form locally.
    ///
    /// Only [`SignUpOutcome::SignedIn`] changes the session; acting on the
    /// other outcomes is up to the caller.
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, AppError> {
        form.validate()?;

        let request = SignUpRequest {
            email: normalize_email(&form.email),
            password: form.password.expose_secret().to_string(),
            full_name: form.full_name.trim().to_string(),
        };
        let outcome = self.backend.sign_up(&request).await?;
        match &outcome {
            SignUpOutcome::SignedIn(user) => {
                info!(user_id = %user.id, "signed up and signed in");
                self.state.send_replace(Session::authenticated(user.clone()));
            }
            SignUpOutcome::NeedsVerification(_) => debug!("sign-up needs email verification"),
            SignUpOutcome::AccountExists { .. } => debug!("sign-up hit an existing account"),
        }
        Ok(outcome)
    }

    /// Clears the local session, then reports whether the backend agreed.
    pub async fn sign_out(&self) -> Result<(), AppError> {
        let result = self.backend.sign_out().await;
        self.state.send_replace(Session::anonymous());
        match &result {
            Ok(()) => info!("signed out"),
            Err(err) => warn!("sign-out request failed: {err}"),
        }
        result
    }

    /// Checks a six-digit code for `email`. Does not change the session.
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<(), AppError> {
        validate_code(code)?;
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::validation("Email is required."));
        }

        let request = VerifyCodeRequest {
            email,
            code: code.to_string(),
        };
        self.backend.verify_code(&request).await
    }

    /// Asks the backend to send a new code to `email`.
    pub async fn send_verification_code(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::validation("Email is required."));
        }
        self.backend
            .send_verification_code(&SendCodeRequest { email })
            .await
    }
}
