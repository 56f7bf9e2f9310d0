//! Auth feature module covering session resolution, route gating, sign-up and
//! email verification. It keeps authentication logic out of the UI: the
//! session store, guard decisions and verification flow are plain Rust and
//! only the client, provider and wrapper component touch the browser. Never
//! log passwords or verification codes.
//!
//! Flow Overview: The provider resolves the session from `/v1/auth/session` on
//! mount. Sign-in and sign-up update the store; a sign-up that needs
//! verification hands the email to the verify screen, which submits a six-digit
//! code and redirects to sign-in once accepted.

pub mod backend;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod guard;
#[cfg(target_arch = "wasm32")]
mod guards;
pub mod password;
pub mod pending;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub mod types;
pub mod verification;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RequireAuth, RouterNavigator};
