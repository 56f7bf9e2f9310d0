//! Shared frontend utilities for API access, configuration, errors, logging,
//! timers and build metadata.
//!
//! ## Session & Verification Flows
//!
//! ### Session resolution
//!
//! 1. **Start:** The app creates a single session store in the loading state.
//! 2. **Resolve:** The store asks `/v1/auth/session` who is signed in. A
//!    configured timeout ends the loading phase as signed out if the call hangs.
//! 3. **Guard:** Protected routes render a placeholder until the session is
//!    resolved, then either show the screen or redirect to `/sign-in`.
//!
//! ### Sign-up & Email Verification
//!
//! 1. **Sign-up:** The form is validated locally, then POSTed to `/v1/auth/sign-up`.
//! 2. **Hand-off:** When the account needs verification, the email is passed to
//!    the verification screen (and mirrored to `sessionStorage`).
//! 3. **Verify:** The six-digit code is POSTed to `/v1/auth/verify-code`; a new
//!    code can be requested from `/v1/auth/send-code` after a cooldown.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids duplicated
//! logic in routes and features. These utilities do not handle secrets directly, but
//! callers must still avoid logging sensitive data.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod config;
pub mod errors;
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub(crate) mod timers;

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    get_json_with_credentials, get_optional_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials, post_json_with_credentials_optional,
    post_json_with_credentials_response,
};
pub use errors::AppError;

/// Joins a base URL and a path with exactly one slash between them.
/// An empty base keeps the path relative to the current origin.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("https://api.mirrorx.app/", "/v1/vaults"),
            "https://api.mirrorx.app/v1/vaults"
        );
        assert_eq!(
            join_url("https://api.mirrorx.app", "v1/vaults"),
            "https://api.mirrorx.app/v1/vaults"
        );
        assert_eq!(join_url("  ", "/v1/vaults"), "/v1/vaults");
    }

    #[test]
    fn git_commit_hash_is_never_empty() {
        assert!(!GIT_COMMIT_HASH.is_empty());
    }
}
