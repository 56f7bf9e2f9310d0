//! Route guard decisions for protected screens.
//!
//! The guard watches session snapshots and decides whether to show a loading
//! indicator, the protected content, or send the visitor to sign-in. It is
//! UX only; the backend enforces access on every request.

use crate::features::auth::session::Session;
use tracing::debug;

/// Performs navigation for the guard.
pub trait Navigator {
    /// Replaces the current location with `path`.
    fn navigate(&self, path: &str);
}

/// Navigates to `target` unless `current_path` is already there. Used after
/// sign-out, where a mounted guard may have redirected first. Returns `true`
/// when it navigated.
pub fn redirect_unless_at<N: Navigator>(navigator: &N, current_path: &str, target: &str) -> bool {
    if current_path == target {
        return false;
    }
    navigator.navigate(target);
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session not known yet; show a loading indicator.
    Resolving,
    /// No user; a redirect was issued and nothing is rendered.
    Redirecting,
    /// Signed in; render the protected content.
    Authorized,
}

impl GuardState {
    /// State a fresh guard would pick for `session`.
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        if session.is_loading {
            Self::Resolving
        } else if session.user.is_some() {
            Self::Authorized
        } else {
            Self::Redirecting
        }
    }
}

/// One guard instance per mounted protected screen.
pub struct RouteGuard<N> {
    navigator: N,
    redirect_to: String,
    state: GuardState,
}

impl<N: Navigator> RouteGuard<N> {
    pub fn new(navigator: N, redirect_to: impl Into<String>) -> Self {
        Self {
            navigator,
            redirect_to: redirect_to.into(),
            state: GuardState::Resolving,
        }
    }

    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Feeds the latest session snapshot to the guard.
    ///
    /// `Redirecting` is final, so navigation happens at most once per guard,
    /// and never while the session is still loading.
    pub fn observe(&mut self, session: &Session) -> GuardState {
        if self.state == GuardState::Redirecting {
            return self.state;
        }

        let next = GuardState::for_session(session);
        if next == GuardState::Redirecting {
            debug!(to = %self.redirect_to, "no session; redirecting");
            self.navigator.navigate(&self.redirect_to);
        }
        self.state = next;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::User;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        visited: Rc<RefCell<Vec<String>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    fn guard() -> (RouteGuard<RecordingNavigator>, Rc<RefCell<Vec<String>>>) {
        let navigator = RecordingNavigator::default();
        let visited = Rc::clone(&navigator.visited);
        (RouteGuard::new(navigator, "/sign-in"), visited)
    }

    fn signed_in() -> Session {
        Session::authenticated(User {
            id: "u_1".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        })
    }

    #[test]
    fn loading_session_never_redirects() {
        let (mut guard, visited) = guard();

        assert_eq!(guard.observe(&Session::resolving()), GuardState::Resolving);
        assert_eq!(guard.observe(&Session::resolving()), GuardState::Resolving);

        assert!(visited.borrow().is_empty());
    }

    #[test]
    fn resolved_without_user_redirects_once() {
        let (mut guard, visited) = guard();
        guard.observe(&Session::resolving());

        assert_eq!(guard.observe(&Session::anonymous()), GuardState::Redirecting);
        assert_eq!(guard.observe(&Session::anonymous()), GuardState::Redirecting);
        assert_eq!(guard.observe(&signed_in()), GuardState::Redirecting);

        assert_eq!(*visited.borrow(), vec!["/sign-in".to_string()]);
    }

    #[test]
    fn signed_in_user_is_authorized() {
        let (mut guard, visited) = guard();

        assert_eq!(guard.observe(&Session::resolving()), GuardState::Resolving);
        assert_eq!(guard.observe(&signed_in()), GuardState::Authorized);

        assert!(visited.borrow().is_empty());
    }

    #[test]
    fn sign_out_while_mounted_redirects() {
        let (mut guard, visited) = guard();
        guard.observe(&signed_in());

        assert_eq!(guard.observe(&Session::anonymous()), GuardState::Redirecting);

        assert_eq!(visited.borrow().len(), 1);
    }

    #[test]
    fn sign_out_after_guard_redirect_navigates_once() {
        let (mut guard, visited) = guard();
        guard.observe(&signed_in());
        guard.observe(&Session::anonymous());
        let navigator = RecordingNavigator {
            visited: Rc::clone(&visited),
        };

        assert!(!redirect_unless_at(&navigator, "/sign-in", "/sign-in"));
        assert_eq!(*visited.borrow(), vec!["/sign-in".to_string()]);

        assert!(redirect_unless_at(&navigator, "/", "/sign-in"));
        assert_eq!(visited.borrow().len(), 2);
    }

    #[test]
    fn for_session_matches_fresh_guard() {
        assert_eq!(GuardState::for_session(&Session::resolving()), GuardState::Resolving);
        assert_eq!(GuardState::for_session(&Session::anonymous()), GuardState::Redirecting);
        assert_eq!(GuardState::for_session(&signed_in()), GuardState::Authorized);
    }
}
