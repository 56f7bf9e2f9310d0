//! Auth session state and context for the frontend. The provider owns the one
//! session store, mirrors its watch channel into a signal for views, and
//! resolves the session once on mount. Only non-sensitive metadata is kept in
//! memory; the session itself lives in an `HttpOnly` cookie.

use crate::{
    app_lib::{config::AppConfig, timers::scoped_timeout},
    features::auth::{
        client::HttpAuthBackend,
        pending::{BrowserSessionStorage, PendingSlot, PendingVerification},
        session::{Session, SessionStore},
    },
};
use leptos::{prelude::*, task::spawn_local};

/// Store type used by the running application.
pub type AppSessionStore = SessionStore<HttpAuthBackend>;

/// Pending verification slot backed by `sessionStorage`.
pub type AppPendingSlot = PendingSlot<BrowserSessionStorage>;

#[derive(Clone, Copy)]
/// Auth context shared through Leptos.
pub struct AuthContext {
    /// Mirror of the store's current session. Written only by the provider.
    pub session: RwSignal<Session>,
    pub is_loading: Signal<bool>,
    pub is_authenticated: Signal<bool>,
    /// Email waiting for verification, handed from sign-up to the verify screen.
    pending: StoredValue<AppPendingSlot>,
    store: StoredValue<AppSessionStore>,
}

impl AuthContext {
    fn new(store: AppSessionStore) -> Self {
        let session = RwSignal::new(store.snapshot());
        let is_loading = Signal::derive(move || session.with(|session| session.is_loading));
        let is_authenticated = Signal::derive(move || session.with(Session::is_authenticated));
        Self {
            session,
            is_loading,
            is_authenticated,
            pending: StoredValue::new(PendingSlot::new(BrowserSessionStorage)),
            store: StoredValue::new(store),
        }
    }

    /// Handle to the session store; clones share the same state.
    pub fn store(&self) -> AppSessionStore {
        self.store.get_value()
    }

    /// Records the pending verification and mirrors it for reloads.
    pub fn set_pending(&self, record: PendingVerification) {
        self.pending.update_value(|slot| slot.set(record));
    }

    /// Runs `f` on the pending slot. `None` once the provider is gone.
    pub fn with_pending<U>(&self, f: impl FnOnce(&mut AppPendingSlot) -> U) -> Option<U> {
        self.pending.try_update_value(f)
    }
}

/// Provides auth context and resolves the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = AppConfig::load();

    let store = SessionStore::new(HttpAuthBackend);
    let auth = AuthContext::new(store.clone());
    provide_context(auth);

    let mut updates = store.subscribe();
    let session = auth.session;
    spawn_local(async move {
        while updates.changed().await.is_ok() {
            let next = updates.borrow_and_update().clone();
            if session.try_update(|current| *current = next).is_none() {
                break;
            }
        }
    });

    let resolver = store.clone();
    spawn_local(async move {
        resolver.resolve().await;
    });

    scoped_timeout(config.session_timeout_ms, move || {
        store.expire_resolution();
    });

    view! { {children()} }
}

/// Returns the auth context provided by [`AuthProvider`].
///
/// Outside a provider this falls back to a signed-out context with its own
/// store, so stray components render instead of panicking.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        AuthContext::new(SessionStore::with_session(
            HttpAuthBackend,
            Session::anonymous(),
        ))
    })
}
