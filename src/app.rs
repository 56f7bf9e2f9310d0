use crate::{features::auth::state::AuthProvider, routes::AppRoutes};
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component: the router, then one session store shared by every route.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </Router>
    }
}
