mod dashboard;
mod health;
mod landing;
mod not_found;
mod sign_in;
mod sign_up;
mod vault_detail;
mod verify_email;

pub(crate) use dashboard::DashboardPage;
pub(crate) use health::HealthPage;
pub(crate) use landing::LandingPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use sign_in::SignInPage;
pub(crate) use sign_up::SignUpPage;
pub(crate) use vault_detail::VaultDetailPage;
pub(crate) use verify_email::VerifyEmailPage;

use crate::features::auth::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Client-side paths used for links and redirects.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const SIGN_IN: &str = "/sign-in";
    pub const SIGN_UP: &str = "/sign-up";
    pub const VERIFY_EMAIL: &str = "/verify-email";
    pub const DASHBOARD: &str = "/dashboard";

    pub fn vault(id: &str) -> String {
        format!("/vaults/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/sign-in") view=SignInPage />
            <Route path=path!("/sign-up") view=SignUpPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route
                path=path!("/dashboard")
                view=|| view! { <RequireAuth><DashboardPage /></RequireAuth> }
            />
            <Route
                path=path!("/vaults/:id")
                view=|| view! { <RequireAuth><VaultDetailPage /></RequireAuth> }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
