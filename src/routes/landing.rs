//! Public landing page. Signed-in visitors get a shortcut to the dashboard.

use crate::{components::AppShell, features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

const PRIMARY_LINK: &str =
    "inline-flex items-center rounded-md bg-indigo-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-indigo-700";
const SECONDARY_LINK: &str =
    "inline-flex items-center rounded-md border border-slate-300 px-5 py-2.5 text-sm font-medium text-slate-800 hover:bg-slate-100";

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <section class="mx-auto max-w-2xl py-16 text-center">
                <h1 class="text-4xl font-bold tracking-tight text-slate-900">"MirrorX"</h1>
                <p class="mt-4 text-lg text-slate-600">
                    "Keep operations, personas, pipelines and resources together in shared vaults."
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=|| {
                            view! {
                                <A href=paths::SIGN_UP {..} class=PRIMARY_LINK>
                                    "Get started"
                                </A>
                                <A href=paths::SIGN_IN {..} class=SECONDARY_LINK>
                                    "Sign in"
                                </A>
                            }
                        }
                    >
                        <A href=paths::DASHBOARD {..} class=PRIMARY_LINK>
                            "Open dashboard"
                        </A>
                    </Show>
                </div>
            </section>
        </AppShell>
    }
}
