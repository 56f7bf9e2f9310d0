//! Dashboard route. Lists the vaults the signed-in user can open. Mounted
//! behind `RequireAuth`, so the session is resolved and present here.

use crate::{
    components::{Alert, AlertKind, AppShell, Spinner},
    features::{auth::state::use_auth, vaults::client},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let vaults = LocalResource::new(move || async move { client::list_vaults().await });
    let greeting = move || {
        auth.session.with(|session| {
            session
                .user
                .as_ref()
                .map(|user| format!("Welcome back, {}", user.display_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-slate-900">{greeting}</h1>
                    <p class="text-sm text-slate-500">"Your vaults"</p>
                </div>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match vaults.get() {
                        Some(Ok(list)) if list.is_empty() => {
                            view! {
                                <div class="rounded-lg border border-dashed border-slate-300 py-12 text-center">
                                    <h3 class="text-sm font-medium text-slate-900">"No vaults yet"</h3>
                                    <p class="mt-1 text-sm text-slate-500">
                                        "Vaults you create or join will show up here."
                                    </p>
                                </div>
                            }
                                .into_any()
                        }
                        Some(Ok(list)) => {
                            view! {
                                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                                    <For
                                        each=move || list.clone()
                                        key=|vault| vault.id.clone()
                                        children=|vault| {
                                            view! {
                                                <A
                                                    href=paths::vault(&vault.id)
                                                    {..}
                                                    class="block rounded-lg border border-slate-200 p-6 shadow-sm transition-colors hover:border-indigo-500"
                                                >
                                                    <h2 class="truncate text-lg font-medium text-slate-900">
                                                        {vault.name}
                                                    </h2>
                                                    <p class="mt-1 text-sm text-slate-500">
                                                        {vault.description.unwrap_or_default()}
                                                    </p>
                                                    {vault
                                                        .created_at
                                                        .map(|created| {
                                                            view! {
                                                                <p class="mt-2 text-xs text-slate-400">
                                                                    "Created " {created}
                                                                </p>
                                                            }
                                                        })}
                                                </A>
                                            }
                                        }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}
