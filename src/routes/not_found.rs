//! Fallback page for unknown routes.

use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            let _ = history.back();
        }
    };

    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <h1 class="text-7xl font-black text-slate-200 select-none">"404"</h1>
                <p class="mt-2 text-2xl font-bold text-slate-900">"Page not found"</p>
                <p class="mt-4 max-w-sm text-slate-500">
                    "The page you requested does not exist."
                </p>
                <div class="mt-6 flex flex-col items-center gap-4 sm:flex-row">
                    <A
                        href=paths::HOME
                        {..}
                        class="inline-flex items-center rounded-md bg-indigo-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-indigo-700"
                    >
                        "Go Home"
                    </A>
                    <button
                        type="button"
                        on:click=go_back
                        class="inline-flex items-center rounded-md border border-slate-300 px-5 py-2.5 text-sm font-medium text-slate-800 hover:bg-slate-100"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
