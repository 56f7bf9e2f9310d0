//! Shared layout wrapper with the header and content container. The header
//! switches between sign-in/sign-up links and a sign-out button as the session
//! changes. Navigation remains client-side; the API enforces access control.

use crate::{
    features::auth::{RouterNavigator, guard::redirect_unless_at, state::use_auth},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};

const NAV_LINK: &str = "block py-2 px-3 text-slate-800 rounded hover:bg-slate-100 md:hover:bg-transparent md:hover:text-indigo-700 md:p-0";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let is_loading = auth.is_loading;
    let pathname = use_location().pathname;
    let on_sign_in = move || pathname.get() == paths::SIGN_IN;
    let navigator = RouterNavigator::new(use_navigate());

    let sign_out = Action::new_local(move |_: &()| {
        let store = auth.store();
        async move { store.sign_out().await }
    });

    // The store clears the session even when the request fails. A guard on
    // the current page may already have replaced the location with sign-in.
    Effect::new(move |_| {
        if sign_out.value().get().is_some() {
            let current = pathname.get_untracked();
            redirect_unless_at(&navigator, &current, paths::SIGN_IN);
        }
    });

    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <header class="border-b border-slate-200">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center gap-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-lg font-semibold tracking-tight text-slate-900">
                            "MirrorX"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-slate-500 rounded-lg md:hidden hover:bg-slate-100"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        "☰"
                    </button>
                    <nav
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col gap-2 p-4 md:p-0 md:flex-row md:gap-8">
                            <Show when=move || !is_loading.get()>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <li>
                                                <Show
                                                    when=on_sign_in
                                                    fallback=move || {
                                                        view! {
                                                            <A
                                                                href=paths::SIGN_IN
                                                                {..}
                                                                class=NAV_LINK
                                                                on:click=move |_| set_menu_open.set(false)
                                                            >
                                                                "Sign In"
                                                            </A>
                                                        }
                                                    }
                                                >
                                                    <A
                                                        href=paths::SIGN_UP
                                                        {..}
                                                        class=NAV_LINK
                                                        on:click=move |_| set_menu_open.set(false)
                                                    >
                                                        "Sign Up"
                                                    </A>
                                                </Show>
                                            </li>
                                        }
                                    }
                                >
                                    <li>
                                        <A
                                            href=paths::DASHBOARD
                                            {..}
                                            class=NAV_LINK
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Dashboard"
                                        </A>
                                    </li>
                                    <li>
                                        <button
                                            type="button"
                                            class=NAV_LINK
                                            disabled=move || sign_out.pending().get()
                                            on:click=move |_| {
                                                sign_out.dispatch(());
                                                set_menu_open.set(false);
                                            }
                                        >
                                            "Sign Out"
                                        </button>
                                    </li>
                                </Show>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
