//! Sign-in route. Credentials go straight to the session store, which sets the
//! user on success; the form only keeps the error to show.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::auth::state::use_auth,
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};
use secrecy::SecretString;

#[derive(Clone)]
struct SignInInput {
    email: String,
    password: SecretString,
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let sign_in_action = Action::new_local(move |input: &SignInInput| {
        let input = input.clone();
        let store = auth.store();
        async move { store.sign_in(&input.email, input.password).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = sign_in_action.value().get() {
            set_error.set(Some(err));
        }
    });

    // Covers both a fresh sign-in and a visitor who already has a session.
    Effect::new(move |_| {
        if auth.is_authenticated.get() {
            navigate(
                paths::DASHBOARD,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::validation(
                "Email and password are required.",
            )));
            return;
        }

        sign_in_action.dispatch(SignInInput {
            email: email_value,
            password: SecretString::from(password_value),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-slate-900">"Sign in"</h1>
                <div>
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="block w-full rounded-md border border-slate-300 bg-slate-50 p-2.5 text-sm text-slate-900 focus:border-indigo-500 focus:ring-indigo-500"
                        autocomplete="email"
                        placeholder="name@example.com"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="block w-full rounded-md border border-slate-300 bg-slate-50 p-2.5 text-sm text-slate-900 focus:border-indigo-500 focus:ring-indigo-500"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=sign_in_action.pending()>
                    "Sign in"
                </Button>
                {move || {
                    sign_in_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() dismissible=true /> })
                }}
                <p class="text-sm text-slate-500">
                    "No account yet? "
                    <A href=paths::SIGN_UP {..} class="font-medium text-indigo-700 hover:underline">
                        "Create one"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
