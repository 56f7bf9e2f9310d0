//! Sign-up route. The form is validated locally with a live password
//! checklist; the submit button stays disabled until every rule passes.
//!
//! Flow Overview: submit the form to the session store, then follow the
//! outcome: verify the email, go to sign-in for an existing account, or land
//! on the dashboard when the account is signed in right away.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::auth::{
        password::{PasswordChecks, SignUpForm},
        state::use_auth,
        types::SignUpOutcome,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};
use secrecy::SecretString;

const INPUT_CLASS: &str = "w-full rounded-md border border-slate-300 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-indigo-500 focus:ring-2 focus:ring-indigo-200";

/// Renders the sign-up form and routes the visitor by outcome.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let build_form = move || SignUpForm {
        full_name: full_name.get(),
        email: email.get(),
        password: SecretString::from(password.get()),
        confirm_password: SecretString::from(confirm_password.get()),
    };
    let checks = Memo::new(move |_| PasswordChecks::evaluate(&password.get()));
    let form_valid = Memo::new(move |_| build_form().can_submit());

    let sign_up_action = Action::new_local(move |form: &SignUpForm| {
        let form = form.clone();
        let store = auth.store();
        async move { store.sign_up(&form).await }
    });

    Effect::new(move |_| {
        let Some(result) = sign_up_action.value().get() else {
            return;
        };
        match result {
            Ok(SignUpOutcome::NeedsVerification(pending)) => {
                auth.set_pending(pending);
                navigate(paths::VERIFY_EMAIL, NavigateOptions::default());
            }
            Ok(SignUpOutcome::AccountExists { .. }) => {
                navigate(paths::SIGN_IN, NavigateOptions::default());
            }
            Ok(SignUpOutcome::SignedIn(_)) => {
                navigate(paths::DASHBOARD, NavigateOptions::default());
            }
            Err(err) => set_error.set(Some(err)),
        }
    });

    let submit_disabled =
        Signal::derive(move || !form_valid.get() || sign_up_action.pending().get());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let form = build_form();
        if let Err(err) = form.validate() {
            set_error.set(Some(err));
            return;
        }
        sign_up_action.dispatch(form);
    };

    view! {
        <AppShell>
            <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
                <form
                    class="w-full max-w-md rounded-xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8"
                    on:submit=on_submit
                >
                    <h1 class="text-2xl font-semibold text-slate-900">"Create account"</h1>
                    <div class="mt-6 space-y-4">
                        <div>
                            <label class="block mb-2 text-sm font-medium text-slate-700" for="full_name">
                                "Full name"
                            </label>
                            <input
                                id="full_name"
                                type="text"
                                autofocus
                                class=INPUT_CLASS
                                autocomplete="name"
                                required
                                on:input=move |event| set_full_name.set(event_target_value(&event))
                            />
                        </div>
                        <div>
                            <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                class=INPUT_CLASS
                                autocomplete="email"
                                inputmode="email"
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
                                class=INPUT_CLASS
                                autocomplete="new-password"
                                required
                                on:input=move |event| set_password.set(event_target_value(&event))
                            />
                            <ul class="mt-3 space-y-1 text-xs" aria-live="polite">
                                {move || {
                                    checks
                                        .get()
                                        .rules()
                                        .into_iter()
                                        .map(|(label, met)| {
                                            view! {
                                                <li
                                                    class="flex items-center gap-2"
                                                    class:text-teal-700=met
                                                    class:text-slate-400=!met
                                                >
                                                    <span aria-hidden="true">{if met { "✓" } else { "•" }}</span>
                                                    {label}
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </div>
                        <div>
                            <label class="block mb-2 text-sm font-medium text-slate-700" for="confirm_password">
                                "Confirm password"
                            </label>
                            <input
                                id="confirm_password"
                                type="password"
                                class=INPUT_CLASS
                                autocomplete="new-password"
                                required
                                on:input=move |event| {
                                    set_confirm_password.set(event_target_value(&event));
                                }
                            />
                        </div>
                    </div>
                    <div class="mt-6">
                        <Button button_type="submit" disabled=submit_disabled>
                            "Create account"
                        </Button>
                    </div>
                    {move || {
                        sign_up_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=err.user_message() dismissible=true />
                                    </div>
                                }
                            })
                    }}
                    <p class="mt-6 text-sm text-slate-500">
                        "Already registered? "
                        <A href=paths::SIGN_IN {..} class="font-medium text-indigo-700 hover:underline">
                            "Sign in"
                        </A>
                    </p>
                </form>
            </div>
        </AppShell>
    }
}
