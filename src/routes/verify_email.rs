//! Email verification route. Shows six single-digit inputs for the code sent at
//! sign-up, with paste and backspace navigation, a resend button gated by a
//! cooldown, and a delayed redirect to sign-in once the code is accepted.
//! Accepting a code removes the pending record.
//!
//! All decisions live in `VerificationFlow`; this module only wires DOM events
//! and timers to it. Codes are never logged.

use crate::{
    app_lib::{
        config::AppConfig,
        timers::{arm, scoped_interval, timeout_slot},
    },
    components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner},
    features::auth::{
        RouterNavigator,
        pending::PendingVerification,
        state::use_auth,
        verification::{CODE_LENGTH, VerificationFlow, VerifyEntry, VerifyPhase},
    },
    routes::paths,
};
use leptos::{
    ev::{ClipboardEvent, Event, KeyboardEvent, SubmitEvent},
    html::Input,
    prelude::*,
};
use leptos_router::hooks::use_navigate;

type Slots = [NodeRef<Input>; CODE_LENGTH];

/// Redirects to sign-up when no verification is pending for this tab.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let navigator = RouterNavigator::new(use_navigate());
    let entry = auth
        .with_pending(VerifyEntry::open)
        .unwrap_or(VerifyEntry::NoPendingRecord);

    match entry {
        VerifyEntry::Enter(pending) => view! {
            <AppShell>
                <VerifyCodeForm pending=pending />
            </AppShell>
        }
        .into_any(),
        VerifyEntry::NoPendingRecord => {
            Effect::new(move |_| {
                VerifyEntry::NoPendingRecord.redirect_if_missing(&navigator, paths::SIGN_UP);
            });
            ().into_any()
        }
    }
}

#[component]
fn VerifyCodeForm(pending: PendingVerification) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let config = AppConfig::load();
    let flow = RwSignal::new(VerificationFlow::new(&pending, config.resend_cooldown_secs));
    let slots: Slots = std::array::from_fn(|_| NodeRef::new());
    let redirect = timeout_slot();

    scoped_interval(1_000, move || {
        flow.try_update(VerificationFlow::tick);
    });

    Effect::new(move |_| {
        if let Some(first) = slots[0].get() {
            let _ = first.focus();
        }
    });

    let verify_action = Action::new_local(move |code: &String| {
        let code = code.clone();
        let email = flow.with_untracked(|flow| flow.email().to_string());
        let store = auth.store();
        async move { store.verify_code(&email, &code).await }
    });

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        let store = auth.store();
        async move { store.send_verification_code(&email).await }
    });

    let redirect_delay = config.verified_redirect_delay_ms;
    Effect::new(move |_| {
        let Some(result) = verify_action.value().get() else {
            return;
        };
        let accepted = auth
            .with_pending(|pending| flow.try_update(|flow| flow.settle_submit(result, pending)))
            .flatten()
            .unwrap_or(false);
        if accepted {
            let navigator = RouterNavigator::new(navigate.clone());
            arm(redirect, redirect_delay, move || {
                flow.try_with_untracked(|flow| {
                    flow.redirect_if_verified(&navigator, paths::SIGN_IN);
                });
            });
        } else {
            focus_slot(&slots, 0);
        }
    });

    Effect::new(move |_| {
        let Some(result) = resend_action.value().get() else {
            return;
        };
        if flow.try_update(|flow| flow.finish_resend(result)) == Some(true) {
            focus_slot(&slots, 0);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(code) = flow.try_update(VerificationFlow::begin_submit).flatten() {
            verify_action.dispatch(code);
        }
    };

    let on_resend = move |_| {
        if let Some(email) = flow.try_update(VerificationFlow::begin_resend).flatten() {
            resend_action.dispatch(email);
        }
    };

    let inputs_locked = Signal::derive(move || flow.with(VerificationFlow::inputs_locked));
    let resend_disabled = Signal::derive(move || !flow.with(VerificationFlow::can_resend));
    let is_verified = move || flow.with(|flow| flow.phase() == VerifyPhase::Verified);

    let slot_inputs = (0..CODE_LENGTH)
        .map(|index| {
            let autocomplete = if index == 0 { "one-time-code" } else { "off" };
            let on_input = move |event: Event| {
                let value = event_target_value(&event);
                let next = flow.try_update(|flow| flow.enter_digit(index, &value)).flatten();
                // Autofill may have filled every slot from this one input.
                sync_slots(&slots, flow);
                if let Some(next) = next {
                    focus_slot(&slots, next);
                }
            };
            let on_keydown = move |event: KeyboardEvent| {
                if event.key() != "Backspace" {
                    return;
                }
                if let Some(previous) = flow.try_update(|flow| flow.backspace(index)).flatten() {
                    event.prevent_default();
                    focus_slot(&slots, previous);
                }
            };
            let on_paste = move |event: ClipboardEvent| {
                event.prevent_default();
                let Some(text) = event
                    .clipboard_data()
                    .and_then(|data| data.get_data("text").ok())
                else {
                    return;
                };
                if let Some(next) = flow.try_update(|flow| flow.paste(&text)).flatten() {
                    sync_slots(&slots, flow);
                    focus_slot(&slots, next);
                }
            };

            view! {
                <input
                    node_ref=slots[index]
                    type="text"
                    inputmode="numeric"
                    autocomplete=autocomplete
                    aria-label=format!("Digit {}", index + 1)
                    class="h-12 w-11 rounded-md border border-slate-300 bg-slate-50 text-center text-lg font-semibold text-slate-900 focus:border-indigo-500 focus:ring-2 focus:ring-indigo-200"
                    prop:value=move || digit_text(flow, index)
                    disabled=move || inputs_locked.get()
                    on:input=on_input
                    on:keydown=on_keydown
                    on:paste=on_paste
                    on:focus=move |_| {
                        if let Some(input) = slots[index].get_untracked() {
                            input.select();
                        }
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="max-w-lg mx-auto">
            <h1 class="text-2xl font-semibold text-slate-900">"Check your email"</h1>
            <p class="mt-2 text-sm text-slate-600">
                "We sent a 6-digit code to "
                <span class="font-medium text-slate-900">
                    {move || flow.with(|flow| flow.email().to_string())}
                </span>
                "."
            </p>
            <form class="mt-6 space-y-5" on:submit=on_submit>
                <div class="flex justify-between gap-2">{slot_inputs}</div>
                <Button button_type="submit" disabled=inputs_locked>
                    "Verify email"
                </Button>
            </form>
            {move || {
                verify_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })
            }}
            {move || {
                flow.with(|flow| flow.error().map(str::to_string))
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
            {move || {
                flow.with(|flow| flow.notice().map(str::to_string))
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Success message=message />
                            </div>
                        }
                    })
            }}
            <Show when=move || !is_verified()>
                <div class="mt-8 border-t border-slate-200 pt-5">
                    <p class="text-sm text-slate-600">"Didn't get a code?"</p>
                    <div class="mt-3">
                        <Button
                            variant=ButtonVariant::Secondary
                            disabled=resend_disabled
                            on:click=on_resend
                        >
                            {move || match flow.with(VerificationFlow::resend_cooldown) {
                                0 => "Resend code".to_string(),
                                seconds => format!("Resend code in {seconds}s"),
                            }}
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn digit_text(flow: RwSignal<VerificationFlow>, index: usize) -> String {
    flow.with(|flow| flow.entry().digit(index).map(String::from).unwrap_or_default())
}

/// Writes each slot's current digit back to its element. Input events that
/// the flow rejects would otherwise leave the typed character on screen.
fn sync_slots(slots: &Slots, flow: RwSignal<VerificationFlow>) {
    for (index, slot) in slots.iter().enumerate() {
        if let Some(input) = slot.get_untracked() {
            let text = flow.with_untracked(|flow| {
                flow.entry().digit(index).map(String::from).unwrap_or_default()
            });
            input.set_value(&text);
        }
    }
}

fn focus_slot(slots: &Slots, index: usize) {
    if let Some(input) = slots.get(index).and_then(|slot| slot.get_untracked()) {
        let _ = input.focus();
    }
}
