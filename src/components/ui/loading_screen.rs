//! Neutral placeholder shown while the session is still being resolved.
//! It must not reveal whether the visitor is signed in.

use super::Spinner;
use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="flex min-h-[40vh] flex-col items-center justify-center gap-3 text-sm text-slate-500">
            <Spinner label="Checking your session" />
            <p>"Loading..."</p>
        </div>
    }
}
