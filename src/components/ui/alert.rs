//! Inline banners for the outcome of a user action. Messages come from
//! `AppError::user_message` or fixed copy and never include passwords or codes.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    const fn classes(self) -> &'static str {
        match self {
            Self::Error => "rounded-md border border-rose-300 bg-rose-50 px-4 py-3 text-sm text-rose-800",
            Self::Success => {
                "rounded-md border border-teal-300 bg-teal-50 px-4 py-3 text-sm text-teal-800"
            }
            Self::Info => {
                "rounded-md border border-slate-300 bg-slate-50 px-4 py-3 text-sm text-slate-700"
            }
        }
    }

    /// Errors interrupt screen readers; the rest wait their turn.
    const fn live(self) -> &'static str {
        match self {
            Self::Error => "assertive",
            Self::Success | Self::Info => "polite",
        }
    }
}

/// Renders a banner. A `dismissible` banner hides itself until the owner
/// renders a new one.
#[component]
pub fn Alert(
    kind: AlertKind,
    #[prop(into)] message: String,
    #[prop(optional)] dismissible: bool,
) -> impl IntoView {
    let visible = RwSignal::new(true);

    move || {
        visible.get().then(|| {
            view! {
                <div
                    class=format!("flex items-start justify-between gap-3 {}", kind.classes())
                    role="alert"
                    aria-live=kind.live()
                >
                    <span>{message.clone()}</span>
                    {dismissible
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="text-current opacity-60 hover:opacity-100"
                                    aria-label="Dismiss"
                                    on:click=move |_| visible.set(false)
                                >
                                    "×"
                                </button>
                            }
                        })}
                </div>
            }
        })
    }
}
