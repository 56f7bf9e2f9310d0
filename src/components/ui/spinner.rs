use leptos::prelude::*;

/// Indeterminate progress ring. `label` is announced to screen readers.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading".to_string());
    view! {
        <div
            class="inline-block h-6 w-6 animate-spin rounded-full border-[3px] border-indigo-200 border-t-indigo-600"
            role="status"
            aria-live="polite"
            aria-label=label
        ></div>
    }
}
