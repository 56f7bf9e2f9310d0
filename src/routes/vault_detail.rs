//! Vault detail route with one tab per collection. The selected tab lives in
//! the `?tab=` query so it survives reloads and can be linked; switching tabs
//! refetches.

use crate::{
    components::{Alert, AlertKind, AppShell, Spinner},
    features::vaults::{
        client,
        types::{VaultItem, VaultResourceKind},
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_navigate, use_params_map, use_query_map},
};

#[component]
pub fn VaultDetailPage() -> impl IntoView {
    let params = use_params_map();
    let vault_id = move || params.with(|params| params.get("id").unwrap_or_default());
    let query = use_query_map();
    let navigate = use_navigate();
    let tab = Memo::new(move |_| {
        query.with(|query| {
            query
                .get("tab")
                .and_then(|value| VaultResourceKind::from_segment(&value))
                .unwrap_or_default()
        })
    });
    let select_tab = move |kind: VaultResourceKind| {
        let id = params.with_untracked(|params| params.get("id").unwrap_or_default());
        let href = format!("{}?tab={}", paths::vault(&id), kind.segment());
        navigate(
            &href,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    };

    let vault = LocalResource::new(move || {
        let id = vault_id();
        async move { client::get_vault(&id).await }
    });
    let items = LocalResource::new(move || {
        let id = vault_id();
        let kind = tab.get();
        async move { client::list_items(&id, kind).await }
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match vault.get() {
                        Some(Ok(vault)) => view! {
                            <div class="space-y-1">
                                <h1 class="text-2xl font-semibold text-slate-900">{vault.name}</h1>
                                <p class="text-sm text-slate-500">
                                    {vault.description.unwrap_or_default()}
                                </p>
                            </div>
                        }
                        .into_any(),
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
                <div class="flex gap-6 border-b border-slate-200" role="tablist">
                    {VaultResourceKind::ALL
                        .into_iter()
                        .map(|kind| {
                            let select_tab = select_tab.clone();
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="-mb-px border-b-2 px-1 pb-3 text-sm font-medium"
                                    class:border-indigo-600=move || tab.get() == kind
                                    class:text-indigo-700=move || tab.get() == kind
                                    class:border-transparent=move || tab.get() != kind
                                    class:text-slate-500=move || tab.get() != kind
                                    aria-selected=move || (tab.get() == kind).to_string()
                                    on:click=move |_| select_tab(kind)
                                >
                                    {kind.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match items.get() {
                        Some(Ok(list)) if list.is_empty() => view! {
                            <p class="py-8 text-center text-sm text-slate-500">
                                {format!("No {} in this vault.", tab.get().segment())}
                            </p>
                        }
                        .into_any(),
                        Some(Ok(list)) => view! { <ItemList items=list /> }.into_any(),
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

#[component]
fn ItemList(items: Vec<VaultItem>) -> impl IntoView {
    view! {
        <ul class="divide-y divide-slate-200 rounded-lg border border-slate-200">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start justify-between gap-4 p-4">
                            <div>
                                <p class="text-sm font-medium text-slate-900">{item.name}</p>
                                <p class="text-sm text-slate-500">
                                    {item.description.unwrap_or_default()}
                                </p>
                            </div>
                            {item
                                .status
                                .map(|status| {
                                    view! {
                                        <span class="rounded-full bg-slate-100 px-2 py-0.5 text-xs text-slate-600">
                                            {status}
                                        </span>
                                    }
                                })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
