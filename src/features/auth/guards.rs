use crate::{
    components::ui::LoadingScreen,
    features::auth::{
        guard::{GuardState, Navigator, RouteGuard},
        state::use_auth,
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};
use std::{cell::RefCell, rc::Rc};

/// Router-backed navigator. Replaces the history entry so the back button
/// does not return to the page that redirected.
pub(crate) struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F> {
    pub(crate) const fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn navigate(&self, path: &str) {
        (self.navigate)(
            path,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    }
}

/// Renders `children` only for a signed-in user.
///
/// UX-only guard; real access control lives on the API.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let guard = Rc::new(RefCell::new(RouteGuard::new(
        RouterNavigator::new(use_navigate()),
        paths::SIGN_IN,
    )));
    let state = RwSignal::new(GuardState::for_session(&auth.session.get_untracked()));

    Effect::new(move |_| {
        let session = auth.session.get();
        let next = guard.borrow_mut().observe(&session);
        if state.get_untracked() != next {
            state.set(next);
        }
    });

    move || match state.get() {
        GuardState::Resolving => view! { <LoadingScreen /> }.into_any(),
        GuardState::Redirecting => ().into_any(),
        GuardState::Authorized => children().into_any(),
    }
}
