use super::{
    repository::IdentityRepository,
    utils::{
        archived_from_query, archived_navigation_target, failure_message, is_admin_root,
        AdminView, ARCHIVED_PARAM,
    },
};
use crate::api::{ApiClient, ApiError, UserInfo};
use crate::state::notifications::{use_notifier, Notifier};
use leptos::*;
use leptos_router::{use_location, use_navigate, use_query_map, NavigateOptions};
use std::{cell::Cell, future::Future, rc::Rc};

#[derive(Clone, Copy)]
pub struct AdminViewState {
    pub loaded: RwSignal<bool>,
    pub archived: RwSignal<bool>,
    pub user: RwSignal<Option<UserInfo>>,
}

impl AdminViewState {
    pub fn new(archived: bool) -> Self {
        Self {
            loaded: create_rw_signal(false),
            archived: create_rw_signal(archived),
            user: create_rw_signal(None),
        }
    }

    pub fn view(&self) -> AdminView {
        let loaded = self.loaded.get();
        self.user.with(|user| AdminView::derive(loaded, user.as_ref()))
    }
}

/// Cleared when the owning view is torn down; late async results check it before writing.
#[derive(Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub view: Memo<AdminView>,
    pub archived: Signal<bool>,
    pub show_toolbar_controls: Signal<bool>,
    pub toggle_archived: Callback<()>,
}

impl AdminViewModel {
    pub fn new(state: AdminViewState, pathname: Signal<String>, navigate: Callback<String>) -> Self {
        let view = create_memo(move |_| state.view());
        let show_toolbar_controls = Signal::derive(move || pathname.with(|p| is_admin_root(p)));
        let toggle_archived = Callback::new(move |_: ()| {
            let next = flip_archived(state.archived);
            navigate.call(archived_navigation_target(next));
        });
        Self {
            view,
            archived: state.archived.into(),
            show_toolbar_controls,
            toggle_archived,
        }
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = IdentityRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();

    let query = use_query_map();
    let archived_param = Signal::derive(move || query.with(|q| q.get(ARCHIVED_PARAM).cloned()));
    let state = AdminViewState::new(archived_from_query(
        archived_param.get_untracked().as_deref(),
    ));
    on_cleanup(bind_archived_param(archived_param, state.archived));

    let liveness = Liveness::new();
    let liveness_for_cleanup = liveness.clone();
    on_cleanup(move || liveness_for_cleanup.end());

    state.loaded.set(false);
    spawn_local(async move {
        let fetch = repo.get_user_info();
        settle_identity(fetch, state, notifier, liveness).await;
    });

    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());
    let navigate = use_navigate();
    let navigate = Callback::new(move |target: String| {
        navigate(&target, NavigateOptions::default());
    });

    AdminViewModel::new(state, pathname, navigate)
}

/// Mirrors the `archived` query parameter into `archived` on every change.
/// Returns the handle that stops listening.
pub fn bind_archived_param(
    param: Signal<Option<String>>,
    archived: RwSignal<bool>,
) -> impl Fn() + Clone {
    watch(
        move || param.get(),
        move |value, _, _| {
            archived.try_set(archived_from_query(value.as_deref()));
        },
        false,
    )
}

/// Flips `archived` and returns the new value.
pub fn flip_archived(archived: RwSignal<bool>) -> bool {
    archived.update(|value| *value = !*value);
    archived.get_untracked()
}

/// Applies the outcome of the identity fetch. Failures never escape: they are
/// logged, shown as a notification and leave `user` empty.
pub async fn settle_identity<F>(
    fetch: F,
    state: AdminViewState,
    notifier: Notifier,
    liveness: Liveness,
) where
    F: Future<Output = Result<Option<UserInfo>, ApiError>>,
{
    let result = fetch.await;
    if !liveness.is_alive() {
        log::debug!("identity fetch settled after the admin view was torn down");
        return;
    }

    match result {
        Ok(user) => {
            state.user.try_set(user);
        }
        Err(error) => {
            log::error!("failed to fetch user info: {:?}", error);
            notifier.notify(failure_message(&error));
        }
    }

    if state.loaded.try_get_untracked() == Some(false) {
        state.loaded.try_set(true);
    }
}
