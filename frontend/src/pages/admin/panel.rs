use super::{
    layout::{AdminToolbar, PRODUCT_NAME},
    utils::{AdminView, ADMIN_PATH},
    view_model::AdminViewModel,
};
use crate::components::{
    auth::{LoginPrompt, LogoutButton, UnauthorizedNotice},
    layout::{AppVersion, LoadingBar},
};
use leptos::*;
use leptos_meta::Title;

/// Renders one shell per `AdminView`; `children` is the routed admin content.
#[component]
pub fn AdminShell(vm: AdminViewModel, children: ChildrenFn) -> impl IntoView {
    let view_state = vm.view;

    view! {
        <Title text=PRODUCT_NAME />
        <div class="admin-host flex h-full items-center justify-center overflow-auto bg-surface-muted">
            {move || match view_state.get() {
                AdminView::Loading => view! { <LoadingBar /> }.into_view(),
                AdminView::Unauthenticated => {
                    view! {
                        <div>
                            <LoginPrompt redirect_url=ADMIN_PATH />
                            <AppVersion />
                        </div>
                    }
                        .into_view()
                }
                AdminView::Unauthorized => {
                    view! {
                        <div>
                            <LogoutButton redirect_url=ADMIN_PATH />
                            <UnauthorizedNotice />
                            <AppVersion />
                        </div>
                    }
                        .into_view()
                }
                AdminView::Authorized => {
                    view! {
                        <div class="container h-full w-full">
                            <div class="main flex flex-col justify-start md:px-5 md:pt-5 md:pb-10">
                                <AdminToolbar
                                    archived=vm.archived
                                    show_controls=vm.show_toolbar_controls
                                    on_toggle=vm.toggle_archived
                                />
                                {children()}
                            </div>
                            <AppVersion />
                        </div>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
