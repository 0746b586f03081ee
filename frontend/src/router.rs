use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::snackbar::SnackBar,
    pages::{
        admin::{utils::ADMIN_PATH, AdminPage},
        events::{EventsOverview, NewEventPage},
    },
    state::notifications::NotificationProvider,
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <NotificationProvider>
            <Router>
                <Routes>
                    <Route path="/" view=RedirectToAdmin/>
                    <Route path=ADMIN_PATH view=AdminPage>
                        <Route path="" view=EventsOverview/>
                        <Route path="new" view=NewEventPage/>
                    </Route>
                </Routes>
            </Router>
            <SnackBar/>
        </NotificationProvider>
    }
}

#[component]
fn RedirectToAdmin() -> impl IntoView {
    view! { <Redirect path=ADMIN_PATH/> }
}
