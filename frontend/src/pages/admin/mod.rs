use leptos::*;
use leptos_router::Outlet;

pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::AdminShell;

#[component]
pub fn AdminPage() -> impl IntoView {
    let vm = view_model::use_admin_view_model();
    view! {
        <AdminShell vm=vm>
            <Outlet />
        </AdminShell>
    }
}
