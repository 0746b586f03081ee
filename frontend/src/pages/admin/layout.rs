use super::utils::{ADMIN_PATH, NEW_EVENT_PATH};
use crate::components::auth::LogoutButton;
use leptos::*;

pub const PRODUCT_NAME: &str = "Event Check-In";

#[component]
pub fn AdminToolbar(
    #[prop(into)] archived: Signal<bool>,
    #[prop(into)] show_controls: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="admin-toolbar flex h-16 items-center bg-gradient-to-r from-action-primary-bg to-action-primary-bg-hover px-4 text-text-inverse">
            <a href=ADMIN_PATH class="flex items-center" aria-label="Events">
                <img class="logo h-10 w-10 mx-2 object-cover" src="/assets/logo.svg" alt="Logo" />
            </a>
            <span class="hidden sm:inline text-lg font-medium">{PRODUCT_NAME}</span>
            <span class="flex-1"></span>
            <Show when=move || show_controls.get() fallback=|| ()>
                <label class="archived-toggle mx-4 flex items-center gap-2 text-sm" title="Show archived events">
                    <input
                        type="checkbox"
                        role="switch"
                        aria-checked=move || archived.get().to_string()
                        checked=move || archived.get()
                        prop:checked=move || archived.get()
                        on:change=move |_| on_toggle.call(())
                    />
                    <span class="hidden sm:inline">"Archived"</span>
                </label>
                <a
                    href=NEW_EVENT_PATH
                    class="create-event mx-2 rounded bg-surface-elevated px-3 py-2 text-sm font-medium text-fg"
                    title="Create event"
                >
                    <span aria-hidden="true">"+"</span>
                    <span class="hidden md:inline ml-1">"Create event"</span>
                </a>
            </Show>
            <LogoutButton redirect_url=ADMIN_PATH inline=true />
        </header>
    }
}
