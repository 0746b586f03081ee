use crate::state::notifications::use_notifier;
use leptos::*;

/// Bottom-of-screen host for the transient notification channel.
#[component]
pub fn SnackBar() -> impl IntoView {
    let notifier = use_notifier();
    let current = notifier.current();

    view! {
        <Show when=move || current.with(Option::is_some) fallback=|| ()>
            <div
                class="snackbar fixed bottom-4 left-1/2 -translate-x-1/2 flex items-center gap-4 rounded bg-surface-inverse px-4 py-3 text-text-inverse shadow-lg"
                role="status"
                aria-live="polite"
            >
                <span class="text-sm">
                    {move || current.get().map(|n| n.message).unwrap_or_default()}
                </span>
                <button
                    type="button"
                    class="text-sm font-medium uppercase"
                    on:click=move |_| notifier.dismiss_current()
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
