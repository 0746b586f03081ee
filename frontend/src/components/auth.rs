use crate::{config, utils::url::append_query};
use leptos::*;

pub fn login_href(login_url: &str, redirect_url: &str) -> String {
    append_query(login_url, "post_login_redirect_uri", redirect_url)
}

pub fn logout_href(logout_url: &str, redirect_url: &str) -> String {
    append_query(logout_url, "post_logout_redirect_uri", redirect_url)
}

#[component]
pub fn LoginPrompt(#[prop(into)] redirect_url: String) -> impl IntoView {
    let href = login_href(&config::current().login_url, &redirect_url);
    view! {
        <div class="login-prompt rounded-lg bg-surface-elevated p-8 shadow-lg text-center space-y-4">
            <h2 class="text-xl font-semibold text-fg">"Sign in to continue"</h2>
            <p class="text-sm text-fg-muted">"You need to sign in to manage events."</p>
            <a
                href=href
                rel="external"
                class="inline-block rounded bg-action-primary-bg px-4 py-2 text-sm font-medium text-text-inverse hover:bg-action-primary-bg-hover"
            >
                "Sign in"
            </a>
        </div>
    }
}

/// Sends the browser through the identity provider's sign-out, then back to `redirect_url`.
#[component]
pub fn LogoutButton(
    #[prop(into)] redirect_url: String,
    #[prop(optional)] inline: bool,
) -> impl IntoView {
    let href = logout_href(&config::current().logout_url, &redirect_url);
    let class = if inline {
        "logout-inline rounded px-3 py-2 text-sm font-medium text-text-inverse hover:bg-action-ghost-bg-hover"
    } else {
        "logout-block fixed top-4 right-4 rounded bg-surface-elevated px-4 py-2 text-sm font-medium text-fg shadow"
    };
    view! {
        <a href=href rel="external" class=class>
            "Sign out"
        </a>
    }
}

#[component]
pub fn UnauthorizedNotice() -> impl IntoView {
    view! {
        <div class="unauthorized rounded-lg bg-surface-elevated p-8 shadow-lg text-center space-y-2">
            <h2 class="text-xl font-semibold text-fg">"Not authorized"</h2>
            <p class="text-sm text-fg-muted">
                "Your account does not have administrator access. Sign in with a different account."
            </p>
        </div>
    }
}
