use leptos::*;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn LoadingBar() -> impl IntoView {
    view! {
        <div class="progress m-10 w-full max-w-md" role="progressbar" aria-busy="true" aria-label="Loading">
            <div class="h-1 w-full overflow-hidden rounded bg-surface-muted">
                <div class="h-1 w-1/3 animate-pulse bg-action-primary-bg"></div>
            </div>
        </div>
    }
}

#[component]
pub fn AppVersion() -> impl IntoView {
    view! {
        <footer class="app-version fixed bottom-2 right-3 text-xs text-fg-muted">
            {format!("v{}", APP_VERSION)}
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_bar_is_announced_as_progress() {
        let html = render_to_string(|| view! { <LoadingBar /> });
        assert!(html.contains("progressbar"));
    }

    #[test]
    fn app_version_renders_package_version() {
        let html = render_to_string(|| view! { <AppVersion /> });
        assert!(html.contains(APP_VERSION));
    }
}
