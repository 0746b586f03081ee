use leptos::*;
use leptos_meta::provide_meta_context;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` to HTML in a fresh reactive runtime with a meta context in place.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        provide_meta_context();
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` as if the browser were at `path` (path plus optional query).
/// Runs inside a `LocalSet` so components may `spawn_local` while mounting.
pub async fn render_at<F, N>(path: &str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    use leptos_router::{RouterIntegrationContext, ServerIntegration};

    let path = format!("http://localhost{}", path);
    tokio::task::LocalSet::new()
        .run_until(async move {
            render_to_string(move || {
                provide_context(RouterIntegrationContext::new(ServerIntegration { path }));
                view()
            })
        })
        .await
}
