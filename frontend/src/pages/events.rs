use crate::pages::admin::utils::{archived_from_query, ARCHIVED_PARAM};
use leptos::*;
use leptos_router::use_query_map;

pub fn events_heading(archived: bool) -> &'static str {
    if archived {
        "Archived events"
    } else {
        "Active events"
    }
}

/// Index route under `/admin`; shows which event set the toolbar toggle selects.
#[component]
pub fn EventsOverview() -> impl IntoView {
    let query = use_query_map();
    let archived =
        Signal::derive(move || query.with(|q| archived_from_query(q.get(ARCHIVED_PARAM).map(String::as_str))));

    view! {
        <section class="events-overview p-4">
            <h2 class="text-lg font-semibold text-fg">{move || events_heading(archived.get())}</h2>
        </section>
    }
}

#[component]
pub fn NewEventPage() -> impl IntoView {
    view! {
        <section class="new-event p-4">
            <h2 class="text-lg font-semibold text-fg">"Create event"</h2>
        </section>
    }
}
