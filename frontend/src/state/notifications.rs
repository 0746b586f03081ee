use leptos::*;

/// How long a notification stays visible before it is dismissed automatically.
pub const NOTIFICATION_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
}

/// Single-slot transient notification channel; a newer message replaces the older one.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notification>>,
    next_id: StoredValue<u64>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(0),
        }
    }

    pub fn current(&self) -> Signal<Option<Notification>> {
        self.current.into()
    }

    pub fn notify(&self, message: impl Into<String>) -> u64 {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.current.set(Some(Notification {
            id,
            message: message.into(),
        }));
        self.schedule_dismiss(id);
        id
    }

    /// Dismisses notification `id` if it is still the one on screen.
    pub fn dismiss(&self, id: u64) {
        self.current.try_update(|current| {
            if current.as_ref().map(|n| n.id) == Some(id) {
                *current = None;
            }
        });
    }

    pub fn dismiss_current(&self) {
        self.current.try_set(None);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let notifier = *self;
        gloo_timers::callback::Timeout::new(NOTIFICATION_DURATION_MS, move || {
            notifier.dismiss(id)
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    provide_context(Notifier::new());
    view! { <>{children()}</> }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(Notifier::new)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn notify_replaces_previous_message() {
        with_runtime(|| {
            let notifier = Notifier::new();
            let first = notifier.notify("first");
            let second = notifier.notify("second");
            assert_ne!(first, second);
            let shown = notifier.current().get_untracked().expect("notification");
            assert_eq!(shown.id, second);
            assert_eq!(shown.message, "second");
        });
    }

    #[test]
    fn dismiss_ignores_stale_ids() {
        with_runtime(|| {
            let notifier = Notifier::new();
            let first = notifier.notify("first");
            let second = notifier.notify("second");
            notifier.dismiss(first);
            assert_eq!(
                notifier.current().get_untracked().map(|n| n.id),
                Some(second)
            );
            notifier.dismiss(second);
            assert!(notifier.current().get_untracked().is_none());
        });
    }

    #[test]
    fn dismiss_current_clears_slot() {
        with_runtime(|| {
            let notifier = Notifier::new();
            notifier.notify("hello");
            notifier.dismiss_current();
            assert!(notifier.current().get_untracked().is_none());
        });
    }

    #[test]
    fn use_notifier_prefers_context() {
        with_runtime(|| {
            let provided = Notifier::new();
            provide_context(provided);
            use_notifier().notify("from context");
            assert_eq!(
                provided.current().get_untracked().map(|n| n.message),
                Some("from context".to_string())
            );
        });
    }
}
