use futures::future::{FutureExt, LocalBoxFuture, Shared};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, future::Future, sync::OnceLock};

use crate::utils::url::absolutize;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_LOGIN_URL: &str = "/.auth/login/aad";
pub const DEFAULT_LOGOUT_URL: &str = "/.auth/logout";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub login_url: Option<String>,
    pub logout_url: Option<String>,
}

/// Fully resolved configuration; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub login_url: String,
    pub logout_url: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        RuntimeConfig::default().resolve()
    }
}

impl RuntimeConfig {
    /// Fills gaps in `self` from `other`.
    pub fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            login_url: self.login_url.or(other.login_url),
            logout_url: self.logout_url.or(other.logout_url),
        }
    }

    pub fn resolve(self) -> ResolvedConfig {
        fn non_blank(value: Option<String>, fallback: &str) -> String {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        }
        ResolvedConfig {
            api_base_url: non_blank(self.api_base_url, DEFAULT_API_BASE_URL),
            login_url: non_blank(self.login_url, DEFAULT_LOGIN_URL),
            logout_url: non_blank(self.logout_url, DEFAULT_LOGOUT_URL),
        }
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

type PendingLoad = Shared<LocalBoxFuture<'static, ResolvedConfig>>;

thread_local! {
    // Callers arriving while a load is in flight await the same fetch.
    static PENDING: RefCell<Option<PendingLoad>> = const { RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str, keys: &[&str]) -> Option<String> {
    // Expect optional global object, e.g. window.__CHECKIN_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from(name: &str) -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: read_global(name, &["API_BASE_URL", "api_base_url"]),
        login_url: read_global(name, &["LOGIN_URL", "login_url"]),
        logout_url: read_global(name, &["LOGOUT_URL", "logout_url"]),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> RuntimeConfig {
    RuntimeConfig::default()
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> RuntimeConfig {
    // env.js takes precedence over the config object written at deploy time.
    snapshot_from("__CHECKIN_ENV").or(snapshot_from("__CHECKIN_CONFIG"))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(absolutize("/config.json")).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves configuration once; later calls return the cached value.
pub async fn load() -> ResolvedConfig {
    load_with(fetch_runtime_config).await
}

async fn load_with<F, Fut>(fetch: F) -> ResolvedConfig
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Option<RuntimeConfig>> + 'static,
{
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let pending = PENDING.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| resolve(fetch()).boxed_local().shared())
            .clone()
    });
    pending.await
}

async fn resolve<Fut>(fetched: Fut) -> ResolvedConfig
where
    Fut: Future<Output = Option<RuntimeConfig>>,
{
    let mut cfg = snapshot_from_globals();
    if cfg.api_base_url.is_none() || cfg.login_url.is_none() || cfg.logout_url.is_none() {
        if let Some(fetched) = fetched.await {
            cfg = cfg.or(fetched);
        }
    }
    let resolved = RESOLVED.get_or_init(|| cfg.resolve()).clone();
    PENDING.with(|slot| slot.borrow_mut().take());
    resolved
}

/// Synchronous view of the configuration for rendering; defaults until `load` finishes.
pub fn current() -> ResolvedConfig {
    RESOLVED.get().cloned().unwrap_or_default()
}

pub async fn await_api_base_url() -> String {
    load().await.api_base_url
}

pub async fn init() {
    let cfg = load().await;
    log::debug!("runtime config resolved: api_base_url={}", cfg.api_base_url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn resolve_uses_defaults_for_missing_and_blank_values() {
        let resolved = RuntimeConfig {
            api_base_url: Some("   ".into()),
            login_url: None,
            logout_url: Some("/signout".into()),
        }
        .resolve();
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(resolved.logout_url, "/signout");
    }

    #[wasm_bindgen_test]
    fn or_prefers_left_hand_values() {
        let env = RuntimeConfig {
            api_base_url: Some("https://env.example/api".into()),
            ..RuntimeConfig::default()
        };
        let file = RuntimeConfig {
            api_base_url: Some("https://file.example/api".into()),
            login_url: Some("/login".into()),
            logout_url: None,
        };
        let merged = env.or(file);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://env.example/api"));
        assert_eq!(merged.login_url.as_deref(), Some("/login"));
        assert!(merged.logout_url.is_none());
    }

    #[wasm_bindgen_test]
    fn runtime_config_deserializes_partial_json() {
        let cfg: RuntimeConfig = serde_json::from_str(r#"{"api_base_url":"/v2/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("/v2/api"));
        assert!(cfg.login_url.is_none());
    }
}
