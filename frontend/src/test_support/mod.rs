#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod logging;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserInfo;

    pub fn admin_user() -> UserInfo {
        UserInfo {
            id: "u-admin".into(),
            name: "Admin User".into(),
            email: Some("admin@example.com".into()),
            admin: true,
        }
    }

    pub fn regular_user() -> UserInfo {
        UserInfo {
            id: "u-regular".into(),
            name: "Regular User".into(),
            email: None,
            admin: false,
        }
    }
}
