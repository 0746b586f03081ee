use crate::api::{ApiError, UserInfo};

pub const ADMIN_PATH: &str = "/admin";
pub const NEW_EVENT_PATH: &str = "/admin/new";
pub const ARCHIVED_PARAM: &str = "archived";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Which shell the admin page renders; derived from view state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Loading,
    Unauthenticated,
    Unauthorized,
    Authorized,
}

impl AdminView {
    pub fn derive(loaded: bool, user: Option<&UserInfo>) -> Self {
        match (loaded, user) {
            (false, _) => AdminView::Loading,
            (true, None) => AdminView::Unauthenticated,
            (true, Some(user)) if user.admin => AdminView::Authorized,
            (true, Some(_)) => AdminView::Unauthorized,
        }
    }
}

pub fn archived_from_query(value: Option<&str>) -> bool {
    value == Some("true")
}

/// The parameter is omitted entirely when `archived` is false.
pub fn archived_navigation_target(archived: bool) -> String {
    if archived {
        format!("{}?{}=true", ADMIN_PATH, ARCHIVED_PARAM)
    } else {
        ADMIN_PATH.to_string()
    }
}

/// True on the admin landing route itself, not on nested routes.
pub fn is_admin_root(pathname: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    trimmed == ADMIN_PATH
}

pub fn failure_message(error: &ApiError) -> String {
    format!("Error: {}", error.message().unwrap_or(UNKNOWN_ERROR_MESSAGE))
}
