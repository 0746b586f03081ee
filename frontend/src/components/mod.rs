pub mod auth;
pub mod layout;
pub mod snackbar;
