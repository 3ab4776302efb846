//! Access token handed over by the identity provider.
//!
//! Sign-in itself happens outside the dashboard; it leaves the token in
//! localStorage and the dashboard only reads it to authorize API calls.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "dashboard.auth.accessToken";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}
