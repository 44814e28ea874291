//! Full-page navigation.
//!
//! Used where in-memory application state must be discarded, such as the
//! session-expired redirect to `/login`. Client-side route changes go through
//! `leptos_router` instead.

pub const LOGIN_PATH: &str = "/login";

/// Replace the current document with `path`.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "csr")]
    {
        match web_sys::window() {
            Some(window) => {
                if window.location().set_href(path).is_err() {
                    log::warn!("failed to navigate to {path}");
                }
            }
            None => log::warn!("no window; cannot navigate to {path}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("hard redirect to {path} skipped outside the browser");
    }
}
