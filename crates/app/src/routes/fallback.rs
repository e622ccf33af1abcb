use dioxus::prelude::*;
use shared_types::Screen;

use crate::routes::login::Login;

/// Catch-all for unknown paths: shows the login screen in place.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    if let Err(e) = Screen::for_path(&path) {
        tracing::debug!(error = %e, "unknown path, showing login");
    }

    rsx! {
        Login {}
    }
}
