use dioxus::prelude::*;

mod config;
mod notify;
mod panic;
mod routes;
use routes::Route;

const PORTAL_STYLES: Asset = asset!("/assets/portal.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Resolve static settings once, before any screen reads them.
    let portal = use_hook(config::load_portal_config);

    rsx! {
        document::Title { "{portal.condominium.name}" }
        document::Link { rel: "stylesheet", href: portal.assets.font_stylesheet.clone() }
        document::Link { rel: "stylesheet", href: PORTAL_STYLES }
        Router::<Route> {}
    }
}
