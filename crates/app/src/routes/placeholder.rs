use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{Module, Screen};
use shared_ui::{Button, FooterNav, GlyphIcon, Header, MobileFrame};

/// Where the back button on every module page leads.
fn back_route() -> Route {
    Route::from(Screen::Dashboard)
}

/// Stub screen for a module that has no content yet.
#[component]
pub fn PlaceholderPage(module: Module) -> Element {
    let route: Route = use_route();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./placeholder.css") }

        MobileFrame {
            Header { title: module.title(), subtitle: module.caption() }

            main { class: "placeholder-main",
                div { class: "placeholder-icon", "data-accent": module.accent().as_str(),
                    GlyphIcon { glyph: module.glyph(), size: 40 }
                }
                h2 { class: "placeholder-title", {module.title()} }
                p { class: "placeholder-message", "Esta funcionalidade estará disponível em breve." }
                Button {
                    onclick: move |_| {
                        navigator().push(back_route());
                    },
                    "Voltar ao início"
                }
            }

            FooterNav { current_path: route.to_string() }
        }
    }
}

#[component]
pub fn Notices() -> Element {
    rsx! { PlaceholderPage { module: Module::Notices } }
}

#[component]
pub fn Packages() -> Element {
    rsx! { PlaceholderPage { module: Module::Packages } }
}

#[component]
pub fn Visitors() -> Element {
    rsx! { PlaceholderPage { module: Module::Visitors } }
}

#[component]
pub fn Pets() -> Element {
    rsx! { PlaceholderPage { module: Module::Pets } }
}
