use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRightFromBracket, FaUser};
use dioxus_free_icons::Icon;

/// Sticky screen header: profile glyph, title and subtitle.
///
/// The logout button is only rendered when `on_logout` is set.
#[component]
pub fn Header(
    title: String,
    #[props(default)] subtitle: String,
    #[props(default)] on_logout: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "portal-header",
            div { class: "portal-header-identity",
                div { class: "portal-header-avatar",
                    Icon::<FaUser> { icon: FaUser, width: 18, height: 18 }
                }
                div {
                    h1 { class: "portal-header-title", "{title}" }
                    p { class: "portal-header-subtitle", "{subtitle}" }
                }
            }
            if let Some(handler) = on_logout {
                button {
                    class: "portal-header-logout",
                    r#type: "button",
                    aria_label: "Sair da aplicação",
                    onclick: move |evt| handler.call(evt),
                    Icon::<FaRightFromBracket> { icon: FaRightFromBracket, width: 20, height: 20 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_title_and_subtitle() {
        let html = render(|| {
            rsx! { Header { title: "Condomínio CH7", subtitle: "Morador - Bloco A" } }
        });
        assert!(html.contains("Condomínio CH7"));
        assert!(html.contains("Morador - Bloco A"));
    }

    #[test]
    fn logout_button_only_when_handler_given() {
        let without = render(|| rsx! { Header { title: "Pets" } });
        assert!(!without.contains("portal-header-logout"));

        let with = render(|| {
            rsx! { Header { title: "Início", on_logout: move |_| {} } }
        });
        assert!(with.contains("portal-header-logout"));
        assert!(with.contains("Sair da aplicação"));
    }
}
