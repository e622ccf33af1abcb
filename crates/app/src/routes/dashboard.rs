use crate::config::portal_config;
use crate::panic::use_panic_controller;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBoxOpen;
use dioxus_free_icons::Icon;
use shared_types::{Accent, ALL_MODULES};
use shared_ui::{ConfirmationModal, FooterNav, Header, MobileFrame, ModuleCard, PanicButton};

const PANIC_CONTACTS: &[&str] = &["Equipe de Segurança (Portaria)", "Seu Contato de Emergência"];

/// Resident home: greeting, panic button, module shortcuts.
#[component]
pub fn Dashboard() -> Element {
    let config = portal_config();
    let route: Route = use_route();
    let alert = use_panic_controller(config.panic.timings());

    let handle_logout = move |_: MouseEvent| {
        tracing::info!("resident logged out");
        navigator().push(Route::Login {});
    };

    let mut on_press = alert.clone();
    let mut on_cancel = alert.clone();
    let mut on_confirm = alert.clone();

    let resident = &config.condominium.resident;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        MobileFrame {
            Header {
                title: config.condominium.name.clone(),
                subtitle: config.condominium.unit.clone(),
                on_logout: handle_logout,
            }

            main { class: "dashboard-main",
                div { class: "dashboard-banner",
                    div { class: "dashboard-banner-text",
                        h2 { "Olá, {resident}!" }
                        if let Some(label) = config.pending_packages_label() {
                            p {
                                "Você tem "
                                strong { "{label}" }
                                " aguardando retirada."
                            }
                        } else {
                            p { "Nenhuma encomenda aguardando retirada." }
                        }
                    }
                    span { class: "dashboard-banner-art",
                        Icon::<FaBoxOpen> { icon: FaBoxOpen, width: 96, height: 96 }
                    }
                }

                section { class: "dashboard-panic",
                    PanicButton {
                        status: alert.status(),
                        onclick: move |_| on_press.open(),
                    }
                    h2 { class: "dashboard-panic-title", "Emergência" }
                    p { class: "dashboard-panic-caption",
                        "Acione a segurança e contatos de emergência imediatamente."
                    }
                }

                section {
                    h3 { class: "dashboard-section-title", "Serviços Rápidos" }
                    div { class: "dashboard-modules",
                        for module in ALL_MODULES.iter() {
                            ModuleCard {
                                to: Route::for_module(*module).to_string(),
                                glyph: module.glyph(),
                                title: module.title(),
                                caption: module.caption(),
                                accent: module.accent(),
                            }
                        }
                    }
                }
            }

            FooterNav { current_path: route.to_string() }

            if alert.modal_open() {
                ConfirmationModal {
                    title: "Confirmar Emergência",
                    message: "Você está prestes a enviar um alerta de PÂNICO. Esta ação notificará imediatamente:",
                    items: PANIC_CONTACTS.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                    confirm_label: alert.confirm_label(),
                    confirm_accent: Accent::Red,
                    on_confirm: move |_| on_confirm.confirm(),
                    on_cancel: move |_| on_cancel.cancel(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::render_route;
    use pretty_assertions::assert_eq;
    use shared_types::ALL_MODULES;

    #[test]
    fn dashboard_links_every_module_in_grid_order() {
        let html = render_route("/dashboard");
        assert_eq!(html.matches("module-card-title").count(), ALL_MODULES.len());

        let mut last = 0;
        for module in ALL_MODULES {
            let at = html[last..]
                .find(module.caption())
                .unwrap_or_else(|| panic!("{module:?} card missing"));
            last += at;
        }
        for module in ALL_MODULES {
            assert!(html.contains(&format!(r#"href="{}""#, module.path())));
        }
    }

    #[test]
    fn dashboard_starts_idle_with_the_modal_closed() {
        let html = render_route("/dashboard");
        assert!(html.contains("PÂNICO"));
        assert!(html.contains("Olá, João!"));
        assert!(!html.contains("Confirmar Emergência"));
    }
}
