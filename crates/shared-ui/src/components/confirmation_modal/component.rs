use crate::{Button, ButtonVariant};
use dioxus::prelude::*;
use shared_types::Accent;

/// Blocking overlay asking the user to confirm a critical action.
///
/// Holds no state of its own. Whoever renders it decides when it is shown
/// and must hide it from `on_confirm`/`on_cancel` as needed.
#[component]
pub fn ConfirmationModal(
    title: String,
    message: String,
    #[props(default)] items: Vec<String>,
    #[props(default = "Confirmar".to_string())] confirm_label: String,
    #[props(default)] confirm_accent: Accent,
    on_confirm: EventHandler<MouseEvent>,
    on_cancel: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "confirmation-modal-overlay", role: "dialog", aria_modal: "true",
            div { class: "confirmation-modal",
                h3 { class: "confirmation-modal-title", "{title}" }
                p { class: "confirmation-modal-message", "{message}" }
                if !items.is_empty() {
                    ul { class: "confirmation-modal-items",
                        for item in items.iter() {
                            li { "{item}" }
                        }
                    }
                }
                div { class: "confirmation-modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |evt| on_cancel.call(evt),
                        "Cancelar"
                    }
                    Button {
                        accent: confirm_accent,
                        onclick: move |evt| on_confirm.call(evt),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_message_items_and_actions() {
        let html = render(|| {
            rsx! {
                ConfirmationModal {
                    title: "Confirmar Emergência",
                    message: "Esta ação notificará imediatamente:",
                    items: vec![
                        "Equipe de Segurança (Portaria)".to_string(),
                        "Seu Contato de Emergência".to_string(),
                    ],
                    confirm_label: "CONFIRMAR ENVIO",
                    confirm_accent: Accent::Red,
                    on_confirm: move |_| {},
                    on_cancel: move |_| {},
                }
            }
        });
        assert!(html.contains("Confirmar Emergência"));
        assert!(html.contains("<li>Equipe de Segurança (Portaria)</li>"));
        assert!(html.contains("<li>Seu Contato de Emergência</li>"));
        assert!(html.contains("Cancelar"));
        assert!(html.contains("CONFIRMAR ENVIO"));
        assert!(html.contains(r#"data-accent="red""#));
    }

    #[test]
    fn omits_list_without_items_and_uses_default_label() {
        let html = render(|| {
            rsx! {
                ConfirmationModal {
                    title: "Sair",
                    message: "Deseja sair?",
                    on_confirm: move |_| {},
                    on_cancel: move |_| {},
                }
            }
        });
        assert!(!html.contains("<ul"));
        assert!(html.contains("Confirmar"));
        assert_eq!(html.matches("<button").count(), 2);
    }
}
