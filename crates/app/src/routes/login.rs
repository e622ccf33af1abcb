use crate::config::portal_config;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaEye, FaEyeSlash, FaLock};
use dioxus_free_icons::Icon;
use shared_types::LoginDraft;
use shared_ui::{BrandLogo, MobileFrame, TextField};

/// Resident login screen. Submitting always goes to the dashboard; the
/// typed credentials are not checked anywhere.
#[component]
pub fn Login() -> Element {
    let config = portal_config();
    let mut draft = use_signal(LoginDraft::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = std::mem::take(&mut *draft.write());
        tracing::info!(email = %submitted.email, "login submitted");
        navigator().push(Route::from(submitted.submit()));
    };

    let show_password = draft.read().show_password;
    let condominium = &config.condominium.name;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        MobileFrame {
            div { class: "login-page",
                div { class: "login-brand",
                    BrandLogo { src: config.assets.logo_url.clone() }
                    h1 { class: "login-title", "Acesso Morador" }
                    p { class: "login-subtitle", "Bem-vindo ao {condominium}" }
                }

                form { class: "login-form", onsubmit: handle_login,
                    TextField {
                        id: "email",
                        label: "E-mail",
                        input_type: "email",
                        placeholder: "seu@email.com",
                        required: true,
                        value: draft.read().email.clone(),
                        on_input: move |e: FormEvent| draft.write().email = e.value(),
                        icon: rsx! { Icon::<FaEnvelope> { icon: FaEnvelope, width: 16, height: 16 } },
                    }
                    TextField {
                        id: "password",
                        label: "Senha",
                        input_type: draft.read().password_input_type(),
                        placeholder: "••••••••",
                        required: true,
                        value: draft.read().password.clone(),
                        on_input: move |e: FormEvent| draft.write().password = e.value(),
                        icon: rsx! { Icon::<FaLock> { icon: FaLock, width: 16, height: 16 } },
                        trailing: rsx! {
                            button {
                                class: "login-visibility-toggle",
                                r#type: "button",
                                tabindex: "-1",
                                aria_label: if show_password { "Ocultar senha" } else { "Mostrar senha" },
                                onclick: move |_| draft.write().toggle_password_visibility(),
                                if show_password {
                                    Icon::<FaEye> { icon: FaEye, width: 16, height: 16 }
                                } else {
                                    Icon::<FaEyeSlash> { icon: FaEyeSlash, width: 16, height: 16 }
                                }
                            }
                        },
                    }
                    button { r#type: "submit", class: "login-submit", "ENTRAR" }
                }

                p { class: "login-help",
                    "Problemas com acesso? "
                    a { href: "#", "Contate a portaria" }
                    "."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_login() -> String {
        let mut dom = VirtualDom::new(Login);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_masked_password_and_brand() {
        let html = render_login();
        assert!(html.contains("Acesso Morador"));
        assert!(html.contains("Bem-vindo ao Condomínio CH7"));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("Mostrar senha"));
        assert!(html.contains("ENTRAR"));
    }
}
