use dioxus::prelude::*;

/// Labelled text input with a leading icon and an optional trailing action
/// (e.g. a visibility toggle).
#[component]
pub fn TextField(
    id: String,
    label: String,
    icon: Element,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    trailing: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "text-field-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_trailing = trailing.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "text-field",
            label { class: "text-field-label", r#for: "{id}", "{label}" }
            div { class: "text-field-control", "data-trailing": has_trailing,
                span { class: "text-field-icon", {icon} }
                input {
                    id: "{id}",
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    required: required,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
                {trailing}
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
    fn renders_label_and_input_type() {
        let html = render(|| {
            rsx! {
                TextField {
                    id: "password",
                    label: "Senha",
                    icon: rsx! { "*" },
                    input_type: "password",
                    required: true,
                }
            }
        });
        assert!(html.contains("Senha"));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"id="password""#));
        assert!(html.contains("required"));
    }

    #[test]
    fn trailing_slot_is_rendered_when_given() {
        let html = render(|| {
            rsx! {
                TextField {
                    id: "password",
                    label: "Senha",
                    icon: rsx! { "*" },
                    trailing: rsx! { button { class: "toggle", "ver" } },
                }
            }
        });
        assert!(html.contains(r#"class="toggle""#));
        assert!(html.contains(r#"data-trailing=true"#) || html.contains(r#"data-trailing="true""#));
    }
}
