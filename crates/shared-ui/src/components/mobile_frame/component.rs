use dioxus::prelude::*;

/// Phone-shaped container every portal screen renders inside.
#[component]
pub fn MobileFrame(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "mobile-frame", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "mobile-frame-backdrop",
            div {
                ..merged,
                {children}
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
    fn wraps_children_in_the_frame() {
        let html = render(|| rsx! { MobileFrame { p { "conteúdo" } } });
        assert!(html.contains("mobile-frame-backdrop"));
        assert!(html.contains(r#"class="mobile-frame""#));
        assert!(html.contains("<p>conteúdo</p>"));
    }

    #[test]
    fn caller_attributes_are_merged() {
        let html = render(|| rsx! { MobileFrame { id: "tela", "x" } });
        assert!(html.contains(r#"id="tela""#));
        assert!(html.contains("mobile-frame"));
    }
}
