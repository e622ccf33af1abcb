use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBuilding;
use dioxus_free_icons::Icon;

/// Round condominium logo. Falls back to a building glyph when the image
/// fails to load.
#[component]
pub fn BrandLogo(src: String, #[props(default = "Logo".to_string())] alt: String) -> Element {
    let mut failed = use_signal(|| false);
    let failed_src = src.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "brand-logo",
            if failed() {
                span { class: "brand-logo-fallback",
                    Icon::<FaBuilding> { icon: FaBuilding, width: 36, height: 36 }
                }
            } else {
                img {
                    class: "brand-logo-image",
                    src: "{src}",
                    alt: "{alt}",
                    onerror: move |_| {
                        tracing::warn!(src = %failed_src, "logo failed to load, showing fallback glyph");
                        failed.set(true);
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_image_until_it_fails() {
        let mut dom = VirtualDom::new(|| rsx! { BrandLogo { src: "/assets/icons/logo.png" } });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"src="/assets/icons/logo.png""#));
        assert!(!html.contains("brand-logo-fallback"));
    }
}
