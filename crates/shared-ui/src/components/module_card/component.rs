use crate::GlyphIcon;
use dioxus::prelude::*;
use shared_types::{Accent, Glyph};

/// Dashboard shortcut tile linking to `to`.
#[component]
pub fn ModuleCard(
    to: String,
    glyph: Glyph,
    title: String,
    caption: String,
    #[props(default)] accent: Accent,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Link { to: to, class: "module-card",
            div { class: "module-card-icon", "data-accent": accent.as_str(),
                GlyphIcon { glyph: glyph, size: 24 }
            }
            h3 { class: "module-card-title", "{title}" }
            p { class: "module-card-caption", "{caption}" }
        }
    }
}
