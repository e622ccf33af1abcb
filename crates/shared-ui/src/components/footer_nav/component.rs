use crate::GlyphIcon;
use dioxus::prelude::*;
use shared_types::{active_nav_index, NAV_ITEMS};

/// Fixed bottom navigation. The entry whose path equals `current_path`
/// is highlighted.
#[component]
pub fn FooterNav(current_path: String) -> Element {
    let active = active_nav_index(&current_path);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        footer { class: "footer-nav",
            nav { class: "footer-nav-items",
                {NAV_ITEMS.iter().enumerate().map(|(idx, item)| {
                    let class = if active == Some(idx) {
                        "footer-nav-item footer-nav-item-active"
                    } else {
                        "footer-nav-item"
                    };
                    rsx! {
                        Link { key: "{item.path}", to: item.path, class: class,
                            GlyphIcon { glyph: item.glyph, size: 20 }
                            span { class: "footer-nav-label", "{item.label}" }
                        }
                    }
                })}
            }
        }
    }
}
