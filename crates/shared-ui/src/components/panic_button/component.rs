use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use shared_types::PanicStatus;

/// Big round emergency button. Turns green with a check once the alert is
/// marked sent.
#[component]
pub fn PanicButton(status: PanicStatus, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: "panic-button",
            r#type: "button",
            "data-status": status.as_str(),
            onclick: move |evt| onclick.call(evt),
            span { class: "panic-button-pulse" }
            span { class: "panic-button-icon",
                if status == PanicStatus::Sent {
                    Icon::<FaCheck> { icon: FaCheck, width: 40, height: 40 }
                } else {
                    Icon::<FaTriangleExclamation> { icon: FaTriangleExclamation, width: 40, height: 40 }
                }
            }
            span { class: "panic-button-label", {status.button_label()} }
        }
    }
}
