use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBox, FaBoxOpen, FaClipboardList, FaComment, FaHouse, FaPaw, FaUserPlus, FaUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Glyph;

/// Draw a portal [`Glyph`] as an inline SVG icon.
#[component]
pub fn GlyphIcon(glyph: Glyph, #[props(default = 20)] size: u32) -> Element {
    match glyph {
        Glyph::House => rsx! { Icon::<FaHouse> { icon: FaHouse, width: size, height: size } },
        Glyph::Comment => rsx! { Icon::<FaComment> { icon: FaComment, width: size, height: size } },
        Glyph::Package => rsx! { Icon::<FaBox> { icon: FaBox, width: size, height: size } },
        Glyph::PackageOpen => {
            rsx! { Icon::<FaBoxOpen> { icon: FaBoxOpen, width: size, height: size } }
        }
        Glyph::Users => rsx! { Icon::<FaUsers> { icon: FaUsers, width: size, height: size } },
        Glyph::UserPlus => {
            rsx! { Icon::<FaUserPlus> { icon: FaUserPlus, width: size, height: size } }
        }
        Glyph::ClipboardList => {
            rsx! { Icon::<FaClipboardList> { icon: FaClipboardList, width: size, height: size } }
        }
        Glyph::Paw => rsx! { Icon::<FaPaw> { icon: FaPaw, width: size, height: size } },
    }
}
