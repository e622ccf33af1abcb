// Layout
pub mod header;
pub mod mobile_frame;

// Controls
pub mod brand_logo;
pub mod button;
pub mod glyph;
pub mod panic_button;
pub mod text_field;

// Navigation
pub mod footer_nav;
pub mod module_card;

// Overlays (depends on button)
pub mod confirmation_modal;

pub use brand_logo::*;
pub use button::*;
pub use confirmation_modal::*;
pub use footer_nav::*;
pub use glyph::*;
pub use header::*;
pub use mobile_frame::*;
pub use module_card::*;
pub use panic_button::*;
pub use text_field::*;
