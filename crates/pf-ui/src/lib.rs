//! User interface components for the portfolio page
//!
//! egui widgets that draw the headless state from `pf-core`: carousels,
//! the gallery lightbox, filter buttons, the typewriter headline and the
//! dark/light theme.

pub mod carousel_view;
pub mod filter_bar;
pub mod gallery_view;
pub mod theme;
pub mod typewriter_label;

pub use carousel_view::{paint_tile, tile_color, CarouselView, CarouselViewConfig};
pub use filter_bar::{card_color, card_title, filter_bar};
pub use gallery_view::gallery_modal;
pub use theme::{accent_color, apply_theme, error_color, success_color, Palette};
pub use typewriter_label::typewriter_label;

// Common icon definitions
pub mod icons {
    pub const SUN: &str = "☀";
    pub const MOON: &str = "🌙";
}
