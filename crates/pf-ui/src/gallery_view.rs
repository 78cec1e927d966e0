//! Gallery lightbox window

use std::sync::Arc;

use egui::{Align2, Context, Key, Vec2};
use pf_core::{Gallery, GalleryKey};

use crate::carousel_view::{paint_tile, tile_color, CarouselView};

/// Show the lightbox if the gallery is open
pub fn gallery_modal(ctx: &Context, gallery: &mut Gallery, images: &[String], view: &Arc<CarouselView>) {
    if !gallery.is_open() {
        return;
    }

    // Collect first: navigating requests a repaint, which needs the context
    let keys: Vec<GalleryKey> = ctx.input(|i| {
        [
            (Key::Escape, GalleryKey::Escape),
            (Key::ArrowLeft, GalleryKey::ArrowLeft),
            (Key::ArrowRight, GalleryKey::ArrowRight),
        ]
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, gallery_key)| gallery_key)
        .collect()
    });
    for key in keys {
        gallery.handle_key(key);
    }
    if !gallery.is_open() {
        return;
    }

    let mut open = gallery.is_open();
    let title = format!("Gallery ({} / {})", gallery.current_index() + 1, images.len());

    egui::Window::new(title)
        .id(egui::Id::new("gallery_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .default_width(640.0)
        .show(ctx, |ui| {
            let text = ui.visuals().strong_text_color();
            view.show(ui, gallery.carousel_mut(), images, |painter, rect, index, image| {
                paint_tile(painter, rect, image, tile_color(index), text);
            });
        });

    if !open {
        gallery.close();
    }
}
