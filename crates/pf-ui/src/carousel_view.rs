//! Carousel widget
//!
//! Draws a [`Carousel`] as a horizontally translated strip of items with
//! prev/next buttons and position dots. The view is a [`RenderTarget`]: the
//! controller pushes frames into it (also from the auto-advance task) and the
//! view asks egui for a repaint.

use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use egui::{Color32, Id, Painter, Pos2, Rect, Rounding, Sense, Ui, Vec2};
use parking_lot::RwLock;
use pf_core::{Carousel, RenderFrame, RenderTarget};
use tracing::trace;

use crate::theme::accent_color;

/// Carousel view configuration
#[derive(Debug, Clone)]
pub struct CarouselViewConfig {
    /// Height of the item strip
    pub height: f32,

    /// Gap between neighbouring items
    pub item_spacing: f32,

    /// Slide transition time in seconds
    pub transition_secs: f32,

    pub dot_radius: f32,

    pub dot_color: Color32,
}

impl Default for CarouselViewConfig {
    fn default() -> Self {
        Self {
            height: 180.0,
            item_spacing: 16.0,
            transition_secs: 0.5,
            dot_radius: 5.0,
            dot_color: Color32::from_gray(120),
        }
    }
}

/// Render surface for one carousel
pub struct CarouselView {
    id: Id,
    ctx: egui::Context,
    config: CarouselViewConfig,
    frame: RwLock<Option<RenderFrame>>,
    // Bumped on every non-animated frame so the offset jumps instead of sliding
    jump_generation: AtomicU64,
}

impl CarouselView {
    pub fn new(ctx: &egui::Context, id_source: impl Hash) -> Arc<Self> {
        Self::with_config(ctx, id_source, CarouselViewConfig::default())
    }

    pub fn with_config(ctx: &egui::Context, id_source: impl Hash, config: CarouselViewConfig) -> Arc<Self> {
        Arc::new(Self {
            id: Id::new(id_source),
            ctx: ctx.clone(),
            config,
            frame: RwLock::new(None),
            jump_generation: AtomicU64::new(0),
        })
    }

    /// Subscribe to a carousel and draw its initial state
    pub fn attach(self: &Arc<Self>, carousel: &Carousel) {
        carousel.controller().add_target(self.clone());
        carousel.controller().render();
    }

    pub fn config(&self) -> &CarouselViewConfig {
        &self.config
    }

    /// Show the carousel, drawing each item with `draw_item`
    pub fn show<T>(
        &self,
        ui: &mut Ui,
        carousel: &mut Carousel,
        items: &[T],
        mut draw_item: impl FnMut(&Painter, Rect, usize, &T),
    ) -> egui::Response {
        let frame = self
            .frame
            .read()
            .clone()
            .unwrap_or_else(|| RenderFrame::from_state(&carousel.state(), false));

        let width = ui.available_width().max(1.0);
        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, self.config.height), Sense::click_and_drag());

        if items.is_empty() {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Nothing to show yet",
                egui::FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
            return response;
        }

        let offset = self.animated_offset(frame.offset_percent / 100.0 * width, frame.animate);
        let slot = width / frame.viewport_size.max(1) as f32;
        let painter = ui.painter_at(rect);

        for (index, item) in items.iter().enumerate() {
            let left = rect.left() + index as f32 * slot + offset;
            let item_rect = Rect::from_min_size(Pos2::new(left, rect.top()), Vec2::new(slot, rect.height()))
                .shrink2(Vec2::new(self.config.item_spacing / 2.0, 0.0));
            if item_rect.intersects(rect) {
                draw_item(&painter, item_rect, index, item);
            }
        }

        // Swipe / drag gestures
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                carousel.swipe_begin(pos.x);
            }
        }
        if response.drag_released() {
            match ui.input(|i| i.pointer.latest_pos()) {
                Some(pos) if rect.contains(pos) => {
                    if let Some(direction) = carousel.swipe_end(pos.x) {
                        trace!("Carousel swipe: {:?}", direction);
                    }
                }
                _ => carousel.swipe_cancel(),
            }
        }

        let mut focused = false;
        if frame.show_controls {
            focused |= self.show_arrows(ui, rect, carousel);
            focused |= self.show_dots(ui, &frame, carousel);
        }

        // Pause auto-advance while the pointer is over the carousel or a
        // control has keyboard focus
        carousel.set_engaged(ui.rect_contains_pointer(rect), focused);

        response
    }

    fn animated_offset(&self, target: f32, animate: bool) -> f32 {
        let generation = self.jump_generation.load(Ordering::Relaxed);
        let id = self.id.with(("offset", generation));
        let secs = if animate { self.config.transition_secs } else { 0.0 };
        let value = self.ctx.animate_value_with_time(id, target, secs);
        if (value - target).abs() > 0.5 {
            self.ctx.request_repaint();
        }
        value
    }

    /// Returns true if either arrow has keyboard focus
    fn show_arrows(&self, ui: &mut Ui, rect: Rect, carousel: &mut Carousel) -> bool {
        let size = Vec2::splat(32.0);
        let prev_rect = Rect::from_center_size(Pos2::new(rect.left() + 22.0, rect.center().y), size);
        let next_rect = Rect::from_center_size(Pos2::new(rect.right() - 22.0, rect.center().y), size);

        let prev = ui.put(prev_rect, egui::Button::new("◀"));
        if prev.clicked() {
            carousel.prev();
        }
        let next = ui.put(next_rect, egui::Button::new("▶"));
        if next.clicked() {
            carousel.next();
        }
        prev.has_focus() || next.has_focus()
    }

    /// Returns true if a dot has keyboard focus
    fn show_dots(&self, ui: &mut Ui, frame: &RenderFrame, carousel: &mut Carousel) -> bool {
        let radius = self.config.dot_radius;
        let mut focused = false;
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let total = frame.indicators.len() as f32 * (radius * 2.0 + 8.0);
            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

            for (index, active) in frame.indicators.iter().enumerate() {
                let (dot_rect, response) = ui.allocate_exact_size(Vec2::splat(radius * 2.0 + 4.0), Sense::click());
                let color = if active {
                    accent_color()
                } else if response.hovered() {
                    self.config.dot_color.linear_multiply(1.5)
                } else {
                    self.config.dot_color
                };
                ui.painter().circle_filled(dot_rect.center(), radius, color);
                focused |= response.has_focus();

                if response.clicked() {
                    carousel.go_to(isize::try_from(index).unwrap_or(isize::MAX));
                }
            }
        });
        focused
    }
}

impl RenderTarget for CarouselView {
    fn render(&self, frame: &RenderFrame) {
        if !frame.animate {
            self.jump_generation.fetch_add(1, Ordering::Relaxed);
        }
        *self.frame.write() = Some(frame.clone());
        self.ctx.request_repaint();
    }
}

/// Paint a placeholder tile with a centered caption
pub fn paint_tile(painter: &Painter, rect: Rect, caption: &str, fill: Color32, text: Color32) {
    painter.rect_filled(rect, Rounding::same(10.0), fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::FontId::proportional(16.0),
        text,
    );
}

/// A stable, distinct tile color for an item index
pub fn tile_color(index: usize) -> Color32 {
    const HUES: [(u8, u8, u8); 6] = [
        (100, 150, 250),
        (76, 175, 80),
        (230, 180, 80),
        (220, 80, 80),
        (150, 110, 220),
        (60, 180, 190),
    ];
    let (r, g, b) = HUES[index % HUES.len()];
    Color32::from_rgb(r, g, b)
}
