//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use eframe::egui::{self, Align, Align2, Color32, Context, RichText, Sense, Ui, Vec2};
use parking_lot::RwLock;
use tracing::{info, warn};

use pf_core::{
    Carousel, ContactForm, Gallery, JsonFileStore, PortfolioConfig, ProjectFilter,
    ResizeDebouncer, RevealTracker, ScrollSpy, SectionBounds, ThemePreference, Typewriter,
    TypewriterDriver,
};
use pf_ui::{
    apply_theme, card_color, card_title, filter_bar, gallery_modal, icons, paint_tile,
    tile_color, typewriter_label, CarouselView, CarouselViewConfig, Palette,
};

mod content;

use content::{PortfolioContent, Testimonial};

/// Window width assumed until the first resize settles
const INITIAL_WIDTH: f32 = 1200.0;

/// Page sections in display order: (anchor, nav label)
const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("testimonials", "Testimonials"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

/// Image slider inside one project card
struct ProjectSlider {
    carousel: Carousel,
    view: Arc<CarouselView>,
}

/// Transient message box after a contact form submit
struct Notice {
    text: String,
    success: bool,
    expires: Instant,
}

/// Main application state
struct PortfolioApp {
    content: PortfolioContent,

    theme: ThemePreference,

    testimonials: Carousel,
    testimonials_view: Arc<CarouselView>,

    sliders: Vec<ProjectSlider>,

    gallery: Gallery,
    gallery_view: Arc<CarouselView>,

    filter: ProjectFilter,

    typewriter: Arc<RwLock<Typewriter>>,
    typewriter_driver: TypewriterDriver,

    resize: ResizeDebouncer,
    scroll_spy: ScrollSpy,
    reveal: RevealTracker,
    active_section: Option<String>,
    pending_scroll: Option<&'static str>,

    contact: ContactForm,
    notice: Option<Notice>,

    /// Dropped last so timer tasks are aborted while it is still alive
    _runtime: tokio::runtime::Runtime,
}

impl PortfolioApp {
    fn new(cc: &eframe::CreationContext<'_>, config: PortfolioConfig, runtime: tokio::runtime::Runtime) -> Self {
        let ctx = &cc.egui_ctx;
        let handle = runtime.handle().clone();
        let content = PortfolioContent::demo();

        // Follow the system theme until the user picks one
        let system_dark = cc.integration_info.system_theme == Some(eframe::Theme::Dark);
        let theme = ThemePreference::load_with_fallback(
            Box::new(JsonFileStore::new(&config.preference_path)),
            system_dark,
        );
        apply_theme(ctx, theme.is_dark());

        let testimonials = Carousel::testimonials(content.testimonials.len(), &config, INITIAL_WIDTH, handle.clone());
        let testimonials_view = CarouselView::new(ctx, "testimonials");
        testimonials_view.attach(&testimonials);

        let sliders = content
            .projects
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let carousel = Carousel::project_slider(project.images.len())
                    .with_swipe_threshold(config.swipe_threshold);
                let view = CarouselView::with_config(
                    ctx,
                    ("project_slider", index),
                    CarouselViewConfig {
                        height: 110.0,
                        item_spacing: 4.0,
                        ..CarouselViewConfig::default()
                    },
                );
                view.attach(&carousel);
                ProjectSlider { carousel, view }
            })
            .collect();

        let mut gallery = Gallery::new(content.gallery.len());
        if let Some(interval) = config.gallery_auto_advance() {
            gallery = gallery.with_auto_advance(interval, handle.clone());
        }
        let gallery_view = CarouselView::with_config(
            ctx,
            "gallery",
            CarouselViewConfig {
                height: 360.0,
                ..CarouselViewConfig::default()
            },
        );
        gallery_view.attach(gallery.carousel());

        let filter = ProjectFilter::new(content.projects.clone(), config.filter_hide_delay());

        let typewriter = Arc::new(RwLock::new(Typewriter::new(
            config.typewriter.phrases.clone(),
            config.typewriter.timing(),
        )));
        let repaint_ctx = ctx.clone();
        let mut typewriter_driver = TypewriterDriver::new(typewriter.clone(), handle)
            .with_on_tick(Arc::new(move || repaint_ctx.request_repaint()));
        typewriter_driver.start();

        let reveal = RevealTracker::new(Vec::new(), config.reveal_offset_px);
        let resize = ResizeDebouncer::new(config.resize_debounce());

        Self {
            content,
            theme,
            testimonials,
            testimonials_view,
            sliders,
            gallery,
            gallery_view,
            filter,
            typewriter,
            typewriter_driver,
            resize,
            scroll_spy: ScrollSpy::default(),
            reveal,
            active_section: None,
            pending_scroll: None,
            contact: ContactForm::default(),
            notice: None,
            _runtime: runtime,
        }
    }

    fn palette(&self) -> Palette {
        Palette::for_mode(self.theme.is_dark())
    }

    /// Debounced window resize → carousel window size
    fn handle_resize(&mut self, ctx: &Context, now: Instant) {
        self.resize.push(ctx.screen_rect().width(), now);
        if let Some(width) = self.resize.poll(now) {
            let visible = self.testimonials.resize(width);
            info!("Window width {:.0}px: {} testimonials visible", width, visible);
        }
        if self.resize.is_pending() {
            ctx.request_repaint_after(self.resize.delay());
        }
    }

    fn nav_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&self.content.name).strong().size(18.0));
            ui.separator();

            for (anchor, label) in SECTIONS {
                let active = self.active_section.as_deref() == Some(anchor);
                if ui.selectable_label(active, label).clicked() {
                    self.pending_scroll = Some(anchor);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                let (icon, hover) = if self.theme.is_dark() {
                    (icons::SUN, "Switch to light mode")
                } else {
                    (icons::MOON, "Switch to dark mode")
                };
                if ui.button(icon).on_hover_text(hover).clicked() {
                    let dark = self.theme.toggle();
                    apply_theme(ui.ctx(), dark);
                }
            });
        });
    }

    /// Draw every section and measure where each one landed
    fn sections(&mut self, ui: &mut Ui) -> Vec<SectionBounds> {
        let origin = ui.min_rect().top();
        let mut bounds = Vec::with_capacity(SECTIONS.len());

        for (index, (anchor, title)) in SECTIONS.iter().enumerate() {
            if self.pending_scroll == Some(*anchor) {
                ui.scroll_to_cursor(Some(Align::TOP));
                self.pending_scroll = None;
            }

            let top = ui.cursor().top() - origin;
            let reveal = ui.ctx().animate_bool_with_time(
                egui::Id::new(("reveal", *anchor)),
                self.reveal.is_revealed(index),
                0.8,
            );

            ui.add_space(24.0);
            let heading = self.palette().text.linear_multiply(reveal);
            ui.heading(RichText::new(*title).color(heading));
            ui.add_space(8.0);

            match *anchor {
                "home" => self.home_section(ui),
                "about" => {
                    ui.label(self.content.about.as_str());
                }
                "projects" => self.projects_section(ui),
                "testimonials" => self.testimonials_section(ui),
                "gallery" => self.gallery_section(ui),
                "contact" => self.contact_section(ui),
                _ => {}
            }

            ui.add_space(24.0);
            ui.separator();
            let height = ui.cursor().top() - origin - top;
            bounds.push(SectionBounds::new(*anchor, top, height));
        }

        bounds
    }

    fn home_section(&mut self, ui: &mut Ui) {
        ui.label(RichText::new(format!("Hi, I'm {}", self.content.name)).size(32.0).strong());
        let text = self.typewriter.read().text();
        if typewriter_label(ui, &text, pf_ui::accent_color())
            .on_hover_text("Click to replay")
            .clicked()
        {
            self.typewriter_driver.restart();
        }
    }

    fn projects_section(&mut self, ui: &mut Ui) {
        if let Some(filter) = filter_bar(ui, &mut self.filter, Instant::now()) {
            info!("Showing projects: {}", filter.label());
        }
        ui.add_space(8.0);

        let palette = self.palette();
        let now_hidden: Vec<bool> = (0..self.filter.cards().len())
            .map(|index| self.filter.visibility(index).map_or(true, |v| !v.in_layout()))
            .collect();

        ui.horizontal_wrapped(|ui| {
            for (index, card) in self.filter.cards().iter().enumerate() {
                if now_hidden[index] {
                    continue;
                }
                let Some(visibility) = self.filter.visibility(index) else {
                    continue;
                };
                let opacity = ui.ctx().animate_value_with_time(
                    egui::Id::new(("card_opacity", index)),
                    visibility.opacity(),
                    0.3,
                );
                let scale = visibility.scale();

                egui::Frame::group(ui.style())
                    .fill(card_color(palette.card, visibility, opacity))
                    .show(ui, |ui| {
                        ui.set_width(260.0 * scale);
                        ui.label(card_title(&card.title, palette.text, opacity));
                        ui.label(
                            RichText::new(&card.category)
                                .small()
                                .color(palette.text_secondary.linear_multiply(opacity)),
                        );

                        if let Some(slider) = self.sliders.get_mut(index) {
                            slider.view.show(ui, &mut slider.carousel, &card.images, |painter, rect, image_index, image| {
                                let fill = tile_color(image_index).linear_multiply(opacity);
                                paint_tile(painter, rect, image, fill, Color32::WHITE.linear_multiply(opacity));
                            });
                        }
                    });
            }
        });
    }

    fn testimonials_section(&mut self, ui: &mut Ui) {
        let palette = self.palette();
        let items: &[Testimonial] = &self.content.testimonials;
        self.testimonials_view.show(ui, &mut self.testimonials, items, |painter, rect, _, testimonial| {
            painter.rect_filled(rect, egui::Rounding::same(10.0), palette.card);
            painter.text(
                rect.center() - Vec2::new(0.0, 14.0),
                Align2::CENTER_CENTER,
                format!("\u{201c}{}\u{201d}", testimonial.quote),
                egui::FontId::proportional(14.0),
                palette.text,
            );
            painter.text(
                rect.center() + Vec2::new(0.0, 18.0),
                Align2::CENTER_CENTER,
                &testimonial.author,
                egui::FontId::proportional(12.0),
                palette.text_secondary,
            );
        });
    }

    fn gallery_section(&mut self, ui: &mut Ui) {
        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            for (index, image) in self.content.gallery.iter().enumerate() {
                let (rect, response) = ui.allocate_exact_size(Vec2::new(150.0, 100.0), Sense::click());
                let fill = if response.hovered() {
                    tile_color(index)
                } else {
                    tile_color(index).linear_multiply(0.8)
                };
                paint_tile(ui.painter(), rect, image, fill, Color32::WHITE);
                if response.clicked() {
                    clicked = Some(index);
                }
            }
        });

        if let Some(index) = clicked {
            self.gallery.open(index);
        }
    }

    fn contact_section(&mut self, ui: &mut Ui) {
        egui::Grid::new("contact_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut self.contact.name);
            ui.end_row();

            ui.label("Email");
            ui.text_edit_singleline(&mut self.contact.email);
            ui.end_row();

            ui.label("Message");
            ui.text_edit_multiline(&mut self.contact.message);
            ui.end_row();
        });

        if ui.button("Send message").clicked() {
            let now = Instant::now();
            self.notice = Some(match self.contact.validate() {
                Ok(()) => {
                    info!("Contact form from {} ready for the mail relay", self.contact.email);
                    self.contact.reset();
                    Notice {
                        text: "Message sent successfully!".to_string(),
                        success: true,
                        expires: now + Duration::from_secs(3),
                    }
                }
                Err(e) => {
                    warn!("Contact form rejected: {}", e);
                    Notice {
                        text: format!("Oops! {}. Please try again.", e),
                        success: false,
                        expires: now + Duration::from_secs(5),
                    }
                }
            });
        }
    }

    fn show_notice(&mut self, ctx: &Context, now: Instant) {
        let Some(notice) = &self.notice else {
            return;
        };
        if now >= notice.expires {
            self.notice = None;
            return;
        }

        let color = if notice.success {
            pf_ui::success_color()
        } else {
            pf_ui::error_color()
        };
        egui::Area::new("contact_notice")
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-16.0, -16.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).fill(color).show(ui, |ui| {
                    ui.label(RichText::new(&notice.text).color(Color32::WHITE).strong());
                });
            });
        ctx.request_repaint_after(notice.expires.saturating_duration_since(now));
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.handle_resize(ctx, now);

        self.filter.settle(now);
        if self.filter.is_settling() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        gallery_modal(ctx, &mut self.gallery, &self.content.gallery, &self.gallery_view);

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| self.nav_bar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let output = egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.sections(ui));

            let scroll_y = output.state.offset.y;
            let viewport_height = output.inner_rect.height();

            let tops = output.inner.iter().map(|section| section.top).collect();
            self.reveal.set_tops(tops);
            self.reveal.update(scroll_y, viewport_height);

            self.scroll_spy.set_sections(output.inner);
            self.active_section = self.scroll_spy.active(scroll_y).map(str::to_string);
        });

        self.show_notice(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.typewriter_driver.stop();
        info!("Shutting down");
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("portfolio.json"));
    let config = PortfolioConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    info!("Starting portfolio");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        options,
        Box::new(move |cc| Box::new(PortfolioApp::new(cc, config, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
