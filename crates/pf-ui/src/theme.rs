//! Page theme: dark and light visuals

use std::collections::BTreeMap;

use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Colors for one theme variant
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub hover: Color32,
    pub active: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub border: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(23, 23, 23),
            panel: Color32::from_rgb(31, 31, 31),
            card: Color32::from_rgb(40, 40, 40),
            hover: Color32::from_rgb(50, 50, 50),
            active: Color32::from_rgb(60, 60, 60),
            text: Color32::from_rgb(220, 220, 220),
            text_secondary: Color32::from_rgb(160, 160, 160),
            border: Color32::from_rgb(70, 70, 70),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 250),
            panel: Color32::from_rgb(255, 255, 255),
            card: Color32::from_rgb(241, 243, 246),
            hover: Color32::from_rgb(228, 231, 236),
            active: Color32::from_rgb(214, 219, 226),
            text: Color32::from_rgb(30, 30, 35),
            text_secondary: Color32::from_rgb(100, 104, 112),
            border: Color32::from_rgb(200, 204, 210),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Apply the page theme for the given mode
pub fn apply_theme(ctx: &Context, dark_mode: bool) {
    let palette = Palette::for_mode(dark_mode);
    let mut style = Style::default();
    let mut visuals = if dark_mode { Visuals::dark() } else { Visuals::light() };
    let accent = accent_color();

    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.panel;
    visuals.extreme_bg_color = palette.background;
    visuals.faint_bg_color = palette.card;

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
    ] {
        widget.bg_fill = palette.card;
        widget.bg_stroke = Stroke::new(1.0, palette.border);
        widget.fg_stroke = Stroke::new(1.0, palette.text);
        widget.rounding = Rounding::same(6.0);
    }

    visuals.widgets.hovered.bg_fill = palette.hover;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_fill = palette.active;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(26.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

pub fn success_color() -> Color32 {
    Color32::from_rgb(76, 175, 80)
}
