//! Project filter buttons and card styling

use std::time::Instant;

use egui::{Color32, RichText, Ui};
use pf_core::{CardVisibility, Filter, ProjectFilter};

/// Show the "All" button followed by one button per category.
///
/// Applies the clicked filter and returns it.
pub fn filter_bar(ui: &mut Ui, filter: &mut ProjectFilter, now: Instant) -> Option<Filter> {
    let counts = filter.category_counts();
    let mut options = vec![(Filter::All, format!("All ({})", filter.cards().len()))];
    for category in filter.categories() {
        let count = counts.get(&category).copied().unwrap_or(0);
        let label = format!("{} ({})", category, count);
        options.push((Filter::Category(category), label));
    }

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for (option, label) in options {
            let selected = filter.active() == &option;
            if ui.selectable_label(selected, label).clicked() && !selected {
                clicked = Some(option);
            }
        }
    });

    if let Some(option) = &clicked {
        filter.apply(option.clone(), now);
    }
    clicked
}

/// Fade a color the way a filtered-out card fades
pub fn card_color(color: Color32, visibility: CardVisibility, opacity: f32) -> Color32 {
    match visibility {
        CardVisibility::Hidden => Color32::TRANSPARENT,
        _ => color.linear_multiply(opacity),
    }
}

/// Card title text at the given opacity
pub fn card_title(title: &str, color: Color32, opacity: f32) -> RichText {
    RichText::new(title).strong().size(16.0).color(color.linear_multiply(opacity))
}
