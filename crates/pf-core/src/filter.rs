//! Project filtering
//!
//! Cards that no longer match the active filter fade out first and are only
//! hidden once the fade has had time to play.

use std::time::{Duration, Instant};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A project card on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub category: String,
    /// Images shown in the card's slider
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProjectCard {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            images: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }
}

/// Which cards to show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => wanted == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category,
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }
}

/// Display state of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Visible,
    /// Transparent and slightly shrunk, still taking up space
    FadingOut { since: Instant },
    /// Removed from the layout
    Hidden,
}

impl CardVisibility {
    pub fn opacity(&self) -> f32 {
        match self {
            CardVisibility::Visible => 1.0,
            CardVisibility::FadingOut { .. } | CardVisibility::Hidden => 0.0,
        }
    }

    pub fn scale(&self) -> f32 {
        match self {
            CardVisibility::Visible => 1.0,
            CardVisibility::FadingOut { .. } | CardVisibility::Hidden => 0.95,
        }
    }

    /// Whether the card still occupies layout space
    pub fn in_layout(&self) -> bool {
        !matches!(self, CardVisibility::Hidden)
    }
}

/// Filterable grid of project cards
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    cards: Vec<ProjectCard>,
    states: Vec<CardVisibility>,
    active: Filter,
    hide_delay: Duration,
}

impl ProjectFilter {
    pub fn new(cards: Vec<ProjectCard>, hide_delay: Duration) -> Self {
        let states = vec![CardVisibility::Visible; cards.len()];
        Self {
            cards,
            states,
            active: Filter::All,
            hide_delay,
        }
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn active(&self) -> &Filter {
        &self.active
    }

    pub fn visibility(&self, index: usize) -> Option<CardVisibility> {
        self.states.get(index).copied()
    }

    /// Switch filters: matching cards show immediately, the rest start fading
    pub fn apply(&mut self, filter: Filter, now: Instant) {
        debug!("Applying project filter '{}'", filter.label());

        for (card, state) in self.cards.iter().zip(self.states.iter_mut()) {
            if filter.matches(&card.category) {
                *state = CardVisibility::Visible;
            } else if *state == CardVisibility::Visible {
                *state = CardVisibility::FadingOut { since: now };
            }
        }
        self.active = filter;
    }

    /// Hide cards whose fade has finished. Returns the newly hidden indices.
    pub fn settle(&mut self, now: Instant) -> Vec<usize> {
        let mut hidden = Vec::new();
        for (index, state) in self.states.iter_mut().enumerate() {
            if let CardVisibility::FadingOut { since } = *state {
                if now.saturating_duration_since(since) >= self.hide_delay {
                    *state = CardVisibility::Hidden;
                    hidden.push(index);
                }
            }
        }
        hidden
    }

    /// Whether any card is still mid-fade
    pub fn is_settling(&self) -> bool {
        self.states
            .iter()
            .any(|state| matches!(state, CardVisibility::FadingOut { .. }))
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CardVisibility::Visible)
            .map(|(index, _)| index)
            .collect()
    }

    /// Distinct categories in first-seen order, for the filter buttons
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.category) {
                seen.push(card.category.clone());
            }
        }
        seen
    }

    pub fn category_counts(&self) -> AHashMap<String, usize> {
        let mut counts = AHashMap::new();
        for card in &self.cards {
            *counts.entry(card.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}
