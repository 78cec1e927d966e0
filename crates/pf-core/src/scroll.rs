//! Scroll tracking: active navigation link and reveal-once animations

use serde::{Deserialize, Serialize};

/// Vertical extent of a page section, in page coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Tracks which section the navigation bar should highlight
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    sections: Vec<SectionBounds>,
}

impl ScrollSpy {
    pub fn new(sections: Vec<SectionBounds>) -> Self {
        Self { sections }
    }

    /// Replace the measured sections (after layout changes)
    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    /// The last section whose top, less a third of its height, has been
    /// scrolled past
    pub fn active(&self, scroll_y: f32) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .find(|section| scroll_y >= section.top - section.height / 3.0)
            .map(|section| section.id.as_str())
    }
}

/// Reveals elements the first time they scroll into view and keeps them
/// revealed
#[derive(Debug, Clone)]
pub struct RevealTracker {
    tops: Vec<f32>,
    revealed: Vec<bool>,
    offset: f32,
}

impl RevealTracker {
    /// `offset` is how far above the bottom edge an element must be
    pub fn new(tops: Vec<f32>, offset: f32) -> Self {
        let revealed = vec![false; tops.len()];
        Self {
            tops,
            revealed,
            offset,
        }
    }

    /// Update element positions, keeping already revealed ones revealed
    pub fn set_tops(&mut self, tops: Vec<f32>) {
        self.revealed.resize(tops.len(), false);
        self.tops = tops;
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Reveal everything above the trigger line. Returns newly revealed
    /// indices.
    pub fn update(&mut self, scroll_y: f32, viewport_height: f32) -> Vec<usize> {
        let trigger = scroll_y + viewport_height - self.offset;
        let mut newly = Vec::new();

        for (index, (top, revealed)) in self.tops.iter().zip(self.revealed.iter_mut()).enumerate() {
            if !*revealed && *top <= trigger {
                *revealed = true;
                newly.push(index);
            }
        }
        newly
    }
}
