//! Bounded rotation over a fixed-size collection
//!
//! Carousels, image sliders and the gallery lightbox all share the same
//! contract: an index that wraps around a fixed number of positions, a
//! positional offset for the render surface, and a set of indicator flags.

use serde::{Deserialize, Serialize};

mod controller;
mod state;
mod target;

pub use controller::RotationController;
pub use state::RotationState;
pub use target::RenderTarget;

/// What happens when navigation runs past either end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WrapPolicy {
    /// Cycle to the opposite end
    #[default]
    Wrap,
    /// Stop at the first or last position
    Clamp,
}

/// Position indicator flags, one per reachable position.
///
/// Empty when there is nothing to navigate between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndicatorSet(Vec<bool>);

impl IndicatorSet {
    /// Derive the indicators for a rotation state
    pub fn from_state(state: &RotationState) -> Self {
        if !state.is_navigable() {
            return Self::default();
        }

        let current = state.current_index();
        Self((0..state.position_count()).map(|i| i == current).collect())
    }

    /// Index of the active indicator, if any
    pub fn active_index(&self) -> Option<usize> {
        self.0.iter().position(|active| *active)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Everything the presentation layer needs to draw one rotation state
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Index of the first visible item
    pub current_index: usize,

    /// Horizontal offset of the item strip, in percent of the container width
    pub offset_percent: f32,

    /// Active flags for the position dots
    pub indicators: IndicatorSet,

    /// Whether the move should be animated (false after a resize)
    pub animate: bool,

    /// Whether prev/next affordances and dots should be shown
    pub show_controls: bool,

    /// Number of items visible at once
    pub viewport_size: usize,
}

impl RenderFrame {
    /// Build a frame from a state snapshot
    pub fn from_state(state: &RotationState, animate: bool) -> Self {
        Self {
            current_index: state.current_index(),
            offset_percent: state.offset_percent(),
            indicators: IndicatorSet::from_state(state),
            animate,
            show_controls: state.is_navigable(),
            viewport_size: state.viewport_size(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators_follow_index() {
        let state = RotationState::new(4, 1).go_to(2);
        let indicators = IndicatorSet::from_state(&state);

        assert_eq!(indicators.as_slice(), &[false, false, true, false]);
        assert_eq!(indicators.active_index(), Some(2));
    }

    #[test]
    fn test_indicators_count_windows() {
        let state = RotationState::new(5, 3);
        assert_eq!(IndicatorSet::from_state(&state).len(), 3);
    }

    #[test]
    fn test_indicators_empty_when_inert() {
        assert!(IndicatorSet::from_state(&RotationState::new(1, 1)).is_empty());
        assert!(IndicatorSet::from_state(&RotationState::new(0, 1)).is_empty());
        assert!(IndicatorSet::from_state(&RotationState::new(2, 3)).is_empty());
    }

    #[test]
    fn test_frame_hides_controls_for_single_item() {
        let frame = RenderFrame::from_state(&RotationState::new(1, 1), true);
        assert!(!frame.show_controls);
        assert_eq!(frame.offset_percent, 0.0);
    }
}
