//! Rotation state and its pure transitions

use serde::{Deserialize, Serialize};

use super::{IndicatorSet, WrapPolicy};

/// Index into a fixed-size collection shown through a window of
/// `viewport_size` items.
///
/// Transitions consume the state and return the next one, so they can be
/// tested without any render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRotation")]
pub struct RotationState {
    current_index: usize,
    item_count: usize,
    viewport_size: usize,
    wrap: WrapPolicy,
}

/// Serialized form; normalized on the way in so a stored index can never
/// land outside the valid range
#[derive(Deserialize)]
struct StoredRotation {
    current_index: usize,
    item_count: usize,
    viewport_size: usize,
    #[serde(default)]
    wrap: WrapPolicy,
}

impl From<StoredRotation> for RotationState {
    fn from(stored: StoredRotation) -> Self {
        let index = isize::try_from(stored.current_index).unwrap_or(isize::MAX);
        Self::with_policy(stored.item_count, stored.viewport_size, stored.wrap).go_to(index)
    }
}

impl RotationState {
    /// Create a wrapping state positioned at the first item
    pub fn new(item_count: usize, viewport_size: usize) -> Self {
        Self::with_policy(item_count, viewport_size, WrapPolicy::Wrap)
    }

    /// Create a state with an explicit wrap policy
    pub fn with_policy(item_count: usize, viewport_size: usize, wrap: WrapPolicy) -> Self {
        Self {
            current_index: 0,
            item_count,
            viewport_size: viewport_size.max(1),
            wrap,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn viewport_size(&self) -> usize {
        self.viewport_size
    }

    pub fn wrap_policy(&self) -> WrapPolicy {
        self.wrap
    }

    /// More than one item visible at a time
    pub fn is_windowed(&self) -> bool {
        self.viewport_size > 1
    }

    pub fn has_items(&self) -> bool {
        self.item_count > 0
    }

    /// Number of distinct positions the index can take.
    ///
    /// Zero for an empty collection, and never less than one otherwise, even
    /// when the window is wider than the collection.
    pub fn position_count(&self) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        self.item_count.saturating_sub(self.viewport_size) + 1
    }

    /// Whether there is more than one position to move between
    pub fn is_navigable(&self) -> bool {
        self.position_count() > 1
    }

    /// Move to `index`, normalized into the valid range
    pub fn go_to(self, index: isize) -> Self {
        Self {
            current_index: self.normalize(index),
            ..self
        }
    }

    pub fn next(self) -> Self {
        let index = self.signed_index();
        self.go_to(index.saturating_add(1))
    }

    pub fn prev(self) -> Self {
        let index = self.signed_index();
        self.go_to(index.saturating_sub(1))
    }

    /// Change the window size and bring the index back into range
    pub fn reconfigure(self, viewport_size: usize) -> Self {
        let resized = Self {
            viewport_size: viewport_size.max(1),
            ..self
        };
        resized.go_to(self.signed_index())
    }

    /// Horizontal offset of the item strip in percent of the container width
    pub fn offset_percent(&self) -> f32 {
        if !self.has_items() {
            return 0.0;
        }

        let index = self.current_index as f32;
        if self.is_windowed() {
            -index * (100.0 / self.viewport_size as f32)
        } else {
            -index * 100.0
        }
    }

    pub fn indicators(&self) -> IndicatorSet {
        IndicatorSet::from_state(self)
    }

    fn signed_index(&self) -> isize {
        isize::try_from(self.current_index).unwrap_or(isize::MAX)
    }

    fn normalize(&self, index: isize) -> usize {
        let count = self.position_count();
        if count == 0 {
            return 0;
        }

        let count = isize::try_from(count).unwrap_or(isize::MAX);
        let normalized = match self.wrap {
            WrapPolicy::Wrap => index.rem_euclid(count),
            WrapPolicy::Clamp => index.clamp(0, count - 1),
        };
        normalized as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_positions(item_count: usize, viewport_size: usize) -> usize {
        std::cmp::max(1, (item_count + 1).saturating_sub(viewport_size))
    }

    #[test]
    fn test_index_stays_in_range_for_any_walk() {
        for item_count in 1..8 {
            for viewport_size in 1..5 {
                let mut state = RotationState::new(item_count, viewport_size);
                let bound = max_positions(item_count, viewport_size);

                // A fixed but irregular walk of next/prev steps
                for step in 0..40 {
                    state = if step % 3 == 0 { state.prev() } else { state.next() };
                    assert!(
                        state.current_index() < bound,
                        "index {} out of range for {} items / {} visible",
                        state.current_index(),
                        item_count,
                        viewport_size
                    );
                }
            }
        }
    }

    #[test]
    fn test_wraps_below_zero_to_last_position() {
        let state = RotationState::new(5, 1).go_to(-1);
        assert_eq!(state.current_index(), 4);

        let windowed = RotationState::new(5, 3).go_to(-1);
        assert_eq!(windowed.current_index(), 2);
    }

    #[test]
    fn test_next_from_last_position_wraps_to_zero() {
        let state = RotationState::new(5, 1).go_to(4).next();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_windowed_sequence() {
        let mut state = RotationState::new(5, 3);
        let mut seen = Vec::new();
        for _ in 0..3 {
            state = state.next();
            seen.push(state.current_index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(RotationState::new(4, 1).go_to(9).current_index(), 1);
        assert_eq!(RotationState::new(4, 1).go_to(-6).current_index(), 2);
    }

    #[test]
    fn test_single_item_is_not_navigable() {
        let state = RotationState::new(1, 1);
        assert!(!state.is_navigable());
        assert_eq!(state.next().current_index(), 0);
        assert_eq!(state.prev().current_index(), 0);
    }

    #[test]
    fn test_window_wider_than_collection() {
        let state = RotationState::new(2, 3);
        assert_eq!(state.position_count(), 1);
        assert_eq!(state.next().current_index(), 0);
        assert_eq!(state.offset_percent(), 0.0);
    }

    #[test]
    fn test_empty_collection_is_inert() {
        let state = RotationState::new(0, 1);
        assert_eq!(state.position_count(), 0);
        assert!(!state.has_items());
        assert_eq!(state.next().current_index(), 0);
        assert_eq!(state.go_to(-3).current_index(), 0);
        assert_eq!(state.offset_percent(), 0.0);
    }

    #[test]
    fn test_offsets() {
        let single = RotationState::new(5, 1).go_to(3);
        assert_eq!(single.offset_percent(), -300.0);

        let windowed = RotationState::new(6, 4).go_to(2);
        assert_eq!(windowed.offset_percent(), -50.0);
    }

    #[test]
    fn test_reconfigure_wraps_index_into_new_range() {
        let state = RotationState::new(5, 1).go_to(4).reconfigure(3);
        assert_eq!(state.viewport_size(), 3);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_reconfigure_is_idempotent() {
        let once = RotationState::new(7, 1).go_to(5).reconfigure(3);
        let twice = once.reconfigure(3);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reconfigure_zero_viewport_is_single_mode() {
        let state = RotationState::new(3, 3).reconfigure(0);
        assert_eq!(state.viewport_size(), 1);
        assert_eq!(state.position_count(), 3);
    }

    #[test]
    fn test_clamp_policy_stops_at_edges() {
        let state = RotationState::with_policy(4, 1, WrapPolicy::Clamp);
        assert_eq!(state.prev().current_index(), 0);
        assert_eq!(state.go_to(10).current_index(), 3);
        assert_eq!(state.go_to(3).next().current_index(), 3);
        assert_eq!(state.go_to(3).reconfigure(2).current_index(), 2);
    }

    #[test]
    fn test_deserialized_state_is_normalized() {
        let state: RotationState = serde_json::from_str(
            r#"{"current_index":9,"item_count":4,"viewport_size":0,"wrap":"Wrap"}"#,
        )
        .unwrap();

        assert_eq!(state.viewport_size(), 1);
        assert!(state.current_index() < state.position_count());
        assert_eq!(state.current_index(), 1);

        let clamped: RotationState = serde_json::from_str(
            r#"{"current_index":9,"item_count":5,"viewport_size":3,"wrap":"Clamp"}"#,
        )
        .unwrap();
        assert_eq!(clamped.current_index(), 2);
    }

    #[test]
    fn test_serialized_state_reloads_unchanged() {
        let state = RotationState::new(6, 2).go_to(3);
        let json = serde_json::to_string(&state).unwrap();
        let reloaded: RotationState = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, state);
    }
}
