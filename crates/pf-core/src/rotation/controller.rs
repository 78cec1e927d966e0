//! Rotation controller implementation

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::debug;

use super::{RenderFrame, RenderTarget, RotationState, WrapPolicy};

/// Shared handle over one rotation state.
///
/// Cloning the controller clones the handle, not the state: an auto-advance
/// timer and the UI both hold a clone and drive the same index. Every
/// mutation funnels through [`RotationController::go_to`] or
/// [`RotationController::reconfigure`], and the new frame is pushed to the
/// render targets before the call returns.
#[derive(Clone)]
pub struct RotationController {
    state: Arc<RwLock<RotationState>>,
    targets: Arc<RwLock<Vec<Weak<dyn RenderTarget>>>>,
}

impl RotationController {
    /// Create a wrapping controller
    pub fn new(item_count: usize, viewport_size: usize) -> Self {
        Self::from_state(RotationState::new(item_count, viewport_size))
    }

    /// Create a controller with an explicit wrap policy
    pub fn with_policy(item_count: usize, viewport_size: usize, wrap: WrapPolicy) -> Self {
        Self::from_state(RotationState::with_policy(item_count, viewport_size, wrap))
    }

    pub fn from_state(state: RotationState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            targets: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RotationState {
        *self.state.read()
    }

    pub fn current_index(&self) -> usize {
        self.state.read().current_index()
    }

    /// Whether navigation affordances should be offered
    pub fn show_controls(&self) -> bool {
        self.state.read().is_navigable()
    }

    /// Navigate to a position; out-of-range input is normalized, never rejected.
    ///
    /// Returns the resulting index.
    pub fn go_to(&self, index: isize) -> usize {
        self.transition(|state| state.go_to(index), true)
    }

    pub fn next(&self) -> usize {
        self.transition(RotationState::next, true)
    }

    pub fn prev(&self) -> usize {
        self.transition(RotationState::prev, true)
    }

    /// Apply a new window size (after a resize) without animating the jump
    pub fn reconfigure(&self, viewport_size: usize) -> usize {
        self.transition(|state| state.reconfigure(viewport_size), false)
    }

    /// Attach a render target; it is held weakly and dropped once released
    pub fn add_target(&self, target: Arc<dyn RenderTarget>) {
        self.targets.write().push(Arc::downgrade(&target));
    }

    /// Push the current state to all targets without changing it
    pub fn render(&self) {
        let state = self.state();
        self.notify_targets(&state, false);
    }

    fn transition(&self, f: impl FnOnce(RotationState) -> RotationState, animate: bool) -> usize {
        let mut state = self.state.write();
        let previous = *state;
        let next = f(previous);
        *state = next;
        drop(state);

        if next != previous {
            debug!(
                "Rotation {} -> {} ({} items, {} visible)",
                previous.current_index(),
                next.current_index(),
                next.item_count(),
                next.viewport_size()
            );
            self.notify_targets(&next, animate);
        }

        next.current_index()
    }

    fn notify_targets(&self, state: &RotationState, animate: bool) {
        // Nothing to draw for an empty collection
        if !state.has_items() {
            return;
        }

        let frame = RenderFrame::from_state(state, animate);

        // Upgrade under the lock, render outside it so targets may call back in
        let live: Vec<Arc<dyn RenderTarget>> = {
            let mut targets = self.targets.write();
            targets.retain(|weak| weak.strong_count() > 0);
            targets.iter().filter_map(Weak::upgrade).collect()
        };

        for target in live {
            target.render(&frame);
        }
    }
}

impl fmt::Debug for RotationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationController")
            .field("state", &*self.state.read())
            .field("targets", &self.targets.read().len())
            .finish()
    }
}
