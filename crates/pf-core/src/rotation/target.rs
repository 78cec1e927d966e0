//! Render target trait

use super::RenderFrame;

/// Trait for surfaces that draw a rotation controller's state
pub trait RenderTarget: Send + Sync {
    /// Called after every state change with the frame to display
    fn render(&self, frame: &RenderFrame);
}
