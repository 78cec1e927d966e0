//! Carousels and the gallery lightbox
//!
//! Every rotating widget on the page is a [`Carousel`]: a rotation controller,
//! an optional auto-advance timer, a swipe detector and a viewport rule. The
//! testimonial carousel, the per-project image sliders and the gallery modal
//! only differ in how they are constructed.

use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;

use crate::autoplay::AutoAdvanceTimer;
use crate::config::PortfolioConfig;
use crate::input::{SwipeDetector, SwipeDirection, ViewportRule};
use crate::rotation::{RotationController, RotationState, WrapPolicy};

/// A rotating view over a fixed number of items
#[derive(Debug)]
pub struct Carousel {
    controller: RotationController,
    timer: Option<AutoAdvanceTimer>,
    swipe: SwipeDetector,
    rule: ViewportRule,
    paused: bool,
}

impl Carousel {
    /// Create a wrapping carousel sized for a container of `width`
    pub fn new(item_count: usize, rule: ViewportRule, width: f32) -> Self {
        Self::with_policy(item_count, rule, width, WrapPolicy::Wrap)
    }

    pub fn with_policy(item_count: usize, rule: ViewportRule, width: f32, wrap: WrapPolicy) -> Self {
        let controller = RotationController::with_policy(item_count, rule.resolve(width), wrap);
        Self {
            controller,
            timer: None,
            swipe: SwipeDetector::default(),
            rule,
            paused: false,
        }
    }

    /// The testimonial carousel: responsive window, optional auto-advance
    pub fn testimonials(
        item_count: usize,
        config: &PortfolioConfig,
        width: f32,
        runtime: Handle,
    ) -> Self {
        let carousel = Self::new(item_count, config.viewport_rule(), width)
            .with_swipe_threshold(config.swipe_threshold);
        match config.auto_advance() {
            Some(interval) => carousel.with_auto_advance(interval, runtime),
            None => carousel,
        }
    }

    /// A project's image slider: one image at a time, manual only
    pub fn project_slider(image_count: usize) -> Self {
        Self::new(image_count, ViewportRule::Fixed(1), 0.0)
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe = SwipeDetector::new(threshold);
        self
    }

    /// Advance automatically every `interval`, spawning ticks on `runtime`
    pub fn with_auto_advance(mut self, interval: Duration, runtime: Handle) -> Self {
        let mut timer = AutoAdvanceTimer::new(self.controller.clone(), runtime);
        timer.start(interval);
        self.timer = Some(timer);
        self.sync_timer();
        self
    }

    pub fn controller(&self) -> &RotationController {
        &self.controller
    }

    pub fn state(&self) -> RotationState {
        self.controller.state()
    }

    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    /// Whether prev/next buttons and dots should be shown
    pub fn show_controls(&self) -> bool {
        self.controller.show_controls()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.as_ref().is_some_and(AutoAdvanceTimer::is_running)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) -> usize {
        let index = self.controller.next();
        self.restart_timer();
        index
    }

    pub fn prev(&mut self) -> usize {
        let index = self.controller.prev();
        self.restart_timer();
        index
    }

    /// Jump to a position, e.g. from a dot click
    pub fn go_to(&mut self, index: isize) -> usize {
        let index = self.controller.go_to(index);
        self.restart_timer();
        index
    }

    /// Stop auto-advancing while the pointer or focus is on the carousel
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        if let Some(timer) = self.timer.as_mut() {
            timer.stop();
        }
    }

    /// Resume auto-advancing once the pointer or focus leaves
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.sync_timer();
    }

    /// Pause while the carousel is hovered or one of its controls has
    /// keyboard focus, resume once neither holds
    pub fn set_engaged(&mut self, hovered: bool, focused: bool) {
        if hovered || focused {
            self.pause();
        } else {
            self.resume();
        }
    }

    pub fn swipe_begin(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Drop a gesture that ended outside the carousel
    pub fn swipe_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Finish a swipe, navigating if it was long enough
    pub fn swipe_end(&mut self, x: f32) -> Option<SwipeDirection> {
        let direction = self.swipe.end(x)?;
        match direction {
            SwipeDirection::Advance => self.next(),
            SwipeDirection::Retreat => self.prev(),
        };
        Some(direction)
    }

    /// Apply a new container width.
    ///
    /// Returns the resulting window size.
    pub fn resize(&mut self, width: f32) -> usize {
        let viewport_size = self.rule.resolve(width);
        self.controller.reconfigure(viewport_size);
        self.sync_timer();
        viewport_size
    }

    fn restart_timer(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.reset();
        }
    }

    /// Run the timer only when there is something to rotate and nobody is
    /// hovering.
    fn sync_timer(&mut self) {
        let navigable = self.controller.show_controls();
        let paused = self.paused;
        if let Some(timer) = self.timer.as_mut() {
            if navigable && !paused {
                timer.resume();
            } else {
                timer.stop();
            }
        }
    }
}

/// Keys the gallery lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Lightbox modal over a set of images
#[derive(Debug)]
pub struct Gallery {
    carousel: Carousel,
    open: bool,
}

impl Gallery {
    pub fn new(image_count: usize) -> Self {
        Self {
            carousel: Carousel::project_slider(image_count),
            open: false,
        }
    }

    /// Advance automatically while the lightbox is open
    pub fn with_auto_advance(mut self, interval: Duration, runtime: Handle) -> Self {
        self.carousel = self.carousel.with_auto_advance(interval, runtime);
        if !self.open {
            self.carousel.pause();
        }
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    /// Open on the clicked image. An empty gallery stays closed.
    pub fn open(&mut self, index: usize) -> bool {
        if !self.carousel.state().has_items() {
            return false;
        }

        let index = isize::try_from(index).unwrap_or(isize::MAX);
        self.carousel.go_to(index);
        self.open = true;
        self.carousel.resume();
        debug!("Gallery opened at {}", self.carousel.current_index());
        true
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            self.carousel.pause();
            debug!("Gallery closed");
        }
    }

    pub fn next(&mut self) -> Option<usize> {
        self.open.then(|| self.carousel.next())
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.open.then(|| self.carousel.prev())
    }

    /// Returns true if the key was consumed
    pub fn handle_key(&mut self, key: GalleryKey) -> bool {
        if !self.open {
            return false;
        }
        match key {
            GalleryKey::Escape => self.close(),
            GalleryKey::ArrowLeft => {
                self.carousel.prev();
            }
            GalleryKey::ArrowRight => {
                self.carousel.next();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::time;

    use crate::rotation::testing::RecordingTarget;

    #[test]
    fn test_testimonials_window_follows_width() {
        let mut carousel = Carousel::new(5, ViewportRule::desktop_mobile(), 1200.0);
        assert_eq!(carousel.state().viewport_size(), 3);

        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current_index(), 0);

        carousel.go_to(4);
        assert_eq!(carousel.current_index(), 1);

        assert_eq!(carousel.resize(500.0), 1);
        assert_eq!(carousel.state().position_count(), 5);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_resize_renders_without_animation() {
        let mut carousel = Carousel::new(6, ViewportRule::desktop_mobile(), 500.0);
        let target = Arc::new(RecordingTarget::default());
        carousel.controller().add_target(target.clone());

        carousel.go_to(5);
        carousel.resize(1000.0);
        carousel.resize(1100.0);

        let frames = target.frames();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].animate);
        assert!(!frames[1].animate);
        assert_eq!(frames[1].current_index, 1);
    }

    #[test]
    fn test_swipes_navigate() {
        let mut carousel = Carousel::project_slider(3).with_swipe_threshold(50.0);

        carousel.swipe_begin(400.0);
        assert_eq!(carousel.swipe_end(300.0), Some(SwipeDirection::Advance));
        assert_eq!(carousel.current_index(), 1);

        carousel.swipe_begin(100.0);
        assert_eq!(carousel.swipe_end(400.0), Some(SwipeDirection::Retreat));
        carousel.swipe_begin(100.0);
        assert_eq!(carousel.swipe_end(400.0), Some(SwipeDirection::Retreat));
        assert_eq!(carousel.current_index(), 2);

        carousel.swipe_begin(100.0);
        assert_eq!(carousel.swipe_end(120.0), None);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_cancelled_swipe_does_not_navigate() {
        let mut carousel = Carousel::project_slider(4);

        carousel.swipe_begin(400.0);
        carousel.swipe_cancel();
        assert_eq!(carousel.swipe_end(100.0), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_empty_carousel_hides_controls() {
        let mut carousel = Carousel::project_slider(0);
        assert!(!carousel.show_controls());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_restarts_auto_advance() {
        let mut carousel = Carousel::project_slider(6)
            .with_auto_advance(Duration::from_millis(1000), Handle::current());

        time::sleep(Duration::from_millis(900)).await;
        carousel.next();

        time::sleep(Duration::from_millis(900)).await;
        assert_eq!(carousel.current_index(), 1);

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(carousel.current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_pauses_auto_advance() {
        let mut carousel = Carousel::project_slider(6)
            .with_auto_advance(Duration::from_millis(1000), Handle::current());

        carousel.pause();
        time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_auto_advancing());

        carousel.resume();
        time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(carousel.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_focus_pauses_auto_advance() {
        let mut carousel = Carousel::project_slider(6)
            .with_auto_advance(Duration::from_millis(1000), Handle::current());

        carousel.set_engaged(false, true);
        assert!(carousel.is_paused());
        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(carousel.current_index(), 0);

        // Pointer leaving does not resume while a control still has focus
        carousel.set_engaged(true, true);
        carousel.set_engaged(false, true);
        assert!(!carousel.is_auto_advancing());

        carousel.set_engaged(false, false);
        assert!(carousel.is_auto_advancing());
        time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(carousel.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_idles_when_window_covers_everything() {
        let mut carousel = Carousel::new(3, ViewportRule::desktop_mobile(), 1200.0)
            .with_auto_advance(Duration::from_millis(1000), Handle::current());
        assert!(!carousel.is_auto_advancing());

        carousel.resize(400.0);
        assert!(carousel.is_auto_advancing());

        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(carousel.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_testimonials_from_config() {
        let config = PortfolioConfig {
            auto_advance_ms: Some(2000),
            ..PortfolioConfig::default()
        };
        let carousel = Carousel::testimonials(5, &config, 1000.0, Handle::current());

        assert_eq!(carousel.state().viewport_size(), 3);
        assert!(carousel.is_auto_advancing());

        time::sleep(Duration::from_millis(4500)).await;
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_gallery_open_close() {
        let mut gallery = Gallery::new(4);
        assert!(!gallery.is_open());
        assert_eq!(gallery.next(), None);

        assert!(gallery.open(3));
        assert_eq!(gallery.current_index(), 3);
        assert_eq!(gallery.next(), Some(0));

        assert!(gallery.handle_key(GalleryKey::ArrowLeft));
        assert_eq!(gallery.current_index(), 3);

        assert!(gallery.handle_key(GalleryKey::Escape));
        assert!(!gallery.is_open());
        assert!(!gallery.handle_key(GalleryKey::ArrowRight));
        assert_eq!(gallery.current_index(), 3);
    }

    #[test]
    fn test_empty_gallery_stays_closed() {
        let mut gallery = Gallery::new(0);
        assert!(!gallery.open(0));
        assert!(!gallery.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_gallery_only_advances_while_open() {
        let mut gallery =
            Gallery::new(5).with_auto_advance(Duration::from_millis(1000), Handle::current());

        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(gallery.current_index(), 0);

        gallery.open(1);
        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(gallery.current_index(), 3);

        gallery.close();
        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(gallery.current_index(), 3);
    }
}
