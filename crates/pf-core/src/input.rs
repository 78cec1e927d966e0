//! Input normalization: swipe gestures, responsive window sizes and resize
//! debouncing

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Default minimum horizontal travel for a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Direction of a recognized swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next item
    Advance,
    /// Finger moved right: show the previous item
    Retreat,
}

/// Turns a start/end horizontal position pair into a swipe direction
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Record where the gesture started
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture; movements shorter than the threshold are ignored
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let travel = start - x;

        if travel > self.threshold {
            Some(SwipeDirection::Advance)
        } else if -travel > self.threshold {
            Some(SwipeDirection::Retreat)
        } else {
            None
        }
    }

    /// Drop a gesture that was interrupted
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// How many items are visible for a given container width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportRule {
    /// Always the same number of items
    Fixed(usize),
    /// `wide` items above the breakpoint, `narrow` at or below it
    Responsive {
        breakpoint: f32,
        wide: usize,
        narrow: usize,
    },
}

impl ViewportRule {
    /// The page's default: three cards on desktop, one on mobile
    pub fn desktop_mobile() -> Self {
        ViewportRule::Responsive {
            breakpoint: 768.0,
            wide: 3,
            narrow: 1,
        }
    }

    pub fn resolve(&self, width: f32) -> usize {
        let size = match *self {
            ViewportRule::Fixed(size) => size,
            ViewportRule::Responsive {
                breakpoint,
                wide,
                narrow,
            } => {
                if width > breakpoint {
                    wide
                } else {
                    narrow
                }
            }
        };
        size.max(1)
    }
}

/// Collapses a burst of resize notifications into one.
///
/// Callers push every width they observe and poll once per frame; a width is
/// released only after no newer one arrived for the whole delay.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(f32, Instant)>,
    last_emitted: Option<f32>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_emitted: None,
        }
    }

    /// Record an observed width
    pub fn push(&mut self, width: f32, now: Instant) {
        if self.last_emitted == Some(width) && self.pending.is_none() {
            return;
        }
        match self.pending {
            Some((pending, _)) if pending == width => {}
            _ => self.pending = Some((width, now)),
        }
    }

    /// Whether a width is waiting for the quiet period to end
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Release the settled width, if the delay has passed
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        let (width, since) = self.pending?;
        if now.saturating_duration_since(since) < self.delay {
            return None;
        }

        self.pending = None;
        if self.last_emitted == Some(width) {
            return None;
        }
        self.last_emitted = Some(width);
        Some(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_advances() {
        let mut swipe = SwipeDetector::default();
        swipe.begin(300.0);
        assert_eq!(swipe.end(200.0), Some(SwipeDirection::Advance));
    }

    #[test]
    fn test_swipe_right_retreats() {
        let mut swipe = SwipeDetector::default();
        swipe.begin(100.0);
        assert_eq!(swipe.end(151.0), Some(SwipeDirection::Retreat));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut swipe = SwipeDetector::default();
        swipe.begin(100.0);
        assert_eq!(swipe.end(60.0), None);

        swipe.begin(100.0);
        assert_eq!(swipe.end(150.0), None);
    }

    #[test]
    fn test_end_without_begin() {
        let mut swipe = SwipeDetector::default();
        assert_eq!(swipe.end(0.0), None);

        swipe.begin(500.0);
        swipe.cancel();
        assert_eq!(swipe.end(0.0), None);
    }

    #[test]
    fn test_responsive_rule() {
        let rule = ViewportRule::desktop_mobile();
        assert_eq!(rule.resolve(1024.0), 3);
        assert_eq!(rule.resolve(768.0), 1);
        assert_eq!(rule.resolve(320.0), 1);
        assert_eq!(ViewportRule::Fixed(0).resolve(1000.0), 1);
    }

    #[test]
    fn test_debouncer_waits_for_quiet_period() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(150));

        debouncer.push(800.0, start);
        debouncer.push(700.0, start + Duration::from_millis(100));
        assert_eq!(debouncer.poll(start + Duration::from_millis(200)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(260)), Some(700.0));
        assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
    }

    #[test]
    fn test_debouncer_skips_unchanged_width() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(10));

        debouncer.push(500.0, start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(20)), Some(500.0));

        debouncer.push(500.0, start + Duration::from_millis(30));
        assert_eq!(debouncer.poll(start + Duration::from_millis(60)), None);
    }
}
