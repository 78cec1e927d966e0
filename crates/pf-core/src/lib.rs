//! Core functionality for the portfolio page
//!
//! This crate provides the headless state behind every interactive piece of
//! the page: rotating carousels and galleries, auto-advance timers, the
//! typewriter headline, project filtering, scroll tracking and the theme
//! preference. Nothing in here needs a window, so all of it is unit tested.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod input;
pub mod rotation;
pub mod scroll;
pub mod theme;
pub mod typewriter;

// Re-export commonly used types
pub use autoplay::AutoAdvanceTimer;
pub use carousel::{Carousel, Gallery, GalleryKey};
pub use config::{PortfolioConfig, TypewriterConfig};
pub use contact::ContactForm;
pub use error::{PortfolioError, Result};
pub use filter::{CardVisibility, Filter, ProjectCard, ProjectFilter};
pub use input::{ResizeDebouncer, SwipeDetector, SwipeDirection, ViewportRule};
pub use rotation::{
    IndicatorSet, RenderFrame, RenderTarget, RotationController, RotationState, WrapPolicy,
};
pub use scroll::{RevealTracker, ScrollSpy, SectionBounds};
pub use theme::{JsonFileStore, MemoryStore, PreferenceStore, ThemePreference};
pub use typewriter::{Typewriter, TypewriterDriver, TypewriterPhase, TypewriterTiming};
