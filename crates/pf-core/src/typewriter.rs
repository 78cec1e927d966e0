//! Typewriter headline
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves
//! on to the next phrase. [`Typewriter`] is the state machine; each `tick`
//! performs one step and says how long to wait before the next one.
//! [`TypewriterDriver`] runs those ticks on a single cancellable task.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Step delays for each phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Between typed characters
    pub type_delay: Duration,
    /// Between deleted characters
    pub delete_delay: Duration,
    /// How long a complete phrase stays on screen
    pub pause_delay: Duration,
    /// Gap between clearing one phrase and typing the next
    pub between_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            pause_delay: Duration::from_millis(2000),
            between_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    visible_chars: usize,
    phase: TypewriterPhase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            visible_chars: 0,
            phase: TypewriterPhase::Typing,
            timing,
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// No phrases means nothing ever appears
    pub fn is_inert(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The currently visible prefix of the active phrase
    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase_index)
            .map(|phrase| phrase.chars().take(self.visible_chars).collect())
            .unwrap_or_default()
    }

    /// Back to an empty first phrase
    pub fn reset(&mut self) {
        self.phrase_index = 0;
        self.visible_chars = 0;
        self.phase = TypewriterPhase::Typing;
    }

    /// Perform one step and return the delay before the next one
    pub fn tick(&mut self) -> Duration {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return self.timing.pause_delay;
        };
        let length = phrase.chars().count();

        match self.phase {
            TypewriterPhase::Typing => {
                if self.visible_chars < length {
                    self.visible_chars += 1;
                }
                if self.visible_chars >= length {
                    self.phase = TypewriterPhase::Pausing;
                    self.timing.pause_delay
                } else {
                    self.timing.type_delay
                }
            }
            TypewriterPhase::Pausing => {
                self.phase = TypewriterPhase::Deleting;
                self.delete_step()
            }
            TypewriterPhase::Deleting => self.delete_step(),
        }
    }

    fn delete_step(&mut self) -> Duration {
        self.visible_chars = self.visible_chars.saturating_sub(1);
        if self.visible_chars > 0 {
            return self.timing.delete_delay;
        }

        self.phrase_index = (self.phrase_index + 1) % self.phrases.len().max(1);
        self.phase = TypewriterPhase::Typing;
        self.timing.between_delay
    }
}

/// Callback invoked after each tick, e.g. to request a repaint
pub type TickCallback = Arc<dyn Fn() + Send + Sync>;

/// Runs a shared [`Typewriter`] on a single scheduled task
pub struct TypewriterDriver {
    typewriter: Arc<RwLock<Typewriter>>,
    runtime: Handle,
    on_tick: Option<TickCallback>,
    task: Option<JoinHandle<()>>,
}

impl TypewriterDriver {
    pub fn new(typewriter: Arc<RwLock<Typewriter>>, runtime: Handle) -> Self {
        Self {
            typewriter,
            runtime,
            on_tick: None,
            task: None,
        }
    }

    pub fn with_on_tick(mut self, on_tick: TickCallback) -> Self {
        self.on_tick = Some(on_tick);
        self
    }

    pub fn typewriter(&self) -> &Arc<RwLock<Typewriter>> {
        &self.typewriter
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start ticking from the current state, replacing any running task
    pub fn start(&mut self) {
        self.stop();

        if self.typewriter.read().is_inert() {
            debug!("Typewriter has no phrases, not starting");
            return;
        }

        let typewriter = self.typewriter.clone();
        let on_tick = self.on_tick.clone();
        let first_delay = typewriter.read().timing().type_delay;

        self.task = Some(self.runtime.spawn(async move {
            let mut delay = first_delay;
            loop {
                tokio::time::sleep(delay).await;
                delay = typewriter.write().tick();
                if let Some(on_tick) = &on_tick {
                    on_tick();
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Clear the text and start over from the first phrase
    pub fn restart(&mut self) {
        self.stop();
        self.typewriter.write().reset();
        self.start();
    }
}

impl Drop for TypewriterDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
