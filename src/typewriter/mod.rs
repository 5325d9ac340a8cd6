//! Typewriter text-cycling effect.
//!
//! The hero headline types each phrase out character by character, holds it,
//! deletes it, and moves on to the next phrase forever. The state machine
//! lives here; callers drive it by waiting [`Typewriter::delay`] between
//! calls to [`Typewriter::tick`], either inline (the TUI event loop) or on a
//! background thread ([`TypewriterHandle`]).

mod driver;

pub use driver::TypewriterHandle;

use std::time::Duration;

/// Error type for typewriter construction.
#[derive(Debug, thiserror::Error)]
pub enum TypewriterError {
    /// The phrase list was empty. The typewriter needs at least one phrase.
    #[error("phrase list is empty; at least one phrase is required")]
    EmptyPhrases,
}

/// Tick intervals for the three phases of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between ticks while typing a phrase out.
    pub type_interval: Duration,
    /// Delay between ticks while deleting, conventionally faster than typing.
    pub delete_interval: Duration,
    /// Hold time once a phrase is fully typed, before deleting begins.
    pub full_pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(150),
            delete_interval: Duration::from_millis(75),
            full_pause: Duration::from_millis(2000),
        }
    }
}

impl Timing {
    /// Derive a full timing set from a base typing interval: deleting runs at
    /// twice the typing speed, the full-phrase hold stays as given.
    pub fn from_base(type_interval: Duration, full_pause: Duration) -> Self {
        Self {
            type_interval,
            delete_interval: type_interval / 2,
            full_pause,
        }
    }
}

/// Where the cycle currently is for the active phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Typing the active phrase out, one character per tick.
    Growing,
    /// Phrase fully visible; the next tick starts deletion.
    PausedAtFull,
    /// Deleting the active phrase, one character per tick.
    Shrinking,
}

/// The typewriter state machine.
///
/// Holds an ordered, non-empty phrase list fixed for its lifetime, the active
/// phrase index, the visible prefix length (in characters), and the current
/// [`Phase`]. Each [`tick`](Self::tick) advances the machine by exactly one
/// step; [`visible`](Self::visible) is the string to render between ticks.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    prefix: usize,
    phase: Phase,
    timing: Timing,
}

impl Typewriter {
    /// Create a typewriter over `phrases`, starting at the first phrase with
    /// nothing visible.
    ///
    /// Fails with [`TypewriterError::EmptyPhrases`] if the list is empty;
    /// cycling over nothing is a configuration mistake, not a runtime state.
    pub fn new(phrases: Vec<String>, timing: Timing) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            phrase: 0,
            prefix: 0,
            phase: Phase::Growing,
            timing,
        })
    }

    /// The currently visible text: the active phrase truncated to the prefix
    /// length. Slices at a char boundary, so multi-byte phrases are safe.
    pub fn visible(&self) -> &str {
        let phrase = &self.phrases[self.phrase];
        match phrase.char_indices().nth(self.prefix) {
            Some((idx, _)) => &phrase[..idx],
            None => phrase,
        }
    }

    /// The phrase currently being typed or deleted.
    pub fn active_phrase(&self) -> &str {
        &self.phrases[self.phrase]
    }

    /// How long the caller should wait before the next [`tick`](Self::tick).
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Growing => self.timing.type_interval,
            Phase::PausedAtFull => self.timing.full_pause,
            Phase::Shrinking => self.timing.delete_interval,
        }
    }

    /// Advance the machine by one step and return the new visible text.
    ///
    /// Growing adds one character until the phrase is full, then the machine
    /// holds for [`Timing::full_pause`] and switches to deleting; deleting
    /// removes one character until the text is empty, then the next phrase
    /// (wrapping past the last) starts growing with no extra pause.
    pub fn tick(&mut self) -> &str {
        match self.phase {
            Phase::Growing => {
                let len = self.active_phrase().chars().count();
                if self.prefix < len {
                    self.prefix += 1;
                }
                if self.prefix == len {
                    self.phase = Phase::PausedAtFull;
                }
            }
            Phase::PausedAtFull => {
                // No visible change; the hold time was spent in delay().
                self.phase = Phase::Shrinking;
            }
            Phase::Shrinking => {
                if self.prefix > 0 {
                    self.prefix -= 1;
                }
                if self.prefix == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Growing;
                }
            }
        }
        self.visible()
    }

    /// Number of ticks in one full cycle over every phrase: type each
    /// character, one hold-exit tick, delete each character. A zero-length
    /// phrase still spends one tick growing and one shrinking.
    pub fn cycle_ticks(&self) -> usize {
        self.phrases
            .iter()
            .map(|p| 2 * p.chars().count().max(1) + 1)
            .sum()
    }
}
