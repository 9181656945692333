//! # humantype
//!
//! Human-like typing for browser automation.
//!
//! Instead of inserting text in one go, humantype plans the keystrokes a
//! person would make (including the occasional fat-finger typo that gets
//! spotted and backspaced away) and plays them against a text field with
//! randomized, human-paced delays.
//!
//! ## Features
//!
//! - **Layout aware** - typos come from physically adjacent keys (`en`, `de`, or your own grid)
//! - **Deterministic when needed** - every random draw goes through an injectable source
//! - **Host agnostic** - anything implementing [`TargetSurface`] can be typed into
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use humantype::{HumanTyping, RecordingSurface, TypingConfig};
//!
//! #[tokio::main]
//! async fn main() -> humantype::Result<()> {
//!     let typing = HumanTyping::new(TypingConfig::default());
//!
//!     // Any TargetSurface works: a CDP element, an OS emulator, ...
//!     let field = RecordingSurface::new();
//!     typing.type_into(&field, "hello world").await?;
//!
//!     assert_eq!(field.text(), "hello world");
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust,no_run
//! use humantype::{TypingConfig, TypingOptions};
//!
//! # fn main() -> humantype::Result<()> {
//! let options = TypingOptions::from_json_str(
//!     r#"{ "keyboardLayout": "de", "typoChanceInPercent": 10 }"#,
//! )?;
//! let config = TypingConfig::from_options(options)?;
//! assert_eq!(config.layout().name(), "de");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

pub mod error;
pub mod host;
pub mod options;
pub mod surface;
pub mod typing;

// Re-exports
pub use error::{Error, Result};
pub use host::{BoundTypist, HumanTyping, SurfaceResolver};
pub use options::TypingOptions;
pub use surface::{RecordingSurface, SurfaceCall, TargetSurface, BACKSPACE};
pub use typing::{
    FlowPlan, HumanSpeed, KeyboardLayout, RandomSource, ScriptedRandom, TypingAction,
};

/// Default chance of a typo per eligible character
pub const DEFAULT_TYPO_CHANCE: u32 = 15;

/// Delay bounds in milliseconds
///
/// Only built through [`DelayConfig::new`] or a [`HumanSpeed`] preset, so
/// both ranges are always ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    min_delay: u64,
    max_delay: u64,
    min_backspace_delay: u64,
    max_backspace_delay: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        HumanSpeed::Normal.delays()
    }
}

impl DelayConfig {
    /// Create delay bounds, rejecting min > max
    pub fn new(
        min_delay: u64,
        max_delay: u64,
        min_backspace_delay: u64,
        max_backspace_delay: u64,
    ) -> Result<Self> {
        let delays = Self {
            min_delay,
            max_delay,
            min_backspace_delay,
            max_backspace_delay,
        };
        delays.validate()?;
        Ok(delays)
    }

    /// Check that both ranges are ordered
    pub fn validate(&self) -> Result<()> {
        if self.min_delay > self.max_delay {
            return Err(Error::invalid_range("delay", self.min_delay, self.max_delay));
        }
        if self.min_backspace_delay > self.max_backspace_delay {
            return Err(Error::invalid_range(
                "backspace delay",
                self.min_backspace_delay,
                self.max_backspace_delay,
            ));
        }
        Ok(())
    }

    /// Minimum pause after every action
    pub fn min_delay(&self) -> u64 {
        self.min_delay
    }

    /// Maximum pause after every action
    pub fn max_delay(&self) -> u64 {
        self.max_delay
    }

    /// Minimum pause before a backspace
    pub fn min_backspace_delay(&self) -> u64 {
        self.min_backspace_delay
    }

    /// Maximum pause before a backspace
    pub fn max_backspace_delay(&self) -> u64 {
        self.max_backspace_delay
    }
}

/// Validated configuration for human typing
///
/// Built once and shared read-only between typing operations.
#[derive(Debug, Clone)]
pub struct TypingConfig {
    layout: KeyboardLayout,
    typo_chance: u32,
    delays: DelayConfig,
    warm_up: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            layout: KeyboardLayout::en(),
            typo_chance: DEFAULT_TYPO_CHANCE,
            delays: DelayConfig::default(),
            warm_up: typing::DEFAULT_WARM_UP,
        }
    }
}

impl TypingConfig {
    /// Create a minimal config (no typos, no warm-up, fast delays)
    pub fn minimal() -> Self {
        Self {
            layout: KeyboardLayout::en(),
            typo_chance: 0,
            delays: HumanSpeed::Fast.delays(),
            warm_up: Duration::ZERO,
        }
    }

    /// Build from the option surface
    pub fn from_options(options: TypingOptions) -> Result<Self> {
        let config = options.resolve()?;
        tracing::info!(
            "Typing config: layout={}, typo chance={}%, delay={}-{}ms, backspace delay={}-{}ms",
            config.layout.name(),
            config.typo_chance,
            config.delays.min_delay,
            config.delays.max_delay,
            config.delays.min_backspace_delay,
            config.delays.max_backspace_delay
        );
        Ok(config)
    }

    /// Use a different layout
    pub fn with_layout(mut self, layout: KeyboardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the typo chance (0-100)
    pub fn with_typo_chance(mut self, percent: u32) -> Result<Self> {
        if percent > 100 {
            return Err(Error::InvalidTypoChance(percent));
        }
        self.typo_chance = percent;
        Ok(self)
    }

    /// Set the delay bounds
    pub fn with_delays(mut self, delays: DelayConfig) -> Result<Self> {
        delays.validate()?;
        self.delays = delays;
        Ok(self)
    }

    /// Use the delays of a speed preset
    pub fn with_speed(mut self, speed: HumanSpeed) -> Self {
        self.delays = speed.delays();
        self
    }

    /// Set the pause before the first keystroke
    pub fn with_warm_up(mut self, warm_up: Duration) -> Self {
        self.warm_up = warm_up;
        self
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    pub fn typo_chance(&self) -> u32 {
        self.typo_chance
    }

    pub fn delays(&self) -> &DelayConfig {
        &self.delays
    }

    pub fn warm_up(&self) -> Duration {
        self.warm_up
    }
}
