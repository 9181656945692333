//! Typing flow playback
//!
//! Drives a [`FlowPlan`] against a target surface one action at a time,
//! with human-like pauses between keystrokes and a longer hesitation before
//! every correction.

use std::time::Duration;

use tokio::time::sleep;

use super::flow::{FlowPlan, TypingAction};
use super::random::RandomSource;
use crate::error::Result;
use crate::surface::{TargetSurface, BACKSPACE};
use crate::DelayConfig;

/// Pause before the first keystroke
pub const DEFAULT_WARM_UP: Duration = Duration::from_millis(5000);

/// Speed presets for typing delays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HumanSpeed {
    /// Fast mode - minimal delays
    Fast,
    /// Normal mode - balanced
    #[default]
    Normal,
    /// Slow mode - maximum realism
    Slow,
}

impl HumanSpeed {
    fn type_delay_ms(&self) -> (u64, u64) {
        match self {
            HumanSpeed::Fast => (40, 160),
            HumanSpeed::Normal => (150, 650),
            HumanSpeed::Slow => (300, 1100),
        }
    }

    fn backspace_delay_ms(&self) -> (u64, u64) {
        match self {
            HumanSpeed::Fast => (200, 500),
            HumanSpeed::Normal => (750, 1500),
            HumanSpeed::Slow => (1200, 2400),
        }
    }

    /// Delay bounds for this speed
    pub fn delays(&self) -> DelayConfig {
        let (min_delay, max_delay) = self.type_delay_ms();
        let (min_backspace_delay, max_backspace_delay) = self.backspace_delay_ms();
        DelayConfig {
            min_delay,
            max_delay,
            min_backspace_delay,
            max_backspace_delay,
        }
    }
}

/// Sleep for a uniformly drawn number of milliseconds
async fn pause<R: RandomSource + ?Sized>(rng: &mut R, min_ms: u64, max_ms: u64) {
    let delay = rng.int_between(min_ms, max_ms);
    sleep(Duration::from_millis(delay)).await;
}

/// Plays typing flows against one surface
pub struct FlowExecutor<'a, S: TargetSurface + ?Sized> {
    surface: &'a S,
    delays: DelayConfig,
    warm_up: Duration,
}

impl<'a, S: TargetSurface + ?Sized> FlowExecutor<'a, S> {
    /// Create an executor with normal-speed delays and the default warm-up
    pub fn new(surface: &'a S) -> Self {
        Self {
            surface,
            delays: HumanSpeed::Normal.delays(),
            warm_up: DEFAULT_WARM_UP,
        }
    }

    /// Set the delay bounds
    pub fn with_delays(mut self, delays: DelayConfig) -> Self {
        self.delays = delays;
        self
    }

    /// Set the speed preset
    pub fn with_speed(mut self, speed: HumanSpeed) -> Self {
        self.delays = speed.delays();
        self
    }

    /// Set the pause before the first keystroke
    pub fn with_warm_up(mut self, warm_up: Duration) -> Self {
        self.warm_up = warm_up;
        self
    }

    /// Focus the surface and play every action in order
    ///
    /// Fails before touching the surface if the delay bounds are inverted.
    /// Stops at the first surface failure; later actions are never sent.
    pub async fn run<R>(&self, plan: &FlowPlan, rng: &mut R) -> Result<()>
    where
        R: RandomSource + Send + ?Sized,
    {
        let delays = &self.delays;
        delays.validate()?;

        tracing::debug!(
            "Typing {} actions ({} typos) after {}ms warm-up",
            plan.len(),
            plan.typo_count(),
            self.warm_up.as_millis()
        );

        sleep(self.warm_up).await;

        self.surface.focus().await?;

        for (index, action) in plan.iter().enumerate() {
            match *action {
                TypingAction::Emit(c) | TypingAction::Typo(c) => {
                    tracing::trace!("action {}: type {:?}", index, c);
                    self.surface.type_character(c).await?;
                }
                TypingAction::Backspace => {
                    // Hesitate as if noticing the mistake
                    pause(rng, delays.min_backspace_delay(), delays.max_backspace_delay()).await;
                    tracing::trace!("action {}: press {}", index, BACKSPACE);
                    self.surface.press_key(BACKSPACE).await?;
                }
            }

            pause(rng, delays.min_delay(), delays.max_delay()).await;
        }

        tracing::debug!("Typing flow complete");
        Ok(())
    }
}

/// Play `plan` against `surface`
pub async fn execute<S, R>(
    surface: &S,
    plan: &FlowPlan,
    delays: &DelayConfig,
    warm_up: Duration,
    rng: &mut R,
) -> Result<()>
where
    S: TargetSurface + ?Sized,
    R: RandomSource + Send + ?Sized,
{
    FlowExecutor::new(surface)
        .with_delays(*delays)
        .with_warm_up(warm_up)
        .run(plan, rng)
        .await
}
