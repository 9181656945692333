//! In-memory surface that records every call
//!
//! Used for dry runs and tests. Each call is stored with the tokio clock
//! reading at the time it happened, so delays can be measured under a paused
//! runtime. Failures can be injected for focus, typing and key presses.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::time::Instant;

use super::{TargetSurface, BACKSPACE};
use crate::error::{Error, Result};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Focus,
    Type(char),
    Press(String),
}

/// Surface that records calls instead of driving a device
#[derive(Debug, Default)]
pub struct RecordingSurface {
    log: Mutex<Vec<(Instant, SurfaceCall)>>,
    fail_focus: bool,
    fail_press: bool,
    /// Typing fails once this many characters have been typed
    fail_typing_after: Option<usize>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `focus` fail as if the element could not be found
    pub fn failing_focus(mut self) -> Self {
        self.fail_focus = true;
        self
    }

    /// Make every `press_key` fail
    pub fn failing_press(mut self) -> Self {
        self.fail_press = true;
        self
    }

    /// Let `count` characters through, then fail every `type_character`
    pub fn fail_typing_after(mut self, count: usize) -> Self {
        self.fail_typing_after = Some(count);
        self
    }

    /// Calls in the order they were made
    pub fn calls(&self) -> Vec<SurfaceCall> {
        lock(&self.log).iter().map(|(_, call)| call.clone()).collect()
    }

    /// Calls with the instant each was made
    pub fn timeline(&self) -> Vec<(Instant, SurfaceCall)> {
        lock(&self.log).clone()
    }

    /// Field contents after replaying the recorded calls
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (_, call) in lock(&self.log).iter() {
            match call {
                SurfaceCall::Type(c) => text.push(*c),
                SurfaceCall::Press(key) if key == BACKSPACE => {
                    text.pop();
                }
                _ => {}
            }
        }
        text
    }

    fn typed_count(log: &[(Instant, SurfaceCall)]) -> usize {
        log.iter()
            .filter(|(_, call)| matches!(call, SurfaceCall::Type(_)))
            .count()
    }

    fn record(&self, call: SurfaceCall) {
        lock(&self.log).push((Instant::now(), call));
    }
}

#[async_trait]
impl TargetSurface for RecordingSurface {
    async fn focus(&self) -> Result<()> {
        if self.fail_focus {
            return Err(Error::ElementNotFound("recording surface".into()));
        }
        self.record(SurfaceCall::Focus);
        Ok(())
    }

    async fn type_character(&self, c: char) -> Result<()> {
        let mut log = lock(&self.log);
        if let Some(limit) = self.fail_typing_after {
            if Self::typed_count(&log) >= limit {
                return Err(Error::surface("type_character", "surface disconnected"));
            }
        }
        log.push((Instant::now(), SurfaceCall::Type(c)));
        Ok(())
    }

    async fn press_key(&self, key: &str) -> Result<()> {
        if self.fail_press {
            return Err(Error::surface("press_key", format!("cannot press {}", key)));
        }
        self.record(SurfaceCall::Press(key.to_string()));
        Ok(())
    }
}
