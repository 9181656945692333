//! Target surfaces
//!
//! A surface is whatever actually delivers keystrokes to a text field: a CDP
//! session, an OS input emulator, or the in-memory [`RecordingSurface`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

pub mod recording;

pub use recording::{RecordingSurface, SurfaceCall};

/// Key name sent for corrections
pub const BACKSPACE: &str = "Backspace";

/// Something that can be focused and typed into
#[async_trait]
pub trait TargetSurface: Send + Sync {
    /// Give input focus to the field
    async fn focus(&self) -> Result<()>;

    /// Type a single character
    async fn type_character(&self, c: char) -> Result<()>;

    /// Press a named key such as `"Backspace"`
    async fn press_key(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl<T: TargetSurface + ?Sized> TargetSurface for Box<T> {
    async fn focus(&self) -> Result<()> {
        (**self).focus().await
    }

    async fn type_character(&self, c: char) -> Result<()> {
        (**self).type_character(c).await
    }

    async fn press_key(&self, key: &str) -> Result<()> {
        (**self).press_key(key).await
    }
}

#[async_trait]
impl<T: TargetSurface + ?Sized> TargetSurface for Arc<T> {
    async fn focus(&self) -> Result<()> {
        (**self).focus().await
    }

    async fn type_character(&self, c: char) -> Result<()> {
        (**self).type_character(c).await
    }

    async fn press_key(&self, key: &str) -> Result<()> {
        (**self).press_key(key).await
    }
}
