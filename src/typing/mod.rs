//! Typing Layer
//!
//! All the components of a human-like typing flow:
//! - Keyboard layouts and case-insensitive key lookup
//! - Adjacent-key typo substitution
//! - Flow synthesis (typos plus corrective backspaces)
//! - Paced playback against a target surface

pub mod executor;
pub mod flow;
pub mod layout;
pub mod neighbor;
pub mod random;

pub use executor::{execute, FlowExecutor, HumanSpeed, DEFAULT_WARM_UP};
pub use flow::{synthesize, FlowPlan, TypingAction};
pub use layout::{Coordinate, KeyboardLayout, DEFAULT_LAYOUT};
pub use neighbor::suggest_neighbor;
pub use random::{RandomSource, ScriptedRandom};
