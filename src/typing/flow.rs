//! Typing flow synthesis
//!
//! Turns a string into the full list of keystrokes a person would make,
//! including fat-finger typos that get noticed and corrected straight away.

use serde::{Deserialize, Serialize};

use super::layout::KeyboardLayout;
use super::neighbor::suggest_neighbor;
use super::random::RandomSource;

/// Upper bound of the typo roll, inclusive
const TYPO_ROLL_MAX: u64 = 100;

/// A single step of a typing flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "char", rename_all = "snake_case")]
pub enum TypingAction {
    /// Type the intended character
    Emit(char),
    /// Type a wrong, neighbouring character
    Typo(char),
    /// Delete the previous character
    Backspace,
}

impl TypingAction {
    /// Character this action types, if any
    pub fn character(&self) -> Option<char> {
        match self {
            TypingAction::Emit(c) | TypingAction::Typo(c) => Some(*c),
            TypingAction::Backspace => None,
        }
    }

    pub fn is_backspace(&self) -> bool {
        matches!(self, TypingAction::Backspace)
    }
}

/// Fully materialized keystroke plan for one typing operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPlan {
    actions: Vec<TypingAction>,
}

impl FlowPlan {
    pub fn new(actions: Vec<TypingAction>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[TypingAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypingAction> {
        self.actions.iter()
    }

    /// Number of injected typos
    pub fn typo_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|action| matches!(action, TypingAction::Typo(_)))
            .count()
    }

    /// Text left in the field once every action has been applied
    pub fn final_text(&self) -> String {
        let mut text = String::new();
        for action in &self.actions {
            match action.character() {
                Some(c) => text.push(c),
                None => {
                    text.pop();
                }
            }
        }
        text
    }
}

impl<'a> IntoIterator for &'a FlowPlan {
    type Item = &'a TypingAction;
    type IntoIter = std::slice::Iter<'a, TypingAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl IntoIterator for FlowPlan {
    type Item = TypingAction;
    type IntoIter = std::vec::IntoIter<TypingAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

/// Build the keystroke plan for `text`
///
/// Characters missing from the layout are always typed as-is. Every other
/// character rolls for a typo; a hit types a neighbour, backspaces it, then
/// types the right character. A chance of 0 never injects a typo.
pub fn synthesize<R: RandomSource + ?Sized>(
    text: &str,
    layout: &KeyboardLayout,
    typo_chance_percent: u32,
    rng: &mut R,
) -> FlowPlan {
    let mut actions = Vec::with_capacity(text.len());
    let mut typos = 0usize;

    for c in text.chars() {
        if !layout.contains(c) {
            actions.push(TypingAction::Emit(c));
            continue;
        }

        if typo_chance_percent > 0
            && rng.int_between(0, TYPO_ROLL_MAX) <= u64::from(typo_chance_percent)
        {
            actions.push(TypingAction::Typo(suggest_neighbor(c, layout, rng)));
            actions.push(TypingAction::Backspace);
            typos += 1;
        }

        actions.push(TypingAction::Emit(c));
    }

    tracing::debug!(
        "Synthesized typing flow: {} chars, {} typos, {} actions (layout={})",
        text.chars().count(),
        typos,
        actions.len(),
        layout.name()
    );

    FlowPlan { actions }
}
