//! Flow synthesis behaviour across layouts and typo chances

mod common;

use pretty_assertions::assert_eq;

use humantype::typing::{suggest_neighbor, synthesize, KeyboardLayout, TypingAction};
use humantype::{HumanTyping, ScriptedRandom, TypingConfig};

use TypingAction::{Backspace, Emit, Typo};

#[test]
fn hi_without_typos() {
    let layout = KeyboardLayout::en();
    let mut rng = ScriptedRandom::new([]);

    let plan = synthesize("hi", &layout, 0, &mut rng);
    assert_eq!(plan.actions(), &[Emit('h'), Emit('i')]);
}

#[test]
fn exclamation_mark_bypasses_layout() {
    let layout = KeyboardLayout::en();
    let mut rng = ScriptedRandom::new([]);

    let plan = synthesize("hi!", &layout, 0, &mut rng);
    assert_eq!(plan.actions(), &[Emit('h'), Emit('i'), Emit('!')]);
}

#[test]
fn zero_chance_emits_each_char_once_in_order() {
    common::init_tracing();
    let layout = KeyboardLayout::de();
    let text = "Grüße aus Köln, 2024!";

    for mut rng in common::seeds() {
        let plan = synthesize(text, &layout, 0, &mut rng);

        let expected: Vec<TypingAction> = text.chars().map(Emit).collect();
        assert_eq!(plan.actions(), expected.as_slice());
        assert!(plan.iter().all(|action| !action.is_backspace()));
    }
}

#[test]
fn characters_off_the_layout_never_get_typos() {
    let layout = KeyboardLayout::en();
    let text = "¿ÿ 字 \t!";

    for mut rng in common::seeds() {
        let plan = synthesize(text, &layout, 100, &mut rng);
        assert_eq!(plan.len(), text.chars().count());
        assert_eq!(plan.typo_count(), 0);
    }
}

#[test]
fn full_chance_typos_every_letter_with_a_distinct_neighbour() {
    let layout = KeyboardLayout::en();
    let text = "typing";

    // Each draw is scripted: typo roll, row roll (own row), column pick.
    // Column 0 is always the left neighbour, which differs from the key.
    let script = text.chars().flat_map(|_| [0, 1, 0]);
    let mut rng = ScriptedRandom::new(script);

    let plan = synthesize(text, &layout, 100, &mut rng);

    let slips = [('r', 't'), ('t', 'y'), ('o', 'p'), ('u', 'i'), ('b', 'n'), ('f', 'g')];
    let expected: Vec<TypingAction> = slips
        .into_iter()
        .flat_map(|(wrong, right)| [Typo(wrong), Backspace, Emit(right)])
        .collect();
    assert_eq!(plan.actions(), expected.as_slice());
}

#[test]
fn full_chance_neighbours_differ_from_original() {
    let layout = KeyboardLayout::en();
    let text = "Mixed Case Keys";

    for mut rng in common::seeds() {
        let plan = synthesize(text, &layout, 100, &mut rng);
        let actions = plan.actions();

        for window in actions.windows(3) {
            if let [Typo(wrong), Backspace, Emit(right)] = window {
                // Degenerate cells and exhausted retries fall back to the original
                if wrong != right {
                    assert_ne!(wrong.to_lowercase().to_string(), right.to_lowercase().to_string());
                    if wrong.is_alphabetic() {
                        assert_eq!(wrong.is_uppercase(), right.is_uppercase());
                    }
                }
            }
        }
        assert_eq!(plan.final_text(), text);
    }
}

#[test]
fn suggest_neighbor_always_returns_one_layout_char() {
    let layout = KeyboardLayout::de();

    for mut rng in common::seeds() {
        for row in layout.rows() {
            for &key in row {
                let neighbour = suggest_neighbor(key, &layout, &mut rng);
                assert!(layout.contains(neighbour), "{:?} -> {:?}", key, neighbour);
            }
        }
    }
}

#[test]
fn plugin_plans_follow_config() {
    let typing = HumanTyping::new(TypingConfig::minimal());

    let plan = typing.plan("no typos here");
    assert_eq!(plan.typo_count(), 0);
    assert_eq!(plan.final_text(), "no typos here");
}
