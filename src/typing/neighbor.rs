//! Adjacent-key substitution
//!
//! Picks the key a clumsy finger would hit instead of the intended one.
//! Horizontal slips dominate, so the own row is chosen 66% of the time.

use smallvec::{smallvec, SmallVec};

use super::layout::{Coordinate, KeyboardLayout};
use super::random::RandomSource;

/// Chance (percent) of staying on the character's own row
const SAME_ROW_PERCENT: u64 = 66;

/// Upper bound on lookups before giving up and returning the original
pub const MAX_ATTEMPTS: usize = 4;

/// Candidate rows or columns, never more than three
type Candidates = SmallVec<[usize; 3]>;

/// Index plus its direct neighbours, clamped to `0..len`
#[inline]
fn around(index: usize, len: usize) -> Candidates {
    let mut out = Candidates::new();
    if index > 0 {
        out.push(index - 1);
    }
    out.push(index);
    if index + 1 < len {
        out.push(index + 1);
    }
    out
}

/// Uniform pick. Single candidates are returned without a draw.
#[inline]
fn pick<R: RandomSource + ?Sized>(candidates: &Candidates, rng: &mut R) -> usize {
    if candidates.len() == 1 {
        return candidates[0];
    }
    let index = rng.int_between(0, candidates.len() as u64 - 1) as usize;
    candidates[index.min(candidates.len() - 1)]
}

/// Give `key` the case of `original`
fn match_case(original: char, key: char) -> char {
    if !original.is_uppercase() {
        return key;
    }
    let mut upper = key.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => key,
    }
}

/// Suggest a plausible mistyped neighbour for `c`
///
/// Returns `c` unchanged when it is not on the layout, when the chosen cell
/// falls past the end of a short row, or when every attempt lands back on
/// `c` itself.
pub fn suggest_neighbor<R: RandomSource + ?Sized>(
    c: char,
    layout: &KeyboardLayout,
    rng: &mut R,
) -> char {
    let Some(at) = layout.locate(c) else {
        return c;
    };
    let Some(own_key) = layout.key_at(at) else {
        return c;
    };

    let own_row_len = layout.row_len(at.row).unwrap_or(0);
    let columns = around(at.column, own_row_len);

    for _ in 0..MAX_ATTEMPTS {
        let rows: Candidates = if rng.int_between(1, 100) <= SAME_ROW_PERCENT {
            smallvec![at.row]
        } else {
            around(at.row, layout.row_count())
        };

        let row = pick(&rows, rng);
        let column = pick(&columns, rng);

        let Some(key) = layout.key_at(Coordinate::new(row, column)) else {
            return c;
        };

        if key != own_key {
            return match_case(c, key);
        }
    }

    c
}
