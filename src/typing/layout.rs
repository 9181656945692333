//! Keyboard layouts
//!
//! A layout is a grid of lower-cased keys, stored row by row from the top of
//! the keyboard. Rows may have different lengths, so not every
//! `(row, column)` pair names a key.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// US QWERTY
const EN_ROWS: &[&[char]] = &[
    &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-'],
    &['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', '['],
    &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', ';', '\''],
    &['z', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '/'],
];

/// German QWERTZ
const DE_ROWS: &[&[char]] = &[
    &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'ß'],
    &['q', 'w', 'e', 'r', 't', 'z', 'u', 'i', 'o', 'p', 'ü'],
    &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'ö', 'ä'],
    &['y', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '-'],
];

/// Name of the layout used when none is configured
pub const DEFAULT_LAYOUT: &str = "en";

/// Lower-case a character, rejecting characters whose lower-case form is not
/// a single `char` (those can never match a key).
fn fold_case(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    let first = lower.next()?;
    match lower.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Position of a key in a layout
///
/// Only meaningful for the layout it was obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A named, immutable keyboard grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    name: String,
    rows: Vec<Vec<char>>,
}

impl KeyboardLayout {
    /// Build a layout from rows of keys
    ///
    /// Keys are lower-cased. Fails if the layout has no rows, contains an
    /// empty row, or defines the same key twice.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<char>>) -> Result<Self> {
        let name = name.into();

        if rows.is_empty() {
            return Err(Error::invalid_layout(name, "layout has no rows"));
        }

        let mut seen = HashSet::new();
        let mut folded = Vec::with_capacity(rows.len());

        for (index, row) in rows.into_iter().enumerate() {
            if row.is_empty() {
                return Err(Error::invalid_layout(name, format!("row {} is empty", index)));
            }

            let mut keys = Vec::with_capacity(row.len());
            for key in row {
                let lower = fold_case(key).ok_or_else(|| {
                    Error::invalid_layout(
                        &name,
                        format!("key '{}' has no single-character lower-case form", key),
                    )
                })?;
                if !seen.insert(lower) {
                    return Err(Error::invalid_layout(
                        &name,
                        format!("key '{}' appears more than once", lower),
                    ));
                }
                keys.push(lower);
            }
            folded.push(keys);
        }

        Ok(Self {
            name,
            rows: folded,
        })
    }

    fn from_static(name: &str, rows: &[&[char]]) -> Self {
        Self {
            name: name.to_string(),
            rows: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// US QWERTY layout
    pub fn en() -> Self {
        Self::from_static("en", EN_ROWS)
    }

    /// German QWERTZ layout
    pub fn de() -> Self {
        Self::from_static("de", DE_ROWS)
    }

    /// Look up a built-in layout by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "en" => Some(Self::en()),
            "de" => Some(Self::de()),
            _ => None,
        }
    }

    /// All built-in layouts keyed by name
    pub fn builtins() -> HashMap<String, KeyboardLayout> {
        [Self::en(), Self::de()]
            .into_iter()
            .map(|layout| (layout.name.clone(), layout))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of keys in a row, or None if the row does not exist
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Key at a coordinate, or None for cells past the end of a short row
    pub fn key_at(&self, at: Coordinate) -> Option<char> {
        self.rows.get(at.row)?.get(at.column).copied()
    }

    /// Find a character, ignoring case
    ///
    /// Scans rows top to bottom and columns left to right.
    pub fn locate(&self, c: char) -> Option<Coordinate> {
        let lower = fold_case(c)?;

        self.rows.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|&key| key == lower)
                .map(|column| Coordinate::new(row, column))
        })
    }

    /// Check if a character has a key in this layout
    pub fn contains(&self, c: char) -> bool {
        self.locate(c).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_is_case_insensitive() {
        let layout = KeyboardLayout::en();

        assert_eq!(layout.locate('q'), Some(Coordinate::new(1, 0)));
        assert_eq!(layout.locate('Q'), Some(Coordinate::new(1, 0)));
        assert_eq!(layout.locate('/'), Some(Coordinate::new(3, 9)));
        assert_eq!(layout.locate('1'), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_missing_characters() {
        let layout = KeyboardLayout::en();

        for c in [' ', '!', '\n', 'é', 'ß', '字'] {
            assert!(!layout.contains(c), "{:?} should not be in en", c);
        }
        assert!(KeyboardLayout::de().contains('ß'));
        assert!(KeyboardLayout::de().contains('Ü'));
    }

    #[test]
    fn test_key_at_short_row() {
        let layout = KeyboardLayout::en();

        assert_eq!(layout.key_at(Coordinate::new(2, 10)), Some('\''));
        assert_eq!(layout.key_at(Coordinate::new(3, 10)), None);
        assert_eq!(layout.key_at(Coordinate::new(4, 0)), None);
        assert_eq!(layout.row_len(3), Some(10));
        assert_eq!(layout.row_len(4), None);
    }

    #[test]
    fn test_new_lowercases_keys() {
        let layout = KeyboardLayout::new("tiny", vec![vec!['A', 'b'], vec!['C']]).unwrap();

        assert_eq!(layout.rows(), &[vec!['a', 'b'], vec!['c']]);
        assert_eq!(layout.locate('c'), Some(Coordinate::new(1, 0)));
    }

    #[test]
    fn test_new_rejects_bad_layouts() {
        let err = KeyboardLayout::new("empty", vec![]).unwrap_err();
        assert!(err.is_configuration());

        let err = KeyboardLayout::new("gap", vec![vec!['a'], vec![]]).unwrap_err();
        assert!(err.to_string().contains("row 1 is empty"));

        let err = KeyboardLayout::new("dup", vec![vec!['a', 'b'], vec!['B']]).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_builtins() {
        let layouts = KeyboardLayout::builtins();

        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts["de"].key_at(Coordinate::new(1, 5)), Some('z'));
        assert_eq!(layouts["en"].key_at(Coordinate::new(1, 5)), Some('y'));
        assert!(KeyboardLayout::builtin("fr").is_none());
    }
}
