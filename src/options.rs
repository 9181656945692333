//! Option surface
//!
//! The loosely-typed, camelCase options a host hands over (typically as
//! JSON). Every field is optional; [`TypingConfig::from_options`] fills in the
//! defaults and validates the result.
//!
//! [`TypingConfig::from_options`]: crate::TypingConfig::from_options

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::typing::{KeyboardLayout, DEFAULT_LAYOUT};
use crate::{DelayConfig, TypingConfig, DEFAULT_TYPO_CHANCE};

/// Typing options as supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TypingOptions {
    /// Name of the layout to type on (default `en`)
    pub keyboard_layout: Option<String>,
    /// Extra layouts by name; an entry named like a built-in replaces it
    pub keyboard_layouts: HashMap<String, Vec<Vec<char>>>,
    pub typo_chance_in_percent: Option<u32>,
    pub minimum_delay_in_ms: Option<u64>,
    pub maximum_delay_in_ms: Option<u64>,
    pub backspace_minimum_delay_in_ms: Option<u64>,
    pub backspace_maximum_delay_in_ms: Option<u64>,
    /// Pause before the first keystroke (default 5000)
    pub warm_up_delay_in_ms: Option<u64>,
}

impl TypingOptions {
    /// Parse options from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Layout table: built-ins overlaid with the configured layouts
    pub fn layouts(&self) -> Result<HashMap<String, KeyboardLayout>> {
        let mut layouts = KeyboardLayout::builtins();
        for (name, rows) in &self.keyboard_layouts {
            layouts.insert(name.clone(), KeyboardLayout::new(name, rows.clone())?);
        }
        Ok(layouts)
    }

    /// Apply defaults and validate
    pub(crate) fn resolve(self) -> Result<TypingConfig> {
        let mut layouts = self.layouts()?;

        let name = self.keyboard_layout.as_deref().unwrap_or(DEFAULT_LAYOUT);
        let layout = layouts
            .remove(name)
            .ok_or_else(|| Error::UnknownLayout(name.to_string()))?;

        let defaults = DelayConfig::default();
        let delays = DelayConfig::new(
            self.minimum_delay_in_ms.unwrap_or(defaults.min_delay()),
            self.maximum_delay_in_ms.unwrap_or(defaults.max_delay()),
            self.backspace_minimum_delay_in_ms
                .unwrap_or(defaults.min_backspace_delay()),
            self.backspace_maximum_delay_in_ms
                .unwrap_or(defaults.max_backspace_delay()),
        )?;

        let mut config = TypingConfig::default()
            .with_layout(layout)
            .with_typo_chance(self.typo_chance_in_percent.unwrap_or(DEFAULT_TYPO_CHANCE))?
            .with_delays(delays)?;

        if let Some(ms) = self.warm_up_delay_in_ms {
            config = config.with_warm_up(Duration::from_millis(ms));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::Coordinate;

    #[test]
    fn test_empty_options_use_defaults() {
        let config = TypingConfig::from_options(TypingOptions::default()).unwrap();

        assert_eq!(config.layout().name(), "en");
        assert_eq!(config.typo_chance(), 15);
        assert_eq!(*config.delays(), DelayConfig::default());
    }

    #[test]
    fn test_parse_camel_case_options() {
        let options = TypingOptions::from_json_str(
            r#"{
                "keyboardLayout": "de",
                "typoChanceInPercent": 30,
                "minimumDelayInMs": 10,
                "maximumDelayInMs": 20,
                "backspaceMinimumDelayInMs": 30,
                "backspaceMaximumDelayInMs": 40,
                "warmUpDelayInMs": 0
            }"#,
        )
        .unwrap();

        let config = TypingConfig::from_options(options).unwrap();
        assert_eq!(config.layout().name(), "de");
        assert_eq!(config.typo_chance(), 30);
        assert_eq!(*config.delays(), DelayConfig::new(10, 20, 30, 40).unwrap());
        assert_eq!(config.warm_up(), Duration::ZERO);
    }

    #[test]
    fn test_custom_layout() {
        let options = TypingOptions::from_json_str(
            r#"{
                "keyboardLayout": "abc",
                "keyboardLayouts": { "abc": [["a", "b", "c"], ["d", "e"]] }
            }"#,
        )
        .unwrap();

        let config = TypingConfig::from_options(options).unwrap();
        assert_eq!(config.layout().name(), "abc");
        assert_eq!(config.layout().key_at(Coordinate::new(1, 1)), Some('e'));
    }

    #[test]
    fn test_configuration_errors() {
        let unknown = TypingOptions {
            keyboard_layout: Some("fr".into()),
            ..Default::default()
        };
        assert!(matches!(
            TypingConfig::from_options(unknown),
            Err(Error::UnknownLayout(name)) if name == "fr"
        ));

        let inverted = TypingOptions {
            minimum_delay_in_ms: Some(800),
            ..Default::default()
        };
        assert!(matches!(
            TypingConfig::from_options(inverted),
            Err(Error::InvalidDelayRange { min: 800, max: 650, .. })
        ));

        let chance = TypingOptions {
            typo_chance_in_percent: Some(150),
            ..Default::default()
        };
        assert!(TypingConfig::from_options(chance).unwrap_err().is_configuration());

        let duplicate = TypingOptions {
            keyboard_layouts: HashMap::from([("x".to_string(), vec![vec!['a', 'A']])]),
            ..Default::default()
        };
        assert!(matches!(
            TypingConfig::from_options(duplicate),
            Err(Error::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_fields_and_multi_char_keys() {
        assert!(TypingOptions::from_json_str(r#"{ "typoChance": 5 }"#).is_err());
        assert!(
            TypingOptions::from_json_str(r#"{ "keyboardLayouts": { "x": [["ab"]] } }"#).is_err()
        );
    }

    #[test]
    fn test_from_path_loads_json_file() {
        let path = std::env::temp_dir().join(format!(
            "humantype-options-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{ "keyboardLayout": "de", "typoChanceInPercent": 5, "warmUpDelayInMs": 250 }"#,
        )
        .unwrap();

        let options = TypingOptions::from_path(&path);
        let _ = std::fs::remove_file(&path);

        let options = options.unwrap();
        assert_eq!(options.keyboard_layout.as_deref(), Some("de"));
        assert_eq!(options.typo_chance_in_percent, Some(5));

        let config = TypingConfig::from_options(options).unwrap();
        assert_eq!(config.layout().name(), "de");
        assert_eq!(config.warm_up(), Duration::from_millis(250));
    }

    #[test]
    fn test_from_path_missing_file() {
        let path = std::env::temp_dir().join("humantype-no-such-dir/options.json");

        let err = TypingOptions::from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound));
        assert!(!err.is_configuration());
    }
}
