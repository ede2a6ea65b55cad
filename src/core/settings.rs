/*!
Runtime settings lookup.

The registration core reads a single runtime value, the RNG toggle. Hosts
plug in their own configuration through [`Settings`]; [`SettingsMap`] is a
plain in-memory implementation.
*/

use std::collections::HashMap;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Source of runtime configuration values
pub trait Settings: Send + Sync {
    /// Raw string value stored under `key`, if any
    fn get_str(&self, key: &str) -> Option<String>;

    /// Boolean value under `key`, `default` if missing or unparsable
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_str(key) {
            Some(value) => match parse_bool(&value) {
                Some(flag) => flag,
                None => {
                    log::warn!("ignoring invalid boolean '{}' for {}", value, key);
                    default
                }
            },
            None => default,
        }
    }
}

/// Interpret a configuration string as a boolean
///
/// Accepts `yes/no`, `true/false`, `on/off`, `enabled/disabled` and `1/0`,
/// ignoring case and surrounding whitespace.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" | "enabled" => Some(true),
        "0" | "no" | "false" | "off" | "disabled" => Some(false),
        _ => None,
    }
}

/// In-memory settings keyed by dotted path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(transparent))]
pub struct SettingsMap {
    values: HashMap<String, String>,
}

impl SettingsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings from `(key, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Store a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Store a boolean value
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.set(key, if value { "yes" } else { "no" })
    }

    /// Strict boolean lookup that reports unparsable values
    pub fn try_get_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => parse_bool(value).map(Some).ok_or_else(|| Error::InvalidSetting {
                key: key.to_string(),
                value: value.clone(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Settings for SettingsMap {
    fn get_str(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
