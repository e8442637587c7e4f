//! Configuration management for `replacer-core`.
//!
//! This module defines the pattern table and the per-kind configuration
//! schemas, and handles decoding them from JSON payloads. Each replacer kind
//! owns its own schema; the key names are part of the external contract and
//! are deliberately not reconciled into a single shared shape.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::errors::ReplacerError;

/// The pattern table: a mapping from pattern text to replacement text.
///
/// Whether the pattern text is interpreted as a literal substring or as a
/// regular-expression source depends on the replacer kind it is handed to.
/// Iteration order across patterns is unspecified; callers must not rely on
/// any particular order when more than one pattern can match the same text.
pub type Patterns = HashMap<String, String>;

/// Selects which side of a mapping entry is tested against patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTarget {
    /// Test entry keys; a hit overwrites the entry's value wholesale.
    Key,
    /// Test entry values; a hit substitutes every occurrence in the value.
    #[default]
    Value,
}

impl<'de> Deserialize<'de> for MatchTarget {
    /// Deserializes leniently: any selector text other than `"key"` or
    /// `"value"` normalizes to [`MatchTarget::Value`] instead of failing.
    /// This is a deliberate leniency policy, not validation.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let selector = String::deserialize(deserializer)?;
        Ok(match selector.as_str() {
            "key" => MatchTarget::Key,
            "value" => MatchTarget::Value,
            other => {
                warn!("Unrecognized matchWith selector '{}'; defaulting to 'value'.", other);
                MatchTarget::Value
            }
        })
    }
}

/// Configuration for a [`StringReplacer`](crate::StringReplacer).
///
/// Expected payload shape:
///
/// ```json
/// {
///     "patterns": {
///         "pattern-1": "replace-value-1",
///         "pattern-2": "replace-value-2"
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringReplacerConfig {
    #[serde(default)]
    pub patterns: Patterns,
}

/// Configuration for a [`MapReplacer`](crate::MapReplacer).
///
/// Expected payload shape:
///
/// ```json
/// {
///     "matchWith": "key",
///     "patterns": {
///         "pattern-1": "replace-value-1"
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapReplacerConfig {
    /// Match strategy selector. Missing or unrecognized values normalize to
    /// [`MatchTarget::Value`].
    #[serde(default)]
    pub match_with: MatchTarget,
    #[serde(default)]
    pub patterns: Patterns,
}

/// Configuration for a [`StructReplacer`](crate::StructReplacer).
///
/// Expected payload shape:
///
/// ```json
/// {
///     "matchWith": "Name",
///     "replaceWith": "Value",
///     "patterns": {
///         "pattern-1": "replace-value-1"
///     }
/// }
/// ```
///
/// `matchWith` names the field tested against patterns; `replaceWith` names
/// the field rewritten on a match. A missing field name leaves the replacer
/// unable to resolve the field at replace time, which degrades to a no-op
/// rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructReplacerConfig {
    #[serde(default)]
    pub match_with: String,
    #[serde(default)]
    pub replace_with: String,
    #[serde(default)]
    pub patterns: Patterns,
}

impl StringReplacerConfig {
    /// Decodes a string replacer configuration from a JSON byte stream.
    ///
    /// Malformed JSON is the only hard failure; missing fields decode to
    /// their defaults.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReplacerError> {
        let config: Self = serde_json::from_reader(reader)?;
        debug!("Decoded string replacer configuration with {} pattern(s).", config.patterns.len());
        Ok(config)
    }

    /// Decodes a string replacer configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReplacerError> {
        let path = path.as_ref();
        info!("Loading string replacer configuration from: {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl MapReplacerConfig {
    /// Decodes a map replacer configuration from a JSON byte stream.
    ///
    /// Malformed JSON is the only hard failure; unknown `matchWith` values
    /// and missing fields decode to their defaults.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReplacerError> {
        let config: Self = serde_json::from_reader(reader)?;
        debug!(
            "Decoded map replacer configuration (matchWith: {:?}) with {} pattern(s).",
            config.match_with,
            config.patterns.len()
        );
        Ok(config)
    }

    /// Decodes a map replacer configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReplacerError> {
        let path = path.as_ref();
        info!("Loading map replacer configuration from: {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl StructReplacerConfig {
    /// Decodes a struct replacer configuration from a JSON byte stream.
    ///
    /// Malformed JSON is the only hard failure; missing fields decode to
    /// their defaults.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReplacerError> {
        let config: Self = serde_json::from_reader(reader)?;
        debug!(
            "Decoded struct replacer configuration (matchWith: '{}', replaceWith: '{}') with {} pattern(s).",
            config.match_with,
            config.replace_with,
            config.patterns.len()
        );
        Ok(config)
    }

    /// Decodes a struct replacer configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReplacerError> {
        let path = path.as_ref();
        info!("Loading struct replacer configuration from: {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}
