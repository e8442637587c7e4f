// replacer-core/src/replacers/map_replacer.rs
//! A `Replacer` implementation over string-to-string mappings.
//!
//! Patterns are literal substrings tested against either the keys or the
//! values of the mapping, selected by [`MatchTarget`].
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::io::Read;

use crate::config::{MapReplacerConfig, MatchTarget, Patterns};
use crate::errors::ReplacerError;
use crate::replacer::{Replacer, Source};

/// Replaces mapping entries whose key or value contains a pattern.
///
/// Two strategies exist:
///
/// * [`MatchTarget::Key`]: an entry whose key contains a pattern has its
///   value **wholesale overwritten** by the pattern's replacement text.
/// * [`MatchTarget::Value`] (default): an entry whose value contains a
///   pattern has every occurrence of the pattern substituted within the
///   value, the rest of the value retained.
///
/// Entries matching no pattern carry through unchanged; the output is a
/// new mapping.
#[derive(Debug, Clone, Default)]
pub struct MapReplacer {
    match_with: MatchTarget,
    patterns: Patterns,
}

impl MapReplacer {
    /// Creates a map replacer from a match strategy and a pattern table.
    pub fn new(match_with: MatchTarget, patterns: Patterns) -> Self {
        Self { match_with, patterns }
    }

    /// Creates a map replacer from a decoded configuration.
    pub fn from_config(config: MapReplacerConfig) -> Self {
        Self::new(config.match_with, config.patterns)
    }

    /// Creates a map replacer from a JSON configuration stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReplacerError> {
        Ok(Self::from_config(MapReplacerConfig::from_reader(reader)?))
    }

    fn apply(&self, source: HashMap<String, String>) -> (HashMap<String, String>, bool) {
        let mut changed = false;
        let mut result = HashMap::with_capacity(source.len());

        for (key, mut value) in source {
            for (pattern, replacement) in &self.patterns {
                match self.match_with {
                    MatchTarget::Key => {
                        if key.contains(pattern.as_str()) {
                            value = replacement.clone();
                            changed = true;
                        }
                    }
                    MatchTarget::Value => {
                        if value.contains(pattern.as_str()) {
                            value = value.replace(pattern.as_str(), replacement);
                            changed = true;
                        }
                    }
                }
            }
            result.insert(key, value);
        }

        (result, changed)
    }
}

impl Replacer for MapReplacer {
    fn replace<'a>(&self, source: Source<'a>) -> (Source<'a>, bool) {
        match source {
            Source::Map(map) => {
                let (map, changed) = self.apply(map);
                (Source::Map(map), changed)
            }
            other => (other, false),
        }
    }
}
