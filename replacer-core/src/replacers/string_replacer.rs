// replacer-core/src/replacers/string_replacer.rs
//! A `Replacer` implementation over flat string values.
//!
//! Patterns are literal substrings; every occurrence of a matching pattern
//! is replaced. License: MIT OR Apache-2.0

use std::io::Read;

use crate::config::{Patterns, StringReplacerConfig};
use crate::errors::ReplacerError;
use crate::replacer::{Replacer, Source};

/// Replaces literal substring patterns within a string value.
///
/// Patterns are applied sequentially against the progressively updated
/// text, so a later pattern may match text introduced by an earlier
/// replacement. Cross-pattern order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct StringReplacer {
    patterns: Patterns,
}

impl StringReplacer {
    /// Creates a string replacer from a pattern table.
    pub fn new(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Creates a string replacer from a decoded configuration.
    pub fn from_config(config: StringReplacerConfig) -> Self {
        Self::new(config.patterns)
    }

    /// Creates a string replacer from a JSON configuration stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReplacerError> {
        Ok(Self::from_config(StringReplacerConfig::from_reader(reader)?))
    }

    fn apply(&self, mut text: String) -> (String, bool) {
        let mut changed = false;
        for (pattern, replacement) in &self.patterns {
            if text.contains(pattern.as_str()) {
                text = text.replace(pattern.as_str(), replacement);
                changed = true;
            }
        }
        (text, changed)
    }
}

impl Replacer for StringReplacer {
    fn replace<'a>(&self, source: Source<'a>) -> (Source<'a>, bool) {
        match source {
            Source::Text(text) => {
                let (text, changed) = self.apply(text);
                (Source::Text(text), changed)
            }
            other => (other, false),
        }
    }
}
