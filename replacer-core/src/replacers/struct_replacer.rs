// replacer-core/src/replacers/struct_replacer.rs
//! A `Replacer` implementation over struct-like records with named fields.
//!
//! Patterns are regular-expression sources, compiled once at construction.
//! The match field is searched; on a hit the replace field is rewritten,
//! either wholesale or in place depending on whether the two names denote
//! the same field. License: MIT OR Apache-2.0

use std::io::Read;

use crate::compiler::{compile_patterns, CompiledPattern};
use crate::config::{Patterns, StructReplacerConfig};
use crate::errors::ReplacerError;
use crate::record::{resolve_fields, Record};
use crate::replacer::{Replacer, Source};

/// How a pattern hit rewrites the replace field.
///
/// Computed once at construction from whether the match-field name and
/// replace-field name are equal, rather than re-derived per pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplaceMode {
    /// Different fields: the replace field's content is discarded and
    /// replaced wholesale by the pattern's replacement text.
    Overwrite,
    /// Same field: only matched regions are substituted, surrounding text
    /// preserved.
    SubstituteInPlace,
}

/// Rewrites one named field of a record based on pattern matches against
/// another (possibly identical) named field.
///
/// Only a single record passed by mutable reference
/// ([`Source::Record`]) is eligible. A record by value or a sequence of
/// records can never be altered in place through the caller's original, so
/// those shapes are silent no-ops, as is any resolution failure (missing
/// field, non-textual field, read-only replace field).
///
/// Every pattern is tested against the match field's *current* text, so in
/// the same-field case later patterns see the progressively rewritten
/// value; first-match-wins is explicitly not the semantic.
#[derive(Debug, Clone)]
pub struct StructReplacer {
    match_field: String,
    replace_field: String,
    mode: ReplaceMode,
    patterns: Vec<CompiledPattern>,
}

impl StructReplacer {
    /// Creates a struct replacer from two field names and a pattern table.
    ///
    /// Pattern text is compiled as regular-expression source; an invalid
    /// pattern fails construction with
    /// [`ReplacerError::PatternCompile`](crate::ReplacerError).
    pub fn new(
        match_field: impl Into<String>,
        replace_field: impl Into<String>,
        patterns: Patterns,
    ) -> Result<Self, ReplacerError> {
        let match_field = match_field.into();
        let replace_field = replace_field.into();
        let mode = if match_field == replace_field {
            ReplaceMode::SubstituteInPlace
        } else {
            ReplaceMode::Overwrite
        };
        let patterns = compile_patterns(&patterns)?;

        Ok(Self { match_field, replace_field, mode, patterns })
    }

    /// Creates a struct replacer from a decoded configuration.
    pub fn from_config(config: StructReplacerConfig) -> Result<Self, ReplacerError> {
        Self::new(config.match_with, config.replace_with, config.patterns)
    }

    /// Creates a struct replacer from a JSON configuration stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReplacerError> {
        Self::from_config(StructReplacerConfig::from_reader(reader)?)
    }

    fn apply(&self, record: &mut dyn Record) -> bool {
        if !resolve_fields(record, &self.match_field, &self.replace_field) {
            return false;
        }

        let mut changed = false;
        for pattern in &self.patterns {
            // Re-read per iteration: in the same-field case the match text
            // is the text being rewritten.
            let matched = record
                .field(&self.match_field)
                .is_some_and(|text| pattern.regex.is_match(text));
            if !matched {
                continue;
            }

            if let Some(target) = record.field_mut(&self.replace_field) {
                match self.mode {
                    ReplaceMode::Overwrite => {
                        *target = pattern.replace_with.clone();
                    }
                    ReplaceMode::SubstituteInPlace => {
                        let rewritten = pattern
                            .regex
                            .replace_all(target.as_str(), pattern.replace_with.as_str())
                            .into_owned();
                        *target = rewritten;
                    }
                }
                changed = true;
            }
        }
        changed
    }
}

impl Replacer for StructReplacer {
    fn replace<'a>(&self, source: Source<'a>) -> (Source<'a>, bool) {
        match source {
            Source::Record(record) => {
                let changed = self.apply(&mut *record);
                (Source::Record(record), changed)
            }
            // Records by value and sequences of records cannot be rewritten
            // in place through the caller's original.
            other => (other, false),
        }
    }
}
