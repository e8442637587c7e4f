//! compiler.rs - Compilation of pattern tables into regex patterns.
//!
//! The struct replacer treats pattern text as regular-expression source.
//! Compilation happens once at replacer construction time so that an
//! invalid pattern is a construction error rather than a failure surfaced
//! on every `replace` call.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use regex::Regex;

use crate::config::Patterns;
use crate::errors::ReplacerError;

/// A single pattern compiled for regex matching.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The text substituted for matches of this pattern.
    pub replace_with: String,
}

/// Compiles every entry of a pattern table.
///
/// Fails on the first pattern that is not a valid regular expression.
pub fn compile_patterns(patterns: &Patterns) -> Result<Vec<CompiledPattern>, ReplacerError> {
    debug!("Compiling {} pattern(s).", patterns.len());

    let mut compiled = Vec::with_capacity(patterns.len());
    for (pattern, replace_with) in patterns {
        let regex = Regex::new(pattern)
            .map_err(|e| ReplacerError::PatternCompile(pattern.clone(), e))?;
        compiled.push(CompiledPattern {
            regex,
            replace_with: replace_with.clone(),
        });
    }

    debug!("Finished compiling patterns. Total compiled: {}.", compiled.len());
    Ok(compiled)
}
