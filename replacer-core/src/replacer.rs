// replacer-core/src/replacer.rs
//! Defines the core Replacer trait and the polymorphic Source input type.
//!
//! The `Replacer` trait provides a pluggable interface for the different
//! replacer kinds (string, map, struct). This module defines the contract
//! that all such replacers adhere to, ensuring a consistent and
//! interchangeable core API.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use crate::record::Record;

/// A value accepted by [`Replacer::replace`].
///
/// Each replacer kind handles one shape and passes every other shape
/// through unchanged. The record-bearing variants distinguish how the
/// record reaches the replacer, because in-place replacement requires a
/// mutable reference to a single record:
///
/// * [`Source::Record`] is the only shape the struct replacer rewrites.
/// * [`Source::OwnedRecord`] carries a record by value; mutating it could
///   never be observed through the caller's original, so it is a
///   guaranteed no-op.
/// * [`Source::Records`] carries a sequence of records, which is not a
///   single record and is likewise a no-op.
pub enum Source<'a> {
    /// An owned string value.
    Text(String),
    /// An owned string-to-string mapping.
    Map(HashMap<String, String>),
    /// A single record, by mutable reference.
    Record(&'a mut dyn Record),
    /// A record passed by value; never eligible for in-place replacement.
    OwnedRecord(Box<dyn Record>),
    /// A sequence of records; never eligible for in-place replacement.
    Records(&'a mut [Box<dyn Record>]),
}

impl<'a> Source<'a> {
    /// Consumes the source, returning the string if this is [`Source::Text`].
    pub fn into_text(self) -> Option<String> {
        match self {
            Source::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Consumes the source, returning the mapping if this is [`Source::Map`].
    pub fn into_map(self) -> Option<HashMap<String, String>> {
        match self {
            Source::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl<'a> From<String> for Source<'a> {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&str> for Source<'a> {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}

impl<'a> From<HashMap<String, String>> for Source<'a> {
    fn from(map: HashMap<String, String>) -> Self {
        Source::Map(map)
    }
}

/// A trait that defines the core functionality of a replacer.
///
/// This trait decouples callers from the specific replacer kind, allowing
/// the different kinds to be used interchangeably behind one capability.
pub trait Replacer {
    /// Applies every configured pattern to `source`.
    ///
    /// Returns the (possibly rewritten) source together with a flag
    /// indicating whether any replacement was performed. A source whose
    /// shape does not match the replacer's expected shape is returned
    /// unchanged with `false`; shape mismatches are never errors.
    fn replace<'a>(&self, source: Source<'a>) -> (Source<'a>, bool);
}
