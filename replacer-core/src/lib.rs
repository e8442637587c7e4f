// replacer-core/src/lib.rs
//! # Replacer Core Library
//!
//! `replacer-core` provides configurable find-and-replace transformation
//! over three shapes of in-memory data: flat strings, string-to-string
//! mappings, and struct-like records with named fields. Callers construct a
//! replacer from a pattern table and a match strategy, then apply its
//! single `replace` operation to values of the expected shape.
//!
//! The library is pure and stateless: configurations are immutable after
//! construction and replacers hold no state between calls. There is no
//! concurrency, persistence, or network surface; I/O occurs only in the
//! separate configuration-loading step.
//!
//! ## Modules
//!
//! * `config`: Defines the pattern table and the per-kind configuration
//!   schemas, plus JSON loaders.
//! * `compiler`: Compiles pattern tables into regex patterns for the
//!   struct replacer.
//! * `replacer`: Defines the `Replacer` trait and the polymorphic `Source`
//!   input type.
//! * `record`: Defines the `Record` field-access trait and the field
//!   resolver.
//! * `replacers`: Contains the concrete replacer kinds.
//! * `errors`: Structured error types for loading and construction.
//!
//! ## Replacer kinds
//!
//! * [`StringReplacer`]: literal substring replacement over one string.
//! * [`MapReplacer`]: literal substring matching against the keys or
//!   values of a mapping, selected by [`MatchTarget`].
//! * [`StructReplacer`]: regex matching against one named field of a
//!   record, conditionally rewriting another (possibly identical) field in
//!   place via the [`Record`] trait.
//!
//! ## Usage Example
//!
//! ```rust
//! use replacer_core::{Record, Replacer, Source, StructReplacer};
//! use std::collections::HashMap;
//!
//! struct Endpoint {
//!     name: String,
//!     url: String,
//! }
//!
//! impl Record for Endpoint {
//!     fn field(&self, name: &str) -> Option<&str> {
//!         match name {
//!             "Name" => Some(&self.name),
//!             "Url" => Some(&self.url),
//!             _ => None,
//!         }
//!     }
//!
//!     fn field_mut(&mut self, name: &str) -> Option<&mut String> {
//!         match name {
//!             "Name" => Some(&mut self.name),
//!             "Url" => Some(&mut self.url),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), replacer_core::ReplacerError> {
//! let patterns = HashMap::from([("legacy".to_string(), "http://localhost".to_string())]);
//! let replacer = StructReplacer::new("Name", "Url", patterns)?;
//!
//! let mut endpoint = Endpoint {
//!     name: "legacy-billing".to_string(),
//!     url: "http://billing.internal".to_string(),
//! };
//! let (_, changed) = replacer.replace(Source::Record(&mut endpoint));
//!
//! assert!(changed);
//! assert_eq!(endpoint.url, "http://localhost");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Decoding a malformed configuration payload and compiling an invalid
//! regex pattern are the only hard failures, surfaced as
//! [`ReplacerError`]. Every shape mismatch during `replace` is a silent
//! no-op reported through the boolean `changed` flag; this graceful
//! degradation is part of the contract, not an error path.
//!
//! ## Design Principles
//!
//! * **Pluggable:** The `Replacer` trait lets the three kinds be used
//!   interchangeably behind one capability.
//! * **Stateless:** Replacers are reusable across many calls and safe to
//!   share read-only across threads.
//! * **Statically typed field access:** Rust has no runtime reflection;
//!   the `Record` trait is the caller-implemented equivalent.
//!
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod errors;
pub mod record;
pub mod replacer;
pub mod replacers;

/// Re-exports the public configuration types and loaders.
pub use config::{
    MapReplacerConfig,
    MatchTarget,
    Patterns,
    StringReplacerConfig,
    StructReplacerConfig,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ReplacerError;

/// Re-exports the core trait and the polymorphic input type.
pub use replacer::{Replacer, Source};

/// Re-exports the record field-access trait and resolver.
pub use record::{resolve_fields, Record};

/// Re-exports the concrete replacer kinds from their respective locations.
pub use replacers::map_replacer::MapReplacer;
pub use replacers::string_replacer::StringReplacer;
pub use replacers::struct_replacer::StructReplacer;

/// Re-exports the compiled-pattern types for advanced usage.
pub use compiler::{compile_patterns, CompiledPattern};
