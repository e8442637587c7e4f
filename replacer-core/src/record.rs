//! record.rs - Field access for struct-like records.
//!
//! Rust has no runtime reflection, so dynamic field-name resolution is
//! expressed as a trait the caller implements for its own types: a record
//! maps field names to read handles and, where the field is mutable text,
//! to write handles. The resolver validates that a record exposes the two
//! fields a struct replacer is configured with.
//!
//! License: MIT OR Apache-2.0

use log::debug;

/// A struct-like value whose textual fields are addressable by name.
///
/// Implementors decide which fields are visible and which are mutable.
/// Returning `None` from [`field`](Record::field) means the field does not
/// exist or is not textual; returning `None` from
/// [`field_mut`](Record::field_mut) additionally covers fields that are
/// readable but not reachable for in-place update.
///
/// ```rust
/// use replacer_core::Record;
///
/// struct Host {
///     name: String,
///     address: String,
/// }
///
/// impl Record for Host {
///     fn field(&self, name: &str) -> Option<&str> {
///         match name {
///             "Name" => Some(&self.name),
///             "Address" => Some(&self.address),
///             _ => None,
///         }
///     }
///
///     fn field_mut(&mut self, name: &str) -> Option<&mut String> {
///         match name {
///             "Name" => Some(&mut self.name),
///             "Address" => Some(&mut self.address),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns read access to the named textual field, if it exists.
    fn field(&self, name: &str) -> Option<&str>;

    /// Returns write access to the named textual field, if it exists and is
    /// reachable for in-place update.
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;
}

/// Validates that `record` exposes `match_field` for reading and
/// `replace_field` for in-place mutation.
///
/// Returns `false` when either field is missing, non-textual, or (for the
/// replace field) not mutable; the caller must then treat the record as
/// unchanged. Field handles are re-fetched per pattern iteration by the
/// caller, since the match field and replace field may be the same field.
pub fn resolve_fields(record: &mut dyn Record, match_field: &str, replace_field: &str) -> bool {
    if record.field(match_field).is_none() {
        debug!("Match field '{}' is not resolvable on this record.", match_field);
        return false;
    }
    if record.field_mut(replace_field).is_none() {
        debug!("Replace field '{}' is not resolvable for mutation on this record.", replace_field);
        return false;
    }
    true
}
