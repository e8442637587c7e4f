// replacer-core/src/replacers/mod.rs
//! This module contains the replacer kind implementations.
//!
//! Each kind is a separate file within this directory and implements the
//! `Replacer` trait for one input shape. To add a new kind, create a new
//! file (e.g., `list_replacer.rs`), define its logic, and declare it here
//! using `pub mod <kind_name>;`.
//!
//! License: MIT OR Apache-2.0

pub mod map_replacer;
pub mod string_replacer;
pub mod struct_replacer;
