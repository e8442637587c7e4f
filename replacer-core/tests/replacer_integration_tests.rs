// replacer-core/tests/replacer_integration_tests.rs
//! End-to-end tests exercising replacers built from configuration payloads.

use anyhow::Result;
use std::collections::HashMap;
use test_log::test; // For integrating with `env_logger` in tests

use replacer_core::{
    MapReplacer, MatchTarget, Record, Replacer, Source, StringReplacer, StructReplacer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Example {
    name: String,
    value: String,
}

impl Example {
    fn new(name: &str, value: &str) -> Self {
        Self { name: name.to_string(), value: value.to_string() }
    }
}

impl Record for Example {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "Name" => Some(&self.name),
            "Value" => Some(&self.value),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "Name" => Some(&mut self.name),
            "Value" => Some(&mut self.value),
            _ => None,
        }
    }
}

#[test]
fn test_string_replacer_from_config_stream() -> Result<()> {
    let payload = r#"{
        "patterns": {
            "pattern": "replaced value"
        }
    }"#;
    let replacer = StringReplacer::from_reader(payload.as_bytes())?;

    let (out, changed) = replacer.replace(Source::from("This is pattern-1"));

    assert!(changed);
    assert_eq!(out.into_text().unwrap(), "This is replaced value-1");
    Ok(())
}

#[test]
fn test_map_replacer_from_config_stream_defaults_to_match_by_value() -> Result<()> {
    let payload = r#"{
        "matchWith": "something-unrecognized",
        "patterns": {
            "pattern": "replaced value"
        }
    }"#;
    let replacer = MapReplacer::from_reader(payload.as_bytes())?;

    let input = HashMap::from([("key-1".to_string(), "This is pattern-1".to_string())]);
    let (out, changed) = replacer.replace(Source::from(input));

    assert!(changed);
    assert_eq!(out.into_map().unwrap()["key-1"], "This is replaced value-1");
    Ok(())
}

#[test]
fn test_struct_replacer_from_config_stream() -> Result<()> {
    let payload = r#"{
        "matchWith": "Name",
        "replaceWith": "Value",
        "patterns": {
            "pattern": "replaced value"
        }
    }"#;
    let replacer = StructReplacer::from_reader(payload.as_bytes())?;

    let mut source = Example::new("This is pattern-1", "value-1");
    let (_, changed) = replacer.replace(Source::Record(&mut source));

    assert!(changed);
    assert_eq!(source.value, "replaced value");
    Ok(())
}

#[test]
fn test_struct_replacer_applies_every_matching_pattern() -> Result<()> {
    // Both patterns fire against the same record; with disjoint matches the
    // outcome is the same whatever order the table iterates in.
    let patterns = HashMap::from([
        ("alpha".to_string(), "a".to_string()),
        ("beta".to_string(), "b".to_string()),
    ]);
    let replacer = StructReplacer::new("Value", "Value", patterns)?;

    let mut source = Example::new("name", "alpha and beta");
    let (_, changed) = replacer.replace(Source::Record(&mut source));

    assert!(changed);
    assert_eq!(source.value, "a and b");
    Ok(())
}

#[test]
fn test_struct_replacer_same_reference_is_returned() -> Result<()> {
    let patterns = HashMap::from([("pattern".to_string(), "replaced".to_string())]);
    let replacer = StructReplacer::new("Value", "Value", patterns)?;

    let mut source = Example::new("name", "This is pattern-1");
    let addr_before = &mut source as *mut Example as usize;
    let (out, changed) = replacer.replace(Source::Record(&mut source));

    assert!(changed);
    match out {
        Source::Record(record) => {
            let addr_after = record as *mut dyn Record as *mut () as usize;
            assert_eq!(addr_before, addr_after);
        }
        _ => panic!("source shape changed"),
    }
    Ok(())
}

#[test]
fn test_every_replacer_passes_through_foreign_shapes() -> Result<()> {
    let patterns = HashMap::from([("pattern".to_string(), "replaced".to_string())]);
    let string_replacer = StringReplacer::new(patterns.clone());
    let map_replacer = MapReplacer::new(MatchTarget::Value, patterns.clone());
    let struct_replacer = StructReplacer::new("Name", "Value", patterns)?;

    let map = HashMap::from([("key".to_string(), "pattern".to_string())]);
    let (out, changed) = string_replacer.replace(Source::from(map.clone()));
    assert!(!changed);
    assert_eq!(out.into_map().unwrap(), map);

    let (out, changed) = map_replacer.replace(Source::from("pattern"));
    assert!(!changed);
    assert_eq!(out.into_text().unwrap(), "pattern");

    let (out, changed) = struct_replacer.replace(Source::from("pattern"));
    assert!(!changed);
    assert_eq!(out.into_text().unwrap(), "pattern");
    Ok(())
}

#[test]
fn test_map_replacer_is_idempotent_for_non_overlapping_patterns() -> Result<()> {
    let patterns = HashMap::from([("pattern".to_string(), "replaced value".to_string())]);
    let replacer = MapReplacer::new(MatchTarget::Value, patterns);

    let input = HashMap::from([("key-1".to_string(), "This is pattern-1".to_string())]);
    let (first, changed) = replacer.replace(Source::from(input));
    assert!(changed);
    let first = first.into_map().unwrap();

    let (second, changed) = replacer.replace(Source::from(first.clone()));
    assert!(!changed);
    assert_eq!(second.into_map().unwrap(), first);
    Ok(())
}

#[test]
fn test_struct_replacer_rejects_by_value_and_sequence_shapes() -> Result<()> {
    let patterns = HashMap::from([("pattern".to_string(), "replaced value".to_string())]);
    let replacer = StructReplacer::new("Value", "Value", patterns)?;

    let (out, changed) = replacer.replace(Source::OwnedRecord(Box::new(Example::new(
        "name",
        "This is pattern-1",
    ))));
    assert!(!changed);
    match out {
        Source::OwnedRecord(record) => {
            assert_eq!(record.field("Value"), Some("This is pattern-1"));
        }
        _ => panic!("source shape changed"),
    }

    let mut records: Vec<Box<dyn Record>> = vec![
        Box::new(Example::new("name", "This is pattern-1")),
        Box::new(Example::new("name", "This is pattern-2")),
    ];
    let (_, changed) = replacer.replace(Source::Records(&mut records));
    assert!(!changed);
    assert_eq!(records[0].field("Value"), Some("This is pattern-1"));
    assert_eq!(records[1].field("Value"), Some("This is pattern-2"));
    Ok(())
}
