//! Pattern library
//!
//! In-memory form of the page's pattern data: for each category
//! (`scales`, `chords`, `arpeggios`, `voicings`) a map from pattern name to
//! its ordered interval labels. Loading is lenient: a malformed entry is
//! logged and dropped, and a missing category is simply empty.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::error::LibraryError;
use crate::models::PatternKind;

const CATEGORIES: [(&str, PatternKind); 4] = [
    ("scales", PatternKind::Scale),
    ("chords", PatternKind::Chord),
    ("arpeggios", PatternKind::Arpeggio),
    ("voicings", PatternKind::Voicing),
];

/// Named interval lists grouped by pattern kind
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternLibrary {
    categories: HashMap<PatternKind, BTreeMap<String, Vec<String>>>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, LibraryError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_yaml(text: &str) -> Result<Self, LibraryError> {
        let value: Value = serde_yaml::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Build a library from an already-parsed document
    ///
    /// Entries that are not lists of strings are skipped; non-string items
    /// inside a list are skipped individually.
    pub fn from_value(value: &Value) -> Self {
        let mut library = Self::new();
        let Some(root) = value.as_object() else {
            log::warn!("Pattern library is not an object; using an empty library");
            return library;
        };

        for (category, kind) in CATEGORIES {
            let Some(entries) = root.get(category) else {
                continue;
            };
            let Some(entries) = entries.as_object() else {
                log::warn!("Pattern category '{}' is not an object; skipping", category);
                continue;
            };
            for (name, labels) in entries {
                match labels.as_array() {
                    Some(items) => {
                        let labels: Vec<String> = items
                            .iter()
                            .filter_map(|item| match item.as_str() {
                                Some(label) => Some(label.to_string()),
                                None => {
                                    log::warn!("Non-string interval {} in {}/{}; skipping", item, category, name);
                                    None
                                }
                            })
                            .collect();
                        library.insert(kind, name, labels);
                    }
                    None => {
                        log::warn!("Pattern {}/{} is not a list of intervals; skipping", category, name);
                    }
                }
            }
        }

        library
    }

    pub fn insert<S: Into<String>>(&mut self, kind: PatternKind, name: S, labels: Vec<String>) {
        self.categories
            .entry(kind)
            .or_default()
            .insert(name.into(), labels);
    }

    /// Pattern names of one kind, alphabetically
    pub fn names(&self, kind: PatternKind) -> Vec<&str> {
        self.categories
            .get(&kind)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Interval labels of a pattern, or `None` when it is not in the library
    pub fn get(&self, kind: PatternKind, name: &str) -> Option<&[String]> {
        self.categories
            .get(&kind)
            .and_then(|entries| entries.get(name))
            .map(Vec::as_slice)
    }

    /// Interval labels of a pattern; empty when it is not in the library
    pub fn intervals(&self, kind: PatternKind, name: &str) -> &[String] {
        self.get(kind, name).unwrap_or(&[])
    }

    /// Total number of patterns across all kinds
    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: &str = r#"{
        "scales": {
            "Major": ["1", "2", "3", "4", "5", "6", "7"],
            "Dorian": ["1", "2", "b3", "4", "5", "6", "b7"]
        },
        "chords": {
            "Maj7": ["1", "3", "5", "7"],
            "Broken": "1 3 5",
            "Mixed": ["1", 3, "5"]
        }
    }"#;

    #[test]
    fn test_names_are_sorted() {
        let library = PatternLibrary::from_json(LIBRARY).unwrap();
        assert_eq!(library.names(PatternKind::Scale), vec!["Dorian", "Major"]);
        assert!(library.names(PatternKind::Arpeggio).is_empty());
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let library = PatternLibrary::from_json(LIBRARY).unwrap();
        assert!(library.get(PatternKind::Chord, "Broken").is_none());
        assert_eq!(library.intervals(PatternKind::Chord, "Mixed"), ["1", "5"]);
        assert_eq!(library.len(), 4);
    }

    #[test]
    fn test_missing_pattern_is_empty() {
        let library = PatternLibrary::from_json(LIBRARY).unwrap();
        assert!(library.intervals(PatternKind::Scale, "Lydian").is_empty());
    }

    #[test]
    fn test_non_object_document() {
        let library = PatternLibrary::from_json("[1, 2, 3]").unwrap();
        assert!(library.is_empty());
        assert!(PatternLibrary::from_json("{not json").is_err());
    }

    #[test]
    fn test_yaml() {
        let yaml = "arpeggios:\n  m7: ['1', 'b3', '5', 'b7']\n";
        let library = PatternLibrary::from_yaml(yaml).unwrap();
        assert_eq!(library.intervals(PatternKind::Arpeggio, "m7").len(), 4);
    }
}
