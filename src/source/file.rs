//! JSON deck file provider.
//!
//! Accepts either a bare array of cards or the `{"response": [...]}`
//! envelope returned by the flash card API, so exported API responses can
//! be used as deck files directly.

use super::CardProvider;
use crate::model::{CardRecord, Category, SourceError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads cards from a JSON file on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Provider reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the deck file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<CardRecord>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::FileNotFound {
                path: self.path.clone(),
            });
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        parse_records(&contents, &self.path)
    }
}

impl CardProvider for JsonFileProvider {
    /// Cards whose category label maps to `category`.
    ///
    /// Only cards of another known category are filtered out. A card with
    /// a missing or unrecognised category is kept, so that deck validation
    /// rejects it instead of the deck silently shrinking.
    fn fetch(&self, category: Category) -> Result<Vec<CardRecord>, SourceError> {
        let records = self.read_records()?;
        let total = records.len();

        let matching: Vec<CardRecord> = records
            .into_iter()
            .filter(|record| {
                match record.category.as_deref().and_then(Category::parse) {
                    Some(parsed) => parsed == category,
                    None => true,
                }
            })
            .collect();

        debug!(
            path = %self.path.display(),
            total,
            matching = matching.len(),
            category = %category,
            "Filtered deck file"
        );

        Ok(matching)
    }
}

/// Parse deck file contents: an array, or an object with a `response` array.
pub fn parse_records(contents: &str, path: &Path) -> Result<Vec<CardRecord>, SourceError> {
    let value: Value = serde_json::from_str(contents).map_err(|source| SourceError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let array = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("response") {
            Some(inner @ Value::Array(_)) => inner,
            _ => {
                return Err(SourceError::UnexpectedShape {
                    path: path.to_path_buf(),
                })
            }
        },
        _ => {
            return Err(SourceError::UnexpectedShape {
                path: path.to_path_buf(),
            })
        }
    };

    serde_json::from_value(array).map_err(|source| SourceError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_deck(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("write temp deck");
        path
    }

    #[test]
    fn parse_records_accepts_bare_array() {
        let records = parse_records(
            r#"[{"id":"a","question":"Q","answer":"A","category":"general"}]"#,
            Path::new("deck.json"),
        )
        .expect("array form");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn parse_records_accepts_response_envelope() {
        let records = parse_records(
            r#"{"response":[{"id":1,"question":"Q","answer":"A","category":"coding"}]}"#,
            Path::new("deck.json"),
        )
        .expect("envelope form");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn parse_records_rejects_other_shapes() {
        let result = parse_records(r#"{"cards":[]}"#, Path::new("deck.json"));
        assert!(matches!(result, Err(SourceError::UnexpectedShape { .. })));

        let result = parse_records("42", Path::new("deck.json"));
        assert!(matches!(result, Err(SourceError::UnexpectedShape { .. })));
    }

    #[test]
    fn parse_records_reports_invalid_json() {
        let result = parse_records("[{", Path::new("broken.json"));
        match result {
            Err(SourceError::InvalidJson { path, .. }) => {
                assert_eq!(path, PathBuf::from("broken.json"))
            }
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn fetch_missing_file_is_file_not_found() {
        let provider = JsonFileProvider::new("/nonexistent/flashdeck/deck.json");
        let result = provider.fetch(Category::General);
        assert!(matches!(result, Err(SourceError::FileNotFound { .. })));
    }

    #[test]
    fn fetch_filters_by_category_including_subcategories() {
        let path = temp_deck(
            "flashdeck_test_filter.json",
            r#"[
                {"id":"g1","question":"Q","answer":"A","category":"general"},
                {"id":"c1","question":"Q","answer":"A","category":"Algorithms"},
                {"id":"c2","question":"Q","answer":"A","category":"data structures"}
            ]"#,
        );
        let provider = JsonFileProvider::new(path.clone());

        let coding = provider.fetch(Category::Coding).expect("coding cards");
        let general = provider.fetch(Category::General).expect("general cards");

        fs::remove_file(&path).ok();

        assert_eq!(coding.len(), 2);
        assert_eq!(general.len(), 1);
    }

    #[test]
    fn fetch_keeps_cards_with_missing_or_unknown_category() {
        let path = temp_deck(
            "flashdeck_test_malformed_category.json",
            r#"[
                {"id":"g1","question":"Q","answer":"A","category":"general"},
                {"id":"c1","question":"Q","answer":"A","category":"coding"},
                {"id":"x1","question":"Q","answer":"A","category":"histroy"},
                {"id":"x2","question":"Q","answer":"A"}
            ]"#,
        );
        let provider = JsonFileProvider::new(path.clone());

        let general = provider.fetch(Category::General).expect("general cards");

        fs::remove_file(&path).ok();

        assert_eq!(general.len(), 3);
        assert_eq!(general[1].category.as_deref(), Some("histroy"));
        assert_eq!(general[2].category, None);
    }
}
