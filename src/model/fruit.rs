//! Catalog rows and the deduplicated fruit lookup table backing the form.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the fruit catalog.
///
/// `name` is what the ingredient picker shows; `search_on` is the key used
/// for nutrition lookups, when the source provides one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitOption {
    pub name: String,
    pub search_on: Option<String>,
}

impl FruitOption {
    /// Creates a catalog row.
    ///
    /// # Arguments
    /// * `name` - Fruit name shown in the picker
    /// * `search_on` - Lookup key for the nutrition service, if any
    pub fn new(name: impl Into<String>, search_on: Option<&str>) -> Self {
        Self {
            name: name.into(),
            search_on: search_on.map(Into::into),
        }
    }
}

/// The fruit catalog, deduplicated by name.
///
/// Rows keep their source order so the ingredient picker lists options the
/// way the source returned them. On duplicate names the first row wins and
/// later rows are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FruitCatalog {
    entries: Vec<FruitOption>,
    index: HashMap<String, usize>,
}

impl FruitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from raw source rows, dropping duplicate names.
    pub fn from_rows(rows: impl IntoIterator<Item = FruitOption>) -> Self {
        let mut catalog = Self::new();
        for row in rows {
            catalog.insert(row);
        }
        catalog
    }

    /// Adds a row. Returns `false` when the name is already present; the
    /// existing row is kept untouched in that case.
    pub fn insert(&mut self, option: FruitOption) -> bool {
        if self.index.contains_key(&option.name) {
            return false;
        }
        self.index.insert(option.name.clone(), self.entries.len());
        self.entries.push(option);
        true
    }

    /// Looks up a row by fruit name.
    pub fn get(&self, name: &str) -> Option<&FruitOption> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Fruit names in catalog order, ready for the ingredient picker.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|o| o.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_wins_on_duplicate_names() {
        let catalog = FruitCatalog::from_rows(vec![
            FruitOption::new("Apple", Some("apple")),
            FruitOption::new("Banana", Some("banana")),
            FruitOption::new("Apple", Some("apple-second")),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("Apple").unwrap().search_on.as_deref(),
            Some("apple")
        );
    }

    #[test]
    fn test_names_keep_source_order() {
        let catalog = FruitCatalog::from_rows(vec![
            FruitOption::new("Ximenia", None),
            FruitOption::new("Apple", Some("apple")),
            FruitOption::new("Banana", Some("banana")),
        ]);

        assert_eq!(catalog.names(), vec!["Ximenia", "Apple", "Banana"]);
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut catalog = FruitCatalog::new();
        assert!(catalog.insert(FruitOption::new("Apple", Some("apple"))));
        assert!(!catalog.insert(FruitOption::new("Apple", None)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = FruitCatalog::from_rows(vec![FruitOption::new("Apple", Some("apple"))]);
        assert!(catalog.contains("Apple"));
        assert!(!catalog.contains("Zucchini"));
        assert!(catalog.get("Zucchini").is_none());
    }

    #[test]
    fn test_same_rows_build_equal_catalogs() {
        let rows = vec![
            FruitOption::new("Apple", Some("apple")),
            FruitOption::new("Banana", None),
            FruitOption::new("Apple", Some("dupe")),
        ];
        assert_eq!(
            FruitCatalog::from_rows(rows.clone()),
            FruitCatalog::from_rows(rows)
        );
    }
}
