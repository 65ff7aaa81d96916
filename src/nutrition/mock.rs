//! Scripted nutrition provider for tests.
//!
//! Behaves like the production provider from the session's point of view,
//! but answers from a fixed script and records every key it is asked for.
//! Lives outside `#[cfg(test)]` so integration tests can use it too.

use super::{LookupError, NutritionProvider};
use crate::model::NutritionTable;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// A [`NutritionProvider`] that replays scripted responses.
///
/// Unscripted keys panic, which turns a stray lookup in a test into a loud
/// failure instead of a silently wrong view.
///
/// # Example
/// ```ignore
/// let provider = MockNutritionProvider::new()
///     .on("apple", apple_table)
///     .failing("cherry", LookupError::Status(500));
///
/// // ... run the session ...
/// assert_eq!(provider.calls(), vec!["apple", "cherry"]);
/// ```
#[derive(Debug, Default)]
pub struct MockNutritionProvider {
    responses: HashMap<String, Result<NutritionTable, LookupError>>,
    calls: Mutex<Vec<String>>,
}

impl MockNutritionProvider {
    /// Creates a provider with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful lookup for `search_key`.
    pub fn on(mut self, search_key: &str, table: NutritionTable) -> Self {
        self.responses.insert(search_key.to_string(), Ok(table));
        self
    }

    /// Scripts a failing lookup for `search_key`.
    pub fn failing(mut self, search_key: &str, error: LookupError) -> Self {
        self.responses.insert(search_key.to_string(), Err(error));
        self
    }

    /// Every key fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of lookups performed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl NutritionProvider for MockNutritionProvider {
    async fn fetch(&self, search_key: &str) -> Result<NutritionTable, LookupError> {
        self.calls.lock().unwrap().push(search_key.to_string());
        match self.responses.get(search_key) {
            Some(response) => response.clone(),
            None => panic!("unscripted nutrition lookup for key {:?}", search_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> NutritionTable {
        serde_json::from_value(json!({"calories": 52})).unwrap()
    }

    #[tokio::test]
    async fn test_replays_script_and_records_calls() {
        let provider = MockNutritionProvider::new()
            .on("apple", table())
            .failing("cherry", LookupError::Status(500));

        assert_eq!(provider.fetch("apple").await.unwrap(), table());
        assert_eq!(
            provider.fetch("cherry").await.unwrap_err(),
            LookupError::Status(500)
        );
        assert_eq!(provider.calls(), vec!["apple", "cherry"]);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    #[should_panic(expected = "unscripted nutrition lookup")]
    async fn test_unscripted_key_panics() {
        let provider = MockNutritionProvider::new();
        let _ = provider.fetch("durian").await;
    }
}
