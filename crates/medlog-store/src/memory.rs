//! In-memory document store, used by tests in place of the hosted backend.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::document::Document;
use crate::error::Result;
use crate::DocumentStore;

/// Collections keyed by slash-separated path. Listing an unknown path
/// yields an empty collection, matching the backend's behavior for paths
/// that hold no documents.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, document: Document) {
        self.collections.entry(path.into()).or_default().push(document);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_documents(&self, path: &str) -> Result<Vec<Document>> {
        Ok(self.collections.get(path).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FieldValue;

    #[tokio::test]
    async fn lists_documents_in_insertion_order() {
        let mut store = MemoryStore::new();
        store.insert("users", Document::new("a"));
        store.insert("users", Document::new("b"));

        let docs = store.list_documents("users").await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "a");
        assert_eq!(docs[1].id, "b");
    }

    #[tokio::test]
    async fn unknown_path_lists_empty() {
        let store = MemoryStore::new();
        assert!(store.list_documents("users").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn nested_paths_are_independent_collections() {
        let mut store = MemoryStore::new();
        store.insert(
            "medication_logs/a/entries",
            Document::new("e1").with_field("medicationName", FieldValue::Text("Rimadyl".into())),
        );

        assert_eq!(
            store
                .list_documents("medication_logs/a/entries")
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(store
            .list_documents("medication_logs/b/entries")
            .await
            .unwrap()
            .is_empty());
    }
}
