//! Document-store access for medlog.
//!
//! The store is a two-level hierarchy: a collection of entity documents,
//! each owning a sub-collection of dated log entries. [`DocumentStore`] is
//! the read-only seam the exporter works against; [`FirestoreClient`] talks
//! to the hosted backend over its REST API and [`MemoryStore`] substitutes
//! for it in tests.

mod auth;
pub mod credentials;
pub mod document;
pub mod error;
pub mod firestore;
pub mod memory;
mod wire;

use async_trait::async_trait;

pub use credentials::ServiceAccountKey;
pub use document::{Document, FieldValue};
pub use error::{Result, StoreError};
pub use firestore::FirestoreClient;
pub use memory::MemoryStore;

/// Read-only handle to the document store.
///
/// `path` is a slash-separated collection path, either top-level (`users`)
/// or nested (`medication_logs/{id}/entries`). Enumeration order is the
/// store's own and not guaranteed stable across runs.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_documents(&self, path: &str) -> Result<Vec<Document>>;
}
