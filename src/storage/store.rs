use async_trait::async_trait;
use bson::{Document, oid::ObjectId};

use crate::error::Result;

/// Collection-level operations the repository needs from a document store.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in `collection`, in the store's natural order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>>;

    /// The first document whose top-level fields equal those in `filter`.
    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>>;

    /// Inserts `document` and returns the id the store assigned to it.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<ObjectId>;
}
