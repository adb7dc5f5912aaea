//! MongoDB-backed document store.

use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use futures_util::TryStreamExt;
use mongodb::{Client, Database, options::ClientOptions};
use tracing::info;

use super::store::DocumentStore;
use crate::config::StoreSettings;
use crate::error::{BlogError, Result};

/// MongoDB client bound to one database.
///
/// The driver's handles are cheap to clone and safe to share between tasks.
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects and pings the database, giving up after the configured
    /// connect timeout.
    pub async fn connect(settings: &StoreSettings) -> Result<Self> {
        let timeout = settings.connect_timeout();
        info!(uri = %settings.uri, database = %settings.database, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(&settings.uri)
            .await
            .map_err(|e| BlogError::Store(format!("Invalid MongoDB URI: {}", e)))?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)
            .map_err(|e| BlogError::Store(format!("Failed to connect to MongoDB: {}", e)))?;
        let database = client.database(&settings.database);

        tokio::time::timeout(timeout, database.run_command(doc! { "ping": 1 }))
            .await
            .map_err(|_| BlogError::Timeout(timeout))?
            .map_err(|e| BlogError::Store(format!("MongoDB ping failed: {}", e)))?;

        info!(database = %settings.database, "Connected to MongoDB");

        Ok(Self { database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(doc! {})
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        Ok(self
            .database
            .collection::<Document>(collection)
            .find_one(filter)
            .await?)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<ObjectId> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| BlogError::Store("Inserted document has no ObjectId".into()))
    }
}
