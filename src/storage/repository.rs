use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bson::{Document, doc};
use serde::{Serialize, de::DeserializeOwned};

use super::documents::{AUTHOR_COLLECTION, AuthorDoc, BLOG_COLLECTION, BlogDoc};
use super::id::{format_id, parse_id};
use super::store::DocumentStore;
use crate::{
    config::StoreSettings,
    error::{BlogError, Result},
    model::{Author, Blog},
};

/// List/get/create operations for authors and blogs.
///
/// Every store call is bounded by its own timeout: `read_timeout` for
/// lookups and listings, `write_timeout` for inserts.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
    read_timeout: Duration,
    write_timeout: Duration,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>, settings: &StoreSettings) -> Self {
        Self::with_timeouts(store, settings.read_timeout(), settings.write_timeout())
    }

    pub fn with_timeouts(
        store: Arc<dyn DocumentStore>,
        read_timeout: Duration,
        write_timeout: Duration,
    ) -> Self {
        Self {
            store,
            read_timeout,
            write_timeout,
        }
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>> {
        let docs: Vec<AuthorDoc> = self.list(AUTHOR_COLLECTION).await?;
        Ok(docs.into_iter().map(Author::from).collect())
    }

    pub async fn get_author(&self, id: &str) -> Result<Author> {
        let doc: AuthorDoc = self.get(AUTHOR_COLLECTION, "Author", id).await?;
        Ok(doc.into())
    }

    pub async fn create_author(&self, mut author: Author) -> Result<Author> {
        tracing::info!(firstname = %author.firstname, lastname = %author.lastname, "Creating author");

        author.id.clear();
        let doc = AuthorDoc::try_from(&author)?;
        let id = self.insert(AUTHOR_COLLECTION, &doc).await?;
        author.id = format_id(&id);
        Ok(author)
    }

    pub async fn list_blogs(&self) -> Result<Vec<Blog>> {
        let docs: Vec<BlogDoc> = self.list(BLOG_COLLECTION).await?;
        Ok(docs.into_iter().map(Blog::from).collect())
    }

    pub async fn get_blog(&self, id: &str) -> Result<Blog> {
        let doc: BlogDoc = self.get(BLOG_COLLECTION, "Blog", id).await?;
        Ok(doc.into())
    }

    pub async fn create_blog(&self, mut blog: Blog) -> Result<Blog> {
        tracing::info!(title = %blog.title, author = %blog.author.id, "Creating blog");

        blog.id.clear();
        let doc = BlogDoc::try_from(&blog)?;
        let id = self.insert(BLOG_COLLECTION, &doc).await?;
        blog.id = format_id(&id);
        Ok(blog)
    }

    /// Decodes every document in `collection`, skipping the ones that do not
    /// match `D` so one corrupt record never hides the rest.
    async fn list<D: DeserializeOwned>(&self, collection: &str) -> Result<Vec<D>> {
        let documents = bounded(self.read_timeout, self.store.find_all(collection)).await?;
        let total = documents.len();

        let records: Vec<D> = documents
            .into_iter()
            .filter_map(|document| {
                let id = document.get_object_id("_id").map(|id| id.to_hex()).ok();
                match bson::from_document(document) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(collection, id = ?id, error = %e, "Skipping malformed document");
                        None
                    }
                }
            })
            .collect();

        tracing::debug!(collection, total, decoded = records.len(), "Listed documents");
        Ok(records)
    }

    async fn get<D: DeserializeOwned>(
        &self,
        collection: &str,
        entity: &'static str,
        id: &str,
    ) -> Result<D> {
        let oid = parse_id(id)?;
        let filter = doc! { "_id": oid };

        match bounded(self.read_timeout, self.store.find_one(collection, filter)).await? {
            Some(document) => Ok(bson::from_document(document)?),
            None => Err(BlogError::NotFound {
                entity,
                id: id.to_string(),
            }),
        }
    }

    async fn insert<D: Serialize>(
        &self,
        collection: &str,
        record: &D,
    ) -> Result<bson::oid::ObjectId> {
        let document: Document = bson::to_document(record)?;
        bounded(
            self.write_timeout,
            self.store.insert_one(collection, document),
        )
        .await
    }
}

async fn bounded<T>(limit: Duration, call: impl Future<Output = Result<T>>) -> Result<T> {
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| BlogError::Timeout(limit))?
}
