//! Field resolvers as plain async functions of (arguments, repository).
//!
//! The `#[Object]` roots in `schema` only extract arguments and the injected
//! [`Repository`], then call into here, so every resolver can be exercised
//! without the executor.

use crate::error::Result;
use crate::model::{Author, Blog};
use crate::storage::Repository;

/// Arguments of `Mutation.createAuthor`.
#[derive(Debug, Clone)]
pub struct CreateAuthorArgs {
    pub firstname: String,
    pub lastname: String,
}

/// Arguments of `Mutation.createBlog`.
#[derive(Debug, Clone)]
pub struct CreateBlogArgs {
    pub author_id: String,
    pub title: String,
    pub body: String,
}

pub async fn authors(repo: &Repository) -> Result<Vec<Author>> {
    repo.list_authors().await
}

pub async fn author(repo: &Repository, id: &str) -> Result<Author> {
    repo.get_author(id).await
}

pub async fn blogs(repo: &Repository) -> Result<Vec<Blog>> {
    repo.list_blogs().await
}

pub async fn blog(repo: &Repository, id: &str) -> Result<Blog> {
    repo.get_blog(id).await
}

pub async fn create_author(repo: &Repository, args: CreateAuthorArgs) -> Result<Author> {
    repo.create_author(Author::new(args.firstname, args.lastname))
        .await
}

/// Looks the author up first; a missing or malformed author id fails the
/// mutation before anything is written.
pub async fn create_blog(repo: &Repository, args: CreateBlogArgs) -> Result<Blog> {
    let author = repo.get_author(&args.author_id).await?;
    repo.create_blog(Blog::new(author, args.title, args.body))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreSettings;
    use crate::error::BlogError;
    use crate::storage::{BLOG_COLLECTION, MemoryStore};
    use std::sync::Arc;

    fn setup() -> (Arc<MemoryStore>, Repository) {
        let store = Arc::new(MemoryStore::new());
        let repo = Repository::new(store.clone(), &StoreSettings::default());
        (store, repo)
    }

    fn blog_args(author_id: &str) -> CreateBlogArgs {
        CreateBlogArgs {
            author_id: author_id.to_string(),
            title: "Notes".to_string(),
            body: "On the analytical engine".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_author_then_list() {
        let (_store, repo) = setup();
        let created = create_author(
            &repo,
            CreateAuthorArgs {
                firstname: "Ada".to_string(),
                lastname: "Lovelace".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(authors(&repo).await.unwrap(), vec![created.clone()]);
        assert_eq!(author(&repo, &created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_blog_embeds_fetched_author() {
        let (_store, repo) = setup();
        let ada = repo
            .create_author(Author::new("Ada", "Lovelace"))
            .await
            .unwrap();

        let created = create_blog(&repo, blog_args(&ada.id)).await.unwrap();
        assert_eq!(created.author, ada);
        assert_eq!(blog(&repo, &created.id).await.unwrap(), created);
        assert_eq!(blogs(&repo).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_blog_with_unknown_author_writes_nothing() {
        let (store, repo) = setup();

        let result = create_blog(&repo, blog_args("65a1f0a8e4b0a1b2c3d4e5f1")).await;
        assert!(matches!(
            result,
            Err(BlogError::NotFound { entity: "Author", .. })
        ));
        assert_eq!(store.len(BLOG_COLLECTION).await, 0);
    }

    #[tokio::test]
    async fn test_create_blog_with_malformed_author_id_writes_nothing() {
        let (store, repo) = setup();

        let result = create_blog(&repo, blog_args("nope")).await;
        assert!(matches!(result, Err(BlogError::InvalidId(_))));
        assert_eq!(store.len(BLOG_COLLECTION).await, 0);
    }
}
