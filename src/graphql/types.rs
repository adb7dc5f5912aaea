use crate::model::{Author as ModelAuthor, Blog as ModelBlog};
use async_graphql::SimpleObject;

/// Every field is nullable in the published schema, so they are `Option`
/// here even though the store always fills them.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub id: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: Some(a.id),
            firstname: Some(a.firstname),
            lastname: Some(a.lastname),
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Blog {
    pub id: Option<String>,
    /// Display name of the author as it was when the blog was written
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl From<ModelBlog> for Blog {
    fn from(b: ModelBlog) -> Self {
        Self {
            id: Some(b.id),
            author: Some(b.author.display_name()),
            title: Some(b.title),
            body: Some(b.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_author_is_display_name() {
        let author = ModelAuthor::new("Ada", "Lovelace").with_id("65a1f0a8e4b0a1b2c3d4e5f1");
        let mut blog = ModelBlog::new(author, "Notes", "Body");
        blog.id = "65a1f0c2e4b0a1b2c3d4e5f6".to_string();
        let blog: Blog = blog.into();

        assert_eq!(blog.id.as_deref(), Some("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert_eq!(blog.author.as_deref(), Some("Ada Lovelace"));
    }
}
