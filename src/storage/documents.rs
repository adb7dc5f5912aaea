//! Document shapes stored in MongoDB.
//!
//! Both collections live in one database. The store enforces no schema, so
//! missing string fields decode as empty strings; a field holding the wrong
//! BSON type makes the whole document malformed.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::id::{format_optional_id, parse_id};
use crate::error::Result;
use crate::model::{Author, Blog};

/// Collection name for authors
pub const AUTHOR_COLLECTION: &str = "authors";

/// Collection name for blogs
pub const BLOG_COLLECTION: &str = "blogs";

/// Author document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AuthorDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub firstname: String,

    #[serde(default)]
    pub lastname: String,
}

/// Blog document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BlogDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Snapshot of the author at the time the blog was created
    #[serde(default)]
    pub author: AuthorDoc,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,
}

impl From<AuthorDoc> for Author {
    fn from(doc: AuthorDoc) -> Self {
        Author {
            id: format_optional_id(doc.id.as_ref()),
            firstname: doc.firstname,
            lastname: doc.lastname,
        }
    }
}

impl From<BlogDoc> for Blog {
    fn from(doc: BlogDoc) -> Self {
        Blog {
            id: format_optional_id(doc.id.as_ref()),
            author: doc.author.into(),
            title: doc.title,
            body: doc.body,
        }
    }
}

impl TryFrom<&Author> for AuthorDoc {
    type Error = crate::error::BlogError;

    fn try_from(author: &Author) -> Result<Self> {
        let id = if author.is_persisted() {
            Some(parse_id(&author.id)?)
        } else {
            None
        };
        Ok(AuthorDoc {
            id,
            firstname: author.firstname.clone(),
            lastname: author.lastname.clone(),
        })
    }
}

impl TryFrom<&Blog> for BlogDoc {
    type Error = crate::error::BlogError;

    fn try_from(blog: &Blog) -> Result<Self> {
        let id = if blog.id.is_empty() {
            None
        } else {
            Some(parse_id(&blog.id)?)
        };
        Ok(BlogDoc {
            id,
            author: AuthorDoc::try_from(&blog.author)?,
            title: blog.title.clone(),
            body: blog.body.clone(),
        })
    }
}
