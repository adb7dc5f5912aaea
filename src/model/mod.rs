//! Domain records served by the gateway.
//!
//! - [`Author`]: a writer, identified by a store-assigned id
//! - [`Blog`]: a post with an embedded copy of its [`Author`]
//!
//! Ids are plain text here; the store's native representation stays inside
//! [`crate::storage`].

mod author;
mod blog;

pub use author::Author;
pub use blog::Blog;
