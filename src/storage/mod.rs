//! Document-store access for authors and blogs.
//!
//! Records live in two MongoDB collections, `authors` and `blogs`, in one
//! database. A blog document embeds a copy of its author:
//!
//! ```json
//! {
//!   "_id": ObjectId("65a1f0c2e4b0a1b2c3d4e5f6"),
//!   "author": { "_id": ObjectId("65a1f0a8e4b0a1b2c3d4e5f1"), "firstname": "Ada", "lastname": "Lovelace" },
//!   "title": "Notes",
//!   "body": "On the analytical engine"
//! }
//! ```
//!
//! ## Components
//!
//! - [`Repository`]: list/get/create for authors and blogs, with per-call timeouts
//! - [`DocumentStore`]: the collection operations a backend provides
//! - [`MongoStore`]: MongoDB backend
//! - [`MemoryStore`]: in-process backend
//!
//! Ids leave this module as 24-character hex text; `ObjectId` only shows up
//! in the [`DocumentStore`] signatures.

mod documents;
mod id;
mod memory_store;
mod mongo;
mod repository;
mod store;

pub use documents::{AUTHOR_COLLECTION, BLOG_COLLECTION};
pub use memory_store::MemoryStore;
pub use mongo::MongoStore;
pub use repository::Repository;
pub use store::DocumentStore;
