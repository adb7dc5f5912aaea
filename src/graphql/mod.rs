//! GraphQL schema, resolvers and HTTP endpoint for authors and blogs.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! blogql serve --port 8088
//!
//! # Query over HTTP
//! curl 'http://localhost:8088/graphql?query=%7Bauthors%7Bfirstname%7D%7D'
//!
//! # Execute a mutation from CLI
//! blogql mutate 'createAuthor(firstname: "Ada", lastname: "Lovelace") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `authors`, `author`, `blogs`, `blog`
//! - **Mutations**: `createAuthor`, `createBlog`

pub mod resolvers;
mod schema;
mod server;
mod types;

pub use schema::{BlogSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::*;
