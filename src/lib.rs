//! # blogql - A GraphQL gateway for authors and blogs
//!
//! blogql serves a small GraphQL schema over HTTP and keeps its records in
//! MongoDB. Authors can be listed, fetched and created; blogs embed a copy
//! of their author taken when they are written.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve against a local MongoDB
//! blogql serve
//!
//! # Or without a database
//! blogql --memory serve
//!
//! # Create an author and list everyone
//! blogql mutate 'createAuthor(firstname: "Ada", lastname: "Lovelace") { id }'
//! blogql query '{ authors { id firstname lastname } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: Data models (Author, Blog)
//! - [`storage`]: Document-store access

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.blogql.yml` files and their defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP endpoint.
pub mod graphql;

/// Data models for authors and blogs.
pub mod model;

/// Document-store access.
///
/// Repository operations over MongoDB or an in-process store.
pub mod storage;

pub mod logging;
