use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogql")]
#[command(
    author,
    version,
    about = "A GraphQL gateway for authors and blogs stored in MongoDB"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .blogql.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// MongoDB connection URI (overrides config)
    #[arg(long, global = true, env = "BLOGQL_MONGO_URI")]
    pub mongo_uri: Option<String>,

    /// Database name (overrides config)
    #[arg(long, global = true, env = "BLOGQL_DATABASE")]
    pub database: Option<String>,

    /// Use an ephemeral in-memory store instead of MongoDB
    #[arg(long, global = true)]
    pub memory: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config, default 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config, default 8088)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
