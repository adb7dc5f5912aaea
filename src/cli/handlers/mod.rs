mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::GatewayConfig;
use crate::storage::{DocumentStore, MemoryStore, MongoStore, Repository};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GatewayConfig,
    pub memory: bool,
}

impl CommandContext {
    pub fn new(config: GatewayConfig, memory: bool) -> Self {
        Self { config, memory }
    }

    /// Loads the config file named on the command line, or the nearest one
    /// above `cwd`, then applies the store overrides from flags and env.
    pub fn from_cli(cli: &Cli, cwd: &Path) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => GatewayConfig::load_from(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => GatewayConfig::load(cwd).context("Failed to load configuration")?,
        };

        if let Some(uri) = &cli.mongo_uri {
            config.store.uri = uri.clone();
        }
        if let Some(database) = &cli.database {
            config.store.database = database.clone();
        }

        Ok(Self::new(config, cli.memory))
    }

    /// Opens the configured store. Failing to reach MongoDB is fatal for
    /// every command that needs it.
    pub async fn repository(&self) -> Result<Repository> {
        let store: Arc<dyn DocumentStore> = if self.memory {
            tracing::warn!("Using the in-memory store; nothing will be persisted");
            Arc::new(MemoryStore::new())
        } else {
            let store = MongoStore::connect(&self.config.store)
                .await
                .with_context(|| format!("Failed to connect to {}", self.config.store.uri))?;
            Arc::new(store)
        };
        Ok(Repository::new(store, &self.config.store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yml");
        std::fs::write(
            &path,
            "store:\n  uri: mongodb://db:27017\n  database: from_file\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "blogql",
            "--config",
            path.to_str().unwrap(),
            "--database",
            "from_flag",
            "schema",
        ])
        .unwrap();
        let ctx = CommandContext::from_cli(&cli, temp_dir.path()).unwrap();

        assert_eq!(ctx.config.store.uri, "mongodb://db:27017");
        assert_eq!(ctx.config.store.database, "from_flag");
        assert!(!ctx.memory);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "blogql",
            "--config",
            temp_dir.path().join("absent.yml").to_str().unwrap(),
            "schema",
        ])
        .unwrap();

        assert!(CommandContext::from_cli(&cli, temp_dir.path()).is_err());
    }

    #[tokio::test]
    async fn test_memory_repository_starts_empty() {
        let ctx = CommandContext::new(GatewayConfig::default(), true);
        let repo = ctx.repository().await.unwrap();
        assert!(repo.list_authors().await.unwrap().is_empty());
    }
}
