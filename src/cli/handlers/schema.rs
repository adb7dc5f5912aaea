use std::sync::Arc;

use anyhow::Result;

use crate::graphql::build_schema;
use crate::storage::{MemoryStore, Repository};

use super::CommandContext;

/// Prints the SDL. No store is contacted.
pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    let repo = Repository::new(Arc::new(MemoryStore::new()), &ctx.config.store);
    println!("{}", build_schema(repo).sdl());
    Ok(())
}
