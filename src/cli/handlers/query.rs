use anyhow::{Context, Result};

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute_and_print(ctx, query, variables)
}

/// Runs one request against a freshly built schema and prints the JSON
/// response, errors included.
pub(super) fn execute_and_print(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object")?,
        None => async_graphql::Variables::default(),
    };

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let repo = ctx.repository().await?;
        let schema = build_schema(repo);
        let request = async_graphql::Request::new(query).variables(vars);
        anyhow::Ok(schema.execute(request).await)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
