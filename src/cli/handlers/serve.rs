use anyhow::Result;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);

    tokio::runtime::Runtime::new()?.block_on(async {
        let repo = ctx.repository().await?;
        let schema = build_schema(repo);

        println!("Starting GraphQL server on http://{}:{}/graphql", host, port);
        println!("GraphiQL: http://{}:{}/", host, port);

        run_server(schema, &host, port).await?;
        anyhow::Ok(())
    })
}
