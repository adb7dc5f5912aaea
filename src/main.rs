use anyhow::{Context, Result};
use clap::Parser;

use blogql::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use blogql::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    blogql::logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let ctx = CommandContext::from_cli(&cli, &cwd)?;

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
