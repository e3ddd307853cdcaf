use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let schema = build_schema(ctx.store.clone());

    println!(
        "{} GraphQL server on http://{}:{}",
        "Starting".green(),
        host,
        port
    );

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &host, port).await })?;
    Ok(())
}
