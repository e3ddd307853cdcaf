use anyhow::Result;
use clap::Parser;

use subhub::cli::handlers::{CommandContext, handle_query, handle_schema, handle_serve};
use subhub::cli::{Cli, Commands};
use subhub::config::SubhubConfig;
use subhub::logging;
use subhub::storage::Store;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.verbose, cli.log_file.clone());

    let config = SubhubConfig::load(cli.config.as_deref())?;
    let seed_path = cli.data.clone().or_else(|| config.data.seed.clone());
    let store = Store::load(seed_path.as_deref())?;
    let ctx = CommandContext::new(config, store);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
