use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod loader;
mod parsing;
mod search;
mod store;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("region_loader=debug,info")
    } else {
        EnvFilter::new("region_loader=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Load(args) => {
            cli::load::run(args, cli.verbose)?;
        }
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.verbose)?;
        }
        cli::Commands::Inspect(args) => {
            cli::inspect::run(args, cli.format)?;
        }
    }

    Ok(())
}
