use clap::Parser;
use tracing_subscriber::EnvFilter;

mod aggregate;
mod cli;
mod config;
mod core;
mod matching;
mod parsing;
mod pipeline;
mod reconcile;
mod report;
mod stats;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("str_het=debug,info")
    } else {
        EnvFilter::new("str_het=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => {
            cli::analyze::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
