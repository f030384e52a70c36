use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod curate;
mod error;
mod output;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("aln_curate=debug,info")
    } else {
        EnvFilter::new("aln_curate=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Curate(args) => {
            cli::curate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
