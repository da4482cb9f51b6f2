mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries results, so logs go to stderr and stay quiet by default
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let cwd = std::env::current_dir()?;
    let settings = config::load_settings(&cwd, cli.config.as_deref())?.merge(cli.flag_settings());
    let file = cli.file.as_deref();

    match cli.command {
        Commands::Count => commands::count::run(&settings, file),
        Commands::Check { limit } => {
            if !commands::check::run(&settings, file, limit)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Slice { start, end } => commands::slice::run(&settings, file, start, end),
        Commands::Split { tokens, .. } => commands::split::run(&settings, file, tokens),
        Commands::Explain => commands::explain::run(&settings, file),
        Commands::Version => commands::version::run(),
    }
}
