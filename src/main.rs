//! rulecheck CLI entry point

use clap::Parser;
use rulecheck::cli::{Command, args::Cli};
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Check { input, format } => {
            rulecheck::cli::check::run_check(&cli.config, &input, format, cli.color)
        }
        Command::List { format } => rulecheck::cli::list::run_list(&cli.config, format, cli.color),
    };

    process::exit(exit_code);
}
