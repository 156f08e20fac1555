use std::env;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tagcheck::cli::check::CheckArgs;
use tagcheck::cli::{Cli, Commands};
use tagcheck::context::Overrides;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = env::current_dir()?;

    match cli.command {
        Commands::Check {
            dir,
            config,
            tags,
            exclude,
            format,
        } => tagcheck::cli::check::run(
            &cwd,
            CheckArgs {
                dir,
                config,
                overrides: Overrides { tags, exclude },
                format,
            },
        ),
        Commands::Resources => {
            tagcheck::cli::resources::run();
            Ok(ExitCode::SUCCESS)
        }
    }
}
