pub mod check;
pub mod resources;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::Format;

#[derive(Parser)]
#[command(
    name = "tagcheck",
    about = "Check Terraform azurerm resources for missing required tags",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a module directory
    Check {
        /// Module directory (defaults to the current directory)
        dir: Option<PathBuf>,
        /// Config file (defaults to the nearest .tflint.hcl)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
        /// Required tag; replaces the configured list and enables the rule
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
        /// Resource type to skip, added to the configured exclusions
        #[arg(short = 'x', long)]
        exclude: Vec<String>,
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List resource types the rule checks
    Resources,
}
