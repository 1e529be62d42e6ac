use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use jcmp_core::ArraySemantics;

#[derive(Parser)]
#[command(
    name = "jcmp",
    about = "Structural diff for JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ArrayMode {
    #[default]
    Set,
    Multiset,
}

impl From<ArrayMode> for ArraySemantics {
    fn from(mode: ArrayMode) -> Self {
        match mode {
            ArrayMode::Set => ArraySemantics::Set,
            ArrayMode::Multiset => ArraySemantics::Multiset,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents
    Compare(CompareArgs),
    /// Start the comparison HTTP API
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Files hold Base64-encoded JSON, as submitted to the HTTP API
    #[arg(long)]
    pub base64: bool,
    #[arg(long, value_enum, default_value = "set")]
    pub array_semantics: ArrayMode,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Overrides `bind_addr` from the config file
    #[arg(long)]
    pub bind: Option<String>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}
