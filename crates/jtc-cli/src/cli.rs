use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jtc_types::{ColorMode, Theme};

#[derive(Parser)]
#[command(
    name = "jtc",
    about = "JSON Tree Compare — side-by-side structural viewer for two JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Display mode (light or dark); overrides the config file
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// When to use colors (auto, always, never); overrides the config file
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// TOML file with viewer settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents and print both annotated trees
    Compare(CompareArgs),
    /// Print the color legend
    Legend,
    /// Start a viewer session driven by commands on stdin
    Interactive(InteractiveArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Left document: a file path, or - for stdin
    pub left: String,
    /// Right document: a file path, or - for stdin
    pub right: String,
    /// Composites shallower than this start expanded
    #[arg(long)]
    pub depth: Option<usize>,
    /// Expand every composite
    #[arg(long, conflicts_with = "depth")]
    pub expand_all: bool,
}

#[derive(Args)]
pub struct InteractiveArgs {
    /// File to load into the left input
    #[arg(long)]
    pub left: Option<PathBuf>,
    /// File to load into the right input
    #[arg(long)]
    pub right: Option<PathBuf>,
}
