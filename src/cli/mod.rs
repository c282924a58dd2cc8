//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::export::ExportFormat;
use output::OutputFormat;

/// mdpane - markdown preview rendering and document export
#[derive(Parser, Debug)]
#[command(name = "mdpane", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/mdpane/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a document to the themed preview HTML
    Render(RenderArgs),

    /// Export a document to HTML, PDF, or Word
    Export(ExportArgs),

    /// List available preview themes
    Themes(ThemesArgs),

    /// Show character, word and line counts for a document
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `render` command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Markdown file to render
    pub file: PathBuf,

    /// Preview theme id (see `mdpane themes`)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Base font size in pixels (8-32)
    #[arg(short = 's', long)]
    pub font_size: Option<u32>,

    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Markdown file to export
    pub file: PathBuf,

    /// Export format (inferred from the output extension if omitted)
    #[arg(short = 'F', long = "format", value_enum)]
    pub export_format: Option<ExportFormat>,

    /// Output path; the format's extension is appended if missing
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format for the command result
    #[arg(short = 'f', long = "output-format", value_enum, default_value_t = OutputFormat::Human)]
    pub cli_format: OutputFormat,
}

/// Arguments for the `themes` command
#[derive(Parser, Debug)]
pub struct ThemesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Markdown file to inspect
    pub file: PathBuf,

    /// Preview theme id reported in the status line
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
