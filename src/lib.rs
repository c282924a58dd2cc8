//! mdpane - markdown preview rendering and document export
//!
//! The library exposes the preview renderer ([`preview::render`]), the theme
//! catalog ([`preview::list_theme_ids`], [`preview::get_style`]) and the
//! exporter ([`export::export`]). The `mdpane` binary drives the same API.

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;
pub mod logging;
pub mod preview;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_export, handle_render, handle_stats, handle_themes},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match &cli.command {
        Command::Render(args) => handle_render(args, &config),
        Command::Export(args) => handle_export(args),
        Command::Themes(args) => handle_themes(args),
        Command::Stats(args) => handle_stats(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
