//! Handler for the `stats` command.

use anyhow::Result;

use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::StatsArgs;
use crate::domain::DocumentStats;

use super::load_document;

/// Handle the `stats` command - print the status-bar counts for a document.
pub fn handle_stats(args: &StatsArgs, config: &Config) -> Result<()> {
    let text = load_document(&args.file)?;
    let theme = config.theme(args.theme.as_deref());
    let stats = DocumentStats::compute(&text, "", &theme);

    match args.format {
        OutputFormat::Human | OutputFormat::Paths => {
            println!(
                "Characters: {}  Words: {}  Lines: {}  Theme: {}  Encoding: {}",
                stats.characters, stats.words, stats.lines, stats.theme_name, stats.encoding
            );
        }
        OutputFormat::Json => println!("{}", Output::new(stats).to_json()?),
    }

    Ok(())
}
