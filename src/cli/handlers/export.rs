//! Handler for the `export` command.

use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::cli::output::{Output, OutputFormat};
use crate::cli::ExportArgs;
use crate::export::{export, ExportFormat};

use super::load_document;

/// Result of an export operation.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub path: String,
    pub format: ExportFormat,
    /// Lines that lost characters the output format could not encode
    pub stripped_lines: usize,
}

/// Picks the export format: the explicit flag, else the output extension.
pub fn resolve_format(explicit: Option<ExportFormat>, output: &Path) -> Result<ExportFormat> {
    explicit
        .or_else(|| ExportFormat::from_path(output))
        .ok_or_else(|| {
            anyhow!(
                "cannot infer export format from '{}'; use --format html|pdf|docx",
                output.display()
            )
        })
}

/// Handle the `export` command.
pub fn handle_export(args: &ExportArgs) -> Result<()> {
    let format = resolve_format(args.export_format, &args.output)?;
    let text = load_document(&args.file)?;

    let outcome = export(&text, format, &args.output)?;

    let result = ExportResult {
        path: outcome.path.display().to_string(),
        format: outcome.format,
        stripped_lines: outcome.stripped_lines,
    };

    match args.cli_format {
        OutputFormat::Human => {
            println!(
                "Exported {} to {} ({})",
                args.file.display(),
                result.path,
                result.format
            );
            if result.stripped_lines > 0 {
                eprintln!(
                    "warning: removed unsupported characters from {} line(s)",
                    result.stripped_lines
                );
            }
        }
        OutputFormat::Json => println!("{}", Output::new(result).to_json()?),
        OutputFormat::Paths => println!("{}", result.path),
    }

    Ok(())
}
