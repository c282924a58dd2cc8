//! Command handlers for the CLI.

mod completions;
mod export;
mod render;
mod stats;
mod themes;

use std::path::Path;

use anyhow::{Context, Result};

use crate::infra::{is_markdown_path, read_document};

pub use completions::handle_completions;
pub use export::{handle_export, resolve_format};
pub use render::handle_render;
pub use stats::handle_stats;
pub use themes::handle_themes;

/// Reads the markdown document named on the command line.
pub(crate) fn load_document(path: &Path) -> Result<String> {
    if !is_markdown_path(path) {
        tracing::debug!(path = %path.display(), "reading a file without a markdown extension");
    }
    read_document(path)
        .with_context(|| format!("cannot open document {}", path.display()))
}
