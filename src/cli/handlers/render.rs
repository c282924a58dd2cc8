//! Handler for the `render` command.

use anyhow::{Context, Result};

use crate::cli::config::Config;
use crate::cli::RenderArgs;
use crate::infra::save_document;
use crate::preview::{is_known_theme, render};

use super::load_document;

/// Handle the `render` command.
pub fn handle_render(args: &RenderArgs, config: &Config) -> Result<()> {
    let text = load_document(&args.file)?;
    let theme = config.theme(args.theme.as_deref());
    let font_size = config.font_size(args.font_size);

    if !is_known_theme(&theme) {
        eprintln!("warning: unknown theme '{}', using the default", theme);
    }

    let html = render(&text, &theme, font_size);

    match &args.output {
        Some(path) => {
            save_document(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Rendered {} to {}", args.file.display(), path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
