//! Handler for the `themes` command.

use anyhow::Result;

use crate::cli::output::{Output, OutputFormat, ThemeListing};
use crate::cli::ThemesArgs;
use crate::preview::{all_styles, DEFAULT_THEME};

/// Handle the themes command - list preview themes in display order.
pub fn handle_themes(args: &ThemesArgs) -> Result<()> {
    let listings: Vec<ThemeListing> = all_styles()
        .iter()
        .map(|style| ThemeListing {
            id: style.id.to_string(),
            name: style.name.to_string(),
            default: style.id == DEFAULT_THEME,
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            for theme in &listings {
                let marker = if theme.default { " (default)" } else { "" };
                println!("{:<10} {}{}", theme.id, theme.name, marker);
            }
        }
        OutputFormat::Json => println!("{}", Output::new(listings).to_json()?),
        OutputFormat::Paths => {
            for theme in &listings {
                println!("{}", theme.id);
            }
        }
    }

    Ok(())
}
