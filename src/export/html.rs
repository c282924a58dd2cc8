//! HTML export document.

use minijinja::{context, Environment};

use crate::preview::markdown_to_html;

/// Minimal standalone document used for HTML export.
pub const EXPORT_HTML_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title|e }}</title>
</head>
<body>
{{ content }}
</body>
</html>
"##;

/// Renders markdown into a standalone UTF-8 HTML document.
///
/// Uses the same markdown conversion as the live preview, without theme
/// styling or copy buttons.
pub fn render_export_html(markdown: &str, title: &str) -> Result<String, minijinja::Error> {
    let content = markdown_to_html(markdown);

    let mut env = Environment::new();
    env.add_template("export", EXPORT_HTML_TEMPLATE)?;
    let tmpl = env.get_template("export")?;

    tmpl.render(context! {
        title => title,
        content => content,
    })
}
