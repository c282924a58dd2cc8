//! Standalone HTML document for the live preview pane.

use std::sync::OnceLock;

use minijinja::{context, Environment};

use crate::domain::FontSize;
use crate::preview::html::markdown_to_preview_html;
use crate::preview::theme::{get_style, is_known_theme, Style};

/// Radius of the content container's trailing corners, in pixels.
pub const CORNER_RADIUS_PX: u32 = 8;

/// How long a copy button shows its confirmation before reverting.
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// Preview document template.
///
/// The outer page stays transparent so the host window shows through; only
/// `.content` is painted with the theme background.
pub const PREVIEW_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        html, body {
            background-color: transparent;
            color: {{ style.text_color }};
            margin: 0;
            padding: 0;
            font-family: Arial, sans-serif;
            font-size: {{ font_size }}px;
            height: 100%;
            overflow: hidden;
        }
        .content {
            padding: 20px;
            height: 100%;
            box-sizing: border-box;
            overflow-y: auto;
            background-color: {{ style.background_color }};
            border-radius: 0 {{ radius }}px {{ radius }}px 0;
        }
        ::-webkit-scrollbar {
            width: 8px;
            height: 8px;
        }
        ::-webkit-scrollbar-track {
            background: {{ style.scrollbar_track }};
            border-radius: 4px;
        }
        ::-webkit-scrollbar-thumb {
            background: {{ style.scrollbar_thumb }};
            border-radius: 4px;
        }
        ::-webkit-scrollbar-thumb:hover {
            background: {{ style.scrollbar_thumb_hover }};
        }
        h1, h2, h3, h4, h5, h6 {
            color: {{ style.heading_color }};
            margin-top: 20px;
            margin-bottom: 10px;
        }
        p {
            margin-bottom: 10px;
        }
        code {
            background-color: {{ style.code_bg }};
            padding: 2px 4px;
            border-radius: 3px;
        }
        pre {
            background-color: {{ style.code_bg }};
            padding: 10px;
            border-radius: 5px;
            overflow-x: auto;
            margin: 10px 0;
        }
        pre code {
            padding: 0;
        }
        .code-block {
            position: relative;
        }
        .copy-btn {
            position: absolute;
            top: 6px;
            right: 6px;
            padding: 2px 8px;
            font-size: 0.75em;
            color: {{ style.text_color }};
            background-color: {{ style.code_bg }};
            border: 1px solid {{ style.scrollbar_thumb }};
            border-radius: 4px;
            cursor: pointer;
            opacity: 0.7;
        }
        .copy-btn:hover {
            opacity: 1;
        }
        blockquote {
            border-left: 4px solid rgba(100, 149, 237, 0.5);
            margin: 10px 0;
            padding: 10px 15px;
            background-color: {{ style.blockquote_bg }};
        }
        a {
            color: {{ style.link_color }};
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
        ul, ol {
            padding-left: 20px;
            margin: 10px 0;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 10px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: {{ style.code_bg }};
        }
        img {
            max-width: 100%;
            height: auto;
        }
    </style>
</head>
<body>
    <div class="content">
{{ content }}
    </div>
    <script>
        function fallbackCopy(text) {
            var area = document.createElement('textarea');
            area.value = text;
            area.style.position = 'fixed';
            area.style.opacity = '0';
            document.body.appendChild(area);
            area.select();
            try {
                document.execCommand('copy');
            } finally {
                document.body.removeChild(area);
            }
        }
        function copyCode(button) {
            var code = button.parentElement.querySelector('code');
            var text = code ? code.innerText : '';
            var done = function () {
                button.textContent = 'Copied!';
                setTimeout(function () { button.textContent = 'Copy'; }, {{ feedback_ms }});
            };
            if (navigator.clipboard && navigator.clipboard.writeText) {
                navigator.clipboard.writeText(text).then(done, function () {
                    fallbackCopy(text);
                    done();
                });
            } else {
                fallbackCopy(text);
                done();
            }
        }
    </script>
</body>
</html>
"##;

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        if let Err(err) = env.add_template("preview", PREVIEW_TEMPLATE) {
            tracing::error!("preview template failed to compile: {err}");
        }
        env
    })
}

/// Renders markdown into the complete, themed preview document.
///
/// Unknown theme ids fall back to the default theme. Rendering never fails:
/// if the template cannot be evaluated the bare fragment is returned inside
/// a minimal document.
///
/// # Example
///
/// ```
/// use mdpane::domain::FontSize;
/// use mdpane::preview::render;
///
/// let html = render("# Hi", "dark", FontSize::default());
/// assert!(html.contains("<h1>Hi</h1>"));
/// assert!(html.contains("#2d2d2d"));
/// ```
pub fn render(markdown: &str, theme_id: &str, font_size: FontSize) -> String {
    if !is_known_theme(theme_id) {
        tracing::debug!(theme = theme_id, "unknown preview theme, using default");
    }
    let style = get_style(theme_id);
    let content = markdown_to_preview_html(markdown);

    render_document(&content, style, font_size).unwrap_or_else(|err| {
        tracing::error!("preview template failed: {err:#}");
        format!("<!DOCTYPE html>\n<html>\n<body>\n{content}</body>\n</html>\n")
    })
}

fn render_document(
    content: &str,
    style: &Style,
    font_size: FontSize,
) -> Result<String, minijinja::Error> {
    let tmpl = environment().get_template("preview")?;
    tmpl.render(context! {
        style => style,
        font_size => font_size.get(),
        radius => CORNER_RADIUS_PX,
        feedback_ms => COPY_FEEDBACK_MS,
        content => content,
    })
}
