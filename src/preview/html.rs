//! Markdown to HTML conversion.

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag};

/// Markup opening a code block wrapper, including its copy button.
pub(crate) const CODE_BLOCK_OPEN: &str = concat!(
    "<div class=\"code-block\">",
    "<button type=\"button\" class=\"copy-btn\" onclick=\"copyCode(this)\">Copy</button>\n",
);

const CODE_BLOCK_CLOSE: &str = "</div>\n";

/// Parser options shared by the preview, the HTML export and the block parser.
///
/// Enables common markdown extensions:
/// - Tables
/// - Footnotes
/// - Strikethrough
/// - Task lists
pub fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Converts markdown text to an HTML fragment.
///
/// # Example
///
/// ```
/// use mdpane::preview::markdown_to_html;
///
/// let html = markdown_to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Converts markdown to the HTML fragment shown in the live preview.
///
/// Differs from [`markdown_to_html`] in two ways: fenced code language tags
/// are dropped, and every code block is wrapped in a `div.code-block` carrying
/// one copy button.
pub fn markdown_to_preview_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let events = parser.flat_map(|event| match event {
        Event::Start(Tag::CodeBlock(_)) => vec![
            Event::Html(CowStr::Borrowed(CODE_BLOCK_OPEN)),
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(CowStr::Borrowed("")))),
        ],
        Event::End(Tag::CodeBlock(_)) => vec![
            Event::End(Tag::CodeBlock(CodeBlockKind::Fenced(CowStr::Borrowed("")))),
            Event::Html(CowStr::Borrowed(CODE_BLOCK_CLOSE)),
        ],
        other => vec![other],
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, events);
    html_output
}
