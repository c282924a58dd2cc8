//! Word (DOCX) export.

use crate::domain::Block;

use super::error::ExportError;
#[cfg(feature = "docx")]
use super::format::ExportFormat;

pub(crate) const QUOTE_STYLE: &str = "Quote";
pub(crate) const CODE_STYLE: &str = "Code";
pub(crate) const LIST_STYLE: &str = "ListParagraph";

/// A paragraph to emit, with its named paragraph style.
///
/// `lines` are joined with line breaks inside the one paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocxParagraph {
    pub style: Option<&'static str>,
    pub lines: Vec<String>,
}

impl DocxParagraph {
    fn new(style: Option<&'static str>, text: &str) -> Self {
        Self {
            style,
            lines: text.lines().map(xml_safe).collect(),
        }
    }

    fn single(style: Option<&'static str>, line: String) -> Self {
        Self {
            style,
            lines: vec![xml_safe(&line)],
        }
    }
}

/// Drops characters XML 1.0 cannot carry: C0 controls other than tab and
/// newline, and the noncharacters U+FFFE and U+FFFF.
pub(crate) fn xml_safe(text: &str) -> String {
    text.chars()
        .filter(|&c| match c {
            '\t' | '\n' => true,
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => false,
            _ => true,
        })
        .collect()
}

/// Paragraph style id for a heading level.
pub(crate) fn heading_style(level: u8) -> &'static str {
    match level {
        1 => "Heading1",
        2 => "Heading2",
        3 => "Heading3",
        4 => "Heading4",
        5 => "Heading5",
        _ => "Heading6",
    }
}

/// Maps blocks to styled paragraphs.
///
/// Code blocks become one `Code` paragraph per source line so that blank
/// lines inside the block survive.
pub(crate) fn plan(blocks: &[Block]) -> Vec<DocxParagraph> {
    let mut paragraphs = Vec::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let line = text.lines().collect::<Vec<_>>().join(" ");
                paragraphs.push(DocxParagraph::single(Some(heading_style(*level)), line));
            }
            Block::Paragraph { text } => paragraphs.push(DocxParagraph::new(None, text)),
            Block::Quote { text } => paragraphs.push(DocxParagraph::new(Some(QUOTE_STYLE), text)),
            Block::CodeBlock { text, .. } => {
                for line in text.split('\n') {
                    paragraphs.push(DocxParagraph::single(Some(CODE_STYLE), line.to_string()));
                }
            }
            Block::List { items } => {
                for item in items {
                    paragraphs.push(DocxParagraph::new(Some(LIST_STYLE), &item.marker_text()));
                }
            }
            Block::Table { rows } => {
                for row in rows {
                    paragraphs.push(DocxParagraph::single(None, row.join(" | ")));
                }
            }
            Block::Rule => paragraphs.push(DocxParagraph::single(None, "-".repeat(40))),
        }
    }
    paragraphs
}

#[cfg(feature = "docx")]
fn styles() -> Vec<docx_rs::Style> {
    use docx_rs::{RunFonts, Style, StyleType};

    const HEADING_SIZES: [usize; 6] = [36, 30, 26, 24, 22, 22];

    let mut styles: Vec<Style> = HEADING_SIZES
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let level = i as u8 + 1;
            Style::new(heading_style(level), StyleType::Paragraph)
                .name(format!("Heading {level}"))
                .size(*size)
                .bold()
        })
        .collect();

    styles.push(
        Style::new(QUOTE_STYLE, StyleType::Paragraph)
            .name("Quote")
            .italic()
            .color("595959"),
    );
    styles.push(
        Style::new(CODE_STYLE, StyleType::Paragraph)
            .name("Code")
            .size(20)
            .fonts(RunFonts::new().ascii("Courier New").hi_ansi("Courier New")),
    );
    styles.push(Style::new(LIST_STYLE, StyleType::Paragraph).name("List Paragraph"));
    styles
}

/// Serializes blocks into DOCX bytes.
#[cfg(feature = "docx")]
pub(crate) fn render_docx(blocks: &[Block]) -> Result<Vec<u8>, ExportError> {
    use docx_rs::{BreakType, Docx, Paragraph, Run};
    use std::io::Cursor;

    let mut docx = Docx::new();
    for style in styles() {
        docx = docx.add_style(style);
    }

    let paragraphs = plan(blocks);
    for planned in &paragraphs {
        let mut run = Run::new();
        for (i, line) in planned.lines.iter().enumerate() {
            if i > 0 {
                run = run.add_break(BreakType::TextWrapping);
            }
            run = run.add_text(line.as_str());
        }
        let mut paragraph = Paragraph::new().add_run(run);
        if let Some(style) = planned.style {
            paragraph = paragraph.style(style);
        }
        docx = docx.add_paragraph(paragraph);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::serialize(ExportFormat::Docx, e))?;
    tracing::debug!(paragraphs = paragraphs.len(), "rendered DOCX");

    Ok(buffer.into_inner())
}

#[cfg(not(feature = "docx"))]
pub(crate) fn render_docx(_blocks: &[Block]) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::missing(super::format::Capability::Docx))
}
