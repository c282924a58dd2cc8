//! PDF export: A4 pages of text lines in the built-in Helvetica/Courier fonts.
//!
//! Layout is planned independently of the PDF writer so it can be inspected
//! without the `pdf` feature. Built-in fonts only cover WinAnsi, so every line
//! is reduced to that character set before it is placed.

use crate::domain::Block;

use super::error::ExportError;
#[cfg(feature = "pdf")]
use super::format::ExportFormat;

pub(crate) const PAGE_WIDTH_MM: f32 = 210.0;
pub(crate) const PAGE_HEIGHT_MM: f32 = 297.0;
pub(crate) const MARGIN_MM: f32 = 20.0;

const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.4;
const BODY_SIZE: f32 = 11.0;
const CODE_SIZE: f32 = 10.0;
const BLOCK_GAP_MM: f32 = 2.5;
const HEADING_GAP_MM: f32 = 5.0;
const INDENT_MM: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PdfFont {
    Regular,
    Bold,
    Oblique,
    Mono,
}

impl PdfFont {
    /// Average glyph advance as a fraction of the font size.
    fn average_advance(self) -> f32 {
        match self {
            PdfFont::Regular | PdfFont::Oblique => 0.5,
            PdfFont::Bold => 0.55,
            PdfFont::Mono => 0.6,
        }
    }
}

/// One text cell on a page.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PdfLine {
    pub text: String,
    pub font: PdfFont,
    pub size: f32,
    pub indent: f32,
    /// Extra vertical space before this line, dropped at the top of a page.
    pub gap_before: f32,
}

impl PdfLine {
    fn height(&self) -> f32 {
        self.size * PT_TO_MM * LINE_SPACING
    }
}

#[derive(Debug, Default)]
pub(crate) struct PdfPlan {
    pub lines: Vec<PdfLine>,
    /// Source lines that lost at least one unencodable character.
    pub stripped_lines: usize,
}

#[derive(Debug)]
pub(crate) struct PlacedLine<'a> {
    pub line: &'a PdfLine,
    /// Baseline position from the bottom edge of the page.
    pub y: f32,
}

pub(crate) struct PdfOutput {
    pub bytes: Vec<u8>,
    pub stripped_lines: usize,
}

fn heading_size(level: u8) -> f32 {
    match level {
        1 => 20.0,
        2 => 16.0,
        3 => 14.0,
        _ => 12.0,
    }
}

fn substitute(c: char) -> Option<&'static str> {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' => Some("'"),
        '\u{201C}' | '\u{201D}' | '\u{201E}' => Some("\""),
        '\u{2013}' | '\u{2014}' | '\u{2212}' => Some("-"),
        '\u{2022}' => Some("-"),
        '\u{2026}' => Some("..."),
        '\u{20AC}' => Some("EUR"),
        '\t' => Some("    "),
        _ => None,
    }
}

fn is_encodable(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}')
}

/// Reduces a line to characters the built-in fonts can encode.
///
/// Typographic punctuation is replaced with ASCII equivalents; anything else
/// outside Latin-1 is dropped. Returns the cleaned line and whether any
/// character was dropped.
pub(crate) fn sanitize_line(text: &str) -> (String, bool) {
    let mut out = String::with_capacity(text.len());
    let mut stripped = false;
    for c in text.chars() {
        if is_encodable(c) {
            out.push(c);
        } else if let Some(replacement) = substitute(c) {
            out.push_str(replacement);
        } else {
            stripped = true;
        }
    }
    (out, stripped)
}

/// Word-wraps a line to at most `max_chars` characters per row.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split(' ') {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        for c in word.chars() {
            if current_len == max_chars {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(c);
            current_len += 1;
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

struct Planner {
    plan: PdfPlan,
}

impl Planner {
    fn push_text(&mut self, text: &str, font: PdfFont, size: f32, indent: f32, gap: f32) {
        let (clean, stripped) = sanitize_line(text);
        if stripped {
            tracing::warn!(line = text, "dropped characters the PDF font cannot encode");
            self.plan.stripped_lines += 1;
        }

        let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - indent;
        let max_chars = (usable / (size * PT_TO_MM * font.average_advance())) as usize;
        for (i, row) in wrap(&clean, max_chars).into_iter().enumerate() {
            self.plan.lines.push(PdfLine {
                text: row,
                font,
                size,
                indent,
                gap_before: if i == 0 { gap } else { 0.0 },
            });
        }
    }

    fn push_lines(&mut self, text: &str, font: PdfFont, size: f32, indent: f32, gap: f32) {
        for (i, line) in text.lines().enumerate() {
            self.push_text(line, font, size, indent, if i == 0 { gap } else { 0.0 });
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                let line = text.lines().collect::<Vec<_>>().join(" ");
                self.push_text(&line, PdfFont::Bold, heading_size(*level), 0.0, HEADING_GAP_MM);
            }
            Block::Paragraph { text } => {
                self.push_lines(text, PdfFont::Regular, BODY_SIZE, 0.0, BLOCK_GAP_MM);
            }
            Block::Quote { text } => {
                self.push_lines(text, PdfFont::Oblique, BODY_SIZE, INDENT_MM, BLOCK_GAP_MM);
            }
            Block::CodeBlock { text, .. } => {
                for (i, line) in text.split('\n').enumerate() {
                    let gap = if i == 0 { BLOCK_GAP_MM } else { 0.0 };
                    self.push_text(line, PdfFont::Mono, CODE_SIZE, INDENT_MM, gap);
                }
            }
            Block::List { items } => {
                for (i, item) in items.iter().enumerate() {
                    let gap = if i == 0 { BLOCK_GAP_MM } else { 0.0 };
                    self.push_lines(&item.marker_text(), PdfFont::Regular, BODY_SIZE, INDENT_MM, gap);
                }
            }
            Block::Table { rows } => {
                for (i, row) in rows.iter().enumerate() {
                    let font = if i == 0 { PdfFont::Bold } else { PdfFont::Regular };
                    let gap = if i == 0 { BLOCK_GAP_MM } else { 0.0 };
                    self.push_text(&row.join(" | "), font, BODY_SIZE, 0.0, gap);
                }
            }
            Block::Rule => {
                self.push_text(&"-".repeat(60), PdfFont::Regular, BODY_SIZE, 0.0, BLOCK_GAP_MM);
            }
        }
    }
}

/// Turns blocks into the ordered text lines of the PDF.
pub(crate) fn plan(blocks: &[Block]) -> PdfPlan {
    let mut planner = Planner {
        plan: PdfPlan::default(),
    };
    for block in blocks {
        planner.block(block);
    }
    planner.plan
}

/// Distributes lines over pages top to bottom, starting a new page when the
/// bottom margin would be crossed.
pub(crate) fn paginate(lines: &[PdfLine]) -> Vec<Vec<PlacedLine<'_>>> {
    let top = PAGE_HEIGHT_MM - MARGIN_MM;
    let mut pages: Vec<Vec<PlacedLine<'_>>> = Vec::new();
    let mut current: Vec<PlacedLine<'_>> = Vec::new();
    let mut y = top;

    for line in lines {
        let gap = if current.is_empty() { 0.0 } else { line.gap_before };
        if !current.is_empty() && y - gap - line.height() < MARGIN_MM {
            pages.push(std::mem::take(&mut current));
            y = top;
        }
        let gap = if current.is_empty() { 0.0 } else { line.gap_before };
        y -= gap + line.height();
        current.push(PlacedLine { line, y });
    }
    if !current.is_empty() {
        pages.push(current);
    }
    pages
}

/// Serializes blocks into PDF bytes.
#[cfg(feature = "pdf")]
pub(crate) fn render_pdf(blocks: &[Block], title: &str) -> Result<PdfOutput, ExportError> {
    use printpdf::{BuiltinFont, Mm, PdfDocument};

    fn to_error(e: impl std::fmt::Display) -> ExportError {
        ExportError::serialize(ExportFormat::Pdf, e)
    }

    let plan = plan(blocks);
    let pages = paginate(&plan.lines);

    let (title, _) = sanitize_line(title);
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(to_error)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(to_error)?;
    let oblique = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(to_error)?;
    let mono = doc.add_builtin_font(BuiltinFont::Courier).map_err(to_error)?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for placed in page {
            let line = placed.line;
            if line.text.trim().is_empty() {
                continue;
            }
            let font = match line.font {
                PdfFont::Regular => &regular,
                PdfFont::Bold => &bold,
                PdfFont::Oblique => &oblique,
                PdfFont::Mono => &mono,
            };
            layer.use_text(
                line.text.as_str(),
                line.size,
                Mm(MARGIN_MM + line.indent),
                Mm(placed.y),
                font,
            );
        }
    }

    let bytes = doc.save_to_bytes().map_err(to_error)?;
    tracing::debug!(pages = pages.len().max(1), "rendered PDF");

    Ok(PdfOutput {
        bytes,
        stripped_lines: plan.stripped_lines,
    })
}

#[cfg(not(feature = "pdf"))]
pub(crate) fn render_pdf(_blocks: &[Block], _title: &str) -> Result<PdfOutput, ExportError> {
    Err(ExportError::missing(super::format::Capability::Pdf))
}
