//! Block-level document structure shared by the PDF and DOCX exporters.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag};
use serde::Serialize;

use crate::preview::markdown_options;

/// One entry in a flattened list. Nested lists are flattened in document
/// order, with `depth` recording the nesting level (0 for top level).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub depth: usize,
    /// Item number for ordered lists, `None` for bullet items.
    pub number: Option<u64>,
    pub text: String,
}

impl ListItem {
    /// Returns the item as a single line of plain text with its marker.
    pub fn marker_text(&self) -> String {
        let indent = "  ".repeat(self.depth);
        match self.number {
            Some(n) => format!("{indent}{n}. {}", self.text),
            None => format!("{indent}- {}", self.text),
        }
    }
}

/// A block-level unit of a markdown document.
///
/// Inline formatting (emphasis, links, inline code) is flattened to its text.
/// Soft and hard line breaks are preserved as `\n` so exporters can emit the
/// document line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    CodeBlock { lang: Option<String>, text: String },
    Quote { text: String },
    List { items: Vec<ListItem> },
    Table { rows: Vec<Vec<String>> },
    Rule,
}

struct ListBuilder {
    next_number: Option<u64>,
    depth: usize,
    items: Vec<ListItem>,
}

impl ListBuilder {
    fn push(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let number = self.next_number;
        if let Some(n) = self.next_number.as_mut() {
            *n += 1;
        }
        self.items.push(ListItem {
            depth: self.depth,
            number,
            text: text.to_string(),
        });
    }
}

#[derive(Default)]
struct BlockCollector {
    blocks: Vec<Block>,
    buf: String,
    quote_depth: usize,
    inline_depth: usize,
    code_lang: Option<Option<String>>,
    lists: Vec<ListBuilder>,
    table: Option<Vec<Vec<String>>>,
    row: Vec<String>,
    /// Offset in `buf` where the open table cell's text begins.
    cell_start: usize,
}

impl BlockCollector {
    fn take_text(&mut self) -> String {
        let text = self.buf.trim().to_string();
        self.buf.clear();
        text
    }

    fn in_list(&self) -> bool {
        !self.lists.is_empty()
    }

    /// Starts a new line in the open list item's text, if it has any.
    fn break_item_line(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph | Tag::Heading(..) => {
                self.inline_depth += 1;
                if self.in_list() {
                    self.break_item_line();
                } else {
                    self.buf.clear();
                }
            }
            Tag::TableCell => {
                self.inline_depth += 1;
                if !self.in_list() {
                    self.buf.clear();
                }
                self.cell_start = self.buf.len();
            }
            Tag::Item => {
                self.inline_depth += 1;
                self.buf.clear();
            }
            Tag::BlockQuote => self.quote_depth += 1,
            Tag::CodeBlock(kind) => {
                if self.in_list() {
                    self.break_item_line();
                } else {
                    self.buf.clear();
                }
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                self.code_lang = Some(lang);
            }
            Tag::List(start) => {
                if let Some(parent) = self.lists.last_mut() {
                    // Flush the parent item's own text so it precedes its children.
                    let text = std::mem::take(&mut self.buf);
                    parent.push(&text);
                }
                self.lists.push(ListBuilder {
                    next_number: start,
                    depth: self.lists.len(),
                    items: Vec::new(),
                });
            }
            Tag::Table(_) => self.table = Some(Vec::new()),
            Tag::TableHead | Tag::TableRow => self.row.clear(),
            _ => {}
        }
    }

    fn end(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading(level, ..) => {
                self.inline_depth = self.inline_depth.saturating_sub(1);
                if self.in_list() {
                    self.buf.push('\n');
                    return;
                }
                let text = self.take_text();
                self.blocks.push(Block::Heading {
                    level: heading_level(level),
                    text,
                });
            }
            Tag::Paragraph => {
                self.inline_depth = self.inline_depth.saturating_sub(1);
                if self.in_list() {
                    self.buf.push('\n');
                    return;
                }
                let text = self.take_text();
                if text.is_empty() {
                    return;
                }
                if self.quote_depth > 0 {
                    self.blocks.push(Block::Quote { text });
                } else {
                    self.blocks.push(Block::Paragraph { text });
                }
            }
            Tag::Item => {
                self.inline_depth = self.inline_depth.saturating_sub(1);
                let text = std::mem::take(&mut self.buf);
                if let Some(list) = self.lists.last_mut() {
                    list.push(&text);
                }
            }
            Tag::List(_) => {
                if let Some(done) = self.lists.pop() {
                    match self.lists.last_mut() {
                        Some(parent) => parent.items.extend(done.items),
                        None => self.blocks.push(Block::List { items: done.items }),
                    }
                }
            }
            Tag::BlockQuote => self.quote_depth = self.quote_depth.saturating_sub(1),
            Tag::CodeBlock(_) => {
                let lang = self.code_lang.take().flatten();
                if self.in_list() {
                    self.break_item_line();
                    return;
                }
                let text = self.buf.trim_end_matches('\n').to_string();
                self.buf.clear();
                self.blocks.push(Block::CodeBlock { lang, text });
            }
            Tag::TableCell => {
                self.inline_depth = self.inline_depth.saturating_sub(1);
                let start = self.cell_start.min(self.buf.len());
                let text = self.buf[start..].trim().to_string();
                self.buf.truncate(start);
                self.row.push(text);
            }
            Tag::TableHead | Tag::TableRow => {
                let row = std::mem::take(&mut self.row);
                if let Some(rows) = self.table.as_mut() {
                    rows.push(row);
                }
            }
            Tag::Table(_) => {
                let Some(rows) = self.table.take() else {
                    return;
                };
                if self.in_list() {
                    self.break_item_line();
                    for row in rows {
                        self.buf.push_str(&row.join(" | "));
                        self.buf.push('\n');
                    }
                } else {
                    self.blocks.push(Block::Table { rows });
                }
            }
            _ => {}
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) | Event::Code(text) => self.buf.push_str(&text),
            Event::Html(html) => {
                if self.inline_depth > 0 || self.code_lang.is_some() {
                    self.buf.push_str(&html);
                } else {
                    // Raw HTML block: kept as literal text.
                    let text = html.trim();
                    if !text.is_empty() {
                        self.blocks.push(Block::Paragraph {
                            text: text.to_string(),
                        });
                    }
                }
            }
            Event::FootnoteReference(label) => {
                self.buf.push('[');
                self.buf.push_str(&label);
                self.buf.push(']');
            }
            Event::SoftBreak | Event::HardBreak => self.buf.push('\n'),
            Event::Rule => {
                if self.in_list() {
                    self.break_item_line();
                    self.buf.push_str("---\n");
                } else {
                    self.blocks.push(Block::Rule);
                }
            }
            Event::TaskListMarker(checked) => {
                self.buf.push_str(if checked { "[x] " } else { "[ ] " });
            }
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Parses markdown into a flat sequence of blocks.
///
/// Blank lines produce no blocks. Parsing is total: any text yields some
/// (possibly empty) sequence.
///
/// # Example
///
/// ```
/// use mdpane::domain::{parse_blocks, Block};
///
/// let blocks = parse_blocks("# Title\n\nBody");
/// assert_eq!(blocks[0], Block::Heading { level: 1, text: "Title".into() });
/// assert_eq!(blocks[1], Block::Paragraph { text: "Body".into() });
/// ```
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut collector = BlockCollector::default();
    for event in Parser::new_ext(markdown, markdown_options()) {
        collector.event(event);
    }
    collector.blocks
}
