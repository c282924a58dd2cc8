//! Builder for test markdown documents.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

/// Builder for markdown documents, one block at a time.
///
/// Blocks are separated by a blank line in the rendered markdown.
#[derive(Debug, Default)]
pub struct TestDocument {
    blocks: Vec<String>,
}

impl TestDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ATX heading at the given level.
    pub fn heading(mut self, level: usize, text: &str) -> Self {
        self.blocks.push(format!("{} {}", "#".repeat(level), text));
        self
    }

    /// Adds a paragraph.
    pub fn paragraph(mut self, text: &str) -> Self {
        self.blocks.push(text.to_string());
        self
    }

    /// Adds a blockquote line.
    pub fn quote(mut self, text: &str) -> Self {
        self.blocks.push(format!("> {}", text));
        self
    }

    /// Adds a fenced code block.
    pub fn code(mut self, lang: &str, body: &str) -> Self {
        self.blocks.push(format!("```{}\n{}\n```", lang, body));
        self
    }

    /// Adds a bullet list.
    pub fn bullets(mut self, items: &[&str]) -> Self {
        let list: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
        self.blocks.push(list.join("\n"));
        self
    }

    /// Returns the markdown text.
    pub fn to_markdown(&self) -> String {
        let mut text = self.blocks.join("\n\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_joins_blocks() {
        let doc = TestDocument::new().heading(1, "Title").paragraph("Body");
        assert_eq!(doc.to_markdown(), "# Title\n\nBody\n");
    }

    #[test]
    fn test_document_code_block() {
        let doc = TestDocument::new().code("rust", "let x = 1;");
        assert_eq!(doc.to_markdown(), "```rust\nlet x = 1;\n```\n");
    }
}
