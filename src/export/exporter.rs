//! Export entry point: format dispatch and the final file write.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{parse_blocks, Block};

use super::docx::render_docx;
use super::error::ExportError;
use super::format::{resolve_destination, Capabilities, ExportFormat};
use super::html::render_export_html;
use super::pdf::render_pdf;

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOutcome {
    /// The file actually written, after extension reconciliation.
    pub path: PathBuf,
    pub format: ExportFormat,
    /// Source lines that lost unencodable characters (PDF only).
    pub stripped_lines: usize,
}

/// Exports markdown documents using a fixed set of capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter {
    capabilities: Capabilities,
}

impl Exporter {
    /// Creates an exporter with every capability compiled into this build.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Exports `markdown` in `format` to `destination`.
    ///
    /// The destination gets the format's extension appended if it lacks a
    /// recognized one. Missing capabilities are detected before anything is
    /// written. The write itself is not atomic: an I/O failure part way can
    /// leave a partial file.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::DependencyMissing` if the format's serializer is
    /// unavailable, `ExportError::Serialize` if the serializer fails, and
    /// `ExportError::Io` if the destination cannot be written.
    pub fn export(
        &self,
        markdown: &str,
        format: ExportFormat,
        destination: &Path,
    ) -> Result<ExportOutcome, ExportError> {
        let path = resolve_destination(destination, format);
        tracing::debug!(%format, path = %path.display(), "starting export");

        if let Some(capability) = format.required_capability() {
            if !self.capabilities.has(capability) {
                return Err(ExportError::missing(capability));
            }
        }

        let (bytes, stripped_lines) = match format {
            ExportFormat::Html => {
                let title = document_title(&parse_blocks(markdown), &path);
                let html = render_export_html(markdown, &title)
                    .map_err(|e| ExportError::serialize(format, e))?;
                (html.into_bytes(), 0)
            }
            ExportFormat::Pdf => {
                let blocks = parse_blocks(markdown);
                let output = render_pdf(&blocks, &document_title(&blocks, &path))?;
                (output.bytes, output.stripped_lines)
            }
            ExportFormat::Docx => (render_docx(&parse_blocks(markdown))?, 0),
        };

        std::fs::write(&path, &bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        if stripped_lines > 0 {
            tracing::warn!(
                stripped_lines,
                "some characters could not be encoded and were removed"
            );
        }
        tracing::info!(%format, path = %path.display(), bytes = bytes.len(), "exported document");

        Ok(ExportOutcome {
            path,
            format,
            stripped_lines,
        })
    }
}

/// Exports with every capability compiled into this build.
///
/// See [`Exporter::export`].
pub fn export(
    markdown: &str,
    format: ExportFormat,
    destination: &Path,
) -> Result<ExportOutcome, ExportError> {
    Exporter::new().export(markdown, format, destination)
}

/// Picks a document title: the first heading, else the file stem.
fn document_title(blocks: &[Block], path: &Path) -> String {
    blocks
        .iter()
        .find_map(|block| match block {
            Block::Heading { text, .. } if !text.is_empty() => Some(text.replace('\n', " ")),
            _ => None,
        })
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "Untitled".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::format::Capability;
    use tempfile::TempDir;

    #[test]
    fn test_html_export_appends_extension() {
        let dir = TempDir::new().unwrap();
        let outcome = export("# Hi\n\ntext", ExportFormat::Html, &dir.path().join("out")).unwrap();

        assert_eq!(outcome.path, dir.path().join("out.html"));
        let written = std::fs::read_to_string(&outcome.path).unwrap();
        assert!(written.contains("<meta charset=\"utf-8\">"));
        assert!(written.contains("<title>Hi</title>"));
        assert!(written.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_missing_pdf_capability_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::with_capabilities(Capabilities::none());

        let err = exporter
            .export("# Title", ExportFormat::Pdf, &dir.path().join("out"))
            .unwrap_err();

        assert!(matches!(
            err,
            ExportError::DependencyMissing {
                capability: Capability::Pdf,
                ..
            }
        ));
        assert!(!dir.path().join("out.pdf").exists());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_missing_docx_capability_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let exporter =
            Exporter::with_capabilities(Capabilities::available().without(Capability::Docx));

        let result = exporter.export("text", ExportFormat::Docx, &dir.path().join("doc.docx"));

        assert!(matches!(
            result,
            Err(ExportError::DependencyMissing {
                capability: Capability::Docx,
                ..
            })
        ));
        assert!(!dir.path().join("doc.docx").exists());
    }

    #[test]
    fn test_html_export_works_without_capabilities() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::with_capabilities(Capabilities::none());

        let outcome = exporter
            .export("text", ExportFormat::Html, &dir.path().join("page.htm"))
            .unwrap();

        assert_eq!(outcome.path, dir.path().join("page.htm"));
        assert!(outcome.path.exists());
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("missing-dir").join("out.html");

        let err = export("text", ExportFormat::Html, &destination).unwrap_err();

        match err {
            ExportError::Io { path, .. } => assert_eq!(path, destination),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_pdf_export_strips_unencodable_and_continues() {
        let dir = TempDir::new().unwrap();
        let markdown = "# Report\n\nprice: 5 ¥ or 世界\n\nnext line\n\nlast line";

        let outcome = export(markdown, ExportFormat::Pdf, &dir.path().join("out")).unwrap();

        assert_eq!(outcome.path, dir.path().join("out.pdf"));
        assert_eq!(outcome.stripped_lines, 1);
        let bytes = std::fs::read(&outcome.path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_pdf_export_keeps_correct_extension() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("out.pdf");

        let outcome = export("plain", ExportFormat::Pdf, &destination).unwrap();

        assert_eq!(outcome.path, destination);
        assert_eq!(outcome.stripped_lines, 0);
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_docx_export_writes_file() {
        let dir = TempDir::new().unwrap();

        let outcome = export("# Title\n\n## Sub\n\n> q", ExportFormat::Docx, &dir.path().join("w"))
            .unwrap();

        assert_eq!(outcome.path, dir.path().join("w.docx"));
        let bytes = std::fs::read(&outcome.path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_document_title_prefers_heading() {
        let blocks = parse_blocks("intro\n\n## Section\n\n# Later");
        assert_eq!(document_title(&blocks, Path::new("file.pdf")), "Section");

        let blocks = parse_blocks("no headings");
        assert_eq!(document_title(&blocks, Path::new("dir/notes.pdf")), "notes");
    }
}
