//! Export of markdown documents to HTML, PDF and Word (DOCX).
//!
//! HTML export reuses the preview's markdown conversion. PDF and DOCX are
//! produced from the shared block structure in [`crate::domain::parse_blocks`]
//! and need the `pdf` / `docx` features respectively.

mod docx;
mod error;
mod exporter;
mod format;
mod html;
mod pdf;

pub use error::ExportError;
pub use exporter::{export, ExportOutcome, Exporter};
pub use format::{resolve_destination, Capabilities, Capability, ExportFormat};
pub use html::{render_export_html, EXPORT_HTML_TEMPLATE};
