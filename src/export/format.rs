//! Export formats, serialization capabilities and destination paths.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Output format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Standalone HTML document
    Html,
    /// Paginated PDF document
    Pdf,
    /// Word document (.docx)
    Docx,
}

impl ExportFormat {
    /// Every format, in menu order.
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Html, ExportFormat::Pdf, ExportFormat::Docx];

    /// Returns the file extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    /// Maps a file extension to a format, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(ExportFormat::Html),
            "pdf" => Some(ExportFormat::Pdf),
            "docx" => Some(ExportFormat::Docx),
            _ => None,
        }
    }

    /// Sniffs the format from a destination path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The serialization capability this format needs, if any.
    pub fn required_capability(self) -> Option<Capability> {
        match self {
            ExportFormat::Html => None,
            ExportFormat::Pdf => Some(Capability::Pdf),
            ExportFormat::Docx => Some(Capability::Docx),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Docx => "DOCX",
        };
        f.write_str(name)
    }
}

/// A document serializer that may be absent from a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Pdf,
    Docx,
}

impl Capability {
    /// Cargo feature that compiles this capability in.
    pub fn feature(self) -> &'static str {
        match self {
            Capability::Pdf => "pdf",
            Capability::Docx => "docx",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Pdf => f.write_str("PDF"),
            Capability::Docx => f.write_str("Word (DOCX)"),
        }
    }
}

/// The set of serialization capabilities an exporter may use.
///
/// Starts from what the build compiled in; capabilities can be withdrawn but
/// never added beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pdf: bool,
    docx: bool,
}

impl Capabilities {
    /// Capabilities compiled into this build.
    pub fn available() -> Self {
        Self {
            pdf: cfg!(feature = "pdf"),
            docx: cfg!(feature = "docx"),
        }
    }

    /// No optional capabilities: HTML export only.
    pub fn none() -> Self {
        Self {
            pdf: false,
            docx: false,
        }
    }

    /// Returns these capabilities with `capability` removed.
    #[must_use]
    pub fn without(mut self, capability: Capability) -> Self {
        match capability {
            Capability::Pdf => self.pdf = false,
            Capability::Docx => self.docx = false,
        }
        self
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Pdf => self.pdf,
            Capability::Docx => self.docx,
        }
    }

    /// Returns true if `format` can be exported with these capabilities.
    pub fn supports(&self, format: ExportFormat) -> bool {
        format.required_capability().is_none_or(|cap| self.has(cap))
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::available()
    }
}

/// Reconciles a destination path with the chosen format.
///
/// A path that already ends in a recognized export extension is returned
/// unchanged, even if it names a different format. Otherwise the format's
/// extension is appended (not substituted), so `notes.v2` becomes
/// `notes.v2.pdf`.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use mdpane::export::{resolve_destination, ExportFormat};
///
/// assert_eq!(resolve_destination(Path::new("out"), ExportFormat::Pdf), PathBuf::from("out.pdf"));
/// assert_eq!(resolve_destination(Path::new("out.pdf"), ExportFormat::Pdf), PathBuf::from("out.pdf"));
/// ```
pub fn resolve_destination(path: &Path, format: ExportFormat) -> PathBuf {
    if ExportFormat::from_path(path).is_some() {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}
