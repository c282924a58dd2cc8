//! Export failures.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::format::{Capability, ExportFormat};

/// Errors that abort an export.
///
/// Unencodable characters are not errors: they are stripped and reported in
/// [`ExportOutcome::stripped_lines`](super::ExportOutcome::stripped_lines).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{capability} export is unavailable: this build lacks the `{feature}` feature")]
    DependencyMissing {
        capability: Capability,
        feature: &'static str,
    },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {format} document: {message}")]
    Serialize {
        format: ExportFormat,
        message: String,
    },
}

impl ExportError {
    pub(crate) fn missing(capability: Capability) -> Self {
        ExportError::DependencyMissing {
            capability,
            feature: capability.feature(),
        }
    }

    pub(crate) fn serialize(format: ExportFormat, err: impl std::fmt::Display) -> Self {
        ExportError::Serialize {
            format,
            message: err.to_string(),
        }
    }
}
