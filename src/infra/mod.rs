//! File I/O for markdown documents

mod document;

pub use document::{decode_document, is_markdown_path, read_document, save_document, FsError};
