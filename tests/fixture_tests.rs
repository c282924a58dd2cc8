//! Integration tests using fixture documents.
//!
//! These drive the library API directly: block parsing, the preview
//! renderer, and every export format.

mod common;

use common::{fixture, fixtures_dir, read_fixture};
use mdpane::domain::{parse_blocks, Block, FontSize};
use mdpane::export::{export, ExportFormat};
use mdpane::preview::{list_theme_ids, render};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn fixtures_directory_exists() {
    let dir = fixtures_dir();
    assert!(dir.exists(), "fixtures directory should exist: {:?}", dir);
}

// ===========================================
// Block parsing
// ===========================================

#[test]
fn release_notes_block_structure() {
    let content = read_fixture(&fixture("release-notes.md"));
    let blocks = parse_blocks(&content);

    let kinds: Vec<&str> = blocks
        .iter()
        .map(|block| match block {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code",
            Block::Quote { .. } => "quote",
            Block::List { .. } => "list",
            Block::Table { .. } => "table",
            Block::Rule => "rule",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "heading",
            "list",
            "heading",
            "list",
            "quote",
            "code",
            "table",
            "rule",
            "paragraph",
        ]
    );
}

#[test]
fn release_notes_nested_list_depth() {
    let content = read_fixture(&fixture("release-notes.md"));
    let blocks = parse_blocks(&content);

    let Some(Block::List { items }) = blocks.get(3) else {
        panic!("expected the highlights list, got {:?}", blocks.get(3));
    };
    let depths: Vec<usize> = items.iter().map(|item| item.depth).collect();
    assert_eq!(depths, vec![0, 0, 1, 0]);
    assert_eq!(items[1].text, "A new Forest theme");
}

#[test]
fn release_notes_code_keeps_language() {
    let content = read_fixture(&fixture("release-notes.md"));
    let code = parse_blocks(&content)
        .into_iter()
        .find_map(|block| match block {
            Block::CodeBlock { lang, text } => Some((lang, text)),
            _ => None,
        })
        .expect("fixture has a code block");

    assert_eq!(code.0.as_deref(), Some("rust"));
    assert!(code.1.contains("println!"));
}

// ===========================================
// Preview rendering
// ===========================================

#[test]
fn release_notes_render_in_every_theme() {
    let content = read_fixture(&fixture("release-notes.md"));

    for id in list_theme_ids() {
        let html = render(&content, id, FontSize::default());
        assert!(html.contains("<h1>Release Notes</h1>"), "theme {id}");
        assert!(html.contains("<table>"), "theme {id}");
        assert!(html.contains("copy-btn"), "theme {id}");
    }
}

// ===========================================
// Export
// ===========================================

#[test]
fn release_notes_export_every_format() {
    let temp = TempDir::new().unwrap();
    let content = read_fixture(&fixture("release-notes.md"));

    for format in ExportFormat::ALL {
        let outcome = export(&content, format, &temp.path().join("notes")).unwrap();
        assert_eq!(outcome.format, format);
        assert_eq!(
            outcome.path,
            temp.path().join(format!("notes.{}", format.extension()))
        );
        assert!(std::fs::metadata(&outcome.path).unwrap().len() > 0);
    }
}

#[test]
fn typography_pdf_substitutes_and_strips() {
    let temp = TempDir::new().unwrap();
    let content = read_fixture(&fixture("typography.md"));

    let outcome = export(&content, ExportFormat::Pdf, &temp.path().join("typo.pdf")).unwrap();

    // Only the CJK line loses characters; quotes, dashes, euro and accents survive.
    assert_eq!(outcome.stripped_lines, 1);
}

#[test]
fn typography_html_keeps_unicode() {
    let temp = TempDir::new().unwrap();
    let content = read_fixture(&fixture("typography.md"));

    let outcome = export(&content, ExportFormat::Html, &temp.path().join("typo")).unwrap();
    let html = std::fs::read_to_string(&outcome.path).unwrap();

    assert_eq!(outcome.stripped_lines, 0);
    assert!(html.contains("中文预览"));
    assert!(html.contains("Zürich"));
}
