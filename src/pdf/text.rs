//! First-page text extraction using lopdf

use std::path::Path;
use lopdf::Document;
use crate::error::{Error, Result};

/// Source of the text a file gets named after
///
/// The rename engine only depends on this trait, so tests can script the
/// text per file without real PDF fixtures.
pub trait TextExtractor {
    /// Return the first non-empty text block of the first page that has one.
    ///
    /// `Ok(None)` means the document was readable but carries no text
    /// (scanned pages, empty document). A document that cannot be opened or
    /// parsed is an error.
    fn first_page_text(&self, path: &Path) -> Result<Option<String>>;
}

/// [`TextExtractor`] backed by lopdf's per-page text extraction
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn first_page_text(&self, path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let doc = Document::load(path)?;

        // get_pages() is keyed by page number, so this walks pages in order
        for (page_num, _page_id) in doc.get_pages() {
            let text = doc.extract_text(&[page_num])?;
            if let Some(block) = first_text_block(&text) {
                tracing::debug!(path = %path.display(), page = page_num, "found text block");
                return Ok(Some(block));
            }
        }

        Ok(None)
    }
}

/// Pick the first text block out of one page's extracted text.
///
/// Blocks are runs of non-blank lines separated by blank lines; the block is
/// returned with its lines joined by `\n` and outer whitespace trimmed.
pub fn first_text_block(page_text: &str) -> Option<String> {
    let mut block: Vec<&str> = Vec::new();

    for line in page_text.lines() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                break;
            }
            continue;
        }
        block.push(line);
    }

    let joined = block.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
