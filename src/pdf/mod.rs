//! PDF access module

pub mod text;

// Re-export commonly used items
pub use text::{first_text_block, PdfTextExtractor, TextExtractor};
