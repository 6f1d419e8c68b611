//! PDF Renamer Library
//!
//! Renames the PDF files in a folder after the first block of text found on
//! the first page that has any. This library provides functionality to:
//! - Extract the first text block of a PDF
//! - Turn extracted text into a safe file name
//! - Resolve name collisions and delete byte-identical duplicates
//! - Move renamed files into a `Renamed` subfolder and tally the results
//!
//! # Example
//!
//! ```no_run
//! use pdf_renamer::engine::{RenameEngine, RenameOptions};
//! use pdf_renamer::pdf::PdfTextExtractor;
//!
//! let engine = RenameEngine::new(PdfTextExtractor);
//! let summary = engine
//!     .run(&RenameOptions::new("invoices"), |_| {})
//!     .expect("Failed to rename PDFs");
//! assert_eq!(summary.failed, 0);
//! ```

pub mod error;
pub mod pdf;
pub mod sanitize;
pub mod engine;
pub mod messages;

// Re-export commonly used items
pub use error::{Error, Result};
pub use engine::{FileOutcome, FileReport, RenameEngine, RenameOptions, RunSummary};
