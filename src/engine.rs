//! Rename engine
//!
//! Walks the `.pdf` files directly inside one folder, names each after the
//! first text found in it, resolves name collisions, deletes byte-identical
//! duplicates and moves the renamed files into a `Renamed` subfolder.
//!
//! # Example
//!
//! ```no_run
//! use pdf_renamer::engine::{RenameEngine, RenameOptions};
//! use pdf_renamer::messages;
//! use pdf_renamer::pdf::PdfTextExtractor;
//!
//! let engine = RenameEngine::new(PdfTextExtractor);
//! let options = RenameOptions::new("scans");
//! let summary = engine
//!     .run(&options, |report| println!("{}", messages::file_status(report)))
//!     .expect("Failed to rename PDFs");
//! println!("renamed {}", summary.renamed);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};

use crate::error::{Error, Result};
use crate::pdf::TextExtractor;
use crate::sanitize::{candidate_name, split_extension, suffixed_name, PDF_EXTENSION};

/// Name of the subfolder renamed files are moved into
pub const RENAMED_DIR_NAME: &str = "Renamed";

/// Options for a rename run
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Folder whose `.pdf` files are processed (not recursive)
    pub folder: PathBuf,
    /// Name of the destination subfolder created inside `folder`
    pub renamed_dir_name: String,
}

impl RenameOptions {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            renamed_dir_name: RENAMED_DIR_NAME.to_string(),
        }
    }

    /// Full path of the destination subfolder
    pub fn renamed_dir(&self) -> PathBuf {
        self.folder.join(&self.renamed_dir_name)
    }
}

/// Bytes of every file moved during the current run, keyed by its final name
///
/// Only the first file to claim a name is remembered.
#[derive(Debug, Default)]
pub struct ContentIndex {
    entries: HashMap<String, Vec<u8>>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Record the content stored under `name` unless the name is already claimed
    pub fn record(&mut self, name: String, content: Vec<u8>) {
        self.entries.entry(name).or_insert(content);
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub renamed: usize,
    pub failed: usize,
    pub duplicates_deleted: usize,
}

impl RunSummary {
    /// Count one file's outcome; skipped files are not counted
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Skipped => {}
            FileOutcome::Deduplicated { .. } => self.duplicates_deleted += 1,
            FileOutcome::Renamed { .. } => self.renamed += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Terminal state of one processed file
#[derive(Debug)]
pub enum FileOutcome {
    /// No text could be extracted; the file was left where it was
    Skipped,
    /// Same content as the file already moved under `kept_as`; the file was deleted
    Deduplicated { kept_as: String },
    /// Moved into the destination folder as `new_name`
    Renamed { new_name: String },
    /// Processing stopped on an error
    Failed { error: Error },
}

/// One file's name and outcome, handed to the run observer
#[derive(Debug)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
}

/// Renames PDFs after their first text block
pub struct RenameEngine<E> {
    extractor: E,
}

impl<E: TextExtractor> RenameEngine<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Process every `.pdf` file directly inside `options.folder` once.
    ///
    /// `observe` is called after each file with its outcome. Per-file errors
    /// are reported through the observer and counted; only an invalid folder
    /// or a failure to set up the destination folder aborts the run.
    pub fn run<F>(&self, options: &RenameOptions, mut observe: F) -> Result<RunSummary>
    where
        F: FnMut(&FileReport),
    {
        if !options.folder.is_dir() {
            return Err(Error::InvalidFolder(options.folder.clone()));
        }

        let renamed_dir = options.renamed_dir();
        fs::create_dir_all(&renamed_dir)?;

        let files = list_pdf_files(&options.folder)?;
        tracing::debug!(folder = %options.folder.display(), count = files.len(), "listed PDF files");

        let mut index = ContentIndex::new();
        let mut summary = RunSummary::default();

        for path in files {
            let outcome = self.process_file(&path, &renamed_dir, &mut index);
            summary.record(&outcome);

            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            observe(&FileReport { file_name, outcome });
        }

        tracing::info!(
            renamed = summary.renamed,
            failed = summary.failed,
            duplicates_deleted = summary.duplicates_deleted,
            "run finished"
        );

        Ok(summary)
    }

    /// Take one source file to its terminal state.
    pub fn process_file(
        &self,
        source: &Path,
        renamed_dir: &Path,
        index: &mut ContentIndex,
    ) -> FileOutcome {
        let text = match self.extractor.first_page_text(source) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::debug!(file = %source.display(), "no text found, skipping");
                return FileOutcome::Skipped;
            }
            Err(error) => {
                tracing::warn!(file = %source.display(), %error, "text extraction failed");
                return FileOutcome::Failed { error };
            }
        };

        match rename_into(source, &text, renamed_dir, index) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(file = %source.display(), %error, "rename failed");
                FileOutcome::Failed { error }
            }
        }
    }
}

/// Resolve the final name for `source` and either delete it as a duplicate
/// or move it into `renamed_dir`.
fn rename_into(
    source: &Path,
    text: &str,
    renamed_dir: &Path,
    index: &mut ContentIndex,
) -> Result<FileOutcome> {
    let folder = source
        .parent()
        .ok_or_else(|| Error::General(format!("No parent folder: {}", source.display())))?;

    let Some(candidate) = candidate_name(text) else {
        return Ok(FileOutcome::Skipped);
    };

    // Only files still sitting in the source folder are checked here, not
    // names already moved into the destination folder during this run.
    // Each suffix goes onto the current name, so they accumulate
    // (`Report_1.pdf` taken gives `Report_1_2.pdf`).
    let mut counter: u32 = 1;
    let mut name = candidate;
    while folder.join(&name).exists() {
        name = next_suffixed(&name, counter);
        counter += 1;
    }

    let content = fs::read(source)?;

    let same_content = index.get(&name).map(|existing| existing == content.as_slice());
    match same_content {
        Some(true) => {
            fs::remove_file(source)?;
            tracing::info!(file = %source.display(), kept_as = %name, "deleted duplicate");
            return Ok(FileOutcome::Deduplicated { kept_as: name });
        }
        Some(false) => {
            // The suffixed name is taken as-is: it is not checked against the
            // folder or the index again, so it can overwrite an earlier file.
            name = next_suffixed(&name, counter);
            tracing::debug!(file = %source.display(), name = %name, "name taken by different content");
        }
        None => {}
    }

    let staged = folder.join(&name);
    fs::rename(source, &staged)?;

    let destination = renamed_dir.join(&name);
    if let Err(error) = fs::rename(&staged, &destination) {
        if let Err(revert) = fs::rename(&staged, source) {
            tracing::warn!(file = %staged.display(), error = %revert, "could not restore original name");
        }
        return Err(error.into());
    }

    tracing::info!(file = %source.display(), new_name = %name, "renamed");
    index.record(name.clone(), content);
    Ok(FileOutcome::Renamed { new_name: name })
}

/// Append `_<n>` to the stem of `name`, keeping its extension
fn next_suffixed(name: &str, n: u32) -> String {
    let (stem, ext) = split_extension(name);
    suffixed_name(stem, n, ext)
}

/// List regular files ending in `.pdf` directly inside `folder`, sorted by path.
pub fn list_pdf_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let escaped = Pattern::escape(&folder.to_string_lossy());
    let pattern = Path::new(&escaped).join(format!("*{}", PDF_EXTENSION));

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut paths = Vec::new();
    let entries = glob_with(&pattern.to_string_lossy(), options)
        .map_err(|e| Error::InvalidGlob(e.to_string()))?;
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!(folder = %folder.display(), error = %e, "glob error"),
        }
    }

    // Sort paths for consistent ordering
    paths.sort();

    Ok(paths)
}
