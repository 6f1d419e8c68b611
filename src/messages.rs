//! Human-readable status lines
//!
//! Every line the tool prints exists in Russian and in English; both forms
//! are printed, Russian first.

use std::fmt;
use std::path::Path;

use crate::engine::{FileOutcome, FileReport, RunSummary};

/// Text of the interactive folder prompt
pub const FOLDER_PROMPT: &str =
    "Введите путь к вашей папке с PDF файлами / Enter the path to your folder with PDF files";

/// A status line in both of its localized forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub ru: String,
    pub en: String,
}

impl StatusLine {
    fn new(ru: String, en: String) -> Self {
        Self { ru, en }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.ru, self.en)
    }
}

/// Line printed when the folder to process does not exist
pub fn invalid_folder(folder: &Path) -> StatusLine {
    let folder = folder.display();
    StatusLine::new(
        format!("Папка '{}' не существует.", folder),
        format!("Folder '{}' does not exist.", folder),
    )
}

/// Line describing what happened to one file
pub fn file_status(report: &FileReport) -> StatusLine {
    let name = &report.file_name;
    match &report.outcome {
        FileOutcome::Skipped => StatusLine::new(
            format!(
                "Не удалось найти текст на первых страницах файла: {}. Продолжение со следующим файлом.",
                name
            ),
            format!(
                "Failed to find text on the first pages of the file: {}. Continuing with the next file.",
                name
            ),
        ),
        FileOutcome::Deduplicated { kept_as } => StatusLine::new(
            format!(
                "Файл {} удален, так как содержимое совпадает с файлом {} в папке 'Renamed'.",
                name, kept_as
            ),
            format!(
                "File {} deleted, as its content matches the file {} in the 'Renamed' folder.",
                name, kept_as
            ),
        ),
        FileOutcome::Renamed { new_name } => StatusLine::new(
            format!("Файл переименован: {} -> {}", name, new_name),
            format!("File renamed: {} -> {}", name, new_name),
        ),
        FileOutcome::Failed { error } => StatusLine::new(
            format!(
                "Ошибка при обработке файла {}: {}. Продолжение со следующим файлом.",
                name, error
            ),
            format!(
                "Error processing file {}: {}. Continuing with the next file.",
                name, error
            ),
        ),
    }
}

/// End-of-run lines; failure and duplicate lines only appear when non-zero
pub fn summary(summary: &RunSummary) -> Vec<StatusLine> {
    let mut lines = vec![StatusLine::new(
        format!("Успешно переименовано {} файлов.", summary.renamed),
        format!("Successfully renamed {} files.", summary.renamed),
    )];

    if summary.failed > 0 {
        lines.push(StatusLine::new(
            format!("Не удалось переименовать {} файлов.", summary.failed),
            format!("Failed to rename {} files.", summary.failed),
        ));
    }

    if summary.duplicates_deleted > 0 {
        lines.push(StatusLine::new(
            format!("Удалено {} файлов с одинаковым содержимым.", summary.duplicates_deleted),
            format!("Deleted {} files with identical content.", summary.duplicates_deleted),
        ));
    }

    lines
}
