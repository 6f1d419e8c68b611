//! PDF Renamer CLI tool
//!
//! Asks for a folder and renames the PDF files in it after their first text block.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use pdf_renamer::engine::{RenameEngine, RenameOptions};
use pdf_renamer::messages;
use pdf_renamer::pdf::PdfTextExtractor;
use pdf_renamer::Error;

/// PDF Renamer - Name PDF files after the first text on their pages
#[derive(Parser)]
#[command(name = "pdf-renamer")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Ask for the folder interactively
    pdf-renamer

    # Process a folder directly
    pdf-renamer ~/Downloads/papers

Renamed files are moved into a 'Renamed' subfolder of the processed folder.
Set RUST_LOG=debug for detailed logs on stderr.")]
struct Cli {
    /// Folder containing the PDF files (prompted for when omitted)
    folder: Option<PathBuf>,

    /// Log every decision to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "pdf_renamer=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let folder = match cli.folder {
        Some(folder) => folder,
        None => prompt_folder()?,
    };

    let engine = RenameEngine::new(PdfTextExtractor);
    let options = RenameOptions::new(folder);

    match engine.run(&options, |report| println!("{}", messages::file_status(report))) {
        Ok(summary) => {
            for line in messages::summary(&summary) {
                println!("{}", line);
            }
        }
        Err(Error::InvalidFolder(folder)) => {
            println!("{}", messages::invalid_folder(&folder));
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to prepare folder {}", options.folder.display())
            });
        }
    }

    Ok(())
}

/// Ask for the folder path on the terminal
fn prompt_folder() -> anyhow::Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt(messages::FOLDER_PROMPT)
        .interact_text()
        .context("Failed to read folder path")?;

    Ok(PathBuf::from(input.trim()))
}
