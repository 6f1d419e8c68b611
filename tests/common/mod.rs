//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdf_renamer::pdf::TextExtractor;
use pdf_renamer::{Error, Result};

/// What the scripted extractor answers for one file
#[derive(Debug, Clone)]
pub enum Script {
    Text(String),
    NoText,
    Broken,
}

/// Extractor answering from a per-file-name script instead of parsing PDFs
#[derive(Debug, Default)]
pub struct ScriptedExtractor {
    scripts: HashMap<String, Script>,
}

impl ScriptedExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, file_name: &str, text: &str) -> Self {
        self.scripts.insert(file_name.to_string(), Script::Text(text.to_string()));
        self
    }

    pub fn no_text(mut self, file_name: &str) -> Self {
        self.scripts.insert(file_name.to_string(), Script::NoText);
        self
    }

    pub fn broken(mut self, file_name: &str) -> Self {
        self.scripts.insert(file_name.to_string(), Script::Broken);
        self
    }
}

impl TextExtractor for ScriptedExtractor {
    fn first_page_text(&self, path: &Path) -> Result<Option<String>> {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        match self.scripts.get(&name) {
            Some(Script::Text(text)) => Ok(Some(text.clone())),
            Some(Script::NoText) | None => Ok(None),
            Some(Script::Broken) => Err(Error::General(format!("cannot parse {}", name))),
        }
    }
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Sorted file names directly inside `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Create a PDF with one page per entry; `None` pages carry no text
pub fn write_text_pdf(path: &Path, pages: &[Option<&str>]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match page {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("Failed to encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("Failed to save test PDF");
}
