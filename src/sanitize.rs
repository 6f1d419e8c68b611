//! Filename derivation from extracted text

/// Longest stem (name without the `.pdf` extension) a candidate may have
pub const MAX_STEM_LEN: usize = 255;

/// Extension appended to every candidate name
pub const PDF_EXTENSION: &str = ".pdf";

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '(' | ')')
}

/// Replace every character outside `[A-Za-z0-9_\-.()]` with `_`.
///
/// The mapping is one character for one character, so positions are kept
/// and applying it twice changes nothing.
pub fn sanitize_filename(text: &str) -> String {
    text.chars()
        .map(|c| if is_allowed(c) { c } else { '_' })
        .collect()
}

/// Build the candidate file name for a piece of extracted text.
///
/// Returns `None` when the text is blank.
///
/// # Example
///
/// ```
/// use pdf_renamer::sanitize::candidate_name;
///
/// assert_eq!(candidate_name("Report 2024").as_deref(), Some("Report_2024.pdf"));
/// assert_eq!(candidate_name("   "), None);
/// ```
pub fn candidate_name(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut stem: String = sanitize_filename(trimmed)
        .chars()
        .take(MAX_STEM_LEN)
        .collect();
    stem.push_str(PDF_EXTENSION);
    Some(stem)
}

/// Split a file name into stem and extension at the last dot.
///
/// A dot in first position belongs to the stem, so `.pdf` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// `<stem>_<n><ext>`
pub fn suffixed_name(stem: &str, n: u32, ext: &str) -> String {
    format!("{}_{}{}", stem, n, ext)
}
