//! Transcript ingestion - discovery, loading, and filename metadata

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::{Document, DocumentMeta};

/// Derive document metadata from the transcription naming convention
/// `<date-token> -- <title>.txt`, e.g. `2024-10-14_11-01-16 -- weekly sync.txt`
///
/// Without the ` -- ` separator the whole stem becomes the date token and
/// the filename stands in for the title.
pub fn parse_meta(filename: &str, content: &str) -> DocumentMeta {
    let stem = filename.strip_suffix(".txt").unwrap_or(filename);
    let mut parts = stem.splitn(2, " -- ");
    let date = parts.next().unwrap_or("unknown").to_string();
    let title = parts
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| filename.to_string());

    DocumentMeta {
        filename: filename.to_string(),
        date,
        title,
        word_count: content.split_whitespace().count(),
        char_count: content.chars().count(),
    }
}

/// Read one transcript file and derive its metadata
pub fn load_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript {:?}", path))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());
    let meta = parse_meta(&filename, &text);
    Ok(Document { text, meta })
}

/// All `.txt` transcripts in a directory, sorted by filename
pub fn discover_transcripts(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read input directory {:?}", dir))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::parse_meta;

    #[test]
    fn parses_date_and_title_from_convention() {
        let meta = parse_meta("2024-10-14_11-01-16 -- 1st meeting w dr rapp.txt", "a b c");
        assert_eq!(meta.date, "2024-10-14_11-01-16");
        assert_eq!(meta.title, "1st meeting w dr rapp");
        assert_eq!(meta.word_count, 3);
        assert_eq!(meta.char_count, 5);
    }

    #[test]
    fn filename_without_separator_keeps_stem_as_date() {
        let meta = parse_meta("notes.txt", "hello");
        assert_eq!(meta.date, "notes");
        assert_eq!(meta.title, "notes.txt");
    }

    #[test]
    fn title_may_contain_the_separator() {
        let meta = parse_meta("2024-01-01 -- a -- b.txt", "");
        assert_eq!(meta.date, "2024-01-01");
        assert_eq!(meta.title, "a -- b");
    }

    #[test]
    fn char_count_is_in_characters_not_bytes() {
        let meta = parse_meta("x.txt", "привет");
        assert_eq!(meta.char_count, 6);
    }
}
