//! Core types for the recap summarization pipeline

use serde::{Deserialize, Serialize};

/// Metadata derived once from a transcript file at ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub filename: String,
    /// Date token parsed from the filename (e.g. `2024-10-14_11-01-16`)
    pub date: String,
    /// Title token parsed from the filename, or the filename itself
    pub title: String,
    pub word_count: usize,
    pub char_count: usize,
}

/// A transcript document: raw text plus derived metadata, immutable once read
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub meta: DocumentMeta,
}

/// A bounded slice of document text sized to fit one generation call
///
/// Segments are produced left to right; consecutive segments share
/// overlapping context around each cut point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Window text with surrounding whitespace trimmed
    pub text: String,
    /// Start of the untrimmed window, as a character offset into the document
    pub start: usize,
    /// End of the untrimmed window (exclusive), as a character offset
    pub end: usize,
}

/// Fields the generation service is asked to return for a summary
///
/// Every field defaults so a partially honored schema still parses;
/// whatever the service omits is filled from document metadata or left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub decisions: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Deterministic shape used when structured extraction is not parseable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackFields {
    pub title: String,
    pub date: String,
    pub raw_summary: String,
}

/// Outcome of structured extraction, kept as a first-class branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Extraction {
    Parsed(ParsedFields),
    Fallback(FallbackFields),
}

/// Structured record built once per document and persisted as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredRecord {
    #[serde(flatten)]
    pub extraction: Extraction,
    /// Final summary text the record was extracted from
    pub summary: String,
    pub metadata: DocumentMeta,
}

impl StructuredRecord {
    pub fn parsed(fields: ParsedFields, summary: &str, meta: &DocumentMeta) -> Self {
        Self {
            extraction: Extraction::Parsed(fields),
            summary: summary.to_string(),
            metadata: meta.clone(),
        }
    }

    pub fn fallback(summary: &str, meta: &DocumentMeta) -> Self {
        Self {
            extraction: Extraction::Fallback(FallbackFields {
                title: meta.title.clone(),
                date: meta.date.clone(),
                raw_summary: summary.to_string(),
            }),
            summary: summary.to_string(),
            metadata: meta.clone(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.extraction, Extraction::Fallback(_))
    }

    pub fn title(&self) -> &str {
        match &self.extraction {
            Extraction::Parsed(fields) => &fields.title,
            Extraction::Fallback(fields) => &fields.title,
        }
    }

    pub fn date(&self) -> &str {
        match &self.extraction {
            Extraction::Parsed(fields) => &fields.date,
            Extraction::Fallback(fields) => &fields.date,
        }
    }

    pub fn participants(&self) -> &[String] {
        match &self.extraction {
            Extraction::Parsed(fields) => &fields.participants,
            Extraction::Fallback(_) => &[],
        }
    }

    pub fn topics(&self) -> &[String] {
        match &self.extraction {
            Extraction::Parsed(fields) => &fields.topics,
            Extraction::Fallback(_) => &[],
        }
    }

    pub fn decisions(&self) -> &[String] {
        match &self.extraction {
            Extraction::Parsed(fields) => &fields.decisions,
            Extraction::Fallback(_) => &[],
        }
    }

    pub fn action_items(&self) -> &[String] {
        match &self.extraction {
            Extraction::Parsed(fields) => &fields.action_items,
            Extraction::Fallback(_) => &[],
        }
    }

    pub fn tags(&self) -> &[String] {
        match &self.extraction {
            Extraction::Parsed(fields) => &fields.tags,
            Extraction::Fallback(_) => &[],
        }
    }
}

/// Accumulated outcome of one summarization run
///
/// Threaded through the run loop explicitly; per-document outcomes are
/// merged into the single mutable copy the loop owns.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of transcripts discovered at the start of the run
    pub total: usize,
    /// Successful records, in processing order
    pub records: Vec<StructuredRecord>,
    /// Filenames of documents that produced no record
    pub failed: Vec<String>,
}

impl RunReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            records: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn add_success(&mut self, record: StructuredRecord) {
        self.records.push(record);
    }

    pub fn add_failure(&mut self, filename: impl Into<String>) {
        self.failed.push(filename.into());
    }

    pub fn successful(&self) -> usize {
        self.records.len()
    }
}
