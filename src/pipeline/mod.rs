//! Per-document processing and run-level bookkeeping
//!
//! Documents are processed strictly one at a time. Any failure inside a
//! document's processing is caught at the document boundary and recorded;
//! the run always completes and always writes the index and digest.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::chunking::split_text;
use crate::clients::GenerateText;
use crate::config::SplitConfig;
use crate::document;
use crate::output;
use crate::structure;
use crate::summarize::{ReduceError, Summarizer};
use crate::types::{Document, RunReport, StructuredRecord};

/// Summarize one document: split, reduce, structure
pub fn process_document<G: GenerateText>(
    doc: &Document,
    config: &SplitConfig,
    client: &G,
) -> Result<StructuredRecord, ReduceError> {
    let segments = split_text(&doc.text, config);
    info!(
        file = %doc.meta.filename,
        words = doc.meta.word_count,
        chars = doc.meta.char_count,
        segments = segments.len(),
        "processing document"
    );
    let summary = Summarizer::new(client).summarize(&segments)?;
    Ok(structure::structure(&summary, &doc.meta, client))
}

/// Process every transcript in `input_dir`, writing all artifacts under
/// `output_dir` and returning the run report
pub fn run_batch<G: GenerateText>(
    input_dir: &Path,
    output_dir: &Path,
    config: &SplitConfig,
    client: &G,
) -> Result<RunReport> {
    let files = document::discover_transcripts(input_dir)?;
    output::ensure_output_dir(output_dir)?;

    let mut report = RunReport::new(files.len());
    for (idx, path) in files.iter().enumerate() {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());
        info!(file = %filename, position = idx + 1, total = files.len(), "starting document");

        match summarize_one(path, output_dir, config, client) {
            Ok(record) => report.add_success(record),
            Err(err) => {
                warn!(file = %filename, error = %err, "document failed; continuing with the rest of the run");
                report.add_failure(filename);
            }
        }
    }

    output::write_index(output_dir, &report)?;
    output::write_digest(output_dir, &report)?;
    Ok(report)
}

fn summarize_one<G: GenerateText>(
    path: &Path,
    output_dir: &Path,
    config: &SplitConfig,
    client: &G,
) -> Result<StructuredRecord> {
    let doc = document::load_document(path)?;
    let record = process_document(&doc, config, client)?;
    output::write_record(output_dir, path, &record)?;
    Ok(record)
}
