//! Persisted artifacts: per-document records, the run index, and a digest

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::types::{RunReport, StructuredRecord};

pub const INDEX_FILENAME: &str = "all_summaries_index.json";
pub const DIGEST_FILENAME: &str = "all_summaries.md";

pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {:?}", dir))
}

/// Write one document's record as `<stem>_summary.json`
pub fn write_record(output_dir: &Path, source: &Path, record: &StructuredRecord) -> Result<()> {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transcript");
    let path = output_dir.join(format!("{stem}_summary.json"));
    let json = serde_json::to_string_pretty(record)
        .context("failed to serialize structured record")?;
    fs::write(&path, json).with_context(|| format!("failed to write record {:?}", path))
}

#[derive(Serialize)]
struct RunIndex<'a> {
    processed_date: String,
    total_files: usize,
    successful: usize,
    failed: usize,
    failed_files: &'a [String],
    summaries: &'a [StructuredRecord],
}

/// Write the run-level index of all records and failures
pub fn write_index(output_dir: &Path, report: &RunReport) -> Result<()> {
    let index = RunIndex {
        processed_date: Utc::now().to_rfc3339(),
        total_files: report.total,
        successful: report.successful(),
        failed: report.failed.len(),
        failed_files: &report.failed,
        summaries: &report.records,
    };
    let path = output_dir.join(INDEX_FILENAME);
    let json = serde_json::to_string_pretty(&index).context("failed to serialize run index")?;
    fs::write(&path, json).with_context(|| format!("failed to write index {:?}", path))
}

/// Write the human-readable digest of all records
pub fn write_digest(output_dir: &Path, report: &RunReport) -> Result<()> {
    let mut out = String::new();
    out.push_str("# Meeting Transcription Summaries\n\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "Total files processed: {}/{}\n\n",
        report.successful(),
        report.total
    ));
    out.push_str("---\n\n");

    for record in &report.records {
        out.push_str(&format!("## {}\n\n", record.title()));
        out.push_str(&format!("**Date:** {}\n\n", record.date()));
        if !record.participants().is_empty() {
            out.push_str(&format!(
                "**Participants:** {}\n\n",
                record.participants().join(", ")
            ));
        }
        out.push_str(&format!("### Summary\n\n{}\n\n", record.summary));
        if !record.topics().is_empty() {
            out.push_str(&format!("**Topics:** {}\n\n", record.topics().join(", ")));
        }
        if !record.decisions().is_empty() {
            out.push_str("**Decisions:**\n");
            for decision in record.decisions() {
                out.push_str(&format!("- {decision}\n"));
            }
            out.push('\n');
        }
        if !record.action_items().is_empty() {
            out.push_str("**Action Items:**\n");
            for item in record.action_items() {
                out.push_str(&format!("- {item}\n"));
            }
            out.push('\n');
        }
        out.push_str("---\n\n");
    }

    let path = output_dir.join(DIGEST_FILENAME);
    fs::write(&path, out).with_context(|| format!("failed to write digest {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::{write_digest, write_index, write_record, DIGEST_FILENAME, INDEX_FILENAME};
    use crate::types::{DocumentMeta, ParsedFields, RunReport, StructuredRecord};
    use std::path::Path;

    fn meta(title: &str) -> DocumentMeta {
        DocumentMeta {
            filename: format!("2024-10-14 -- {title}.txt"),
            date: "2024-10-14".to_string(),
            title: title.to_string(),
            word_count: 2,
            char_count: 11,
        }
    }

    fn sample_report() -> RunReport {
        let mut report = RunReport::new(3);
        report.add_success(StructuredRecord::parsed(
            ParsedFields {
                title: "Sprint review".to_string(),
                date: "2024-10-14".to_string(),
                participants: vec!["Ada".to_string(), "Grace".to_string()],
                topics: vec!["velocity".to_string()],
                decisions: vec!["ship friday".to_string()],
                action_items: vec!["update changelog".to_string()],
                tags: vec!["sprint".to_string()],
            },
            "went well",
            &meta("sprint review"),
        ));
        report.add_success(StructuredRecord::fallback("raw text", &meta("retro")));
        report.add_failure("2024-10-15 -- broken.txt");
        report
    }

    #[test]
    fn index_contains_counts_and_records() {
        let dir = tempfile::tempdir().unwrap();
        write_index(dir.path(), &sample_report()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(INDEX_FILENAME)).unwrap();
        let index: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(index["total_files"], 3);
        assert_eq!(index["successful"], 2);
        assert_eq!(index["failed"], 1);
        assert_eq!(index["failed_files"][0], "2024-10-15 -- broken.txt");
        assert_eq!(index["summaries"][0]["title"], "Sprint review");
        assert_eq!(index["summaries"][1]["raw_summary"], "raw text");
        assert!(index["processed_date"].as_str().unwrap().starts_with("20"));
    }

    #[test]
    fn digest_lists_sections_and_omits_empty_ones() {
        let dir = tempfile::tempdir().unwrap();
        write_digest(dir.path(), &sample_report()).unwrap();

        let digest = std::fs::read_to_string(dir.path().join(DIGEST_FILENAME)).unwrap();
        assert!(digest.contains("# Meeting Transcription Summaries"));
        assert!(digest.contains("Total files processed: 2/3"));
        assert!(digest.contains("## Sprint review"));
        assert!(digest.contains("**Participants:** Ada, Grace"));
        assert!(digest.contains("- ship friday"));
        assert!(digest.contains("## retro"));
        // The fallback record has no participant or topic lists.
        assert_eq!(digest.matches("**Participants:**").count(), 1);
        assert_eq!(digest.matches("**Topics:**").count(), 1);
    }

    #[test]
    fn record_filename_follows_the_source_stem() {
        let dir = tempfile::tempdir().unwrap();
        let record = StructuredRecord::fallback("s", &meta("retro"));
        write_record(dir.path(), Path::new("/in/2024-10-14 -- retro.txt"), &record).unwrap();
        assert!(dir.path().join("2024-10-14 -- retro_summary.json").exists());
    }
}
