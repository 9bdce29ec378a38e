//! Batch transcription of media files through the ASR webservice

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::clients::asr::{AsrClient, AsrOptions, OutputFormat};

/// Media extensions the ASR service accepts; containers are decoded
/// server-side by FFmpeg
const SUPPORTED_EXTENSIONS: [&str; 14] = [
    "mp4", "mkv", "avi", "mov", "webm", "flv", "wmv", // video
    "mp3", "wav", "flac", "aac", "ogg", "m4a", "opus", // audio
];

/// Outcome counts for one transcription run
#[derive(Debug, Default)]
pub struct TranscribeReport {
    pub total: usize,
    pub succeeded: usize,
}

/// All supported media files in a directory, sorted by filename
pub fn discover_media(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read media directory {:?}", dir))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false);
        if path.is_file() && supported {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Transcribe every media file in `input_dir`, writing transcripts to
/// `output_dir`
///
/// A failed upload is logged and skipped; the run continues with the
/// remaining files.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    client: &AsrClient,
    options: &AsrOptions,
) -> Result<TranscribeReport> {
    let files = discover_media(input_dir)?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {:?}", output_dir))?;

    let mut report = TranscribeReport {
        total: files.len(),
        succeeded: 0,
    };
    for path in &files {
        info!(file = %path.display(), "transcribing");
        match transcribe_one(path, output_dir, client, options) {
            Ok(()) => report.succeeded += 1,
            Err(err) => warn!(file = %path.display(), error = %err, "transcription failed; continuing"),
        }
    }
    Ok(report)
}

fn transcribe_one(
    media: &Path,
    output_dir: &Path,
    client: &AsrClient,
    options: &AsrOptions,
) -> Result<()> {
    let body = client.transcribe(media, options)?;
    save_transcription(output_dir, media, &body, options.output)
}

/// Persist one transcription under the media file's stem
///
/// JSON output additionally gets a plain-text `<stem>_summary.txt` when the
/// response carries a `text` field.
fn save_transcription(
    output_dir: &Path,
    media: &Path,
    body: &str,
    format: OutputFormat,
) -> Result<()> {
    let stem = media
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("recording");
    let path = output_dir.join(format!("{stem}.{}", format.extension()));
    fs::write(&path, body).with_context(|| format!("failed to write transcript {:?}", path))?;

    if format == OutputFormat::Json {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(text) = parsed.get("text").and_then(|text| text.as_str()) {
                let text_path = output_dir.join(format!("{stem}_summary.txt"));
                fs::write(&text_path, text)
                    .with_context(|| format!("failed to write transcript text {:?}", text_path))?;
            }
        }
    }
    Ok(())
}
