//! Blocking client for a Whisper ASR webservice
//!
//! One multipart POST per media file; the service decodes the container
//! with FFmpeg server-side, so uploads are opaque bytes.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart;

use super::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Long recordings can take a while to transcribe server-side
const TRANSCRIBE_TIMEOUT: Duration = Duration::from_secs(3600);

/// Output formats supported by the ASR webservice
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Srt,
    Vtt,
    Tsv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Srt => "srt",
            OutputFormat::Vtt => "vtt",
            OutputFormat::Tsv => "tsv",
        }
    }

    /// File extension used when persisting a transcription
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Srt => "srt",
            OutputFormat::Vtt => "vtt",
            OutputFormat::Tsv => "tsv",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Task {
    Transcribe,
    Translate,
}

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Transcribe => "transcribe",
            Task::Translate => "translate",
        }
    }
}

/// Request options for one transcription call
#[derive(Debug, Clone)]
pub struct AsrOptions {
    pub output: OutputFormat,
    pub task: Task,
    /// None lets the service auto-detect the language
    pub language: Option<String>,
    pub word_timestamps: bool,
    pub vad_filter: bool,
    pub diarize: bool,
    pub min_speakers: u32,
    pub max_speakers: u32,
}

impl Default for AsrOptions {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            task: Task::Transcribe,
            language: None,
            word_timestamps: true,
            vad_filter: false,
            diarize: true,
            min_speakers: 1,
            max_speakers: 10,
        }
    }
}

impl AsrOptions {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("output", self.output.as_str().to_string()),
            ("task", self.task.as_str().to_string()),
            ("word_timestamps", self.word_timestamps.to_string()),
            ("vad_filter", self.vad_filter.to_string()),
            ("encode", "true".to_string()),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        if self.diarize {
            params.push(("diarize", "true".to_string()));
            params.push(("min_speakers", self.min_speakers.to_string()));
            params.push(("max_speakers", self.max_speakers.to_string()));
        }
        params
    }
}

/// Client for the ASR webservice's `/asr` endpoint
pub struct AsrClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl AsrClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(TRANSCRIBE_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Upload one media file and return the transcription body
    ///
    /// The body is raw transcript text, or a JSON document when
    /// `options.output` is [`OutputFormat::Json`].
    pub fn transcribe(&self, media: &Path, options: &AsrOptions) -> Result<String, ClientError> {
        let form = multipart::Form::new().file("audio_file", media)?;
        let response = self
            .http
            .post(format!("{}/asr", self.base_url))
            .query(&options.query_params())
            .multipart(form)
            .send()?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
            });
        }
        Ok(response.text()?)
    }
}
