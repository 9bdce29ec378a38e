//! HTTP clients for the external speech-to-text and text-generation services
//!
//! Both services are opaque request/response collaborators. Calls are
//! blocking with fixed timeouts; the service endpoint, not local CPU, is the
//! pipeline bottleneck, so nothing here is concurrent.

pub mod asr;
pub mod generation;

use thiserror::Error;

/// Failure talking to an external service
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("service returned an empty response")]
    EmptyResponse,
    #[error("could not read media file: {0}")]
    Io(#[from] std::io::Error),
}

/// Seam between the summarization pipeline and the text-generation service
///
/// The pipeline only ever needs prompt-in, text-out; tests substitute their
/// own implementations.
pub trait GenerateText {
    fn generate(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String, ClientError>;
}
