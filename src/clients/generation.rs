//! Blocking client for an Ollama-compatible text-generation service

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ClientError, GenerateText};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "gpt-oss:120b";

/// Summarization calls can take minutes on large models
const GENERATE_TIMEOUT: Duration = Duration::from_secs(300);
/// Availability and introspection calls should answer quickly
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct ShowRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
}

/// Client for the generation service's `/api/generate` endpoint plus the
/// introspection endpoints used for preflight checks
pub struct OllamaClient {
    base_url: String,
    model: String,
    generate_http: reqwest::blocking::Client,
    probe_http: reqwest::blocking::Client,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str) -> Result<Self, ClientError> {
        let generate_http = reqwest::blocking::Client::builder()
            .timeout(GENERATE_TIMEOUT)
            .build()?;
        let probe_http = reqwest::blocking::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            generate_http,
            probe_http,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fetch the configured model's metadata
    ///
    /// Callers treat failure as a warning; the pipeline runs regardless.
    pub fn model_info(&self) -> Result<serde_json::Value, ClientError> {
        let response = self
            .probe_http
            .post(format!("{}/api/show", self.base_url))
            .json(&ShowRequest { name: &self.model })
            .send()?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
            });
        }
        Ok(response.json()?)
    }

    /// Names of the models installed on the service
    pub fn installed_models(&self) -> Result<Vec<String>, ClientError> {
        let response = self
            .probe_http
            .get(format!("{}/api/tags", self.base_url))
            .send()?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
            });
        }
        let tags: TagsResponse = response.json()?;
        Ok(tags.models.into_iter().map(|entry| entry.name).collect())
    }
}

impl GenerateText for OllamaClient {
    fn generate(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String, ClientError> {
        let response = self
            .generate_http
            .post(format!("{}/api/generate", self.base_url))
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                system: system_prompt,
                stream: false,
            })
            .send()?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
            });
        }
        let body: GenerateResponse = response.json()?;
        if body.response.trim().is_empty() {
            return Err(ClientError::EmptyResponse);
        }
        Ok(body.response)
    }
}
