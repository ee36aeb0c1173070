//! Reference information generation (periphery)
//!
//! Request/response wrappers around a local Ollama model for reference text
//! an examiner may want at hand: medication summaries and aftercare guidance.
//! This module has no internal state machine and is never invoked from the
//! interview flow; the core engine stays free of network dependencies.

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{IntakeError, Result};

/// Default Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default model
pub const DEFAULT_MODEL: &str = "qwen2.5:7b-instruct";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Topics the reference generator knows how to prompt for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTopic {
    Medication,
    Aftercare,
}

/// Build the fixed prompt for a reference topic and free-text subject
pub fn build_prompt(topic: ReferenceTopic, subject: &str) -> String {
    match topic {
        ReferenceTopic::Medication => format!(
            "You are assisting a forensic nurse examiner. Give a short, factual \
             summary of the medication '{}': purpose, typical dosing \
             considerations, and common side effects. Plain language, no more \
             than 150 words.",
            subject
        ),
        ReferenceTopic::Aftercare => format!(
            "You are assisting a forensic nurse examiner. Summarize aftercare \
             guidance on the topic '{}' in plain, supportive language a patient \
             can follow at home. No more than 150 words.",
            subject
        ),
    }
}

/// Streaming completion client for reference generation
#[derive(Debug, Clone)]
pub struct ReferenceClient {
    client: Client,
    base_url: String,
    model: String,
}

impl ReferenceClient {
    /// Create a client against a specific Ollama endpoint and model
    pub fn with_config(base_url: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(IntakeError::HttpError)?;

        Ok(ReferenceClient {
            client,
            base_url: base_url.to_string(),
            model: model.to_string(),
        })
    }

    /// Create a client with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_OLLAMA_URL, DEFAULT_MODEL)
    }

    /// Stream the generated reference text as raw byte chunks
    pub async fn generate_stream(
        &self,
        prompt: String,
    ) -> Result<impl futures_util::Stream<Item = Result<Vec<u8>>>> {
        let url = format!("{}/api/generate", self.base_url);

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: true,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| IntakeError::ApiError(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IntakeError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let stream = response.bytes_stream().map(|result| {
            result
                .map(|bytes| bytes.to_vec())
                .map_err(|e| IntakeError::StreamingError(e.to_string()))
        });

        Ok(stream)
    }

    /// Generate a complete reference answer, printing tokens as they arrive
    /// and returning the assembled text.
    pub async fn generate(&self, topic: ReferenceTopic, subject: &str) -> Result<String> {
        let prompt = build_prompt(topic, subject);
        let mut stream = self.generate_stream(prompt).await?;
        let mut assembled = String::new();

        while let Some(chunk) = stream.next().await {
            let bytes = chunk?;
            // Each line is one JSON event with a "response" token
            for line in bytes.split(|b| *b == b'\n') {
                if line.is_empty() {
                    continue;
                }
                if let Ok(event) = serde_json::from_slice::<GenerateEvent>(line) {
                    print!("{}", event.response);
                    assembled.push_str(&event.response);
                    if event.done {
                        println!();
                        return Ok(assembled);
                    }
                }
            }
        }
        println!();

        Ok(assembled)
    }

    /// Check if Ollama is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/version", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// List models available on the endpoint
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| IntakeError::ApiError(format!("Failed to list models: {}", e)))?;

        if !response.status().is_success() {
            return Err(IntakeError::ApiError(
                "Failed to retrieve model list".to_string(),
            ));
        }

        let models: ModelsResponse = response
            .json()
            .await
            .map_err(|e| IntakeError::ApiError(format!("Failed to parse models: {}", e)))?;

        Ok(models.models.into_iter().map(|m| m.name).collect())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Ollama generate request
#[derive(Debug, Clone, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// One streamed generation event
#[derive(Debug, Deserialize)]
struct GenerateEvent {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
}

/// Ollama models list response
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
}
