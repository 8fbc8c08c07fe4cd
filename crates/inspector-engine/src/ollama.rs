use std::time::Duration;

use async_trait::async_trait;
use inspector_core::format::truncate;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, TextGenerator};

#[derive(Debug, Clone)]
pub struct OllamaClient {
    host: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaClient {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(host: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Http(e.to_string()))?;

        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Single-turn, non-streaming chat completion
    pub async fn chat(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.host);

        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| EngineError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(EngineError::Ollama(format!(
                "Chat failed: {} - {}",
                status, body
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| EngineError::Http(e.to_string()))?;

        let chat_resp: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            EngineError::Ollama(format!(
                "Failed to parse response: {} - Body: {}",
                e,
                truncate(&body, 500)
            ))
        })?;

        Ok(chat_resp.message.content)
    }

    pub async fn embeddings(&self, model: &str, inputs: &[&str]) -> Result<Vec<Vec<f32>>> {
        let url = format!("{}/api/embed", self.host);

        let resp = self
            .client
            .post(&url)
            .json(&EmbedRequest {
                model,
                input: inputs,
            })
            .send()
            .await
            .map_err(|e| EngineError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(EngineError::Embedding(format!(
                "Embed failed: {}",
                resp.status()
            )));
        }

        let parsed: EmbedResponse = resp
            .json()
            .await
            .map_err(|e| EngineError::Embedding(e.to_string()))?;

        if parsed.embeddings.len() != inputs.len() {
            return Err(EngineError::Embedding(format!(
                "Expected {} embeddings, got {}",
                inputs.len(),
                parsed.embeddings.len()
            )));
        }

        Ok(parsed.embeddings)
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        tracing::info!("Generating with model: {}", model);
        self.chat(model, prompt)
            .await
            .map_err(|e| EngineError::Generation {
                model: model.to_string(),
                message: e.to_string(),
            })
    }

    async fn embed(&self, model: &str, inputs: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.embeddings(model, inputs).await
    }
}
