// src/services/content_client.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::{
    config::GENERATION_FORMAT,
    error::GenerationError,
    models::question::{
        BackendErrorBody, GenerateContentRequest, GenerateContentResponse, GeneratedContent,
        GeneratedPayload,
    },
};

/// Source of quiz content for one generation cycle.
///
/// Implementations only return data; applying it to the session is the caller's job.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, text: &str) -> Result<GeneratedContent, GenerationError>;
}

/// Talks to the AI content backend over HTTP.
#[derive(Clone)]
pub struct HttpContentClient {
    client: Client,
    endpoint: Url,
}

impl HttpContentClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self { client, endpoint }
    }
}

#[async_trait]
impl ContentGenerator for HttpContentClient {
    async fn generate(&self, text: &str) -> Result<GeneratedContent, GenerationError> {
        if text.trim().is_empty() {
            return Err(GenerationError::input_required());
        }

        tracing::info!("Requesting content generation ({} chars)", text.chars().count());

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GenerateContentRequest {
                text,
                format: GENERATION_FORMAT,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Content backend unreachable: {:?}", e);
                GenerationError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read content backend response: {:?}", e);
            GenerationError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            // An unparsable error body still yields an error, just without a message.
            let message = serde_json::from_slice::<BackendErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            tracing::warn!(
                "Content backend answered {}: {}",
                status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(GenerationError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Content backend sent an unreadable body: {}", e);
            GenerationError::Malformed(e.to_string())
        })?;

        let content = validate_payload(parsed.data)?;
        tracing::info!(
            "Generated {} questions and {} chars of material",
            content.questions.len(),
            content.material.chars().count()
        );
        Ok(content)
    }
}

/// Gross structural check before anything reaches the session.
///
/// A correct answer missing from its options is tolerated and only logged.
pub fn validate_payload(payload: GeneratedPayload) -> Result<GeneratedContent, GenerationError> {
    if payload.questions.is_empty() {
        return Err(GenerationError::Malformed("no questions".to_string()));
    }
    if payload.material.trim().is_empty() {
        return Err(GenerationError::Malformed("empty material".to_string()));
    }
    for (i, q) in payload.questions.iter().enumerate() {
        if q.options.is_empty() {
            return Err(GenerationError::Malformed(format!(
                "question {} has no options",
                i + 1
            )));
        }
        if !q.options.contains(&q.correct_answer) {
            tracing::warn!(
                "Question {}: correct answer is not among its options",
                i + 1
            );
        }
    }

    Ok(GeneratedContent {
        questions: payload.questions,
        material: payload.material,
    })
}
