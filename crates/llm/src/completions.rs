//! HTTP client for the completions endpoint.

use crate::{CompletionError, Config, Request, Response};
use ncore::Exchange;
use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
};

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Built for unauthenticated local endpoints (LM Studio, Ollama and
/// friends); no authorization header is ever attached.
#[derive(Debug, Clone)]
pub struct Completions {
    /// The HTTP client
    client: Client,

    /// The completions endpoint URL
    endpoint: String,

    /// The request headers
    headers: HeaderMap,
}

impl Completions {
    /// Create a new completions client for the given endpoint.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            client,
            endpoint: endpoint.into(),
            headers,
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The headers attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// POST the history to the endpoint and return the generated text.
    ///
    /// One attempt, non-streamed, no retry. The transport's default
    /// timeout is the only one in play.
    pub async fn complete(
        &self,
        config: &Config,
        history: &[Exchange],
    ) -> Result<String, CompletionError> {
        let body = Request::from_history(config, history);
        tracing::debug!(
            "request: {}",
            serde_json::to_string(&body).unwrap_or_default()
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::debug!("response: {text}");
        let response: Response = serde_json::from_str(&text)?;
        response.text().ok_or(CompletionError::Empty)
    }
}
