use crate::{
    config::Config,
    errors::{ChatError, ChatResult},
    logging::{log_api_call, CallLog},
};
use chrono::Utc;
use reqwest::{header::ACCEPT, header::CONTENT_TYPE, Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::time::Instant;
use uuid::Uuid;

pub const SESSION_HEADER: &str = "X-Session-ID";

/// Body of the outbound chat call.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Error body the backend sends with a failing status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: Option<String>,
}

/// Something that can carry one chat message to the backend and bring back
/// the reply text.
///
/// `Ok(None)` means the call succeeded but the reply had no usable
/// `response` field.
pub trait ChatTransport: Send + Sync {
    fn send_message(
        &self,
        message: &str,
    ) -> impl Future<Output = ChatResult<Option<String>>> + Send;
}

/// Pulls the reply text out of a decoded success body. Any shape without a
/// non-empty `response` string counts as "no response".
pub fn extract_response(body: &Value) -> Option<String> {
    body.get("response")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// HTTP transport for the chat backend.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    chat_url: String,
    health_url: String,
    session_id: String,
}

impl ChatClient {
    pub fn new(config: &Config) -> ChatResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| ChatError::config_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            chat_url: config.chat_url(),
            health_url: config.health_url(),
            session_id: Uuid::new_v4().to_string(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Asks the backend health endpoint and returns its reported status.
    pub async fn health(&self) -> ChatResult<String> {
        let response = self
            .http
            .get(&self.health_url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::call_failed(format!(
                "health check returned {}",
                status
            )));
        }

        let body: HealthResponse = response
            .json()
            .await
            .map_err(|e| ChatError::call_failed(format!("Failed to parse health response: {}", e)))?;

        Ok(body.status.unwrap_or_else(|| "unknown".to_string()))
    }

    async fn post_message(&self, message: &str) -> (Option<u16>, ChatResult<Option<String>>) {
        let response = match self
            .http
            .post(&self.chat_url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(SESSION_HEADER, &self.session_id)
            .json(&ChatRequest { message })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return (None, Err(e.into())),
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&error_text)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or(error_text);
            return (
                Some(status.as_u16()),
                Err(ChatError::call_failed(format!(
                    "backend returned {}: {}",
                    status, detail
                ))),
            );
        }

        let body: ChatResult<Value> = response
            .json()
            .await
            .map_err(|e| ChatError::call_failed(format!("Failed to parse chat response: {}", e)));

        (Some(status.as_u16()), body.map(|b| extract_response(&b)))
    }
}

impl ChatTransport for ChatClient {
    async fn send_message(&self, message: &str) -> ChatResult<Option<String>> {
        let started = Instant::now();
        let (status, outcome) = self.post_message(message).await;

        log_api_call(&CallLog {
            timestamp: Utc::now(),
            endpoint: self.chat_url.clone(),
            request_summary: format!("message of {} chars", message.chars().count()),
            response_status: status,
            response_time_ms: started.elapsed().as_millis(),
        });

        outcome
    }
}
