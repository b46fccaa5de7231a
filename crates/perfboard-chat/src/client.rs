//! 채팅 백엔드 HTTP 클라이언트.

use async_trait::async_trait;
use perfboard_core::ChatConfig;
use tracing::{debug, error, warn};

use crate::types::{ChatBackend, ChatError, ChatReply, ChatRequest, ChatResult, HistoryResponse};

/// reqwest 기반 채팅 클라이언트.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    /// 설정에서 클라이언트를 생성합니다.
    pub fn new(config: &ChatConfig) -> Self {
        Self::with_base_url(&config.base_url)
    }

    /// 기본 주소를 지정하여 클라이언트를 생성합니다.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// 백엔드 기본 주소.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// 성공 응답의 본문을 읽습니다. 실패 상태는 에러로 변환합니다.
    async fn read_body(response: reqwest::Response, endpoint: &str) -> ChatResult<String> {
        let status = response.status();
        let body = response.text().await.map_err(ChatError::NetworkError)?;

        if status.is_success() {
            return Ok(body);
        }

        if status.as_u16() == 429 {
            warn!(endpoint, "Chat backend rate limited");
        } else {
            error!(endpoint, status = %status, body = %body, "Chat backend request failed");
        }
        Err(ChatError::HttpStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_history(&self) -> ChatResult<String> {
        let url = self.endpoint("history");
        debug!(url = %url, "Fetching chat history");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ChatError::NetworkError)?;

        let body = Self::read_body(response, "history").await?;
        let history: HistoryResponse = serde_json::from_str(&body)?;
        Ok(history.history)
    }

    async fn send(&self, message: &str) -> ChatResult<String> {
        let url = self.endpoint("chat");
        debug!(url = %url, length = message.len(), "Sending chat message");

        let request = ChatRequest {
            message: message.to_string(),
        };
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(ChatError::NetworkError)?;

        let body = Self::read_body(response, "chat").await?;
        let reply: ChatReply = serde_json::from_str(&body)?;
        Ok(reply.response)
    }
}
