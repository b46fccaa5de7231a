//! 채팅 타입 및 trait 정의.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 메시지 화자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// 사용자
    User,
    /// 어시스턴트
    Assistant,
}

impl Speaker {
    /// 화면 표시 이름.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

/// 대화 메시지 하나.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 화자
    pub speaker: Speaker,
    /// 본문
    pub text: String,
}

impl ChatMessage {
    /// 사용자 메시지를 생성합니다.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// 어시스턴트 메시지를 생성합니다.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// `POST /chat` 요청 본문.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /chat` 응답 본문.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// `GET /history` 응답 본문.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: String,
}

/// 채팅 작업 결과 타입.
pub type ChatResult<T> = Result<T, ChatError>;

/// 채팅 에러.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("네트워크 에러: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("빈 메시지는 전송할 수 없습니다")]
    EmptyMessage,

    #[error("직렬화 에러: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ChatError {
    /// 재시도하면 성공할 수 있는 에러인지 확인합니다.
    ///
    /// 클라이언트는 재시도하지 않으며, 호출자가 판단할 때 사용합니다.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::EmptyMessage | Self::SerializationError(_) => false,
        }
    }
}

/// 채팅 백엔드 trait.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// 백엔드 이름.
    fn name(&self) -> &str;

    /// 원본 대화 기록 문자열을 조회합니다.
    async fn fetch_history(&self) -> ChatResult<String>;

    /// 메시지를 전송하고 응답 본문을 반환합니다.
    async fn send(&self, message: &str) -> ChatResult<String>;
}
