//! 채팅 세션 상태.
//!
//! 메모리에만 존재하는 대화 기록 하나를 관리합니다. 백엔드 호출이 실패해도
//! 에러를 전파하지 않고 로그만 남기며, 기록은 갱신되지 않습니다.

use tracing::{error, info};

use crate::transcript::parse_transcript;
use crate::types::{ChatBackend, ChatError, ChatMessage, ChatResult};

/// 채팅 세션.
pub struct ChatSession<B: ChatBackend> {
    backend: B,
    messages: Vec<ChatMessage>,
}

impl<B: ChatBackend> ChatSession<B> {
    /// 빈 세션을 생성합니다.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            messages: Vec::new(),
        }
    }

    /// 현재 대화 기록.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// 백엔드.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 백엔드에서 대화 기록을 불러와 현재 기록을 대체합니다.
    ///
    /// 실패하면 로그를 남기고 기존 기록을 유지하며 `false`를 반환합니다.
    pub async fn load_history(&mut self) -> bool {
        match self.backend.fetch_history().await {
            Ok(history) => {
                self.messages = parse_transcript(&history);
                info!(
                    backend = self.backend.name(),
                    messages = self.messages.len(),
                    "Chat history loaded"
                );
                true
            }
            Err(e) => {
                error!(backend = self.backend.name(), error = %e, "Error fetching history");
                false
            }
        }
    }

    /// 메시지를 전송합니다.
    ///
    /// 공백뿐인 메시지는 무시합니다. 사용자 메시지는 전송 전에 기록에
    /// 추가되고, 응답을 받으면 어시스턴트 메시지가 이어서 추가됩니다.
    /// 전송에 실패하면 로그를 남기고 응답 없이 `None`을 반환합니다.
    pub async fn send_message(&mut self, text: &str) -> Option<&ChatMessage> {
        match self.try_send(text).await {
            Ok(()) => self.messages.last(),
            Err(ChatError::EmptyMessage) => None,
            Err(e) => {
                error!(backend = self.backend.name(), error = %e, "Error sending message");
                None
            }
        }
    }

    /// 메시지를 전송하고 에러를 그대로 반환합니다.
    pub async fn try_send(&mut self, text: &str) -> ChatResult<()> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.messages.push(ChatMessage::user(text));
        let reply = self.backend.send(text).await?;
        self.messages.push(ChatMessage::assistant(reply));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Speaker;
    use async_trait::async_trait;

    /// 고정 응답을 반환하는 테스트용 백엔드
    struct EchoBackend {
        history: String,
        fail: bool,
    }

    #[async_trait]
    impl ChatBackend for EchoBackend {
        fn name(&self) -> &str {
            "echo"
        }

        async fn fetch_history(&self) -> ChatResult<String> {
            if self.fail {
                return Err(ChatError::HttpStatus {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(self.history.clone())
        }

        async fn send(&self, message: &str) -> ChatResult<String> {
            if self.fail {
                return Err(ChatError::HttpStatus {
                    status: 503,
                    body: String::new(),
                });
            }
            Ok(format!("echo: {message}"))
        }
    }

    fn session(fail: bool) -> ChatSession<EchoBackend> {
        ChatSession::new(EchoBackend {
            history: "q1\na1\n\nq2\na2".to_string(),
            fail,
        })
    }

    #[tokio::test]
    async fn test_load_history_replaces_messages() {
        let mut session = session(false);
        assert!(session.load_history().await);

        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.messages()[2], ChatMessage::user("q2"));
    }

    #[tokio::test]
    async fn test_send_appends_user_then_reply() {
        let mut session = session(false);

        let reply = session.send_message("hello").await.cloned();
        assert_eq!(reply, Some(ChatMessage::assistant("echo: hello")));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].speaker, Speaker::User);
    }

    #[tokio::test]
    async fn test_whitespace_message_is_ignored() {
        let mut session = session(false);

        assert!(session.send_message("   \t").await.is_none());
        assert!(session.messages().is_empty());
        assert!(matches!(
            session.try_send("").await,
            Err(ChatError::EmptyMessage)
        ));
    }

    #[tokio::test]
    async fn test_failures_do_not_add_replies() {
        let mut session = session(true);

        assert!(!session.load_history().await);
        assert!(session.messages().is_empty());

        assert!(session.send_message("hello").await.is_none());
        assert_eq!(session.messages(), &[ChatMessage::user("hello")]);
    }
}
