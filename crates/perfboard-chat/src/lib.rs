//! 채팅 백엔드 클라이언트.
//!
//! 대시보드와 같은 백엔드를 공유하는 채팅 서비스와 통신합니다.
//! - `GET /history`: 줄바꿈으로 구분된 대화 기록
//! - `POST /chat`: 메시지 전송 및 응답 수신
//!
//! 재시도, 인증, 타임아웃은 설정하지 않습니다. 실패는 로그로 남기고
//! 세션의 대화 기록은 갱신하지 않습니다.

pub mod client;
pub mod session;
pub mod transcript;
pub mod types;

pub use client::ChatClient;
pub use session::ChatSession;
pub use transcript::{parse_transcript, render_transcript};
pub use types::*;
