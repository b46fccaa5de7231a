//! 대화 기록 파싱.
//!
//! 백엔드는 대화 기록을 줄바꿈으로 구분된 하나의 문자열로 반환합니다.
//! 빈 줄을 제거한 뒤 짝수 번째 줄은 사용자, 홀수 번째 줄은 어시스턴트의
//! 메시지로 취급합니다.

use crate::types::{ChatMessage, Speaker};

/// 대화 기록 문자열을 메시지 목록으로 변환합니다.
pub fn parse_transcript(history: &str) -> Vec<ChatMessage> {
    history
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| ChatMessage {
            speaker: if index % 2 == 0 {
                Speaker::User
            } else {
                Speaker::Assistant
            },
            text: line.to_string(),
        })
        .collect()
}

/// 메시지 목록을 사람이 읽을 수 있는 형식으로 변환합니다.
pub fn render_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.speaker.display_name(), m.text))
        .collect::<Vec<_>>()
        .join("\n")
}
