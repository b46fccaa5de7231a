//! 성과 대시보드 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 요약 카드와 정렬된 시계열 출력 (`report`)
//! - 정렬된 시계열 내보내기 (`export`)
//! - 채팅 백엔드 조회/전송 (`chat`)

pub mod commands;
