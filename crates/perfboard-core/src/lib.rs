//! # Perfboard Core
//!
//! 성과 대시보드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 대시보드 전반에서 사용되는 기본 타입을 제공합니다:
//! - 포트폴리오/벤치마크 레코드 및 정렬된 데이터 포인트
//! - 날짜 키 정규화
//! - 제로 투자금/주말 처리 정책
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
