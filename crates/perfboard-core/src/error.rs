//! 대시보드 엔진의 에러 타입.
//!
//! 정렬기와 요약 엔진은 순수 계산이므로 구조적 문제(잘못된 날짜 등)를
//! 명시적인 에러 variant로 호출자에게 전달합니다.

use thiserror::Error;

use crate::domain::SeriesKind;

/// 대시보드 핵심 에러.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// 날짜 키를 달력 날짜로 해석할 수 없음
    #[error("잘못된 날짜 키 ({series}): {key:?}")]
    InvalidDate {
        /// 키가 속한 시계열
        series: SeriesKind,
        /// 원본 날짜 키
        key: String,
    },

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터 에러
    #[error("데이터 에러: {0}")]
    Data(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

/// 대시보드 작업을 위한 Result 타입.
pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    /// 날짜 에러를 생성합니다.
    pub fn invalid_date(series: SeriesKind, key: impl Into<String>) -> Self {
        DashboardError::InvalidDate {
            series,
            key: key.into(),
        }
    }

    /// 입력 데이터 자체의 문제인지 확인합니다.
    ///
    /// 입력 데이터 문제는 같은 입력으로 다시 시도해도 해결되지 않습니다.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DashboardError::InvalidDate { .. } | DashboardError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        DashboardError::Config(err.to_string())
    }
}
