//! 데이터 모듈 오류 타입.

use perfboard_core::DashboardError;
use thiserror::Error;

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 파일 입출력 오류
    #[error("I/O error ({path}): {source}")]
    Io {
        /// 대상 경로
        path: String,
        /// 원인
        #[source]
        source: std::io::Error,
    },

    /// 문서 파싱 오류
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 잘못된 데이터
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl DataError {
    /// 경로 정보가 포함된 입출력 오류를 생성합니다.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::ParseError(err.to_string())
    }
}

impl From<DataError> for DashboardError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::InvalidData(msg) => DashboardError::InvalidInput(msg),
            DataError::ParseError(msg) => DashboardError::Serialization(msg),
            other => DashboardError::Data(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_dashboard_error() {
        let err: DashboardError = DataError::InvalidData("empty".to_string()).into();
        assert!(err.is_input_error());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DashboardError = DataError::io("data/spx.json", io).into();
        assert!(matches!(err, DashboardError::Data(msg) if msg.contains("data/spx.json")));
    }
}
