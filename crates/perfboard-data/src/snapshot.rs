//! 스냅샷 문서 형식.
//!
//! 포트폴리오 문서는 `portfolio_statistics` 배열을 가진 객체이고,
//! 벤치마크 문서는 `{ "Date", "Percent Change" }` 객체의 배열입니다.

use perfboard_core::{BenchmarkRecord, PortfolioRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// 포트폴리오 스냅샷 문서.
///
/// `daily_data` 등 알 수 없는 필드는 무시합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    /// 날짜별 계좌 상태
    pub portfolio_statistics: Vec<PortfolioRecord>,
    /// 최초 투자일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_investment_date: Option<String>,
    /// 마지막 누적 투자금
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_investment: Option<f64>,
}

impl PortfolioDocument {
    /// 레코드만으로 문서를 생성합니다.
    pub fn from_records(records: Vec<PortfolioRecord>) -> Self {
        Self {
            portfolio_statistics: records,
            ..Default::default()
        }
    }

    /// 날짜별 레코드.
    pub fn records(&self) -> &[PortfolioRecord] {
        &self.portfolio_statistics
    }
}

/// 포트폴리오 문서를 파싱합니다.
pub fn parse_portfolio_document(bytes: &[u8]) -> Result<PortfolioDocument> {
    let document: PortfolioDocument = serde_json::from_slice(bytes)?;
    debug!(
        records = document.portfolio_statistics.len(),
        "Parsed portfolio document"
    );
    Ok(document)
}

/// 벤치마크 문서를 파싱합니다.
pub fn parse_benchmark_document(bytes: &[u8]) -> Result<Vec<BenchmarkRecord>> {
    let records: Vec<BenchmarkRecord> = serde_json::from_slice(bytes)?;
    debug!(records = records.len(), "Parsed benchmark document");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;

    #[test]
    fn test_parse_portfolio_document() {
        let json = br#"{
            "daily_data": [{"date": "2025-03-03", "trades": []}],
            "portfolio_statistics": [
                {"date": "2025-03-03", "investment": 3.2, "today_profit": 0.1, "total_profit": 0.1},
                {"date": "2025-03-04", "investment": 5.0, "today_profit": -0.3, "total_profit": -0.2}
            ],
            "initial_investment_date": "2025-03-03",
            "total_investment": 5.0
        }"#;

        let document = parse_portfolio_document(json).unwrap();
        assert_eq!(document.records().len(), 2);
        assert_eq!(document.records()[1].total_profit, -0.2);
        assert_eq!(document.initial_investment_date.as_deref(), Some("2025-03-03"));
        assert_eq!(document.total_investment, Some(5.0));
    }

    #[test]
    fn test_portfolio_document_requires_statistics() {
        let err = parse_portfolio_document(br#"{"daily_data": []}"#).unwrap_err();
        assert!(matches!(err, DataError::ParseError(msg) if msg.contains("portfolio_statistics")));
    }

    #[test]
    fn test_parse_benchmark_document() {
        let json = br#"[
            {"Date": "2025-02-28", "Percent Change": 0.0},
            {"Date": "2025-03-03", "Percent Change": -1.76}
        ]"#;

        let records = parse_benchmark_document(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].date, "2025-03-03");
        assert_eq!(records[1].percent_change, -1.76);
    }

    #[test]
    fn test_benchmark_document_must_be_array() {
        assert!(parse_benchmark_document(br#"{"Date": "2025-02-28"}"#).is_err());
    }
}
