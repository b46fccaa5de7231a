//! 가격 데이터로부터 벤치마크 시계열 생성.
//!
//! 첫 거래일 시가를 기준으로 각 거래일 종가의 변화율(%)을 계산합니다.

use perfboard_core::BenchmarkRecord;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{DataError, Result};

/// 일별 가격 바.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// 날짜 키
    #[serde(alias = "Date")]
    pub date: String,
    /// 시가
    #[serde(alias = "Open")]
    pub open: f64,
    /// 종가
    #[serde(alias = "Close")]
    pub close: f64,
}

impl PriceBar {
    pub fn new(date: impl Into<String>, open: f64, close: f64) -> Self {
        Self {
            date: date.into(),
            open,
            close,
        }
    }
}

/// 시간순으로 정렬된 가격 바를 벤치마크 레코드로 변환합니다.
///
/// `percent_change = (close - first_open) / first_open × 100`
///
/// 종가가 유한하지 않은 바는 건너뜁니다.
pub fn benchmark_from_price_bars(bars: &[PriceBar]) -> Result<Vec<BenchmarkRecord>> {
    let first = bars
        .first()
        .ok_or_else(|| DataError::InvalidData("no price bars".to_string()))?;

    let base = first.open;
    if !base.is_finite() || base <= 0.0 {
        return Err(DataError::InvalidData(format!(
            "first open price must be positive: {}",
            base
        )));
    }

    let records: Vec<BenchmarkRecord> = bars
        .iter()
        .filter(|bar| bar.close.is_finite())
        .map(|bar| BenchmarkRecord::new(bar.date.clone(), (bar.close - base) / base * 100.0))
        .collect();

    let skipped = bars.len() - records.len();
    if skipped > 0 {
        warn!(skipped, "Skipped price bars without a close price");
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change_from_first_open() {
        let bars = vec![
            PriceBar::new("2025-02-28", 100.0, 101.0),
            PriceBar::new("2025-03-03", 101.0, 98.0),
            PriceBar::new("2025-03-04", 98.0, 102.5),
        ];

        let records = benchmark_from_price_bars(&bars).unwrap();
        let changes: Vec<f64> = records.iter().map(|r| r.percent_change).collect();

        assert_eq!(records.len(), 3);
        assert!((changes[0] - 1.0).abs() < 1e-9);
        assert!((changes[1] + 2.0).abs() < 1e-9);
        assert!((changes[2] - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_bars_without_close_are_skipped() {
        let bars = vec![
            PriceBar::new("2025-02-28", 200.0, 200.0),
            PriceBar::new("2025-03-03", 200.0, f64::NAN),
            PriceBar::new("2025-03-04", 200.0, 210.0),
        ];

        let records = benchmark_from_price_bars(&bars).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].date, "2025-03-04");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            benchmark_from_price_bars(&[]),
            Err(DataError::InvalidData(_))
        ));
        assert!(benchmark_from_price_bars(&[PriceBar::new("2025-02-28", 0.0, 1.0)]).is_err());
    }

    #[test]
    fn test_price_bar_column_aliases() {
        let bar: PriceBar =
            serde_json::from_str(r#"{"Date":"2025-02-28","Open":5861.5,"Close":5954.5}"#).unwrap();
        assert_eq!(bar.open, 5861.5);
        assert_eq!(bar.close, 5954.5);
    }
}
