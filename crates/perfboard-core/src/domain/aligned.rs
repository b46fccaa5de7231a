//! 정렬된 시계열 데이터 포인트.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 두 시계열의 합집합 날짜 하나에 대한 데이터 포인트.
///
/// 값이 없는 필드는 0이 아니라 "해당 날짜의 데이터 없음"을 뜻하며,
/// 직렬화 시 필드 자체가 생략됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedPoint {
    /// 정규화된 날짜
    pub date: NaiveDate,
    /// 포트폴리오 누적 수익률 (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_value: Option<f64>,
    /// 벤치마크 변화율 (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark_value: Option<f64>,
}

impl AlignedPoint {
    /// 값이 없는 데이터 포인트를 생성합니다.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            portfolio_value: None,
            benchmark_value: None,
        }
    }

    /// 두 값이 모두 있는지 확인합니다.
    pub fn is_complete(&self) -> bool {
        self.portfolio_value.is_some() && self.benchmark_value.is_some()
    }

    /// 포트폴리오 수익률과 벤치마크의 차이 (%p).
    pub fn spread(&self) -> Option<f64> {
        Some(self.portfolio_value? - self.benchmark_value?)
    }
}
