//! 정렬/요약 계산 정책.
//!
//! 투자금이 0일 때의 수익률, 주말 날짜 처리처럼 수학적으로 정해지지 않는
//! 부분은 정책으로 분리하여 설정에서 선택합니다.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// 투자금이 0 이하일 때의 수익률 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroInvestmentPolicy {
    /// 수익률 0%로 간주 (차트에 평평한 점이 찍힘)
    #[default]
    Zero,
    /// 정의되지 않음 (차트의 빈 구간, 요약은 "N/A")
    Undefined,
}

impl ZeroInvestmentPolicy {
    /// 투자금이 0 이하일 때 사용할 수익률 비율.
    pub fn fallback(self) -> Option<f64> {
        match self {
            Self::Zero => Some(0.0),
            Self::Undefined => None,
        }
    }
}

impl std::str::FromStr for ZeroInvestmentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "undefined" | "none" => Ok(Self::Undefined),
            _ => Err(format!("Unknown zero-investment policy: {}", s)),
        }
    }
}

/// 주말 날짜 처리 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendPolicy {
    /// 해석된 날짜를 그대로 사용
    #[default]
    Keep,
    /// 토요일/일요일을 직전 금요일로 이동
    PreviousFriday,
}

impl WeekendPolicy {
    /// 정책을 날짜에 적용합니다.
    pub fn apply(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Keep => date,
            Self::PreviousFriday => match date.weekday() {
                Weekday::Sat => date - Duration::days(1),
                Weekday::Sun => date - Duration::days(2),
                _ => date,
            },
        }
    }
}

impl std::str::FromStr for WeekendPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "keep" => Ok(Self::Keep),
            "previous_friday" | "friday" => Ok(Self::PreviousFriday),
            _ => Err(format!("Unknown weekend policy: {}", s)),
        }
    }
}
