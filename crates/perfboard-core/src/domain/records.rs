//! 입력 시계열 레코드.
//!
//! 포트폴리오 원장과 벤치마크 지수는 서로 독립적인 소스에서 오며,
//! 스냅샷 문서의 필드 이름을 그대로 직렬화 이름으로 사용합니다.

use serde::{Deserialize, Deserializer, Serialize};

use super::policy::ZeroInvestmentPolicy;

/// 시계열 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// 포트폴리오 원장
    Portfolio,
    /// 벤치마크 지수
    Benchmark,
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Portfolio => write!(f, "portfolio"),
            Self::Benchmark => write!(f, "benchmark"),
        }
    }
}

/// 날짜 키를 가진 레코드 trait.
///
/// 정렬기와 요약 엔진이 두 시계열을 같은 방식으로 다루기 위해 사용합니다.
pub trait DatedRecord {
    /// 원본 날짜 키
    fn date_key(&self) -> &str;
}

/// 특정 날짜의 포트폴리오 계좌 상태.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    /// 날짜 키
    pub date: String,
    /// 누적 투자 원금
    #[serde(default = "nan", deserialize_with = "lenient_f64")]
    pub investment: f64,
    /// 당일 손익
    #[serde(rename = "today_profit", default = "nan", deserialize_with = "lenient_f64")]
    pub daily_profit: f64,
    /// 누적 손익
    #[serde(default = "nan", deserialize_with = "lenient_f64")]
    pub total_profit: f64,
}

impl PortfolioRecord {
    /// 새 포트폴리오 레코드를 생성합니다.
    pub fn new(
        date: impl Into<String>,
        investment: f64,
        daily_profit: f64,
        total_profit: f64,
    ) -> Self {
        Self {
            date: date.into(),
            investment,
            daily_profit,
            total_profit,
        }
    }

    /// 누적 수익률 (비율, 0.05 = 5%).
    ///
    /// 투자금이 양수일 때만 `total_profit / investment`로 정의되며, 그 외에는
    /// 정책에 따릅니다. 투자금이나 누적 손익이 유한하지 않으면 `None`입니다.
    pub fn return_fraction(&self, policy: ZeroInvestmentPolicy) -> Option<f64> {
        if !self.investment.is_finite() || !self.total_profit.is_finite() {
            return None;
        }
        if self.investment > 0.0 {
            Some(self.total_profit / self.investment)
        } else {
            policy.fallback()
        }
    }

    /// 누적 수익률 (퍼센트 단위, 5.0 = 5%).
    pub fn percent_return(&self, policy: ZeroInvestmentPolicy) -> Option<f64> {
        self.return_fraction(policy).map(|fraction| fraction * 100.0)
    }
}

impl DatedRecord for PortfolioRecord {
    fn date_key(&self) -> &str {
        &self.date
    }
}

/// 특정 날짜의 벤치마크 관측값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// 날짜 키
    #[serde(rename = "Date")]
    pub date: String,
    /// 변화율 (이미 퍼센트 단위)
    #[serde(
        rename = "Percent Change",
        default = "nan",
        deserialize_with = "lenient_f64"
    )]
    pub percent_change: f64,
}

impl BenchmarkRecord {
    /// 새 벤치마크 레코드를 생성합니다.
    pub fn new(date: impl Into<String>, percent_change: f64) -> Self {
        Self {
            date: date.into(),
            percent_change,
        }
    }

    /// 유한한 변화율만 반환합니다.
    pub fn percent_value(&self) -> Option<f64> {
        self.percent_change
            .is_finite()
            .then_some(self.percent_change)
    }
}

impl DatedRecord for BenchmarkRecord {
    fn date_key(&self) -> &str {
        &self.date
    }
}

fn nan() -> f64 {
    f64::NAN
}

/// 숫자 필드를 관대하게 해석합니다.
///
/// 숫자와 숫자 문자열은 그대로, `null`이나 그 외 값은 NaN이 됩니다.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Number(n) => n,
        Lenient::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        Lenient::Other(_) => f64::NAN,
    })
}
