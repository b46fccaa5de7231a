//! 최신 관측값 기준 요약 통계.
//!
//! 대시보드 상단의 네 가지 카드(전체 수익률, 현재 투자금, 누적 손익,
//! 벤치마크 성과)에 표시할 값을 계산합니다. 개별 수치가 유효하지 않으면
//! 해당 수치만 `"N/A"`가 되며, 계산 전체가 중단되지는 않습니다.

use chrono::NaiveDate;
use perfboard_core::{
    fixed, parse_date_key, percent_string, round_f64, series_span, AnalyticsConfig,
    BenchmarkRecord, CurrencyFormat, DatedRecord, PortfolioRecord, SeriesKind,
    ZeroInvestmentPolicy, DISPLAY_DECIMALS, NOT_AVAILABLE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 카드 표시 추세.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// 0 이상
    Gain,
    /// 0 미만
    Loss,
    /// 값 없음
    Unknown,
}

impl Trend {
    /// 표시 값의 추세를 판단합니다 (0은 이익으로 취급).
    pub fn of(value: Option<f64>) -> Self {
        match value {
            Some(v) if v >= 0.0 => Self::Gain,
            Some(_) => Self::Loss,
            None => Self::Unknown,
        }
    }
}

/// 요약 통계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// 요약 기준 날짜 (날짜 키를 파싱할 수 없으면 `None`)
    pub as_of: Option<NaiveDate>,
    /// 전체 수익률 (예: "5.00")
    pub overall_change_percent: String,
    /// 현재 투자금 (예: "$1,000.00")
    pub current_investment: String,
    /// 누적 손익 (예: "$50.00")
    pub total_profit: String,
    /// 벤치마크 성과 (예: "1.20%")
    pub benchmark_performance: String,
    /// 반올림된 전체 수익률 (%)
    pub overall_change: Option<f64>,
    /// 반올림된 벤치마크 변화율 (%)
    pub benchmark_change: Option<f64>,
    /// 전체 수익률 카드 추세
    pub portfolio_trend: Trend,
    /// 벤치마크 카드 추세
    pub benchmark_trend: Trend,
}

/// 요약 통계 계산기.
#[derive(Debug, Clone, Default)]
pub struct SummaryEngine {
    zero_investment: ZeroInvestmentPolicy,
    currency: CurrencyFormat,
}

impl SummaryEngine {
    /// 새 요약 계산기를 생성합니다.
    pub fn new(zero_investment: ZeroInvestmentPolicy, currency: CurrencyFormat) -> Self {
        Self {
            zero_investment,
            currency,
        }
    }

    /// 설정에서 요약 계산기를 생성합니다.
    pub fn from_config(analytics: &AnalyticsConfig, currency: &CurrencyFormat) -> Self {
        Self::new(analytics.zero_investment, currency.clone())
    }

    /// 통화 형식.
    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// 요약 통계를 계산합니다.
    ///
    /// 포트폴리오가 비어 있으면 `None`을 반환합니다.
    pub fn summarize(
        &self,
        portfolio: &[PortfolioRecord],
        benchmark: &[BenchmarkRecord],
    ) -> Option<SummaryStats> {
        let _span = series_span!("summarize", portfolio.len(), benchmark.len()).entered();

        let latest = latest_record(portfolio, SeriesKind::Portfolio)?;

        let overall = latest.percent_return(self.zero_investment);
        let overall_change = overall.and_then(|v| round_f64(v, DISPLAY_DECIMALS));
        let overall_change_percent = overall
            .and_then(|v| fixed(v, DISPLAY_DECIMALS))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let benchmark_latest =
            latest_record(benchmark, SeriesKind::Benchmark).and_then(|r| r.percent_value());
        let benchmark_change = benchmark_latest.and_then(|v| round_f64(v, DISPLAY_DECIMALS));
        let benchmark_performance = benchmark_latest
            .map(percent_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let stats = SummaryStats {
            as_of: parse_date_key(&latest.date),
            overall_change_percent,
            current_investment: self.currency.format(latest.investment),
            total_profit: self.currency.format(latest.total_profit),
            benchmark_performance,
            overall_change,
            benchmark_change,
            portfolio_trend: Trend::of(overall_change),
            benchmark_trend: Trend::of(benchmark_change),
        };

        debug!(
            as_of = ?stats.as_of,
            overall = %stats.overall_change_percent,
            benchmark = %stats.benchmark_performance,
            "Summary computed"
        );

        Some(stats)
    }
}

/// 기본 설정으로 요약 통계를 계산합니다.
pub fn summarize(
    portfolio: &[PortfolioRecord],
    benchmark: &[BenchmarkRecord],
) -> Option<SummaryStats> {
    SummaryEngine::default().summarize(portfolio, benchmark)
}

/// 시계열의 최신 레코드를 찾습니다.
///
/// 입력 순서를 신뢰하여 마지막 레코드를 사용합니다. 단, 모든 날짜 키가
/// 파싱되는데 시간순이 아니라면 가장 늦은 날짜의 레코드(같은 날짜면 뒤쪽)를
/// 사용합니다.
fn latest_record<R: DatedRecord>(records: &[R], series: SeriesKind) -> Option<&R> {
    let last = records.last()?;

    let dates: Option<Vec<NaiveDate>> = records
        .iter()
        .map(|r| parse_date_key(r.date_key()))
        .collect();

    let Some(dates) = dates else {
        return Some(last);
    };
    if dates.windows(2).all(|w| w[0] <= w[1]) {
        return Some(last);
    }

    // max_by는 같은 값이면 마지막 요소를 반환
    let (index, _) = dates.iter().enumerate().max_by(|a, b| a.1.cmp(b.1))?;
    let chosen = records.get(index)?;
    warn!(
        series = %series,
        last_key = last.date_key(),
        chosen_key = chosen.date_key(),
        "Series is not chronologically sorted, using latest date"
    );
    Some(chosen)
}
