//! 포트폴리오/벤치마크 시계열 정렬.
//!
//! 서로 다른 소스에서 온 두 시계열을 날짜 기준으로 합쳐, 공통 날짜축 위의
//! [`AlignedPoint`] 목록을 만듭니다.
//!
//! # 핵심 규칙
//!
//! - 날짜 키는 비교 전에 달력 날짜로 파싱됩니다 (문자열 정렬 없음)
//! - 두 시계열은 필드 단위로 합쳐지며, 한쪽만 있는 날짜도 그대로 남습니다
//! - 파싱할 수 없는 날짜 키가 하나라도 있으면 전체 호출이 실패합니다
//!
//! # 사용 예시
//!
//! ```
//! use perfboard_analytics::alignment::{AlignOptions, SeriesAligner};
//! use perfboard_core::{BenchmarkRecord, PortfolioRecord, WeekendPolicy};
//!
//! let aligner = SeriesAligner::new(AlignOptions {
//!     weekend_policy: WeekendPolicy::PreviousFriday,
//!     ..Default::default()
//! });
//!
//! // 2024-01-06은 토요일
//! let portfolio = vec![PortfolioRecord::new("2024-01-06", 100.0, 1.0, 1.0)];
//! let benchmark = vec![BenchmarkRecord::new("2024-01-05", 0.4)];
//!
//! let points = aligner.align(&portfolio, &benchmark).unwrap();
//! assert_eq!(points.len(), 1);
//! assert!(points[0].is_complete());
//! ```

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use perfboard_core::{
    parse_date_key, series_span, AlignedPoint, AnalyticsConfig, BenchmarkRecord, DashboardError,
    DashboardResult, DatedRecord, PortfolioRecord, SeriesKind, WeekendPolicy,
    ZeroInvestmentPolicy,
};
use tracing::{debug, warn};

/// 정렬 옵션.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignOptions {
    /// 투자금이 0 이하일 때의 수익률 정책
    pub zero_investment: ZeroInvestmentPolicy,
    /// 주말 날짜 처리 정책
    pub weekend_policy: WeekendPolicy,
}

impl From<&AnalyticsConfig> for AlignOptions {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            zero_investment: config.zero_investment,
            weekend_policy: config.weekend_policy,
        }
    }
}

/// 시계열 정렬기.
///
/// 상태를 갖지 않으며, 같은 입력에 대해 항상 같은 결과를 반환합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesAligner {
    options: AlignOptions,
}

impl SeriesAligner {
    /// 새 정렬기를 생성합니다.
    pub fn new(options: AlignOptions) -> Self {
        Self { options }
    }

    /// 정렬 옵션.
    pub fn options(&self) -> AlignOptions {
        self.options
    }

    /// 날짜 키를 정렬에 사용할 달력 날짜로 변환합니다.
    ///
    /// 주말 정책이 적용된 날짜를 반환합니다.
    pub fn normalize_key(&self, series: SeriesKind, key: &str) -> DashboardResult<NaiveDate> {
        parse_date_key(key)
            .map(|date| self.options.weekend_policy.apply(date))
            .ok_or_else(|| DashboardError::invalid_date(series, key))
    }

    /// 두 시계열을 날짜 기준으로 정렬합니다.
    ///
    /// 결과는 날짜 오름차순이며, 길이는 정규화된 고유 날짜 수와 같습니다.
    /// 같은 시계열 안에서 날짜가 겹치면 입력 순서상 나중 레코드가 남습니다.
    ///
    /// # 에러
    ///
    /// 어느 쪽이든 날짜 키를 파싱할 수 없으면 [`DashboardError::InvalidDate`].
    pub fn align(
        &self,
        portfolio: &[PortfolioRecord],
        benchmark: &[BenchmarkRecord],
    ) -> DashboardResult<Vec<AlignedPoint>> {
        let _span = series_span!("align", portfolio.len(), benchmark.len()).entered();

        let mut merged: BTreeMap<NaiveDate, AlignedPoint> = BTreeMap::new();

        let policy = self.options.zero_investment;
        self.merge_series(&mut merged, SeriesKind::Portfolio, portfolio, |point, record| {
            point.portfolio_value = record.percent_return(policy);
        })?;
        self.merge_series(&mut merged, SeriesKind::Benchmark, benchmark, |point, record| {
            point.benchmark_value = record.percent_value();
        })?;

        debug!(points = merged.len(), "Series aligned");
        Ok(merged.into_values().collect())
    }

    fn merge_series<R, F>(
        &self,
        merged: &mut BTreeMap<NaiveDate, AlignedPoint>,
        series: SeriesKind,
        records: &[R],
        mut apply: F,
    ) -> DashboardResult<()>
    where
        R: DatedRecord,
        F: FnMut(&mut AlignedPoint, &R),
    {
        let mut seen = HashSet::with_capacity(records.len());

        for record in records {
            let date = self.normalize_key(series, record.date_key())?;
            if !seen.insert(date) {
                warn!(
                    series = %series,
                    key = record.date_key(),
                    date = %date,
                    "Duplicate date in series, later record wins"
                );
            }

            let point = merged
                .entry(date)
                .or_insert_with(|| AlignedPoint::new(date));
            apply(point, record);
        }

        Ok(())
    }
}

/// 기본 옵션으로 두 시계열을 정렬합니다.
pub fn align(
    portfolio: &[PortfolioRecord],
    benchmark: &[BenchmarkRecord],
) -> DashboardResult<Vec<AlignedPoint>> {
    SeriesAligner::default().align(portfolio, benchmark)
}
