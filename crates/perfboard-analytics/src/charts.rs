//! 비교 차트 데이터 구조
//!
//! 포트폴리오 수익률과 벤치마크 변화율을 같은 날짜축 위의 두 라인으로
//! 표현합니다. 각 라인에는 값이 있는 포인트만 들어가므로, 연속된 포인트를
//! 잇는 렌더러는 빈 날짜를 0으로 떨어뜨리지 않고 건너서 연결합니다.

use chrono::{NaiveDate, NaiveTime};
use perfboard_core::{fixed, percent_string, AlignedPoint, NOT_AVAILABLE};
use serde::{Deserialize, Serialize};

/// 기본 포트폴리오 라인 이름
pub const DEFAULT_PORTFOLIO_NAME: &str = "Portfolio";

/// 기본 벤치마크 라인 이름
pub const DEFAULT_BENCHMARK_NAME: &str = "Benchmark";

/// 차트 데이터 포인트
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X축 값 (UTC 자정 타임스탬프, 밀리초)
    pub x: i64,

    /// Y축 값 (%)
    pub y: f64,

    /// 눈금 레이블 (예: "Jan 2")
    pub label: String,
}

impl ChartPoint {
    /// 새로운 차트 포인트를 생성합니다.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            x: date_to_millis(date),
            y: value,
            label: format_tick_date(date),
        }
    }
}

/// 이름이 있는 라인 시리즈
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    /// 범례 이름
    pub name: String,

    /// 값이 있는 포인트 (날짜 오름차순)
    pub points: Vec<ChartPoint>,
}

impl LineSeries {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// 포인트가 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// 포트폴리오 대 벤치마크 비교 차트
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonChart {
    /// 포트폴리오 수익률 라인
    pub portfolio: LineSeries,

    /// 벤치마크 변화율 라인
    pub benchmark: LineSeries,

    /// 공통 날짜축 범위 (첫 날짜, 마지막 날짜)
    pub domain: Option<(NaiveDate, NaiveDate)>,
}

impl ComparisonChart {
    /// 정렬된 시계열에서 기본 이름으로 차트를 생성합니다.
    pub fn from_aligned(points: &[AlignedPoint]) -> Self {
        Self::with_names(points, DEFAULT_PORTFOLIO_NAME, DEFAULT_BENCHMARK_NAME)
    }

    /// 라인 이름을 지정하여 차트를 생성합니다.
    pub fn with_names(
        points: &[AlignedPoint],
        portfolio_name: impl Into<String>,
        benchmark_name: impl Into<String>,
    ) -> Self {
        let mut portfolio = LineSeries::new(portfolio_name);
        let mut benchmark = LineSeries::new(benchmark_name);

        for point in points {
            if let Some(value) = point.portfolio_value {
                portfolio.points.push(ChartPoint::new(point.date, value));
            }
            if let Some(value) = point.benchmark_value {
                benchmark.points.push(ChartPoint::new(point.date, value));
            }
        }

        let domain = match (points.first(), points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        };

        Self {
            portfolio,
            benchmark,
            domain,
        }
    }

    /// 두 라인 모두 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.portfolio.is_empty() && self.benchmark.is_empty()
    }

    /// 날짜축 범위를 타임스탬프(밀리초)로 반환합니다.
    pub fn domain_millis(&self) -> Option<(i64, i64)> {
        self.domain
            .map(|(first, last)| (date_to_millis(first), date_to_millis(last)))
    }
}

/// 날짜를 UTC 자정 타임스탬프(밀리초)로 변환합니다.
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// X축 눈금 날짜 형식 (예: "Jan 2").
pub fn format_tick_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// 툴팁 날짜 형식 (예: "Jan 2, 2024").
pub fn format_tooltip_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Y축 눈금 형식 (예: "5.0%").
pub fn format_axis_tick(value: f64) -> String {
    fixed(value, 1)
        .map(|s| format!("{s}%"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// 툴팁 값 형식 (예: "5.00%").
pub fn format_tooltip_value(value: f64) -> String {
    percent_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(d: u32, portfolio: Option<f64>, benchmark: Option<f64>) -> AlignedPoint {
        AlignedPoint {
            date: date(2024, 1, d),
            portfolio_value: portfolio,
            benchmark_value: benchmark,
        }
    }

    #[test]
    fn test_lines_skip_absent_values() {
        let points = vec![
            point(1, Some(0.0), None),
            point(2, Some(5.0), Some(1.2)),
            point(3, None, Some(1.5)),
            point(4, Some(4.0), None),
        ];

        let chart = ComparisonChart::from_aligned(&points);

        assert_eq!(chart.portfolio.name, "Portfolio");
        assert_eq!(chart.benchmark.name, "Benchmark");
        assert_eq!(chart.portfolio.points.len(), 3);
        assert_eq!(chart.benchmark.points.len(), 2);
        // 0은 값이 있는 것으로 취급
        assert_eq!(chart.portfolio.points[0].y, 0.0);
        assert_eq!(chart.domain, Some((date(2024, 1, 1), date(2024, 1, 4))));
    }

    #[test]
    fn test_chart_point_coordinates() {
        let p = ChartPoint::new(date(2024, 1, 2), 5.0);

        assert_eq!(p.x, 1_704_153_600_000);
        assert_eq!(p.label, "Jan 2");
    }

    #[test]
    fn test_empty_chart() {
        let chart = ComparisonChart::from_aligned(&[]);

        assert!(chart.is_empty());
        assert_eq!(chart.domain, None);
        assert_eq!(chart.domain_millis(), None);
    }

    #[test]
    fn test_custom_names() {
        let chart = ComparisonChart::with_names(&[point(2, Some(1.0), None)], "My Account", "S&P 500");

        assert_eq!(chart.portfolio.name, "My Account");
        assert_eq!(chart.benchmark.name, "S&P 500");
        assert!(chart.benchmark.is_empty());
        assert!(!chart.is_empty());
    }

    #[test]
    fn test_formatters() {
        assert_eq!(format_axis_tick(5.0), "5.0%");
        assert_eq!(format_axis_tick(-1.25), "-1.3%");
        assert_eq!(format_tooltip_date(date(2024, 1, 2)), "Jan 2, 2024");
        assert_eq!(format_tick_date(date(2024, 12, 25)), "Dec 25");
        assert_eq!(format_tooltip_value(1.2), "1.20%");
    }
}
