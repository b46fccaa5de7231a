//! 시계열 정렬 및 성과 요약 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 포트폴리오/벤치마크 시계열 정렬 ([`alignment`])
//! - 최신 관측값 기준 요약 통계 ([`summary`])
//! - 이중 라인 차트 데이터 ([`charts`])
//! - 스냅샷 로딩부터 계산까지의 대시보드 상태 ([`dashboard`])
//!
//! # 사용 예시
//!
//! ```
//! use perfboard_analytics::{align, summarize};
//! use perfboard_core::{BenchmarkRecord, PortfolioRecord};
//!
//! let portfolio = vec![
//!     PortfolioRecord::new("2024-01-01", 1000.0, 0.0, 0.0),
//!     PortfolioRecord::new("2024-01-02", 1000.0, 50.0, 50.0),
//! ];
//! let benchmark = vec![BenchmarkRecord::new("2024-01-02", 1.2)];
//!
//! let aligned = align(&portfolio, &benchmark).unwrap();
//! assert_eq!(aligned.len(), 2);
//!
//! let stats = summarize(&portfolio, &benchmark).unwrap();
//! assert_eq!(stats.overall_change_percent, "5.00");
//! assert_eq!(stats.benchmark_performance, "1.20%");
//! ```

pub mod alignment;
pub mod charts;
pub mod dashboard;
pub mod summary;

pub use alignment::{align, AlignOptions, SeriesAligner};
pub use charts::{ChartPoint, ComparisonChart, LineSeries};
pub use dashboard::{Dashboard, DashboardOptions, DashboardState, DashboardView};
pub use summary::{summarize, SummaryEngine, SummaryStats, Trend};
