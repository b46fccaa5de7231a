//! 스냅샷 파일 기반 대시보드 통합 테스트

use std::path::PathBuf;

use perfboard_analytics::{Dashboard, DashboardOptions, DashboardState, Trend};
use perfboard_data::FileSnapshotLoader;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../perfboard-data/tests/fixtures")
        .join(name)
}

fn loader() -> FileSnapshotLoader {
    FileSnapshotLoader::new(
        fixture("portfolio_total_investment.json"),
        fixture("spx_data.json"),
    )
}

#[tokio::test]
async fn test_dashboard_from_fixture_files() {
    let dashboard = Dashboard::mount(&loader(), DashboardOptions::default()).await;
    let view = dashboard.state().view().expect("dashboard should be ready");

    // 2025-02-28은 벤치마크에만 존재
    assert_eq!(view.aligned.len(), 6);
    assert_eq!(view.aligned[0].portfolio_value, None);
    assert_eq!(view.aligned[0].benchmark_value, Some(1.5821));
    // 첫 포트폴리오 레코드는 투자금 0
    assert_eq!(view.aligned[1].portfolio_value, Some(0.0));

    let summary = &view.summary;
    assert_eq!(summary.overall_change_percent, "1.19");
    assert_eq!(summary.current_investment, "$4.62");
    assert_eq!(summary.total_profit, "$0.05");
    assert_eq!(summary.benchmark_performance, "-1.60%");
    assert_eq!(summary.portfolio_trend, Trend::Gain);
    assert_eq!(summary.benchmark_trend, Trend::Loss);

    assert_eq!(view.chart.portfolio.points.len(), 5);
    assert_eq!(view.chart.benchmark.points.len(), 6);
    assert_eq!(view.chart.benchmark.points[0].label, "Feb 28");
}

#[tokio::test]
async fn test_missing_file_is_unavailable() {
    let loader = FileSnapshotLoader::new(fixture("missing.json"), fixture("spx_data.json"));
    let dashboard = Dashboard::mount(&loader, DashboardOptions::default()).await;

    assert!(matches!(
        dashboard.state(),
        DashboardState::Unavailable { .. }
    ));
}

#[tokio::test]
async fn test_dashboard_view_serializes_camel_case() {
    let dashboard = Dashboard::mount(&loader(), DashboardOptions::default()).await;
    let view = dashboard.state().view().unwrap();

    let json = serde_json::to_value(view).unwrap();
    assert_eq!(json["summary"]["benchmarkPerformance"], "-1.60%");
    assert_eq!(json["aligned"][0]["date"], "2025-02-28");
    assert!(json["aligned"][0].get("portfolioValue").is_none());
}
