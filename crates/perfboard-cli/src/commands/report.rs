//! 요약 카드 및 시계열 표 출력.

use anyhow::Result;
use perfboard_analytics::{DashboardView, SummaryStats, Trend};
use perfboard_core::{percent_string, AppConfig, NOT_AVAILABLE};
use tracing::info;

use super::load_view;

/// 포트폴리오 데이터가 없을 때 표시하는 문구
pub const NO_DATA_MESSAGE: &str = "No portfolio data available";

/// 리포트를 생성하여 stdout에 출력합니다.
pub async fn run_report(config: &AppConfig) -> Result<()> {
    info!(
        portfolio = %config.data.portfolio_path,
        benchmark = %config.data.benchmark_path,
        "Building report"
    );

    match load_view(config).await? {
        Some(view) => println!("{}", format_report(&view, config)),
        None => println!("{}", NO_DATA_MESSAGE),
    }

    Ok(())
}

/// 리포트 문자열을 생성합니다.
pub fn format_report(view: &DashboardView, config: &AppConfig) -> String {
    let mut output = String::new();

    let as_of = view
        .summary
        .as_of
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    output.push_str(&format!(
        "{} vs {} (as of {})\n",
        config.analytics.portfolio_label, config.analytics.benchmark_label, as_of
    ));
    output.push_str(&"═".repeat(48));
    output.push('\n');
    output.push_str(&format_cards(&view.summary, &config.analytics.benchmark_label));
    output.push('\n');
    output.push_str(&format_table(view, config));

    output
}

/// 요약 카드 네 개를 출력 문자열로 변환합니다.
pub fn format_cards(summary: &SummaryStats, benchmark_label: &str) -> String {
    let overall = if summary.overall_change.is_some() {
        format!("{}%", summary.overall_change_percent)
    } else {
        NOT_AVAILABLE.to_string()
    };

    let rows = [
        ("Overall Change", overall, Some(summary.portfolio_trend)),
        ("Current Investment", summary.current_investment.clone(), None),
        ("Total Profit", summary.total_profit.clone(), None),
        (
            benchmark_label,
            summary.benchmark_performance.clone(),
            Some(summary.benchmark_trend),
        ),
    ];

    let mut output = String::new();
    for (title, value, trend) in rows {
        let marker = trend.map(trend_marker).unwrap_or("");
        let line = format!("  {:<20} {:>14} {}", title, value, marker);
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// 정렬된 시계열 표를 생성합니다. 값이 없는 칸은 `-`입니다.
pub fn format_table(view: &DashboardView, config: &AppConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:>14} {:>14}\n",
        "DATE",
        config.analytics.portfolio_label.to_uppercase(),
        config.analytics.benchmark_label.to_uppercase()
    ));
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for point in &view.aligned {
        output.push_str(&format!(
            "{:<12} {:>14} {:>14}\n",
            point.date.to_string(),
            cell(point.portfolio_value),
            cell(point.benchmark_value)
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} dates", view.aligned.len()));
    output
}

fn cell(value: Option<f64>) -> String {
    value.map(percent_string).unwrap_or_else(|| "-".to_string())
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Gain => "▲",
        Trend::Loss => "▼",
        Trend::Unknown => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfboard_analytics::DashboardOptions;
    use perfboard_core::{BenchmarkRecord, PortfolioRecord};

    fn view() -> DashboardView {
        let portfolio = vec![
            PortfolioRecord::new("2024-01-01", 1000.0, 0.0, 0.0),
            PortfolioRecord::new("2024-01-02", 1000.0, 50.0, 50.0),
        ];
        let benchmark = vec![BenchmarkRecord::new("2024-01-02", -1.2)];
        DashboardView::compute(&portfolio, &benchmark, &DashboardOptions::default())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_cards() {
        let cards = format_cards(&view().summary, "Benchmark");

        assert!(cards.contains("Overall Change"));
        assert!(cards.contains("5.00% ▲"));
        assert!(cards.contains("$1,000.00"));
        assert!(cards.contains("$50.00"));
        assert!(cards.contains("-1.20% ▼"));
    }

    #[test]
    fn test_table_marks_missing_values() {
        let table = format_table(&view(), &AppConfig::default());
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("DATE"));
        assert!(lines[0].contains("PORTFOLIO"));
        assert!(lines[2].starts_with("2024-01-01"));
        assert!(lines[2].trim_end().ends_with('-'));
        assert!(lines[3].contains("5.00%"));
        assert!(lines[3].contains("-1.20%"));
        assert!(table.ends_with("Total: 2 dates"));
    }

    #[test]
    fn test_report_header() {
        let report = format_report(&view(), &AppConfig::default());
        assert!(report.starts_with("Portfolio vs Benchmark (as of 2024-01-02)"));
    }
}
