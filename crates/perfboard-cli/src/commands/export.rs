//! 정렬된 시계열 내보내기.

use anyhow::{anyhow, Context, Result};
use perfboard_core::{AlignedPoint, AppConfig};
use std::fs::File;
use std::io::Write;
use tracing::{info, warn};

use super::load_view;

/// 내보내기 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(anyhow!("Invalid format: {}. Use: json, csv", s)),
        }
    }
}

/// 내보내기 설정.
#[derive(Debug)]
pub struct ExportConfig {
    /// 출력 형식
    pub format: ExportFormat,
    /// 출력 파일 경로 (없으면 stdout)
    pub output: Option<String>,
}

/// 정렬된 시계열을 계산하여 내보냅니다.
///
/// 내보낸 포인트 수를 반환합니다.
pub async fn run_export(config: &AppConfig, export: ExportConfig) -> Result<usize> {
    let points = match load_view(config).await? {
        Some(view) => view.aligned,
        None => {
            warn!("No portfolio data available, exporting empty series");
            Vec::new()
        }
    };

    let content = render(&points, export.format)?;

    // 파일 또는 stdout에 출력
    if let Some(path) = export.output.as_deref() {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))?;
        file.write_all(content.as_bytes())
            .context("Failed to write to file")?;
        info!(points = points.len(), "Output written to: {}", path);
    } else {
        println!("{}", content);
    }

    Ok(points.len())
}

/// 지정된 형식으로 변환합니다.
pub fn render(points: &[AlignedPoint], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => format_json(points),
        ExportFormat::Csv => Ok(format_csv(points)),
    }
}

/// JSON 형식 출력. 값이 없는 필드는 생략됩니다.
fn format_json(points: &[AlignedPoint]) -> Result<String> {
    serde_json::to_string_pretty(points).context("Failed to serialize to JSON")
}

/// CSV 형식 출력. 값이 없는 칸은 비워 둡니다.
fn format_csv(points: &[AlignedPoint]) -> String {
    let mut output = String::new();

    // 헤더
    output.push_str("date,portfolio_value,benchmark_value\n");

    // 데이터
    for point in points {
        output.push_str(&format!(
            "{},{},{}\n",
            point.date,
            optional(point.portfolio_value),
            optional(point.benchmark_value)
        ));
    }

    output
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
