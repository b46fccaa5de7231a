//! 스냅샷 로더.
//!
//! 두 스냅샷은 대시보드 마운트 시 한 번, 동시에 로드됩니다.
//! 계산은 두 스냅샷이 모두 메모리에 올라온 뒤에만 수행해야 합니다.

use async_trait::async_trait;
use perfboard_core::{BenchmarkRecord, DataConfig, PortfolioRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{DataError, Result};
use crate::snapshot::{parse_benchmark_document, parse_portfolio_document, PortfolioDocument};

/// 스냅샷 로더 trait.
#[async_trait]
pub trait SnapshotLoader: Send + Sync {
    /// 로더 이름 (로그용)
    fn name(&self) -> &str;

    /// 포트폴리오 스냅샷을 로드합니다.
    async fn load_portfolio(&self) -> Result<PortfolioDocument>;

    /// 벤치마크 스냅샷을 로드합니다.
    async fn load_benchmark(&self) -> Result<Vec<BenchmarkRecord>>;
}

/// 완전히 로드된 두 스냅샷.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshots {
    /// 포트폴리오 문서
    pub portfolio: PortfolioDocument,
    /// 벤치마크 레코드
    pub benchmark: Vec<BenchmarkRecord>,
}

impl Snapshots {
    /// 포트폴리오 레코드.
    pub fn portfolio_records(&self) -> &[PortfolioRecord] {
        self.portfolio.records()
    }
}

/// 두 스냅샷을 동시에 로드합니다.
///
/// 하나라도 실패하면 부분 결과 없이 에러를 반환합니다.
pub async fn load_snapshots<L>(loader: &L) -> Result<Snapshots>
where
    L: SnapshotLoader + ?Sized,
{
    let (portfolio, benchmark) =
        tokio::try_join!(loader.load_portfolio(), loader.load_benchmark())?;

    info!(
        loader = loader.name(),
        portfolio_records = portfolio.portfolio_statistics.len(),
        benchmark_records = benchmark.len(),
        "Snapshots loaded"
    );

    Ok(Snapshots {
        portfolio,
        benchmark,
    })
}

/// 파일 시스템의 JSON 스냅샷 로더.
#[derive(Debug, Clone)]
pub struct FileSnapshotLoader {
    portfolio_path: PathBuf,
    benchmark_path: PathBuf,
}

impl FileSnapshotLoader {
    /// 새 파일 로더를 생성합니다.
    pub fn new(portfolio_path: impl Into<PathBuf>, benchmark_path: impl Into<PathBuf>) -> Self {
        Self {
            portfolio_path: portfolio_path.into(),
            benchmark_path: benchmark_path.into(),
        }
    }

    /// 설정에서 로더를 생성합니다.
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(&config.portfolio_path, &config.benchmark_path)
    }

    pub fn portfolio_path(&self) -> &Path {
        &self.portfolio_path
    }

    pub fn benchmark_path(&self) -> &Path {
        &self.benchmark_path
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    debug!(path = %path.display(), "Reading snapshot");
    tokio::fs::read(path)
        .await
        .map_err(|e| DataError::io(path.display().to_string(), e))
}

#[async_trait]
impl SnapshotLoader for FileSnapshotLoader {
    fn name(&self) -> &str {
        "file"
    }

    async fn load_portfolio(&self) -> Result<PortfolioDocument> {
        let bytes = read_file(&self.portfolio_path).await?;
        parse_portfolio_document(&bytes)
    }

    async fn load_benchmark(&self) -> Result<Vec<BenchmarkRecord>> {
        let bytes = read_file(&self.benchmark_path).await?;
        parse_benchmark_document(&bytes)
    }
}

/// 메모리에 있는 스냅샷을 돌려주는 로더.
///
/// 로드할 때마다 새 복사본을 반환하므로 호출자가 원본을 변경할 수 없습니다.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotLoader {
    portfolio: PortfolioDocument,
    benchmark: Vec<BenchmarkRecord>,
}

impl StaticSnapshotLoader {
    pub fn new(portfolio: Vec<PortfolioRecord>, benchmark: Vec<BenchmarkRecord>) -> Self {
        Self {
            portfolio: PortfolioDocument::from_records(portfolio),
            benchmark,
        }
    }
}

#[async_trait]
impl SnapshotLoader for StaticSnapshotLoader {
    fn name(&self) -> &str {
        "static"
    }

    async fn load_portfolio(&self) -> Result<PortfolioDocument> {
        Ok(self.portfolio.clone())
    }

    async fn load_benchmark(&self) -> Result<Vec<BenchmarkRecord>> {
        Ok(self.benchmark.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_loader() {
        let loader = StaticSnapshotLoader::new(
            vec![PortfolioRecord::new("2024-01-01", 1000.0, 0.0, 0.0)],
            vec![BenchmarkRecord::new("2024-01-01", 0.4)],
        );

        let snapshots = load_snapshots(&loader).await.unwrap();
        assert_eq!(snapshots.portfolio_records().len(), 1);
        assert_eq!(snapshots.benchmark.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_fails_whole_load() {
        let loader = FileSnapshotLoader::new("missing/portfolio.json", "missing/spx.json");

        let err = load_snapshots(&loader).await.unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = DataConfig::default();
        let loader = FileSnapshotLoader::from_config(&config);

        assert_eq!(
            loader.portfolio_path(),
            Path::new("data/portfolio_total_investment.json")
        );
        assert_eq!(loader.benchmark_path(), Path::new("data/spx_data.json"));
    }
}
