//! 스냅샷 데이터 로딩.
//!
//! 이 crate는 다음을 제공합니다:
//! - 포트폴리오/벤치마크 스냅샷 문서 형식
//! - 비동기 스냅샷 로더 (파일, 메모리)
//! - 가격 데이터로부터 벤치마크 시계열 생성

pub mod error;
pub mod loader;
pub mod price_history;
pub mod snapshot;

pub use error::{DataError, Result};
pub use loader::{load_snapshots, FileSnapshotLoader, SnapshotLoader, Snapshots, StaticSnapshotLoader};
pub use price_history::{benchmark_from_price_bars, PriceBar};
pub use snapshot::{parse_benchmark_document, parse_portfolio_document, PortfolioDocument};
