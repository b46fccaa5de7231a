//! 대시보드 상태.
//!
//! 두 스냅샷을 동시에 로드하고, 둘 다 완전히 로드된 뒤에만 정렬과 요약을
//! 계산합니다. 화면은 [`DashboardState`] 하나만 보고 그립니다.

use perfboard_core::{
    AlignedPoint, AppConfig, BenchmarkRecord, CurrencyFormat, DashboardResult, PortfolioRecord,
};
use perfboard_data::{load_snapshots, SnapshotLoader, Snapshots};
use serde::Serialize;
use tracing::{error, info};

use crate::alignment::{AlignOptions, SeriesAligner};
use crate::charts::{ComparisonChart, DEFAULT_BENCHMARK_NAME, DEFAULT_PORTFOLIO_NAME};
use crate::summary::{SummaryEngine, SummaryStats};

/// 대시보드 계산 옵션.
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// 정렬 옵션
    pub align: AlignOptions,
    /// 통화 형식
    pub currency: CurrencyFormat,
    /// 포트폴리오 라인 이름
    pub portfolio_label: String,
    /// 벤치마크 라인 이름
    pub benchmark_label: String,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            align: AlignOptions::default(),
            currency: CurrencyFormat::default(),
            portfolio_label: DEFAULT_PORTFOLIO_NAME.to_string(),
            benchmark_label: DEFAULT_BENCHMARK_NAME.to_string(),
        }
    }
}

impl DashboardOptions {
    /// 애플리케이션 설정에서 옵션을 생성합니다.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            align: AlignOptions::from(&config.analytics),
            currency: config.display.currency.clone(),
            portfolio_label: config.analytics.portfolio_label.clone(),
            benchmark_label: config.analytics.benchmark_label.clone(),
        }
    }
}

/// 계산이 끝난 대시보드 화면 데이터.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// 정렬된 시계열
    pub aligned: Vec<AlignedPoint>,
    /// 요약 통계
    pub summary: SummaryStats,
    /// 비교 차트
    pub chart: ComparisonChart,
}

impl DashboardView {
    /// 두 시계열에서 화면 데이터를 계산합니다.
    ///
    /// 포트폴리오가 비어 있으면 `Ok(None)`을 반환합니다.
    pub fn compute(
        portfolio: &[PortfolioRecord],
        benchmark: &[BenchmarkRecord],
        options: &DashboardOptions,
    ) -> DashboardResult<Option<Self>> {
        let aligned = SeriesAligner::new(options.align).align(portfolio, benchmark)?;

        let engine = SummaryEngine::new(options.align.zero_investment, options.currency.clone());
        let Some(summary) = engine.summarize(portfolio, benchmark) else {
            return Ok(None);
        };

        let chart = ComparisonChart::with_names(
            &aligned,
            options.portfolio_label.clone(),
            options.benchmark_label.clone(),
        );

        Ok(Some(Self {
            aligned,
            summary,
            chart,
        }))
    }
}

/// 대시보드 상태.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// 스냅샷 로딩 중
    Loading,
    /// 로드 또는 계산 실패
    Unavailable {
        /// 실패 사유
        reason: String,
    },
    /// 로드는 되었으나 포트폴리오 데이터 없음
    Empty,
    /// 표시 준비 완료
    Ready(Box<DashboardView>),
}

impl DashboardState {
    /// 표시 준비가 되었는지 확인합니다.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// 화면 데이터를 반환합니다.
    pub fn view(&self) -> Option<&DashboardView> {
        match self {
            Self::Ready(view) => Some(view.as_ref()),
            _ => None,
        }
    }
}

/// 대시보드.
#[derive(Debug, Clone)]
pub struct Dashboard {
    options: DashboardOptions,
    state: DashboardState,
}

impl Dashboard {
    /// 로딩 상태의 대시보드를 생성합니다.
    pub fn new(options: DashboardOptions) -> Self {
        Self {
            options,
            state: DashboardState::Loading,
        }
    }

    /// 스냅샷을 로드하여 대시보드를 구성합니다.
    pub async fn mount<L>(loader: &L, options: DashboardOptions) -> Self
    where
        L: SnapshotLoader + ?Sized,
    {
        let mut dashboard = Self::new(options);
        dashboard.load(loader).await;
        dashboard
    }

    /// 현재 상태.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// 대시보드를 소비하고 상태를 반환합니다.
    pub fn into_state(self) -> DashboardState {
        self.state
    }

    /// 계산 옵션.
    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    /// 스냅샷을 로드하고 상태를 갱신합니다.
    ///
    /// 두 스냅샷이 모두 로드된 경우에만 계산하며, 하나라도 실패하면
    /// `Unavailable`이 됩니다.
    pub async fn load<L>(&mut self, loader: &L) -> &DashboardState
    where
        L: SnapshotLoader + ?Sized,
    {
        self.state = match load_snapshots(loader).await {
            Ok(snapshots) => self.compute(&snapshots),
            Err(e) => {
                error!(loader = loader.name(), error = %e, "Failed to load snapshots");
                DashboardState::Unavailable {
                    reason: e.to_string(),
                }
            }
        };

        &self.state
    }

    /// 로드된 스냅샷에서 상태를 계산합니다.
    pub fn compute(&self, snapshots: &Snapshots) -> DashboardState {
        match DashboardView::compute(
            snapshots.portfolio_records(),
            &snapshots.benchmark,
            &self.options,
        ) {
            Ok(Some(view)) => {
                info!(
                    points = view.aligned.len(),
                    as_of = ?view.summary.as_of,
                    "Dashboard ready"
                );
                DashboardState::Ready(Box::new(view))
            }
            Ok(None) => {
                info!("No portfolio data available");
                DashboardState::Empty
            }
            Err(e) => {
                error!(error = %e, "Failed to compute dashboard");
                DashboardState::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
