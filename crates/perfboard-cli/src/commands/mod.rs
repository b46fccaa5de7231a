//! CLI 명령어 구현 모듈.

pub mod chat;
pub mod export;
pub mod report;

use anyhow::{anyhow, Result};
use perfboard_analytics::{Dashboard, DashboardOptions, DashboardState, DashboardView};
use perfboard_core::AppConfig;
use perfboard_data::FileSnapshotLoader;

/// 설정된 스냅샷 파일에서 대시보드 화면 데이터를 계산합니다.
///
/// 포트폴리오 데이터가 없으면 `Ok(None)`을 반환합니다.
pub async fn load_view(config: &AppConfig) -> Result<Option<DashboardView>> {
    let loader = FileSnapshotLoader::from_config(&config.data);
    let dashboard = Dashboard::mount(&loader, DashboardOptions::from_config(config)).await;

    match dashboard.into_state() {
        DashboardState::Ready(view) => Ok(Some(*view)),
        DashboardState::Empty => Ok(None),
        DashboardState::Unavailable { reason } => Err(anyhow!("Dashboard unavailable: {}", reason)),
        DashboardState::Loading => Err(anyhow!("Dashboard did not finish loading")),
    }
}
