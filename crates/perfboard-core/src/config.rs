//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 기본값 → TOML 파일 → `PERFBOARD__` 접두사 환경 변수 순으로 덮어씁니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{WeekendPolicy, ZeroInvestmentPolicy};
use crate::logging::{LogConfig, LogFormat};
use crate::types::CurrencyFormat;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 스냅샷 데이터 설정
    #[serde(default)]
    pub data: DataConfig,
    /// 정렬/요약 계산 설정
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// 표시 형식 설정
    #[serde(default)]
    pub display: DisplayConfig,
    /// 채팅 백엔드 설정
    #[serde(default)]
    pub chat: ChatConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 스냅샷 데이터 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// 포트폴리오 스냅샷 경로
    #[serde(default = "default_portfolio_path")]
    pub portfolio_path: String,
    /// 벤치마크 스냅샷 경로
    #[serde(default = "default_benchmark_path")]
    pub benchmark_path: String,
}

fn default_portfolio_path() -> String {
    "data/portfolio_total_investment.json".to_string()
}
fn default_benchmark_path() -> String {
    "data/spx_data.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            portfolio_path: default_portfolio_path(),
            benchmark_path: default_benchmark_path(),
        }
    }
}

/// 정렬/요약 계산 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// 투자금이 0 이하일 때의 수익률 정책
    #[serde(default)]
    pub zero_investment: ZeroInvestmentPolicy,
    /// 주말 날짜 처리 정책
    #[serde(default)]
    pub weekend_policy: WeekendPolicy,
    /// 차트/카드에 표시할 포트폴리오 이름
    #[serde(default = "default_portfolio_label")]
    pub portfolio_label: String,
    /// 차트/카드에 표시할 벤치마크 이름
    #[serde(default = "default_benchmark_label")]
    pub benchmark_label: String,
}

fn default_portfolio_label() -> String {
    "Portfolio".to_string()
}
fn default_benchmark_label() -> String {
    "Benchmark".to_string()
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            zero_investment: ZeroInvestmentPolicy::default(),
            weekend_policy: WeekendPolicy::default(),
            portfolio_label: default_portfolio_label(),
            benchmark_label: default_benchmark_label(),
        }
    }
}

/// 표시 형식 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// 통화 형식
    #[serde(default)]
    pub currency: CurrencyFormat,
}

/// 채팅 백엔드 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// 백엔드 기본 주소
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,
}

fn default_chat_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_base_url(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// 로깅 초기화용 설정으로 변환합니다.
    ///
    /// 알 수 없는 형식은 pretty로 대체합니다.
    pub fn to_log_config(&self) -> LogConfig {
        let format = self.format.parse().unwrap_or(LogFormat::Pretty);
        LogConfig::new(self.level.clone()).with_format(format)
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("PERFBOARD")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}
