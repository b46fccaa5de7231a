//! 성과 대시보드 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 요약 카드와 정렬된 시계열 출력
//! perfboard report
//!
//! # 스냅샷 경로 지정
//! perfboard report -p data/portfolio_total_investment.json -b data/spx_data.json
//!
//! # CSV로 내보내기
//! perfboard export --format csv --output aligned.csv
//!
//! # 채팅 기록 조회 / 메시지 전송
//! perfboard chat history
//! perfboard chat send "How did SPX do this week?"
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use perfboard_core::{init_logging, AppConfig};
use tracing::info;

use perfboard_cli::commands::chat::{send_message, show_history};
use perfboard_cli::commands::export::{run_export, ExportConfig, ExportFormat};
use perfboard_cli::commands::report::run_report;

#[derive(Parser)]
#[command(name = "perfboard")]
#[command(about = "Portfolio vs. benchmark performance dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 요약 카드와 정렬된 시계열 표 출력
    Report {
        /// 포트폴리오 스냅샷 경로 (설정값 대신 사용)
        #[arg(short, long)]
        portfolio: Option<String>,

        /// 벤치마크 스냅샷 경로 (설정값 대신 사용)
        #[arg(short, long)]
        benchmark: Option<String>,
    },

    /// 정렬된 시계열 내보내기
    Export {
        /// 출력 형식 (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// 출력 파일 경로 (기본: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// 포트폴리오 스냅샷 경로
        #[arg(short, long)]
        portfolio: Option<String>,

        /// 벤치마크 스냅샷 경로
        #[arg(short, long)]
        benchmark: Option<String>,
    },

    /// 채팅 백엔드 명령
    Chat {
        #[command(subcommand)]
        command: ChatCommands,
    },
}

#[derive(Subcommand)]
enum ChatCommands {
    /// 대화 기록 출력
    History,

    /// 메시지 전송
    Send {
        /// 전송할 메시지
        message: String,
    },
}

/// 명령줄에서 지정한 스냅샷 경로로 설정을 덮어씁니다.
fn override_paths(config: &mut AppConfig, portfolio: Option<String>, benchmark: Option<String>) {
    if let Some(path) = portfolio {
        config.data.portfolio_path = path;
    }
    if let Some(path) = benchmark {
        config.data.benchmark_path = path;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일은 선택 사항
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config))?;

    init_logging(config.logging.to_log_config())
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    info!(config = %cli.config, "perfboard starting");

    match cli.command {
        Commands::Report {
            portfolio,
            benchmark,
        } => {
            override_paths(&mut config, portfolio, benchmark);
            run_report(&config).await?;
        }
        Commands::Export {
            format,
            output,
            portfolio,
            benchmark,
        } => {
            override_paths(&mut config, portfolio, benchmark);
            let export = ExportConfig {
                format: ExportFormat::parse(&format)?,
                output,
            };
            let count = run_export(&config, export).await?;
            info!(points = count, "Export complete");
        }
        Commands::Chat { command } => match command {
            ChatCommands::History => {
                show_history(&config).await?;
            }
            ChatCommands::Send { message } => {
                send_message(&config, &message).await?;
            }
        },
    }

    Ok(())
}
