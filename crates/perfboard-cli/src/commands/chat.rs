//! 채팅 백엔드 명령.

use anyhow::{anyhow, Context, Result};
use perfboard_chat::{render_transcript, ChatBackend, ChatClient, ChatSession};
use perfboard_core::AppConfig;
use tracing::info;

/// 대화 기록을 조회하여 출력합니다.
pub async fn show_history(config: &AppConfig) -> Result<usize> {
    let client = ChatClient::new(&config.chat);
    info!(base_url = client.base_url(), "Fetching chat history");

    let history = client
        .fetch_history()
        .await
        .context("Failed to fetch chat history")?;
    let messages = perfboard_chat::parse_transcript(&history);

    if messages.is_empty() {
        println!("(no messages)");
    } else {
        println!("{}", render_transcript(&messages));
    }

    Ok(messages.len())
}

/// 메시지 하나를 전송하고 응답을 출력합니다.
pub async fn send_message(config: &AppConfig, message: &str) -> Result<()> {
    let mut session = ChatSession::new(ChatClient::new(&config.chat));

    session
        .try_send(message)
        .await
        .context("Failed to send chat message")?;

    let reply = session
        .messages()
        .last()
        .ok_or_else(|| anyhow!("Chat backend returned no reply"))?;
    println!("{}", render_transcript(std::slice::from_ref(reply)));

    Ok(())
}
