//! Headless demo — drives the chat alerts from stdin.
//!
//! Commands: `open`, `close`, `unread <n>`, `quit`.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use chat_alerts::{AlertConfig, LogHost, Permission, WidgetSignals, WidgetState, run_alerts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    chat_alerts::config::load_dotenv();

    let config = AlertConfig::load();
    let permission = std::env::var("CHAT_ALERT_PERMISSION")
        .map(|v| Permission::from_str_setting(&v))
        .unwrap_or(Permission::Default);

    tracing::info!(title = %config.title, ?permission, "Starting chat alerts demo");

    let (signals, rx) = WidgetSignals::new(WidgetState::default());
    let alerts = tokio::spawn(run_alerts(LogHost::new(permission), config, rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("open"), None) => {
                signals.set_open(true);
            }
            (Some("close"), None) => {
                signals.set_open(false);
            }
            (Some("unread"), Some(n)) => match n.parse::<u32>() {
                Ok(count) => {
                    signals.set_unread(count);
                }
                Err(e) => tracing::warn!("Invalid unread count {n:?}: {e}"),
            },
            (Some("quit"), None) => break,
            (None, _) => {}
            _ => tracing::warn!("Unknown command: {line}"),
        }
    }

    drop(signals);
    let shown = alerts.await.context("Alert task failed")?;
    tracing::info!(shown, "Chat alerts demo stopped");
    Ok(())
}
