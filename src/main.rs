use anyhow::Context;
use dotenv::dotenv;
use guardchat::{
    api::ChatClient,
    app::{check_health, run_ui},
    config::{get_config, initialize_config},
    logging::init_logging,
    widget::ChatWidget,
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    initialize_config().context("load configuration")?;
    let config = get_config();
    let _logger = init_logging(&config).context("start file logger")?;

    let client = Arc::new(ChatClient::new(&config).context("build chat client")?);
    log::info!(
        "Starting guardchat against {} (session {})",
        client.chat_url(),
        client.session_id()
    );

    let widget = Arc::new(Mutex::new(ChatWidget::new(&config)));
    tokio::spawn(check_health(widget.clone(), client.clone()));

    run_ui(widget, client).await.context("run terminal UI")?;

    log::info!("Exiting");
    Ok(())
}
