use crate::{
    api::{ChatClient, ChatTransport},
    errors::ChatResult,
    key_handlers::{handle_key, handle_mouse, handle_paste, WidgetAction},
    ui,
    widget::{deliver, ChatWidget},
};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event as CEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, Mutex};

const TICK_RATE: Duration = Duration::from_millis(100);

enum Event {
    Input(CEvent),
    Tick,
}

/// Takes over the terminal and runs the widget until the user quits.
pub async fn run_ui<T: ChatTransport + 'static>(
    widget: Arc<Mutex<ChatWidget>>,
    transport: Arc<T>,
) -> ChatResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Bracketed paste keeps newlines in pasted text from arriving as Enter
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, widget, transport).await;

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = res {
        log::error!("UI loop stopped: {}", e);
    }
    res
}

async fn run_app<B: Backend, T: ChatTransport + 'static>(
    terminal: &mut Terminal<B>,
    widget: Arc<Mutex<ChatWidget>>,
    transport: Arc<T>,
) -> ChatResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // crossterm polling blocks, so it gets its own thread
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            match event::poll(TICK_RATE) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.blocking_send(Event::Input(ev)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("Failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        {
            let mut guard = widget.lock().await;
            terminal.draw(|f| ui::draw(f, &mut guard))?;
        }

        let Some(event) = rx.recv().await else {
            break;
        };

        let action = match event {
            Event::Input(CEvent::Key(key)) => handle_key(key, &mut *widget.lock().await),
            Event::Input(CEvent::Mouse(mouse)) => handle_mouse(mouse, &mut *widget.lock().await),
            Event::Input(CEvent::Paste(text)) => handle_paste(&text, &mut *widget.lock().await),
            Event::Input(_) | Event::Tick => WidgetAction::None,
        };

        match action {
            WidgetAction::Submit => {
                let text = widget.lock().await.begin_submit();
                if let Some(text) = text {
                    tokio::spawn(deliver(widget.clone(), transport.clone(), text));
                }
            }
            WidgetAction::Quit => break,
            WidgetAction::None => {}
        }
    }

    Ok(())
}

/// Asks the backend whether it is up and reports the answer in the status
/// line. Chatting works either way.
pub async fn check_health(widget: Arc<Mutex<ChatWidget>>, client: Arc<ChatClient>) {
    let status = match client.health().await {
        Ok(status) => {
            log::info!("Backend health: {}", status);
            format!("Connected to backend ({})", status)
        }
        Err(e) => {
            log::warn!("Backend health check failed: {}", e);
            "Backend unreachable, messages may fail".to_string()
        }
    };

    // A submit that started first owns the status line
    let mut guard = widget.lock().await;
    if !guard.status_indicator.is_thinking() {
        guard.status_indicator.set_status(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    async fn health_status_after(template: ResponseTemplate, pending_submit: bool) -> String {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        let config = Config {
            base_url: mock_server.uri(),
            ..Config::default()
        };
        let client = Arc::new(ChatClient::new(&config).unwrap());
        let widget = Arc::new(Mutex::new(ChatWidget::new(&config)));
        if pending_submit {
            let mut guard = widget.lock().await;
            guard.input_mut().insert_str("hello");
            assert!(guard.begin_submit().is_some());
        }

        check_health(widget.clone(), client).await;
        let status = widget.lock().await.status_indicator.status().to_string();
        status
    }

    #[tokio::test]
    async fn test_check_health_reports_status() {
        let status = health_status_after(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })),
            false,
        )
        .await;
        assert_eq!(status, "Connected to backend (healthy)");
    }

    #[tokio::test]
    async fn test_check_health_reports_failure() {
        let status = health_status_after(ResponseTemplate::new(500), false).await;
        assert_eq!(status, "Backend unreachable, messages may fail");
    }

    #[tokio::test]
    async fn test_health_result_does_not_replace_waiting_status() {
        let status = health_status_after(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })),
            true,
        )
        .await;
        assert_eq!(status, "");
    }
}
