use crate::{
    api::ChatTransport,
    config::Config,
    errors::ChatResult,
    input::InputBox,
    message::{Message, Sender},
    status_indicator::StatusIndicator,
};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::Mutex;

/// State of the send control. There is no third state: a call that never
/// settles simply leaves the control `Disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitControl {
    Enabled,
    Disabled,
}

/// The chat widget: input box, send control, append-only message log and
/// welcome banner.
///
/// A submission runs in two halves so the UI can keep drawing while the call
/// is in flight: [`ChatWidget::begin_submit`] does everything up to the call
/// and [`ChatWidget::finish_submit`] applies its outcome. [`ChatWidget::submit`]
/// runs both around one transport call.
#[derive(Debug)]
pub struct ChatWidget {
    messages: Vec<Message>,
    input: InputBox,
    submit_control: SubmitControl,
    welcome_visible: bool,
    scroll: u16,
    follow_bottom: bool,
    no_response_text: String,
    error_text: String,
    pub status_indicator: StatusIndicator,
    pub send_button_area: Option<Rect>,
}

impl ChatWidget {
    pub fn new(config: &Config) -> Self {
        Self {
            messages: Vec::new(),
            input: InputBox::new(config.max_input_rows),
            submit_control: SubmitControl::Enabled,
            welcome_visible: true,
            scroll: 0,
            follow_bottom: true,
            no_response_text: config.no_response_text.clone(),
            error_text: config.error_text.clone(),
            status_indicator: StatusIndicator::new(),
            send_button_area: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &InputBox {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBox {
        &mut self.input
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.submit_control
    }

    pub fn is_welcome_visible(&self) -> bool {
        self.welcome_visible
    }

    pub fn append_message(&mut self, text: impl Into<String>, sender: Sender) {
        self.messages.push(Message::new(text, sender));
        self.follow_bottom = true;
    }

    /// Starts a submission from the current input.
    ///
    /// Returns the trimmed text to send, or `None` when there is nothing to
    /// do: blank input, or a call is already outstanding.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submit_control == SubmitControl::Disabled {
            log::debug!("Submit ignored: a call is already in flight");
            return None;
        }

        let text = self.input.value().trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.welcome_visible = false;
        self.append_message(text.clone(), Sender::User);
        self.input.clear();
        self.submit_control = SubmitControl::Disabled;
        self.status_indicator.clear_status();
        self.status_indicator.set_thinking(true);

        Some(text)
    }

    /// Applies the outcome of the call started by `begin_submit` and
    /// re-enables the send control whatever happened.
    pub fn finish_submit(&mut self, outcome: ChatResult<Option<String>>) {
        match outcome {
            Ok(Some(reply)) => self.append_message(reply, Sender::Assistant),
            Ok(None) => {
                log::warn!("Chat reply had no response field");
                let text = self.no_response_text.clone();
                self.append_message(text, Sender::Assistant);
            }
            Err(e) => {
                log::error!("Chat call failed: {}", e);
                let text = self.error_text.clone();
                self.append_message(text, Sender::Assistant);
            }
        }

        self.submit_control = SubmitControl::Enabled;
        self.status_indicator.set_thinking(false);
    }

    /// Full submission, awaiting the call in place.
    pub async fn submit<T: ChatTransport>(&mut self, transport: &T) {
        if let Some(text) = self.begin_submit() {
            let outcome = transport.send_message(&text).await;
            self.finish_submit(outcome);
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.follow_bottom = false;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Scroll position for a log of `total_lines` shown in `view_height`
    /// rows. Pins to the bottom after a new message until the user scrolls up.
    pub fn scroll_offset(&mut self, total_lines: u16, view_height: u16) -> u16 {
        let max_scroll = total_lines.saturating_sub(view_height);
        if self.follow_bottom || self.scroll >= max_scroll {
            self.scroll = max_scroll;
            self.follow_bottom = true;
        }
        self.scroll
    }
}

/// Second half of a submission started with `begin_submit`: performs the
/// call without holding the lock and applies its outcome.
pub async fn deliver<T: ChatTransport>(
    widget: Arc<Mutex<ChatWidget>>,
    transport: Arc<T>,
    text: String,
) {
    let outcome = transport.send_message(&text).await;
    widget.lock().await.finish_submit(outcome);
}
