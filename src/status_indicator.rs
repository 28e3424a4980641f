use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
const WAITING_TEXT: &str = "Waiting for reply...";

/// One-row status line. While a call is pending it shows a spinner and the
/// waiting label; otherwise it shows the last status text, if any.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    thinking: bool,
    status_text: String,
    frame: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
    }

    pub fn status(&self) -> &str {
        &self.status_text
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status_text = status.into();
    }

    pub fn clear_status(&mut self) {
        self.status_text.clear();
    }

    pub fn update_spinner(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    fn line(&self) -> Line<'_> {
        if self.thinking {
            Line::from(vec![
                Span::styled(SPINNER[self.frame % SPINNER.len()], Style::default().fg(Color::Gray)),
                Span::raw(" "),
                Span::styled(WAITING_TEXT, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(self.status_text.as_str(), Style::default().fg(Color::Yellow)),
            ])
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let row = Rect {
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(Paragraph::new(self.line()), row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(indicator: &StatusIndicator) -> String {
        indicator
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_waiting_label_wins_while_thinking() {
        let mut indicator = StatusIndicator::new();
        indicator.set_status("Connected to backend (healthy)");
        indicator.set_thinking(true);

        assert!(text(&indicator).ends_with(WAITING_TEXT));

        indicator.set_thinking(false);
        assert!(text(&indicator).ends_with("Connected to backend (healthy)"));
    }

    #[test]
    fn test_spinner_advances() {
        let mut indicator = StatusIndicator::new();
        indicator.set_thinking(true);
        let first = text(&indicator);
        indicator.update_spinner();
        assert_ne!(text(&indicator), first);
    }
}
