use chrono::{DateTime, Local};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn avatar(&self) -> &'static str {
        match self {
            Sender::User => "👤",
            Sender::Assistant => "H",
        }
    }
}

/// One entry of the chat log. Never changes once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    sender: Sender,
    created_at: DateTime<Local>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            created_at: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let style = self.base_style();

        self.render_header(&mut lines, style);
        self.render_content(&mut lines, width, style);
        self.render_footer(&mut lines, style);

        lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(match self.sender {
            Sender::User => Color::Rgb(255, 223, 128),
            Sender::Assistant => Color::Rgb(144, 238, 144),
        })
    }

    fn indent(&self) -> &'static str {
        match self.sender {
            Sender::User => "  ",
            Sender::Assistant => "",
        }
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let timestamp = self.created_at.format("%H:%M").to_string();

        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(
                self.sender.avatar().to_string(),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
        ]));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, width: u16, style: Style) {
        let indent = self.indent();
        // indent + "│ " gutter
        let wrap_width = (width as usize)
            .saturating_sub(indent.len() + 2)
            .max(1);

        for paragraph in self.text.lines() {
            if paragraph.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│".to_string(), style),
                ]));
                continue;
            }

            for wrapped_line in wrap(paragraph, wrap_width) {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│ ".to_string(), style),
                    Span::styled(wrapped_line.to_string(), style),
                ]));
            }
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_render_has_header_body_footer() {
        let message = Message::new("hello", Sender::Assistant);
        let lines = message.render(40);

        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).starts_with("┌─H "));
        assert_eq!(line_text(&lines[1]), "│ hello");
        assert_eq!(line_text(&lines[2]), "╰─");
    }

    #[test]
    fn test_user_messages_are_indented() {
        let message = Message::new("hello", Sender::User);
        let lines = message.render(40);

        assert!(line_text(&lines[0]).starts_with("  ┌─👤"));
        assert_eq!(line_text(&lines[1]), "  │ hello");
    }

    #[test]
    fn test_long_text_wraps_to_width() {
        let message = Message::new("one two three four five six", Sender::Assistant);
        let lines = message.render(12);

        let body: Vec<String> = lines[1..lines.len() - 1].iter().map(line_text).collect();
        assert!(body.len() > 1);
        assert!(body.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn test_multiline_text_keeps_blank_lines() {
        let message = Message::new("first\n\nsecond", Sender::Assistant);
        let lines = message.render(40);

        assert_eq!(lines.len(), 5);
        assert_eq!(line_text(&lines[2]), "│");
    }
}
