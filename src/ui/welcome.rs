use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// Banner shown in place of the log until the first message is sent.
pub fn draw_welcome(f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Ask anything. Your message is sent to the assistant when you press Enter.",
            Style::default().fg(Color::White),
        )),
    ];

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(3),
            Constraint::Percentage(40),
        ])
        .split(area);

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default())
        .wrap(Wrap { trim: true });

    f.render_widget(banner, vert[1]);
}
