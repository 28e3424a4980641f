use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw_footer(f: &mut Frame<'_>, area: Rect) {
    let instructions =
        "Enter to send, Shift+Enter for a new line, PgUp/PgDn to scroll, Esc to quit.";

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
