use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new("guardchat")
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )
        .alignment(Alignment::Center);

    f.render_widget(title, area);
}
