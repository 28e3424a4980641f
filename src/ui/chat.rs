use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::widget::{ChatWidget, SubmitControl};

const SEND_LABEL: &str = "[ Send ]";

pub fn draw_messages(f: &mut Frame<'_>, area: Rect, widget: &mut ChatWidget) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in widget.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area.width));
    }

    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let scroll = widget.scroll_offset(total_lines, area.height);

    // Lines are already wrapped to the area width
    let msgs_para = Paragraph::new(lines).block(Block::default());
    f.render_widget(msgs_para.scroll((scroll, 0)), area);
}

pub fn draw_input(f: &mut Frame<'_>, area: Rect, widget: &mut ChatWidget) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_LABEL.len() as u16 + 2)])
        .split(area);

    let enabled = widget.submit_control() == SubmitControl::Enabled;

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Message")
        .border_style(Style::default().fg(if enabled {
            Color::Gray
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    widget.input_mut().set_width(inner.width);
    let visible: Vec<Line> = widget
        .input()
        .visible_lines()
        .into_iter()
        .map(Line::from)
        .collect();
    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(Color::White)),
        inner,
    );

    draw_send_button(f, chunks[1], enabled);
    widget.send_button_area = Some(chunks[1]);

    let (col, row) = widget.input().cursor_offset();
    f.set_cursor_position((inner.x + col, inner.y + row));
}

fn draw_send_button(f: &mut Frame<'_>, area: Rect, enabled: bool) {
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let label_row = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    };

    f.render_widget(
        Paragraph::new(SEND_LABEL)
            .style(style)
            .alignment(Alignment::Center),
        label_row,
    );
}
