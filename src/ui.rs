// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;
pub mod welcome;

use crate::widget::ChatWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draws the whole widget: header, log (or welcome banner), status line,
/// input row and key help.
pub fn draw(f: &mut Frame<'_>, widget: &mut ChatWidget) {
    // borders of the input block
    let input_height = widget.input().height() + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(input_height),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    header::draw_header(f, chunks[0]);

    if widget.is_welcome_visible() {
        welcome::draw_welcome(f, chunks[1]);
    } else {
        chat::draw_messages(f, chunks[1], widget);
    }

    widget.status_indicator.update_spinner();
    widget.status_indicator.render(f, chunks[2]);

    chat::draw_input(f, chunks[3], widget);
    footer::draw_footer(f, chunks[4]);
}
