use crate::widget::ChatWidget;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

const PAGE: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    Submit,
    Quit,
    None,
}

pub fn handle_key(key: KeyEvent, widget: &mut ChatWidget) -> WidgetAction {
    if key.kind != KeyEventKind::Press {
        return WidgetAction::None;
    }

    match key.code {
        KeyCode::Enter => {
            // Alt+Enter stands in for terminals that drop Shift on Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
            {
                widget.input_mut().insert_newline();
                WidgetAction::None
            } else {
                WidgetAction::Submit
            }
        }
        KeyCode::Esc => WidgetAction::Quit,
        KeyCode::PageUp => {
            widget.scroll_up(PAGE);
            WidgetAction::None
        }
        KeyCode::PageDown => {
            widget.scroll_down(PAGE);
            WidgetAction::None
        }
        KeyCode::Backspace => {
            widget.input_mut().backspace();
            WidgetAction::None
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => WidgetAction::Quit,
                    _ => WidgetAction::None,
                }
            } else {
                widget.input_mut().insert_char(c);
                WidgetAction::None
            }
        }
        _ => WidgetAction::None,
    }
}

/// Pasted text goes into the input as is, newlines included. Never submits.
pub fn handle_paste(text: &str, widget: &mut ChatWidget) -> WidgetAction {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    widget.input_mut().insert_str(&normalized);
    WidgetAction::None
}

/// A left click on the send button submits, like Enter. The wheel scrolls the log.
pub fn handle_mouse(event: MouseEvent, widget: &mut ChatWidget) -> WidgetAction {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = widget
                .send_button_area
                .map(|area: Rect| area.contains(Position::new(event.column, event.row)))
                .unwrap_or(false);
            if hit {
                WidgetAction::Submit
            } else {
                WidgetAction::None
            }
        }
        MouseEventKind::ScrollUp => {
            widget.scroll_up(1);
            WidgetAction::None
        }
        MouseEventKind::ScrollDown => {
            widget.scroll_down(1);
            WidgetAction::None
        }
        _ => WidgetAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_submits_and_shift_enter_inserts_newline() {
        let mut widget = ChatWidget::new(&Config::default());

        assert_eq!(
            handle_key(key(KeyCode::Enter, KeyModifiers::NONE), &mut widget),
            WidgetAction::Submit
        );
        assert_eq!(
            handle_key(key(KeyCode::Enter, KeyModifiers::SHIFT), &mut widget),
            WidgetAction::None
        );
        assert_eq!(widget.input().value(), "\n");
        assert_eq!(widget.input().height(), 2);
    }

    #[test]
    fn test_typing_edits_input() {
        let mut widget = ChatWidget::new(&Config::default());
        for c in "hey".chars() {
            handle_key(key(KeyCode::Char(c), KeyModifiers::NONE), &mut widget);
        }
        handle_key(key(KeyCode::Char('Y'), KeyModifiers::SHIFT), &mut widget);
        handle_key(key(KeyCode::Backspace, KeyModifiers::NONE), &mut widget);

        assert_eq!(widget.input().value(), "hey");
    }

    #[test]
    fn test_other_combinations_pass_through() {
        let mut widget = ChatWidget::new(&Config::default());
        assert_eq!(
            handle_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL), &mut widget),
            WidgetAction::None
        );
        assert_eq!(
            handle_key(key(KeyCode::Tab, KeyModifiers::NONE), &mut widget),
            WidgetAction::None
        );
        assert!(widget.input().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut widget = ChatWidget::new(&Config::default());
        assert_eq!(
            handle_key(key(KeyCode::Esc, KeyModifiers::NONE), &mut widget),
            WidgetAction::Quit
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut widget),
            WidgetAction::Quit
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut widget = ChatWidget::new(&Config::default());
        let mut release = key(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key(release, &mut widget), WidgetAction::None);
    }

    #[test]
    fn test_click_on_send_button() {
        let mut widget = ChatWidget::new(&Config::default());
        assert_eq!(handle_mouse(click(5, 5), &mut widget), WidgetAction::None);

        widget.send_button_area = Some(Rect::new(70, 20, 10, 3));
        assert_eq!(handle_mouse(click(72, 21), &mut widget), WidgetAction::Submit);
        assert_eq!(handle_mouse(click(5, 21), &mut widget), WidgetAction::None);
    }

    #[test]
    fn test_paste_keeps_newlines_without_submitting() {
        let mut widget = ChatWidget::new(&Config::default());
        assert_eq!(handle_paste("a\nb", &mut widget), WidgetAction::None);
        assert_eq!(widget.input().value(), "a\nb");
        assert_eq!(widget.input().height(), 2);
        assert!(widget.messages().is_empty());
    }

    #[test]
    fn test_paste_normalizes_carriage_returns() {
        let mut widget = ChatWidget::new(&Config::default());
        handle_paste("one\r\ntwo\rthree", &mut widget);
        assert_eq!(widget.input().value(), "one\ntwo\nthree");
    }
}
