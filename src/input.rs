use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// Multi-line input buffer whose visible height follows its content.
#[derive(Debug, Clone)]
pub struct InputBox {
    text: String,
    width: u16,
    max_rows: u16,
    height: u16,
}

impl InputBox {
    pub fn new(max_rows: u16) -> Self {
        Self {
            text: String::new(),
            width: 80,
            max_rows: max_rows.max(1),
            height: 1,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Rows currently given to the text, between 1 and `max_rows`.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
        self.adjust();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.adjust();
    }

    pub fn backspace(&mut self) {
        self.text.pop();
        self.adjust();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.adjust();
    }

    /// Called by the renderer when the input area changes size.
    pub fn set_width(&mut self, width: u16) {
        if width != self.width {
            self.width = width.max(1);
            self.adjust();
        }
    }

    /// Visual rows of the wrapped text, ignoring the cap.
    pub fn wrapped_lines(&self) -> Vec<String> {
        let width = self.width.max(1) as usize;
        let mut rows = Vec::new();
        for line in self.text.split('\n') {
            let body = line.trim_end();
            let mut line_rows: Vec<String> = if body.is_empty() {
                vec![String::new()]
            } else {
                wrap(body, width).into_iter().map(|l| l.into_owned()).collect()
            };

            // wrap() drops trailing whitespace, but the cursor sits after it
            for c in line[body.len()..].chars() {
                let fits = line_rows
                    .last()
                    .map(|row| UnicodeWidthStr::width(row.as_str()) < width)
                    .unwrap_or(false);
                if !fits {
                    line_rows.push(String::new());
                }
                if let Some(row) = line_rows.last_mut() {
                    row.push(c);
                }
            }
            rows.extend(line_rows);
        }
        rows
    }

    /// Rows that fit in the current height, keeping the end of the text in view.
    pub fn visible_lines(&self) -> Vec<String> {
        let rows = self.wrapped_lines();
        let skip = rows.len().saturating_sub(self.height as usize);
        rows.into_iter().skip(skip).collect()
    }

    /// Cursor offset (column, row) inside the visible area.
    pub fn cursor_offset(&self) -> (u16, u16) {
        let visible = self.visible_lines();
        let row = visible.len().saturating_sub(1) as u16;
        let col = visible
            .last()
            .map(|l| UnicodeWidthStr::width(l.as_str()) as u16)
            .unwrap_or(0);
        (col.min(self.width.saturating_sub(1)), row)
    }

    fn adjust(&mut self) {
        let rows = self.wrapped_lines().len().max(1) as u16;
        self.height = rows.min(self.max_rows);
    }
}
