//! Cursor and scroll for the notes pad. The text itself belongs to the
//! shell; every method here edits the buffer it is handed.

use crate::util::unicode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesPanel {
    /// Byte offset into the note text
    pub cursor: usize,
    /// First visible line
    pub scroll: usize,
    /// Column to return to when moving between lines of different length
    sticky_col: Option<usize>,
}

/// (line index, byte offset of line start) for the line holding `offset`
fn line_start(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count();
    let start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, start)
}

fn line_end(text: &str, start: usize) -> usize {
    text[start..].find('\n').map_or(text.len(), |i| start + i)
}

impl NotesPanel {
    /// Cursor as (line, display column)
    pub fn position(&self, text: &str) -> (usize, usize) {
        let cursor = self.cursor.min(text.len());
        let (line, start) = line_start(text, cursor);
        (line, unicode::col_of(&text[start..], cursor - start))
    }

    /// Put the cursor back inside the text, e.g. after a reload
    pub fn clamp(&mut self, text: &str) {
        self.cursor = self.cursor.min(text.len());
        while !text.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    pub fn insert(&mut self, text: &mut String, c: char) {
        self.clamp(text);
        let c = if c == '\r' { '\n' } else { c };
        text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.sticky_col = None;
    }

    pub fn insert_str(&mut self, text: &mut String, s: &str) {
        self.clamp(text);
        let s = s.replace("\r\n", "\n").replace('\r', "\n");
        text.insert_str(self.cursor, &s);
        self.cursor += s.len();
        self.sticky_col = None;
    }

    /// Returns whether the text changed
    pub fn backspace(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        self.sticky_col = None;
        match unicode::prev_boundary(text, self.cursor) {
            Some(prev) => {
                text.replace_range(prev..self.cursor, "");
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    /// Returns whether the text changed
    pub fn delete(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        self.sticky_col = None;
        match unicode::next_boundary(text, self.cursor) {
            Some(next) => {
                text.replace_range(self.cursor..next, "");
                true
            }
            None => false,
        }
    }

    pub fn left(&mut self, text: &str) {
        self.clamp(text);
        self.sticky_col = None;
        if let Some(prev) = unicode::prev_boundary(text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self, text: &str) {
        self.clamp(text);
        self.sticky_col = None;
        if let Some(next) = unicode::next_boundary(text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self, text: &str) {
        self.clamp(text);
        self.sticky_col = None;
        self.cursor = line_start(text, self.cursor).1;
    }

    pub fn end(&mut self, text: &str) {
        self.clamp(text);
        self.sticky_col = None;
        let start = line_start(text, self.cursor).1;
        self.cursor = line_end(text, start);
    }

    pub fn up(&mut self, text: &str) {
        self.clamp(text);
        let (_, start) = line_start(text, self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let col = self.goal_col(text);
        let prev_start = line_start(text, start - 1).1;
        self.cursor = prev_start + unicode::offset_at_col(&text[prev_start..start - 1], col);
        self.sticky_col = Some(col);
    }

    pub fn down(&mut self, text: &str) {
        self.clamp(text);
        let (_, start) = line_start(text, self.cursor);
        let end = line_end(text, start);
        if end == text.len() {
            self.cursor = end;
            return;
        }
        let col = self.goal_col(text);
        let next_start = end + 1;
        let next_end = line_end(text, next_start);
        self.cursor = next_start + unicode::offset_at_col(&text[next_start..next_end], col);
        self.sticky_col = Some(col);
    }

    fn goal_col(&self, text: &str) -> usize {
        self.sticky_col.unwrap_or_else(|| self.position(text).1)
    }

    /// Keep the cursor line within a viewport of `height` lines
    pub fn scroll_to_cursor(&mut self, text: &str, height: usize) {
        let (line, _) = self.position(text);
        let height = height.max(1);
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }
}
