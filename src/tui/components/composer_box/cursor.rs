//! Cursor position tracking for the ComposerBox.
//!
//! `CursorState` owns the cursor byte offset and scroll offset. The text is
//! owned by the composer, so every method takes `buffer: &str` explicitly.

use super::text_wrap::{
    BORDER_OFFSET, inner_width, next_char_boundary, prev_char_boundary, wrap_line_count,
    wrap_options,
};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Reset cursor to start (used after a send clears the draft).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Keep `pos` inside `buffer` and on a char boundary.
    pub fn clamp(&mut self, buffer: &str) {
        self.pos = self.pos.min(buffer.len());
        while !buffer.is_char_boundary(self.pos) {
            self.pos -= 1;
        }
    }

    pub fn left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    pub fn right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    pub fn home(&mut self, buffer: &str) -> bool {
        let line_start = buffer[..self.pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let moved = self.pos != line_start;
        self.pos = line_start;
        moved
    }

    pub fn end(&mut self, buffer: &str) -> bool {
        let line_end = buffer[self.pos..]
            .find('\n')
            .map(|i| self.pos + i)
            .unwrap_or(buffer.len());
        let moved = self.pos != line_end;
        self.pos = line_end;
        moved
    }

    /// Calculate which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);

        // If cursor is right after a newline that textwrap didn't represent, add one
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line = cursor_line.saturating_add(1);
        }

        cursor_line
    }

    /// Update scroll offset to keep the cursor inside `visible_lines` rows.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16, visible_lines: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);
        let visible_lines = visible_lines.max(1);

        if total_lines <= visible_lines {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset.saturating_add(visible_lines) {
            self.scroll_offset = cursor_line.saturating_sub(visible_lines - 1);
        }
    }

    /// Calculate screen position for cursor based on wrapped text layout.
    /// Returns (column, row) in screen coordinates.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let options = wrap_options(width);
        let text_before_cursor = &buffer[..self.pos];
        let cursor_line = self.calculate_line(buffer, area.width);

        // Count display columns from the last newline; textwrap trims trailing
        // whitespace, so the wrapped segment length can't be used directly.
        let last_newline = text_before_cursor
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let logical_line_to_cursor = &text_before_cursor[last_newline..];
        let logical_line_wrapped = textwrap::wrap(logical_line_to_cursor, options);

        let cursor_col = if logical_line_wrapped.is_empty() {
            0
        } else {
            let width_in_prev_segments: usize = logical_line_wrapped
                .iter()
                .take(logical_line_wrapped.len() - 1)
                .map(|seg| seg.width())
                .sum();

            let total = logical_line_to_cursor.width();
            u16::try_from(total.saturating_sub(width_in_prev_segments)).unwrap_or(u16::MAX)
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        let screen_col = (area.x + BORDER_OFFSET).saturating_add(cursor_col);
        let screen_row = (area.y + BORDER_OFFSET).saturating_add(visible_line);

        (screen_col, screen_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_right_respect_multibyte() {
        let buffer = "aé";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        assert!(cursor.left(buffer));
        assert_eq!(cursor.pos, 1);
        assert!(cursor.right(buffer));
        assert_eq!(cursor.pos, 3);
        assert!(!cursor.right(buffer));
    }

    #[test]
    fn home_end_stay_on_logical_line() {
        let buffer = "one\ntwo";
        let mut cursor = CursorState::new();
        cursor.pos = 5;
        assert!(cursor.home(buffer));
        assert_eq!(cursor.pos, 4);
        assert!(cursor.end(buffer));
        assert_eq!(cursor.pos, 7);
        assert!(!cursor.end(buffer));
    }

    #[test]
    fn clamp_pulls_back_into_buffer() {
        let mut cursor = CursorState::new();
        cursor.pos = 10;
        cursor.clamp("é");
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn line_after_trailing_newline() {
        let buffer = "a\n";
        let mut cursor = CursorState::new();
        cursor.pos = 2;
        assert_eq!(cursor.calculate_line(buffer, 40), 1);
    }

    #[test]
    fn scroll_follows_cursor() {
        let buffer = "1\n2\n3\n4\n5";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(buffer, 40, 2);
        assert_eq!(cursor.scroll_offset, 3);
        cursor.pos = 0;
        cursor.update_scroll_offset(buffer, 40, 2);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn line_saturates_on_huge_paste() {
        let buffer = "\n".repeat(70_000);
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        assert_eq!(cursor.calculate_line(&buffer, 40), u16::MAX);
    }

    #[test]
    fn screen_pos_accounts_for_border() {
        let buffer = "ab\ncd";
        let mut cursor = CursorState::new();
        cursor.pos = 4;
        let area = Rect::new(0, 10, 40, 4);
        assert_eq!(cursor.screen_pos(buffer, area), (2, 12));
    }
}
