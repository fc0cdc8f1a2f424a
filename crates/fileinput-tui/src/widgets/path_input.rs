//! Path prompt used to choose a file.
//!
//! A terminal has no native file dialog, so choosing a file means typing
//! its path. [`PathInputState`] owns the text and cursor; [`PathPrompt`]
//! renders it on one line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

/// Single-line text state. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct PathInputState {
    content: String,
    cursor: usize,
}

impl PathInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, clearing the state.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let idx = self.byte_index(self.cursor);
        self.content.insert_str(idx, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }
}

/// One-line prompt widget for a [`PathInputState`].
pub struct PathPrompt<'a> {
    input: &'a PathInputState,
    theme: &'a Theme,
}

impl<'a> PathPrompt<'a> {
    pub fn new(input: &'a PathInputState, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for PathPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .title(" Path ");

        let chars: Vec<char> = self.input.content().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let after: String = chars[cursor..].iter().collect();

        let line = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.primary)),
            Span::styled(before, Style::default().fg(self.theme.text)),
            Span::styled("█", Style::default().fg(self.theme.primary)),
            Span::styled(after, Style::default().fg(self.theme.text)),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_editing() {
        let mut state = PathInputState::new();
        assert!(state.is_empty());

        state.insert_str("/tmp/a.png");
        assert_eq!(state.cursor(), 10);

        state.move_left();
        state.move_left();
        state.move_left();
        state.move_left();
        state.insert('b');
        assert_eq!(state.content(), "/tmp/ab.png");

        state.backspace();
        assert_eq!(state.content(), "/tmp/a.png");

        state.move_home();
        state.delete();
        assert_eq!(state.content(), "tmp/a.png");

        state.move_end();
        assert_eq!(state.cursor(), 9);
        assert_eq!(state.take(), "tmp/a.png");
        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut state = PathInputState::new();
        state.insert_str("фото.png");
        state.move_home();
        state.move_right();
        state.delete();
        assert_eq!(state.content(), "фто.png");
        state.backspace();
        assert_eq!(state.content(), "то.png");
        state.move_left();
        state.backspace();
        assert_eq!(state.content(), "то.png");
    }

    #[test]
    fn test_prompt_render() {
        let mut state = PathInputState::new();
        state.insert_str("a.png");
        state.move_left();

        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        PathPrompt::new(&state, &theme).render(area, &mut buf);

        let out = buffer_to_string(&buf);
        assert!(out.contains("> a.pn█g"));
        assert!(out.contains("Path"));
    }
}
