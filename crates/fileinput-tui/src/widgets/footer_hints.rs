//! Footer bar widget.
//!
//! Format: `status message            [Enter] choose │ [q] quit`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::app::InputMode;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Enter", "Ctrl+C").
    pub key: String,
    /// The action description (e.g., "choose", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer bar: status message on the left, key hints on the right.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    status: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            status: None,
        }
    }

    /// Set the status message shown on the left.
    #[must_use]
    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    /// Hints for the given input mode.
    pub fn for_mode(mode: InputMode) -> Vec<KeyHint> {
        match mode {
            InputMode::Normal => vec![
                KeyHint::new("Enter", "press"),
                KeyHint::new("c", "clear"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ],
            InputMode::EnteringPath => vec![
                KeyHint::new("Enter", "select"),
                KeyHint::new("Esc", "cancel"),
            ],
        }
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(status) = self.status {
            left_spans.push(Span::styled(status, Style::default().fg(self.theme.subtext)));
        }

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.key, Style::default().fg(self.theme.primary)));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.action, Style::default().fg(self.theme.subtext)));
        }

        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
        let padding = (area.width as usize).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_footer_layout() {
        let theme = Theme::default();
        let hints = FooterHints::for_mode(InputMode::EnteringPath);
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme)
            .status(Some("ready"))
            .render(area, &mut buf);

        let out = buffer_to_string(&buf);
        assert!(out.starts_with("ready"));
        assert!(out.ends_with("[Enter] select │ [Esc] cancel"));
    }

    #[test]
    fn test_mode_hints() {
        let normal = FooterHints::for_mode(InputMode::Normal);
        assert_eq!(normal[0], KeyHint::new("Enter", "press"));
        assert_eq!(FooterHints::for_mode(InputMode::EnteringPath).len(), 2);
    }
}
