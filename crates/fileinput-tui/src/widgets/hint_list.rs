//! Hint table list view.
//!
//! Shows every configured hint as a `key: value` row under a `HintText`
//! heading, independent of the widget's current state.

use fileinput_core::HintEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// List of hint table entries.
pub struct HintList<'a> {
    entries: &'a [HintEntry],
    theme: &'a Theme,
}

impl<'a> HintList<'a> {
    pub fn new(entries: &'a [HintEntry], theme: &'a Theme) -> Self {
        Self { entries, theme }
    }

    /// Rows needed to show every entry plus the heading.
    #[allow(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        self.entries.len() as u16 + 1
    }
}

impl Widget for HintList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(Line::from(Span::styled(
            "HintText",
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD),
        )));

        for entry in self.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", entry.key),
                    Style::default()
                        .fg(self.theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(entry.value.as_str(), Style::default().fg(self.theme.subtext)),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
