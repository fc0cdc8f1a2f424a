//! File input widget.
//!
//! Renders one [`FileInputController`]: title in the border, the chosen
//! file (or the placeholder), the three-state button and the hint line.
//!
//! ```text
//! ┌Заголовок компонента──────────┐
//! │photo.png (1.0 KB)            │
//! │                              │
//! │[ Удалить ]                   │
//! │Подсказка                     │
//! └──────────────────────────────┘
//! ```

use fileinput_core::FileInputController;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::Theme;

/// Rows the widget needs, borders included.
pub const FILE_INPUT_HEIGHT: u16 = 6;

/// File input widget bound to a controller.
pub struct FileInput<'a> {
    controller: &'a FileInputController,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> FileInput<'a> {
    /// Create a new file input widget.
    pub fn new(controller: &'a FileInputController, theme: &'a Theme) -> Self {
        Self {
            controller,
            theme,
            focused: false,
        }
    }

    /// Set whether the button has focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let state = self.controller.state();
        let disabled = self.controller.is_disabled();

        let file_line = match state.selected_file() {
            Some(file) => Line::from(vec![
                Span::styled(file.name.clone(), Style::default().fg(self.theme.text)),
                Span::styled(
                    format!(" ({})", file.human_size()),
                    Style::default().fg(self.theme.subtext),
                ),
            ]),
            None => Line::from(Span::styled(
                self.controller.display_text(),
                Style::default().fg(self.theme.muted),
            )),
        };

        let button_line = Line::from(Span::styled(
            format!("[ {} ]", self.controller.button_label()),
            self.theme.button_style(self.focused, disabled),
        ));

        let hint_line = Line::from(Span::styled(
            self.controller.hint(),
            self.theme.hint_style(state.validity()),
        ));

        vec![file_line, Line::default(), button_line, hint_line]
    }
}

impl Widget for FileInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused && !self.controller.is_disabled() {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(self.controller.config().title.as_str())
            .title_style(Style::default().fg(self.theme.primary));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
