//! Home screen: the file input story.
//!
//! ```text
//! ┌ Components/UiFileInput ─────────────┐
//! │ Default                             │
//! │ ┌Заголовок компонента────────────┐  │
//! │ │Выберите файл                   │  │
//! │ │                                │  │
//! │ │[ Выбрать файл ]                │  │
//! │ │Подсказка                       │  │
//! │ └────────────────────────────────┘  │
//! │ ┌ Path ──────────────────────────┐  │
//! │ │> █                             │  │
//! │ └────────────────────────────────┘  │
//! │ HintText                            │
//! │ default: Подсказка                  │
//! └─────────────────────────────────────┘
//!  status               [Enter] press │ ...
//! ```

use fileinput_core::hint_text_list;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Screen;
use crate::app::{App, InputMode};
use crate::layout::main_layout;
use crate::theme::Theme;
use crate::widgets::{FileInput, FooterHints, HintList, PathPrompt, FILE_INPUT_HEIGHT};

/// Height of the path prompt, borders included.
const PROMPT_HEIGHT: u16 = 3;

/// Widest the file input is allowed to grow.
const MAX_WIDGET_WIDTH: u16 = 60;

/// Story screen with the widget, its path prompt and the hint table.
pub struct HomeScreen<'a> {
    theme: &'a Theme,
}

impl<'a> HomeScreen<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Screen for HomeScreen<'_> {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main, footer) = main_layout(area);

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(app.view.title())
            .title_style(Style::default().fg(self.theme.primary));
        let inner = frame.inner(main);
        frame.render(main, buf);

        let prompt_height = if app.mode == InputMode::EnteringPath {
            PROMPT_HEIGHT
        } else {
            0
        };
        let entries = hint_text_list(&app.controller.config().hint_text);
        let hint_list = HintList::new(&entries, self.theme);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(FILE_INPUT_HEIGHT),
                Constraint::Length(prompt_height),
                Constraint::Length(1),
                Constraint::Min(hint_list.height()),
            ])
            .split(inner);

        Paragraph::new(app.story_name)
            .style(
                Style::default()
                    .fg(self.theme.subtext)
                    .add_modifier(Modifier::ITALIC),
            )
            .render(rows[0], buf);

        let widget_area = Rect {
            width: rows[1].width.min(MAX_WIDGET_WIDTH),
            ..rows[1]
        };
        FileInput::new(&app.controller, self.theme)
            .focused(app.mode == InputMode::Normal)
            .render(widget_area, buf);

        if app.mode == InputMode::EnteringPath {
            let prompt_area = Rect {
                width: rows[2].width.min(MAX_WIDGET_WIDTH),
                ..rows[2]
            };
            PathPrompt::new(&app.path_input, self.theme).render(prompt_area, buf);
        }

        hint_list.render(rows[4], buf);

        let hints = FooterHints::for_mode(app.mode);
        FooterHints::new(&hints, self.theme)
            .status(app.status())
            .render(footer, buf);
    }
}
