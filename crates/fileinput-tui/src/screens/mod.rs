//! Screen definitions for the story TUI.

pub mod home;

use crate::app::App;
use crate::layout::centered_fixed;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let help_text = r"
  Widget
    Enter / Space     Press the button
    c / Delete        Clear the selection
    ?                 Toggle this help
    q / Ctrl+C        Quit

  Path prompt
    Enter             Select the typed path
    Esc               Cancel

  [Press any key to close]
";

    let width = 44.min(area.width.saturating_sub(4));
    let height = 15.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(theme.primary))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));

    Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(theme.text))
        .render(overlay_area, buf);
}
