//! Color palettes for the story harness.

use fileinput_core::Validity;
use ratatui::style::{Color, Modifier, Style};

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Semantic
    pub success: Color,
    pub error: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Default dark theme (Catppuccin Mocha).
    pub fn dark() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe

            success: Color::Rgb(166, 227, 161), // #a6e3a1
            error: Color::Rgb(243, 139, 168),   // #f38ba8

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Light theme (Catppuccin Latte).
    pub fn light() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd

            success: Color::Rgb(64, 160, 43), // #40a02b
            error: Color::Rgb(210, 15, 57),   // #d20f39

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            success: Color::Green,
            error: Color::Red,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }

    /// Style for the hint line under the widget.
    pub fn hint_style(&self, validity: Validity) -> Style {
        if validity.is_invalid() {
            Style::default().fg(self.error)
        } else if validity == Validity::Valid {
            Style::default().fg(self.success)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for the button label.
    pub fn button_style(&self, focused: bool, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.muted).add_modifier(Modifier::DIM)
        } else if focused {
            Style::default()
                .fg(self.base)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.primary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let theme = Theme::default();
        assert!(matches!(theme.base, Color::Rgb(30, 30, 46)));
        assert!(matches!(Theme::light().base, Color::Rgb(239, 241, 245)));
        assert!(matches!(Theme::high_contrast().base, Color::Black));
    }

    #[test]
    fn test_hint_style_tracks_validity() {
        let theme = Theme::default();
        assert_eq!(theme.hint_style(Validity::InvalidSize).fg, Some(theme.error));
        assert_eq!(theme.hint_style(Validity::InvalidFormat).fg, Some(theme.error));
        assert_eq!(theme.hint_style(Validity::Unvalidated).fg, Some(theme.muted));
    }

    #[test]
    fn test_disabled_button_is_dimmed() {
        let theme = Theme::default();
        let style = theme.button_style(true, true);
        assert_eq!(style.fg, Some(theme.muted));
        assert!(style.add_modifier.contains(Modifier::DIM));
    }
}
