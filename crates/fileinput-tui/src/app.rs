//! Application state for the story TUI.

use std::path::Path;

use fileinput_core::{
    ButtonAction, ConfigError, FileInputController, SelectedFile, Story, Validity, WidgetConfig,
};

use crate::event::Action;
use crate::router::ViewKind;
use crate::widgets::PathInputState;

/// Ticks a status message stays visible (4 Hz tick rate).
const STATUS_TTL_TICKS: u32 = 16;

/// Where key presses go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys drive the widget button.
    #[default]
    Normal,
    /// Keys edit the path prompt.
    EnteringPath,
}

/// Main application state.
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// View resolved from the route table.
    pub view: ViewKind,

    /// Current input mode.
    pub mode: InputMode,

    /// The widget under demonstration.
    pub controller: FileInputController,

    /// Path being typed while choosing a file.
    pub path_input: PathInputState,

    /// Story group title and variant name.
    pub story_title: &'static str,
    pub story_name: &'static str,

    /// Transient status line message.
    status: Option<String>,
    status_ttl: u32,
}

impl App {
    /// Create a new app for a story.
    pub fn new(story: Story, view: ViewKind) -> Result<Self, ConfigError> {
        Ok(Self {
            should_quit: false,
            show_help: false,
            view,
            mode: InputMode::Normal,
            controller: FileInputController::new(story.config)?,
            path_input: PathInputState::new(),
            story_title: story.title,
            story_name: story.name,
            status: None,
            status_ttl: 0,
        })
    }

    /// Create an app for the default story with a custom config.
    pub fn with_config(config: WidgetConfig, view: ViewKind) -> Result<Self, ConfigError> {
        Self::new(
            Story {
                config,
                ..Story::default()
            },
            view,
        )
    }

    /// Create a test app on the default story.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(Story::default(), ViewKind::Home).expect("default story config is valid")
    }

    /// Current status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_ttl = STATUS_TTL_TICKS;
    }

    /// Advance timers.
    pub fn tick(&mut self) {
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status = None;
            }
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Help if self.mode == InputMode::Normal => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.mode {
            InputMode::Normal => self.handle_normal_action(action),
            InputMode::EnteringPath => self.handle_path_action(action),
        }
    }

    fn handle_normal_action(&mut self, action: Action) {
        match action {
            Action::Press => match self.controller.press_button() {
                ButtonAction::Choose => {
                    self.mode = InputMode::EnteringPath;
                    self.path_input.clear();
                }
                ButtonAction::Clear => self.set_status("Selection cleared"),
                ButtonAction::Inert => self.set_status("Widget is disabled"),
            },
            Action::Clear => {
                self.controller.clear_selection();
            }
            _ => {}
        }
    }

    fn handle_path_action(&mut self, action: Action) {
        match action {
            Action::Back => {
                self.path_input.clear();
                self.mode = InputMode::Normal;
            }
            Action::Submit => {
                let path = self.path_input.take();
                self.mode = InputMode::Normal;
                self.choose_path(Path::new(path.trim()));
            }
            Action::Input(ch) => self.path_input.insert(ch),
            Action::Backspace => self.path_input.backspace(),
            Action::Delete => self.path_input.delete(),
            Action::Left => self.path_input.move_left(),
            Action::Right => self.path_input.move_right(),
            Action::Home => self.path_input.move_home(),
            Action::End => self.path_input.move_end(),
            _ => {}
        }
    }

    /// Read a file from disk and hand it to the controller.
    ///
    /// Failing to read the file leaves the selection untouched.
    pub fn choose_path(&mut self, path: &Path) {
        if path.as_os_str().is_empty() {
            return;
        }
        match SelectedFile::from_path(path) {
            Ok(file) => self.choose_file(file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read file");
                self.set_status(format!("{}: {e}", path.display()));
            }
        }
    }

    /// Hand an in-memory file reference to the controller.
    pub fn choose_file(&mut self, file: SelectedFile) {
        if self.controller.is_disabled() {
            self.set_status("Widget is disabled");
            return;
        }
        let validity = self.controller.select_file(file).validity();
        if validity == Validity::Valid {
            self.set_status("File accepted");
        }
    }
}
