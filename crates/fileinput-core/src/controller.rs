//! Selection state machine for the file input widget.
//!
//! State is `phase × validity`, restricted so that a file is held exactly
//! when the phase is [`Phase::FileChosen`]. Selection always records the
//! picked file, including invalid picks, so the error can be shown and the
//! user can cancel. Label and hint are pure projections of the state.

use serde::Serialize;
use std::fmt;

use crate::config::{ButtonState, ConfigError, HintKey, WidgetConfig};
use crate::file::SelectedFile;
use crate::filter::FileTypeFilter;

/// Outcome of validating the chosen file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// No file has been validated.
    #[default]
    Unvalidated,
    /// The file passed both checks.
    Valid,
    /// The declared type is not accepted.
    InvalidFormat,
    /// The file is larger than `maxFileSize`.
    InvalidSize,
}

impl Validity {
    /// Whether this is one of the failure outcomes.
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::InvalidFormat | Self::InvalidSize)
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unvalidated => write!(f, "unvalidated"),
            Self::Valid => write!(f, "valid"),
            Self::InvalidFormat => write!(f, "invalid_format"),
            Self::InvalidSize => write!(f, "invalid_size"),
        }
    }
}

/// Whether a file is currently chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    FileChosen,
}

/// Selection state owned by one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionState {
    selected_file: Option<SelectedFile>,
    validity: Validity,
    phase: Phase,
}

impl SelectionState {
    /// The initial `(Idle, Unvalidated)` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen file, set exactly when the phase is `FileChosen`.
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn chosen(file: SelectedFile, validity: Validity) -> Self {
        Self {
            selected_file: Some(file),
            validity,
            phase: Phase::FileChosen,
        }
    }
}

/// What a button press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Nothing chosen: the caller should open a picker.
    Choose,
    /// The selection was cleared.
    Clear,
    /// The widget is disabled.
    Inert,
}

/// Validate a file against the configured type and size constraints.
///
/// The type check runs first, so a file failing both reports `InvalidFormat`.
pub fn validate(file: &SelectedFile, config: &WidgetConfig) -> Validity {
    let type_ok = FileTypeFilter::parse(&config.file_type).matches(&file.mime_type);
    let size_ok = file.size <= config.max_file_size;

    match (type_ok, size_ok) {
        (false, _) => Validity::InvalidFormat,
        (true, false) => Validity::InvalidSize,
        (true, true) => Validity::Valid,
    }
}

/// Apply a selection event.
///
/// A disabled widget returns the prior state untouched.
pub fn select_file(
    state: &SelectionState,
    file: SelectedFile,
    config: &WidgetConfig,
) -> SelectionState {
    if config.disabled {
        tracing::warn!(file = %file.name, "Selection ignored: widget is disabled");
        return state.clone();
    }

    let validity = validate(&file, config);
    tracing::debug!(
        file = %file.name,
        mime = %file.mime_type,
        size = file.size,
        %validity,
        "File selected"
    );
    SelectionState::chosen(file, validity)
}

/// Reset to `(Idle, Unvalidated)`. Not gated by `disabled`.
pub fn clear_selection() -> SelectionState {
    tracing::debug!("Selection cleared");
    SelectionState::new()
}

/// Which button label applies to a state.
pub fn button_state(state: &SelectionState) -> ButtonState {
    match (state.phase, state.validity) {
        (Phase::Idle, _) => ButtonState::Default,
        (Phase::FileChosen, Validity::Valid) => ButtonState::Delete,
        (Phase::FileChosen, _) => ButtonState::Upload,
    }
}

/// Which hint applies to a state.
pub fn hint_key(state: &SelectionState) -> HintKey {
    match state.validity {
        Validity::InvalidFormat => HintKey::FormatError,
        Validity::InvalidSize => HintKey::MaxSizeError,
        Validity::Unvalidated | Validity::Valid => HintKey::Default,
    }
}

/// Button label for a state.
pub fn current_button_label<'a>(state: &SelectionState, config: &'a WidgetConfig) -> &'a str {
    config.button_states.get(button_state(state))
}

/// Hint message for a state.
pub fn current_hint<'a>(state: &SelectionState, config: &'a WidgetConfig) -> &'a str {
    config.hint_text.get(hint_key(state))
}

/// Chosen file's name, or the placeholder when idle.
pub fn display_text<'a>(state: &'a SelectionState, config: &'a WidgetConfig) -> &'a str {
    state
        .selected_file()
        .map_or(config.default_text.as_str(), |f| f.name.as_str())
}

/// One widget instance: its configuration plus its selection state.
#[derive(Debug, Clone)]
pub struct FileInputController {
    config: WidgetConfig,
    state: SelectionState,
}

impl FileInputController {
    /// Create a widget instance in the idle state.
    ///
    /// Fails if the config breaks a constraint checked by
    /// [`WidgetConfig::validate`].
    pub fn new(config: WidgetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SelectionState::new(),
        })
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Select a file and return the new state.
    pub fn select_file(&mut self, file: SelectedFile) -> &SelectionState {
        self.state = select_file(&self.state, file, &self.config);
        &self.state
    }

    /// Clear the selection and return the new state.
    pub fn clear_selection(&mut self) -> &SelectionState {
        self.state = clear_selection();
        &self.state
    }

    /// Press the three-state button.
    ///
    /// With no file chosen this asks the caller to open a picker; with a
    /// file chosen (valid or not) it clears the selection.
    pub fn press_button(&mut self) -> ButtonAction {
        if self.config.disabled {
            return ButtonAction::Inert;
        }
        match self.state.phase {
            Phase::Idle => ButtonAction::Choose,
            Phase::FileChosen => {
                self.clear_selection();
                ButtonAction::Clear
            }
        }
    }

    pub fn button_label(&self) -> &str {
        current_button_label(&self.state, &self.config)
    }

    pub fn hint(&self) -> &str {
        current_hint(&self.state, &self.config)
    }

    pub fn display_text(&self) -> &str {
        display_text(&self.state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::default_story_config;

    fn config() -> WidgetConfig {
        default_story_config()
    }

    fn png(size: u64) -> SelectedFile {
        SelectedFile::new("photo.png", "image/png", size)
    }

    fn text(size: u64) -> SelectedFile {
        SelectedFile::new("notes.txt", "text/plain", size)
    }

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.validity(), Validity::Unvalidated);
        assert!(state.selected_file().is_none());
    }

    #[test]
    fn test_valid_image() {
        let config = config();
        let state = select_file(&SelectionState::new(), png(1024), &config);
        assert_eq!(state.validity(), Validity::Valid);
        assert_eq!(state.phase(), Phase::FileChosen);
        assert_eq!(current_button_label(&state, &config), "Удалить");
        assert_eq!(current_hint(&state, &config), config.hint_text.default);
    }

    #[test]
    fn test_wrong_format() {
        let config = config();
        let state = select_file(&SelectionState::new(), text(1024), &config);
        assert_eq!(state.validity(), Validity::InvalidFormat);
        assert_eq!(current_hint(&state, &config), config.hint_text.format_error);
        assert_eq!(current_button_label(&state, &config), "Отменить");
    }

    #[test]
    fn test_too_large() {
        let config = config();
        let state = select_file(&SelectionState::new(), png(10_000_000), &config);
        assert_eq!(state.validity(), Validity::InvalidSize);
        assert_eq!(current_hint(&state, &config), config.hint_text.max_size_error);
        assert_eq!(current_button_label(&state, &config), "Отменить");
    }

    #[test]
    fn test_format_checked_before_size() {
        let config = config();
        let state = select_file(&SelectionState::new(), text(10_000_000), &config);
        assert_eq!(state.validity(), Validity::InvalidFormat);
    }

    #[test]
    fn test_size_boundary_is_inclusive() {
        let config = config();
        assert_eq!(validate(&png(config.max_file_size), &config), Validity::Valid);
        assert_eq!(
            validate(&png(config.max_file_size + 1), &config),
            Validity::InvalidSize
        );
    }

    #[test]
    fn test_invalid_pick_is_kept() {
        let config = config();
        let state = select_file(&SelectionState::new(), text(10), &config);
        assert_eq!(state.selected_file(), Some(&text(10)));
        assert_eq!(display_text(&state, &config), "notes.txt");
    }

    #[test]
    fn test_reselect_revalidates() {
        let config = config();
        let first = select_file(&SelectionState::new(), text(10), &config);
        let second = select_file(&first, png(10), &config);
        assert_eq!(second.validity(), Validity::Valid);
        assert_eq!(second.selected_file().map(|f| f.name.as_str()), Some("photo.png"));

        let third = select_file(&second, png(10_000_000), &config);
        assert_eq!(third.validity(), Validity::InvalidSize);
    }

    #[test]
    fn test_disabled_select_is_noop() {
        let mut config = config();
        config.disabled = true;

        let idle = SelectionState::new();
        assert_eq!(select_file(&idle, png(10), &config), idle);

        let mut enabled = config.clone();
        enabled.disabled = false;
        let chosen = select_file(&idle, text(10), &enabled);
        assert_eq!(select_file(&chosen, png(10), &config), chosen);
    }

    #[test]
    fn test_clear_from_any_state() {
        for file in [None, Some(png(10)), Some(text(10)), Some(png(10_000_000))] {
            let mut controller = FileInputController::new(config()).unwrap();
            if let Some(file) = file {
                controller.select_file(file);
            }
            assert_eq!(controller.clear_selection(), &SelectionState::new());
            assert!(controller.state().selected_file().is_none());
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut controller = FileInputController::new(config()).unwrap();
        controller.select_file(png(10));
        let once = controller.clear_selection().clone();
        let twice = controller.clear_selection().clone();
        assert_eq!(once, twice);
        assert_eq!(twice.phase(), Phase::Idle);
    }

    #[test]
    fn test_projections_are_pure() {
        let config = config();
        let state = select_file(&SelectionState::new(), text(10), &config);
        assert_eq!(current_hint(&state, &config), current_hint(&state, &config));
        assert_eq!(current_button_label(&state, &config), current_button_label(&state, &config));
    }

    #[test]
    fn test_idle_projections() {
        let config = config();
        let state = SelectionState::new();
        assert_eq!(button_state(&state), ButtonState::Default);
        assert_eq!(hint_key(&state), HintKey::Default);
        assert_eq!(current_button_label(&state, &config), "Выбрать файл");
        assert_eq!(display_text(&state, &config), "Выберите файл");
    }

    #[test]
    fn test_press_button_cycle() {
        let mut controller = FileInputController::new(config()).unwrap();
        assert_eq!(controller.press_button(), ButtonAction::Choose);
        assert_eq!(controller.state().phase(), Phase::Idle);

        controller.select_file(text(10));
        assert_eq!(controller.button_label(), "Отменить");
        assert_eq!(controller.press_button(), ButtonAction::Clear);
        assert_eq!(controller.state(), &SelectionState::new());
        assert_eq!(controller.button_label(), "Выбрать файл");
    }

    #[test]
    fn test_press_button_disabled() {
        let mut config = config();
        config.disabled = true;
        let mut controller = FileInputController::new(config).unwrap();
        assert!(controller.is_disabled());
        assert_eq!(controller.press_button(), ButtonAction::Inert);
    }

    #[test]
    fn test_controller_rejects_zero_max_size() {
        let mut config = config();
        config.max_file_size = 0;
        let err = FileInputController::new(config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxFileSize));
    }

    #[test]
    fn test_controller_rejects_blank_file_type() {
        let mut config = config();
        config.file_type = " ".into();
        let err = FileInputController::new(config).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFileType));
    }

    #[test]
    fn test_is_invalid() {
        assert!(Validity::InvalidFormat.is_invalid());
        assert!(Validity::InvalidSize.is_invalid());
        assert!(!Validity::Valid.is_invalid());
        assert!(!Validity::Unvalidated.is_invalid());
    }
}
