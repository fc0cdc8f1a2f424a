//! Demo story for the file input widget.
//!
//! The story supplies a fixed configuration and a list view of its hint
//! table. It holds no state of its own.

use serde::Serialize;

use crate::config::{ButtonStates, HintKey, HintText, WidgetConfig};

/// Maximum file size used by the default story (5 MB).
pub const STORY_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// A named story: a group title, a variant name and its props.
#[derive(Debug, Clone)]
pub struct Story {
    pub title: &'static str,
    pub name: &'static str,
    pub config: WidgetConfig,
}

impl Default for Story {
    fn default() -> Self {
        Self {
            title: "Components/UiFileInput",
            name: "Default",
            config: default_story_config(),
        }
    }
}

impl Story {
    /// Hint table of this story as display entries.
    pub fn hint_text_list(&self) -> Vec<HintEntry> {
        hint_text_list(&self.config.hint_text)
    }
}

/// One `{key, value}` row of the hint list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintEntry {
    pub key: &'static str,
    pub value: String,
}

/// The props used by the default story.
pub fn default_story_config() -> WidgetConfig {
    WidgetConfig {
        title: "Заголовок компонента".into(),
        default_text: "Выберите файл".into(),
        file_type: "image/".into(),
        max_file_size: STORY_MAX_FILE_SIZE,
        disabled: false,
        hint_text: HintText {
            default: "Подсказка".into(),
            format_error: "Неправильный формат файла.".into(),
            max_size_error: "Максимальный размер файла 5 MB".into(),
        },
        button_states: ButtonStates {
            default: "Выбрать файл".into(),
            upload: "Отменить".into(),
            delete: "Удалить".into(),
        },
    }
}

/// Project a hint table into rows, in declaration order.
pub fn hint_text_list(hints: &HintText) -> Vec<HintEntry> {
    HintKey::ALL
        .iter()
        .map(|&key| HintEntry {
            key: key.as_str(),
            value: hints.get(key).to_string(),
        })
        .collect()
}
