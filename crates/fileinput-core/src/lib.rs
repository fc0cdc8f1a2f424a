//! fileinput-core: Headless logic for the file input widget
//!
//! This crate provides everything that does not touch a terminal:
//! - Widget configuration and its JSON form
//! - File references and accepted-type matching
//! - The selection state machine with its label and hint projections
//! - The demo story props
//! - The route table with lazily loaded views

pub mod config;
pub mod controller;
pub mod file;
pub mod filter;
pub mod routes;
pub mod story;

// Re-export commonly used types
pub use config::{ButtonState, ButtonStates, ConfigError, HintKey, HintText, WidgetConfig};
pub use controller::{
    button_state, clear_selection, current_button_label, current_hint, display_text, hint_key,
    select_file, validate, ButtonAction, FileInputController, Phase, SelectionState, Validity,
};
pub use file::{FileError, SelectedFile};
pub use filter::FileTypeFilter;
pub use routes::{ComponentLoader, RouteDescriptor, RouteError, RouteMeta, RouteTable};
pub use story::{default_story_config, hint_text_list, HintEntry, Story};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
