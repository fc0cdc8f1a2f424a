//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`FileInput`] - The file input widget itself
//! - [`HintList`] - List view of the hint table
//! - [`PathPrompt`] / [`PathInputState`] - Path entry for choosing a file
//! - [`FooterHints`] - Bottom status and keybinding hints

mod file_input;
mod footer_hints;
mod hint_list;
mod path_input;

pub use file_input::{FileInput, FILE_INPUT_HEIGHT};
pub use footer_hints::{FooterHints, KeyHint};
pub use hint_list::HintList;
pub use path_input::{PathInputState, PathPrompt};
