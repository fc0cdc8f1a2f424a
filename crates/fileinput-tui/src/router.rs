//! Application routes.
//!
//! Maps URL-style paths to the views the TUI can show. Views are resolved
//! through their loader when navigated to, not when the table is built.

use fileinput_core::{ComponentLoader, RouteDescriptor, RouteTable};

/// Path the TUI opens on startup.
pub const HOME_PATH: &str = "/";

/// Views the TUI can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The file input story.
    Home,
}

impl ViewKind {
    /// Pane title for this view.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => " Components/UiFileInput ",
        }
    }
}

/// The application route table.
pub fn default_routes() -> RouteTable<ViewKind> {
    RouteTable::new().with(RouteDescriptor::new(
        HOME_PATH,
        "Home",
        ComponentLoader::new(|| async { Ok(ViewKind::Home) }),
        "Default",
    ))
}
