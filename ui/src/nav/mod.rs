//! Site navigation: the link model, the header's local state and the
//! `NavigationHeader` component itself.

mod burger;
mod header;
mod icons;
mod state;

pub use header::{NavigationHeader, HEADER_HEIGHT, MENU_PATH};
pub use state::HeaderState;

use serde::Deserialize;

/// One entry of the navigation bar.
///
/// Also accepts the `{ link, label, links }` shape used by older site
/// configs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    /// Route the entry navigates to. Used as the render key, so it should be
    /// unique within one list.
    #[serde(alias = "link")]
    pub path: String,
    pub label: String,
    /// Nested entries. Accepted for config compatibility but never rendered.
    #[serde(default, alias = "links")]
    pub children: Vec<NavLink>,
}

impl NavLink {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }
}
