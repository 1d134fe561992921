//! Logical screen identities.
//!
//! A [`Screen`] names what a navigation entry *is*, together with any payload
//! the screen needs (the detail screen's item id). The payload-free
//! [`ScreenKind`] tag is what the guard compares for duplicate-push
//! suppression: "don't push the same kind of screen twice in a row" is a
//! statement about logical identity, not about instances.

use serde::{Deserialize, Serialize};

/// A logical screen in the coordinator tree's navigation stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Root of the LOGIN flow's stack.
    Login,
    /// Root of the home tab.
    Home,
    /// Root of the items tab.
    Items,
    /// Root of the settings tab.
    Settings,
    /// Detail screen for one catalog item.
    Detail { item_id: String },
    /// Profile screen, presented modally from the home tab.
    Profile,
}

impl Screen {
    /// The payload-free tag for this screen.
    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Login => ScreenKind::Login,
            Self::Home => ScreenKind::Home,
            Self::Items => ScreenKind::Items,
            Self::Settings => ScreenKind::Settings,
            Self::Detail { .. } => ScreenKind::Detail,
            Self::Profile => ScreenKind::Profile,
        }
    }
}

/// Payload-free screen tag used for duplicate-push suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Login,
    Home,
    Items,
    Settings,
    Detail,
    Profile,
}
