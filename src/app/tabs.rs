//! Tab container for the MAIN flow.
//!
//! The tab host owns the ordered tab list and the selected index. Coordinators
//! never hold references into the host; they address tabs through [`TabId`]
//! handles which the host resolves to indexes, keeping ownership a strict tree.

use crate::domain::TabId;

/// Fixed tab order of the MAIN flow.
const TAB_ORDER: [TabId; 3] = [TabId::Home, TabId::Items, TabId::Settings];

/// The MAIN flow's tab container: ordered tabs plus a selected index.
#[derive(Debug, Clone)]
pub struct TabHost {
    tabs: Vec<TabId>,
    selected: usize,
}

impl Default for TabHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TabHost {
    /// Creates the host with the standard tab order, home selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tabs: TAB_ORDER.to_vec(),
            selected: 0,
        }
    }

    /// Number of tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Index of the currently selected tab.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected tab.
    #[must_use]
    pub fn selected_tab(&self) -> TabId {
        self.tabs[self.selected]
    }

    /// Resolves a tab handle to its index, if the tab is installed.
    #[must_use]
    pub fn index_of(&self, tab: TabId) -> Option<usize> {
        self.tabs.iter().position(|&t| t == tab)
    }

    /// Selects a tab by index.
    ///
    /// An out-of-range index is ignored with a warning; the current selection
    /// is unchanged.
    pub fn select_index(&mut self, index: usize) {
        if index >= self.tabs.len() {
            tracing::warn!(
                index,
                tab_count = self.tabs.len(),
                "invalid tab index ignored"
            );
            return;
        }

        tracing::debug!(index, tab = ?self.tabs[index], "tab selected");
        self.selected = index;
    }

    /// Selects a tab by handle.
    pub fn select_tab(&mut self, tab: TabId) {
        match self.index_of(tab) {
            Some(index) => self.select_index(index),
            None => tracing::warn!(tab = ?tab, "tab not installed, selection unchanged"),
        }
    }
}
