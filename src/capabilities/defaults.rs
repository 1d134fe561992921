//! Default capability implementations.
//!
//! Lightweight, dependency-free implementations of the capability traits, used
//! by the concrete sessions, the host shim, and tests. They are deliberately
//! simple: in-memory state with interior mutability for the stateful
//! capabilities, `tracing` pass-throughs for the sinks. A real composition root
//! would register persistent or networked implementations instead.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::domain::{Item, Result};

use super::{
    Favorites, FavoritesListener, FeatureToggles, LogLevel, Logger, NetworkClient, Toast,
    ToggleListener,
};

/// Logging sink that forwards to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str, level: LogLevel, category: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(category = %category, "{message}"),
            LogLevel::Info => tracing::info!(category = %category, "{message}"),
            LogLevel::Warn => tracing::warn!(category = %category, "{message}"),
            LogLevel::Error => tracing::error!(category = %category, "{message}"),
        }
    }
}

/// Network capability serving a fixed catalog.
///
/// Stands in for the real transport: the demo application ships its catalog in
/// configuration, and this implementation hands it out on every fetch.
#[derive(Debug, Clone)]
pub struct StaticNetwork {
    catalog: Vec<Item>,
}

impl StaticNetwork {
    /// Creates a network capability serving the given catalog.
    #[must_use]
    pub fn new(catalog: Vec<Item>) -> Self {
        Self { catalog }
    }
}

impl NetworkClient for StaticNetwork {
    fn fetch_catalog(&self) -> Result<Vec<Item>> {
        tracing::debug!(items = self.catalog.len(), "serving static catalog");
        Ok(self.catalog.clone())
    }
}

/// In-memory favorites store with change notifications.
///
/// Session-scoped: a fresh instance is registered by each MAIN session
/// activation, and `reset()` is invoked on teardown before the registry entry
/// is cleared.
#[derive(Default)]
pub struct InMemoryFavorites {
    favorited: RefCell<HashSet<String>>,
    listeners: RefCell<Vec<FavoritesListener>>,
    reset_calls: Cell<usize>,
}

impl InMemoryFavorites {
    /// Creates an empty favorites store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `reset()` has been called on this instance.
    ///
    /// Lets the session-teardown ordering be observed from the outside.
    #[must_use]
    pub fn reset_calls(&self) -> usize {
        self.reset_calls.get()
    }

    fn notify(&self, item_id: &str, favorited: bool) {
        for listener in self.listeners.borrow().iter() {
            listener(item_id, favorited);
        }
    }
}

impl std::fmt::Debug for InMemoryFavorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryFavorites")
            .field("favorited", &self.favorited.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .field("reset_calls", &self.reset_calls.get())
            .finish()
    }
}

impl Favorites for InMemoryFavorites {
    fn is_favorited(&self, item_id: &str) -> bool {
        self.favorited.borrow().contains(item_id)
    }

    fn toggle(&self, item_id: &str) -> bool {
        let now_favorited = {
            let mut favorited = self.favorited.borrow_mut();
            if favorited.remove(item_id) {
                false
            } else {
                favorited.insert(item_id.to_string());
                true
            }
        };

        tracing::debug!(item_id = %item_id, favorited = now_favorited, "favorite toggled");
        self.notify(item_id, now_favorited);
        now_favorited
    }

    fn reset(&self) {
        self.reset_calls.set(self.reset_calls.get() + 1);

        let cleared: Vec<String> = self.favorited.borrow_mut().drain().collect();
        tracing::debug!(cleared = cleared.len(), "favorites reset");

        for item_id in &cleared {
            self.notify(item_id, false);
        }
    }

    fn on_change(&self, listener: FavoritesListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

/// Toast capability that logs instead of rendering.
///
/// Rendering is out of scope for the core; the message is recorded at info
/// level so scripted runs can see what would have been shown.
#[derive(Debug, Default)]
pub struct TracingToast;

impl Toast for TracingToast {
    fn show(&self, message: &str) {
        tracing::info!(toast = %message, "toast shown");
    }
}

/// In-memory feature flag store with change notifications.
#[derive(Default)]
pub struct InMemoryFeatureToggles {
    flags: RefCell<HashMap<String, bool>>,
    listeners: RefCell<Vec<ToggleListener>>,
}

impl InMemoryFeatureToggles {
    /// Creates a toggle store with no flags set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a toggle store pre-populated with the given flag values.
    #[must_use]
    pub fn with_flags(flags: impl IntoIterator<Item = (String, bool)>) -> Self {
        Self {
            flags: RefCell::new(flags.into_iter().collect()),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl std::fmt::Debug for InMemoryFeatureToggles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryFeatureToggles")
            .field("flags", &self.flags.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl FeatureToggles for InMemoryFeatureToggles {
    fn is_enabled(&self, flag: &str) -> bool {
        self.flags.borrow().get(flag).copied().unwrap_or(false)
    }

    fn set_enabled(&self, flag: &str, enabled: bool) {
        let changed = {
            let mut flags = self.flags.borrow_mut();
            flags.insert(flag.to_string(), enabled) != Some(enabled)
        };

        if changed {
            tracing::debug!(flag = %flag, enabled, "feature flag changed");
            for listener in self.listeners.borrow().iter() {
                listener(flag, enabled);
            }
        }
    }

    fn on_change(&self, listener: ToggleListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn toggle_flips_state_and_notifies_listeners() {
        let favorites = InMemoryFavorites::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_by_listener = Rc::clone(&seen);
        favorites.on_change(Box::new(move |id, favorited| {
            seen_by_listener.borrow_mut().push((id.to_string(), favorited));
        }));

        assert!(favorites.toggle("swiftui"));
        assert!(favorites.is_favorited("swiftui"));
        assert!(!favorites.toggle("swiftui"));
        assert!(!favorites.is_favorited("swiftui"));

        assert_eq!(
            *seen.borrow(),
            vec![("swiftui".to_string(), true), ("swiftui".to_string(), false)]
        );
    }

    #[test]
    fn reset_clears_favorites_and_counts_calls() {
        let favorites = InMemoryFavorites::new();
        favorites.toggle("a");
        favorites.toggle("b");

        favorites.reset();

        assert!(!favorites.is_favorited("a"));
        assert!(!favorites.is_favorited("b"));
        assert_eq!(favorites.reset_calls(), 1);
    }

    #[test]
    fn unknown_flag_reads_as_disabled() {
        let toggles = InMemoryFeatureToggles::new();
        assert!(!toggles.is_enabled("dark_mode"));
    }

    #[test]
    fn set_enabled_notifies_only_on_change() {
        let toggles = InMemoryFeatureToggles::new();
        let notifications = Rc::new(Cell::new(0usize));

        let counter = Rc::clone(&notifications);
        toggles.on_change(Box::new(move |_, _| counter.set(counter.get() + 1)));

        toggles.set_enabled("dark_mode", true);
        toggles.set_enabled("dark_mode", true);
        toggles.set_enabled("dark_mode", false);

        assert_eq!(notifications.get(), 2);
        assert!(!toggles.is_enabled("dark_mode"));
    }

    #[test]
    fn static_network_serves_its_catalog() {
        let network = StaticNetwork::new(vec![Item::new("swiftui", "Declarative UI")]);
        let catalog = network.fetch_catalog().expect("static catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "swiftui");
    }
}
