//! Capability interfaces consumed through the registry.
//!
//! This module defines the narrow trait seams behind which all external
//! collaborators live: logging, network fetch, favorites, toast notifications,
//! and feature toggles. The coordinator core only ever talks to these traits;
//! production implementations (persistent stores, real transports) are supplied
//! by the composition root and are out of scope here.
//!
//! # Design Philosophy
//!
//! Each trait is minimal and focused on the operations the core actually needs,
//! not a generic service framework. Per the crate's single-threaded cooperative
//! model, implementations use interior mutability (`RefCell`) rather than
//! locks, and instances are shared as `Rc` trait objects.
//!
//! # Organization
//!
//! - Trait definitions live here
//! - [`defaults`]: lightweight in-memory/tracing-backed implementations used by
//!   the concrete sessions, the host shim, and tests

pub mod defaults;

pub use defaults::{
    InMemoryFavorites, InMemoryFeatureToggles, StaticNetwork, TracingLogger, TracingToast,
};

use crate::domain::{Item, Result};

/// Severity level for capability-routed log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Logging sink capability.
///
/// Screen-level state holders route their diagnostics through this interface;
/// the core itself logs via `tracing` directly and only registers a sink so the
/// rest of the application has one.
pub trait Logger {
    /// Records one log message under a category (typically the emitting screen).
    fn log(&self, message: &str, level: LogLevel, category: &str);
}

/// Network fetch capability.
///
/// The core consumes exactly one operation: producing the item catalog that
/// deep-link item ids resolve against. Transport, caching, and decoding are
/// implementation concerns behind this seam.
pub trait NetworkClient {
    /// Fetches the current item catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be produced.
    fn fetch_catalog(&self) -> Result<Vec<Item>>;
}

/// Listener invoked when an item's favorited state changes.
///
/// Receives the item id and its new state.
pub type FavoritesListener = Box<dyn Fn(&str, bool)>;

/// User-favorites capability with change notifications.
///
/// Favorites are session-scoped data: the MAIN session's teardown resolves this
/// capability and calls [`Favorites::reset`] *before* clearing its registry
/// entries, so favorites never leak across a logout.
pub trait Favorites {
    /// Returns whether the given item is currently favorited.
    fn is_favorited(&self, item_id: &str) -> bool;

    /// Flips the favorited state of the given item and returns the new state.
    ///
    /// Notifies registered listeners after the state change.
    fn toggle(&self, item_id: &str) -> bool;

    /// Clears all favorites.
    ///
    /// Domain-level reset used on session teardown; notifies listeners for each
    /// item that was cleared.
    fn reset(&self);

    /// Registers a change listener.
    ///
    /// Listeners live as long as the capability instance; there is no
    /// unsubscribe because instances die with their session.
    fn on_change(&self, listener: FavoritesListener);
}

/// Toast/notification capability.
///
/// Fire-and-forget user-visible notices. The core registers an implementation
/// for the MAIN session; it never shows toasts itself.
pub trait Toast {
    /// Shows a transient notification with the given message.
    fn show(&self, message: &str);
}

/// Listener invoked when a feature flag changes.
///
/// Receives the flag name and its new state.
pub type ToggleListener = Box<dyn Fn(&str, bool)>;

/// Readable/writable feature flags with change notifications.
pub trait FeatureToggles {
    /// Returns whether the named flag is enabled (`false` for unknown flags).
    fn is_enabled(&self, flag: &str) -> bool;

    /// Sets the named flag, notifying listeners if the value changed.
    fn set_enabled(&self, flag: &str, enabled: bool);

    /// Registers a change listener.
    fn on_change(&self, listener: ToggleListener);
}
