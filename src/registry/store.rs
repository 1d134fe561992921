//! The capability registry.
//!
//! Keyed store of capability instances with an optional fallback per key.
//! Primaries are added and removed by session activation/teardown; fallbacks
//! are registered by the composition root and survive session resets.
//!
//! Resolving a required capability that is neither registered nor backed by a
//! fallback is a fatal, unrecoverable condition: the process must not continue
//! with a missing composition-root registration silently papered over.

use std::collections::HashMap;
use std::rc::Rc;

use crate::capabilities::{Favorites, FeatureToggles, Logger, NetworkClient, Toast};

use super::capability::{CapabilityInstance, CapabilityKey};

/// One registry entry: a primary slot and an independent fallback slot.
#[derive(Debug, Clone, Default)]
struct Slot {
    primary: Option<CapabilityInstance>,
    fallback: Option<CapabilityInstance>,
}

/// Process-wide keyed store of capability instances.
///
/// Constructed once by the composition root and moved into the flow
/// coordinator — never accessed through ambient global state. All mutation
/// happens on the single logical UI thread, via session activate/teardown and
/// the test-reset paths, so no locking discipline is required.
///
/// # Resolution
///
/// - [`resolve`](Self::resolve): primary, else fallback (with a non-release
///   diagnostic), else fatal.
/// - [`resolve_optional`](Self::resolve_optional): primary or `None`; never
///   consults the fallback, never fatals.
///
/// Identity is preserved: resolving the same key twice without an intervening
/// registration returns the same `Rc` allocation.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use flowkit::registry::{CapabilityInstance, CapabilityKey, Registry};
/// use flowkit::capabilities::TracingLogger;
///
/// let mut registry = Registry::new();
/// registry.register(CapabilityInstance::Logger(Rc::new(TracingLogger)));
/// assert!(registry.is_registered(CapabilityKey::Logger));
/// let _logger = registry.logger();
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    slots: HashMap<CapabilityKey, Slot>,
    force_fatal: bool,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites the primary entry for the instance's key.
    ///
    /// The key is intrinsic to the instance variant, so a registration can
    /// never land in the wrong slot. No error conditions.
    pub fn register(&mut self, capability: CapabilityInstance) {
        let key = capability.key();
        tracing::debug!(key = ?key, "registering primary capability");
        self.slots.entry(key).or_default().primary = Some(capability);
    }

    /// Stores or overwrites the fallback entry for the instance's key.
    ///
    /// Fallbacks are independent of primaries: they are not touched by
    /// [`unregister`](Self::unregister) or [`reset`](Self::reset) and only go
    /// away via [`reset_all`](Self::reset_all).
    pub fn register_fallback(&mut self, capability: CapabilityInstance) {
        let key = capability.key();
        tracing::debug!(key = ?key, "registering fallback capability");
        self.slots.entry(key).or_default().fallback = Some(capability);
    }

    /// Resolves a required capability.
    ///
    /// Returns the primary if present; else the fallback if present, emitting a
    /// non-release diagnostic that a primary was expected.
    ///
    /// # Panics
    ///
    /// Panics — intentional fail-fast, not a recoverable error — when the key
    /// has neither a primary nor a usable fallback, or when the force-fatal
    /// test flag is set and the primary is absent. A missing required
    /// capability is a composition-root bug, and the process must not continue
    /// with a type-incorrect default in its place.
    #[must_use]
    pub fn resolve(&self, key: CapabilityKey) -> CapabilityInstance {
        let slot = self.slots.get(&key);

        if let Some(primary) = slot.and_then(|s| s.primary.clone()) {
            return primary;
        }

        if !self.force_fatal {
            if let Some(fallback) = slot.and_then(|s| s.fallback.clone()) {
                if cfg!(debug_assertions) {
                    tracing::warn!(
                        key = ?key,
                        "expected a primary registration, degrading to fallback"
                    );
                }
                return fallback;
            }
        }

        panic!(
            "required capability {key:?} is not registered and has no fallback \
             (composition-root bug)"
        );
    }

    /// Resolves a capability if a primary is registered, else `None`.
    ///
    /// Never consults the fallback and never fatals.
    #[must_use]
    pub fn resolve_optional(&self, key: CapabilityKey) -> Option<CapabilityInstance> {
        self.slots.get(&key).and_then(|s| s.primary.clone())
    }

    /// Whether a primary is registered for the key.
    #[must_use]
    pub fn is_registered(&self, key: CapabilityKey) -> bool {
        self.slots
            .get(&key)
            .is_some_and(|slot| slot.primary.is_some())
    }

    /// Removes the primary entry for the key, leaving any fallback in place.
    pub fn unregister(&mut self, key: CapabilityKey) {
        if let Some(slot) = self.slots.get_mut(&key) {
            if slot.primary.take().is_some() {
                tracing::debug!(key = ?key, "unregistered primary capability");
            }
        }
    }

    /// Clears all primary entries. Fallbacks survive.
    pub fn reset(&mut self) {
        tracing::debug!("resetting registry primaries");
        for slot in self.slots.values_mut() {
            slot.primary = None;
        }
    }

    /// Full reset used by test setup/teardown: clears primaries, fallbacks,
    /// and the force-fatal flag.
    pub fn reset_all(&mut self) {
        tracing::debug!("full registry reset");
        self.slots.clear();
        self.force_fatal = false;
    }

    /// Test hook: when set, a missing primary is fatal even if a fallback is
    /// registered. Cleared by [`reset_all`](Self::reset_all).
    pub fn set_force_fatal(&mut self, force_fatal: bool) {
        self.force_fatal = force_fatal;
    }

    /// Resolves the logging sink. Explicit sugar for `resolve(Logger)`.
    ///
    /// # Panics
    ///
    /// Same fatal conditions as [`resolve`](Self::resolve).
    #[must_use]
    pub fn logger(&self) -> Rc<dyn Logger> {
        match self.resolve(CapabilityKey::Logger) {
            CapabilityInstance::Logger(logger) => logger,
            // register() slots instances under their own key
            other => unreachable!("logger slot held {other:?}"),
        }
    }

    /// Resolves the network capability. Explicit sugar for `resolve(Network)`.
    ///
    /// # Panics
    ///
    /// Same fatal conditions as [`resolve`](Self::resolve).
    #[must_use]
    pub fn network(&self) -> Rc<dyn NetworkClient> {
        match self.resolve(CapabilityKey::Network) {
            CapabilityInstance::Network(network) => network,
            other => unreachable!("network slot held {other:?}"),
        }
    }

    /// Resolves the favorites capability. Explicit sugar for `resolve(Favorites)`.
    ///
    /// # Panics
    ///
    /// Same fatal conditions as [`resolve`](Self::resolve).
    #[must_use]
    pub fn favorites(&self) -> Rc<dyn Favorites> {
        match self.resolve(CapabilityKey::Favorites) {
            CapabilityInstance::Favorites(favorites) => favorites,
            other => unreachable!("favorites slot held {other:?}"),
        }
    }

    /// Resolves the toast capability. Explicit sugar for `resolve(Toast)`.
    ///
    /// # Panics
    ///
    /// Same fatal conditions as [`resolve`](Self::resolve).
    #[must_use]
    pub fn toast(&self) -> Rc<dyn Toast> {
        match self.resolve(CapabilityKey::Toast) {
            CapabilityInstance::Toast(toast) => toast,
            other => unreachable!("toast slot held {other:?}"),
        }
    }

    /// Resolves the feature-toggle capability. Explicit sugar for
    /// `resolve(FeatureToggles)`.
    ///
    /// # Panics
    ///
    /// Same fatal conditions as [`resolve`](Self::resolve).
    #[must_use]
    pub fn feature_toggles(&self) -> Rc<dyn FeatureToggles> {
        match self.resolve(CapabilityKey::FeatureToggles) {
            CapabilityInstance::FeatureToggles(toggles) => toggles,
            other => unreachable!("feature-toggles slot held {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{InMemoryFavorites, TracingLogger, TracingToast};

    fn logger_instance() -> CapabilityInstance {
        CapabilityInstance::Logger(Rc::new(TracingLogger))
    }

    #[test]
    fn resolve_returns_the_registered_instance() {
        let mut registry = Registry::new();
        let instance = logger_instance();
        registry.register(instance.clone());

        assert!(registry.resolve(CapabilityKey::Logger).same_instance(&instance));
    }

    #[test]
    fn resolution_is_identity_preserving() {
        let mut registry = Registry::new();
        registry.register(logger_instance());

        let first = registry.logger();
        let second = registry.logger();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn primary_wins_over_fallback() {
        let mut registry = Registry::new();
        let fallback = logger_instance();
        let primary = logger_instance();

        registry.register_fallback(fallback.clone());
        registry.register(primary.clone());

        let resolved = registry.resolve(CapabilityKey::Logger);
        assert!(resolved.same_instance(&primary));
        assert!(!resolved.same_instance(&fallback));
    }

    #[test]
    fn fallback_is_used_when_primary_is_absent() {
        let mut registry = Registry::new();
        let fallback = logger_instance();
        registry.register_fallback(fallback.clone());

        assert!(registry.resolve(CapabilityKey::Logger).same_instance(&fallback));
    }

    #[test]
    fn resolve_optional_never_consults_fallback() {
        let mut registry = Registry::new();
        registry.register_fallback(logger_instance());

        assert!(registry.resolve_optional(CapabilityKey::Logger).is_none());

        let primary = logger_instance();
        registry.register(primary.clone());
        let resolved = registry
            .resolve_optional(CapabilityKey::Logger)
            .expect("primary registered");
        assert!(resolved.same_instance(&primary));
    }

    #[test]
    #[should_panic(expected = "required capability Network is not registered")]
    fn resolving_a_missing_required_capability_is_fatal() {
        let registry = Registry::new();
        let _ = registry.resolve(CapabilityKey::Network);
    }

    #[test]
    #[should_panic(expected = "composition-root bug")]
    fn force_fatal_ignores_fallbacks() {
        let mut registry = Registry::new();
        registry.register_fallback(logger_instance());
        registry.set_force_fatal(true);

        let _ = registry.resolve(CapabilityKey::Logger);
    }

    #[test]
    fn unregister_clears_the_primary_but_not_the_fallback() {
        let mut registry = Registry::new();
        let fallback = logger_instance();
        registry.register_fallback(fallback.clone());
        registry.register(logger_instance());

        registry.unregister(CapabilityKey::Logger);

        assert!(!registry.is_registered(CapabilityKey::Logger));
        assert!(registry.resolve(CapabilityKey::Logger).same_instance(&fallback));
    }

    #[test]
    fn reset_clears_primaries_and_keeps_fallbacks() {
        let mut registry = Registry::new();
        registry.register(logger_instance());
        registry.register(CapabilityInstance::Toast(Rc::new(TracingToast)));
        let fallback = logger_instance();
        registry.register_fallback(fallback.clone());

        registry.reset();

        assert!(!registry.is_registered(CapabilityKey::Logger));
        assert!(!registry.is_registered(CapabilityKey::Toast));
        assert!(registry.resolve(CapabilityKey::Logger).same_instance(&fallback));
    }

    #[test]
    fn reset_all_clears_everything_including_force_fatal() {
        let mut registry = Registry::new();
        registry.register(logger_instance());
        registry.register_fallback(logger_instance());
        registry.set_force_fatal(true);

        registry.reset_all();

        for key in CapabilityKey::ALL {
            assert!(!registry.is_registered(key));
            assert!(registry.resolve_optional(key).is_none());
        }

        // force_fatal cleared: a fresh fallback is usable again
        let fallback = logger_instance();
        registry.register_fallback(fallback.clone());
        assert!(registry.resolve(CapabilityKey::Logger).same_instance(&fallback));
    }

    #[test]
    fn registration_overwrite_changes_identity() {
        let mut registry = Registry::new();
        let first = CapabilityInstance::Favorites(Rc::new(InMemoryFavorites::new()));
        registry.register(first.clone());

        let second = CapabilityInstance::Favorites(Rc::new(InMemoryFavorites::new()));
        registry.register(second.clone());

        let resolved = registry.resolve(CapabilityKey::Favorites);
        assert!(resolved.same_instance(&second));
        assert!(!resolved.same_instance(&first));
    }
}
