//! The session trait and the two concrete sessions.
//!
//! Each session owns a fixed set of capability keys: activation registers
//! fresh primaries for those keys, teardown removes them. Sessions are value
//! objects created by the factory per transition — they are never reused and
//! never concurrently active.

use std::rc::Rc;

use crate::capabilities::{
    Favorites as _, InMemoryFavorites, InMemoryFeatureToggles, StaticNetwork, TracingLogger,
    TracingToast,
};
use crate::domain::Item;
use crate::registry::{CapabilityInstance, CapabilityKey, Registry};

use super::Flow;

/// Activation/teardown logic that populates and depopulates the registry for
/// one application flow.
///
/// # Invariant
///
/// After [`teardown`](Session::teardown), none of the keys this session
/// registered remain resolvable as primaries, unless another, still-active
/// session re-registered them afterward.
pub trait Session {
    /// The flow this session serves.
    fn flow(&self) -> Flow;

    /// The fixed set of keys this session registers.
    fn keys(&self) -> &[CapabilityKey];

    /// Registers this session's primaries into the registry.
    ///
    /// Safe to call once per session instance; the factory hands out a fresh
    /// session for every transition.
    fn activate(&self, registry: &mut Registry);

    /// Removes this session's primaries from the registry, running any
    /// domain-level cleanup first.
    fn teardown(&self, registry: &mut Registry);
}

fn unregister_keys(registry: &mut Registry, keys: &[CapabilityKey]) {
    for &key in keys {
        registry.unregister(key);
    }
}

/// Minimal session for the LOGIN flow: logger, network, feature toggles.
#[derive(Debug, Clone)]
pub struct LoginSession {
    catalog: Vec<Item>,
}

impl LoginSession {
    const KEYS: [CapabilityKey; 3] = [
        CapabilityKey::Logger,
        CapabilityKey::Network,
        CapabilityKey::FeatureToggles,
    ];

    /// Creates a login session whose network capability serves `catalog`.
    #[must_use]
    pub fn new(catalog: Vec<Item>) -> Self {
        Self { catalog }
    }
}

impl Session for LoginSession {
    fn flow(&self) -> Flow {
        Flow::Login
    }

    fn keys(&self) -> &[CapabilityKey] {
        &Self::KEYS
    }

    fn activate(&self, registry: &mut Registry) {
        tracing::debug!(flow = ?self.flow(), "activating session");
        registry.register(CapabilityInstance::Logger(Rc::new(TracingLogger)));
        registry.register(CapabilityInstance::Network(Rc::new(StaticNetwork::new(
            self.catalog.clone(),
        ))));
        registry.register(CapabilityInstance::FeatureToggles(Rc::new(
            InMemoryFeatureToggles::new(),
        )));
    }

    fn teardown(&self, registry: &mut Registry) {
        tracing::debug!(flow = ?self.flow(), "tearing down session");
        unregister_keys(registry, self.keys());
    }
}

/// Full session for the MAIN flow: everything the login session registers,
/// plus favorites and toast.
#[derive(Debug, Clone)]
pub struct MainSession {
    catalog: Vec<Item>,
}

impl MainSession {
    const KEYS: [CapabilityKey; 5] = [
        CapabilityKey::Logger,
        CapabilityKey::Network,
        CapabilityKey::FeatureToggles,
        CapabilityKey::Favorites,
        CapabilityKey::Toast,
    ];

    /// Creates a main session whose network capability serves `catalog`.
    #[must_use]
    pub fn new(catalog: Vec<Item>) -> Self {
        Self { catalog }
    }
}

impl Session for MainSession {
    fn flow(&self) -> Flow {
        Flow::Main
    }

    fn keys(&self) -> &[CapabilityKey] {
        &Self::KEYS
    }

    fn activate(&self, registry: &mut Registry) {
        tracing::debug!(flow = ?self.flow(), "activating session");
        registry.register(CapabilityInstance::Logger(Rc::new(TracingLogger)));
        registry.register(CapabilityInstance::Network(Rc::new(StaticNetwork::new(
            self.catalog.clone(),
        ))));
        registry.register(CapabilityInstance::FeatureToggles(Rc::new(
            InMemoryFeatureToggles::new(),
        )));
        registry.register(CapabilityInstance::Favorites(Rc::new(
            InMemoryFavorites::new(),
        )));
        registry.register(CapabilityInstance::Toast(Rc::new(TracingToast)));
    }

    fn teardown(&self, registry: &mut Registry) {
        tracing::debug!(flow = ?self.flow(), "tearing down session");

        // Favorites must be reset while still resolvable: clearing the entry
        // first would make the capability unreachable for its own cleanup.
        registry.favorites().reset();

        unregister_keys(registry, self.keys());
    }
}
