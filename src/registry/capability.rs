//! Capability keys and tagged capability instances.
//!
//! A [`CapabilityKey`] is the enumerated identifier used to address registry
//! entries; a [`CapabilityInstance`] pairs each key with its trait object, so a
//! registration can never file an instance under the wrong key.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::capabilities::{Favorites, FeatureToggles, Logger, NetworkClient, Toast};

/// Enumerated identifier addressing one registry entry.
///
/// Keys are unique and stable for the process lifetime: there is exactly one
/// (primary, fallback) slot per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKey {
    Logger,
    Network,
    Favorites,
    Toast,
    FeatureToggles,
}

impl CapabilityKey {
    /// Every key, in declaration order. Used by full-reset paths and tests.
    pub const ALL: [Self; 5] = [
        Self::Logger,
        Self::Network,
        Self::Favorites,
        Self::Toast,
        Self::FeatureToggles,
    ];
}

/// A capability instance tagged with its key.
///
/// Each variant wraps the trait object for the corresponding key as an `Rc`,
/// so resolution is identity-preserving: cloning the instance shares the
/// allocation, and two resolves without an intervening registration hand back
/// the same one.
#[derive(Clone)]
pub enum CapabilityInstance {
    Logger(Rc<dyn Logger>),
    Network(Rc<dyn NetworkClient>),
    Favorites(Rc<dyn Favorites>),
    Toast(Rc<dyn Toast>),
    FeatureToggles(Rc<dyn FeatureToggles>),
}

impl CapabilityInstance {
    /// The key intrinsic to this instance's variant.
    #[must_use]
    pub fn key(&self) -> CapabilityKey {
        match self {
            Self::Logger(_) => CapabilityKey::Logger,
            Self::Network(_) => CapabilityKey::Network,
            Self::Favorites(_) => CapabilityKey::Favorites,
            Self::Toast(_) => CapabilityKey::Toast,
            Self::FeatureToggles(_) => CapabilityKey::FeatureToggles,
        }
    }

    /// Whether `self` and `other` share the same underlying allocation.
    ///
    /// This is the identity the registry guarantees to preserve across
    /// resolves; it is reference identity, not structural equality.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Logger(a), Self::Logger(b)) => Rc::ptr_eq(a, b),
            (Self::Network(a), Self::Network(b)) => Rc::ptr_eq(a, b),
            (Self::Favorites(a), Self::Favorites(b)) => Rc::ptr_eq(a, b),
            (Self::Toast(a), Self::Toast(b)) => Rc::ptr_eq(a, b),
            (Self::FeatureToggles(a), Self::FeatureToggles(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for CapabilityInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CapabilityInstance::{:?}", self.key())
    }
}
