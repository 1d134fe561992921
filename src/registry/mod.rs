//! Session-scoped capability registry.
//!
//! This module implements the dependency registry consumed by the coordinator
//! tree: a keyed store of capability instances with an optional fallback per
//! key, populated and depopulated by session activation/teardown as the
//! application flow changes.
//!
//! # Organization
//!
//! - [`capability`]: Capability keys and tagged instances
//! - [`store`]: The [`Registry`] itself
//!
//! # Failure surface
//!
//! Resolving a required, unregistered capability with no fallback terminates
//! the process. This is intentional fail-fast behavior for a missing
//! composition-root registration, not a recoverable runtime error; see
//! [`Registry::resolve`].

pub mod capability;
pub mod store;

pub use capability::{CapabilityInstance, CapabilityKey};
pub use store::Registry;
