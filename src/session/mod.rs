//! Session lifecycle bound to top-level flow changes.
//!
//! A session is the bundle of capability registrations that must exist while a
//! given [`Flow`] is active. The flow coordinator activates exactly one session
//! at a time, tears it down on flow transitions, and asks the
//! [`SessionFactory`] for the next one.
//!
//! # Organization
//!
//! - [`sessions`]: The [`Session`] trait and the two concrete sessions
//! - [`factory`]: The [`SessionFactory`] trait and its default implementation

pub mod factory;
pub mod sessions;

pub use factory::{DefaultSessionFactory, SessionFactory};
pub use sessions::{LoginSession, MainSession, Session};

use serde::{Deserialize, Serialize};

/// Top-level application mode gating which screens are reachable.
///
/// Exactly one flow is current at any time. The coordinator toggles
/// `Login → Main` on login success and `Main → Login` on logout, indefinitely;
/// there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Pre-authentication flow: a single login stack.
    Login,
    /// Authenticated flow: tab container with per-tab navigation stacks.
    Main,
}
