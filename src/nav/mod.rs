//! Navigation primitives for the coordinator tree.
//!
//! This module contains the logical screen model and the guarded navigation
//! stack each coordinator node delegates to. Everything here is platform-free:
//! "animation" is a state the host opens with any animated call and closes by
//! reporting transition completion.
//!
//! # Organization
//!
//! - [`screen`]: [`Screen`] identities and the [`ScreenKind`] duplicate tag
//! - [`guard`]: [`NavStack`] with the pending-action queue

pub mod guard;
pub mod screen;

pub use guard::{DismissCompletion, NavCommand, NavStack};
pub use screen::{Screen, ScreenKind};
