//! Domain layer for the flowkit core.
//!
//! This module contains the core domain types and business rules of the
//! coordinator core, independent of any host-platform API or infrastructure
//! concern. It follows domain-driven design principles by keeping these rules
//! isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`deeplink`]: Deep-link variants and the fixed-scheme URI grammar
//! - [`item`]: Catalog item model
//!
//! # Examples
//!
//! ```
//! use flowkit::domain::{DeepLink, TabId};
//!
//! let link = DeepLink::parse("flowdemo://tab/home");
//! assert_eq!(link, Some(DeepLink::Tab(TabId::Home)));
//! ```

pub mod deeplink;
pub mod error;
pub mod item;

pub use deeplink::{DeepLink, TabId, SCHEME};
pub use error::{FlowkitError, Result};
pub use item::Item;
