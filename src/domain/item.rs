//! Catalog item domain model.
//!
//! This module defines the core `Item` type representing an entry in the demo
//! application's catalog. Items are what the Home and Items tabs list and what
//! detail screens render; the core only cares about their identity and title.

use serde::{Deserialize, Serialize};

/// An entry in the demo catalog.
///
/// Items are supplied by the network capability (out of scope behind its
/// interface) and addressed by their opaque `id`, which is also the token
/// carried by `item/<id>` deep links.
///
/// # Fields
///
/// - `id`: Opaque, unique identifier (deep-link token)
/// - `title`: Human-readable display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
}

impl Item {
    /// Creates a new item with the given id and title.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowkit::domain::Item;
    ///
    /// let item = Item::new("swiftui", "Declarative UI");
    /// assert_eq!(item.id, "swiftui");
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
