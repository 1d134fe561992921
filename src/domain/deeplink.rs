//! Deep-link domain model and URI parsing.
//!
//! This module defines the [`DeepLink`] type representing an externally supplied
//! navigation intent, along with the fixed-scheme URI grammar it is parsed from.
//! Parsing either yields exactly one variant or fails; a malformed URI is never
//! an error, just "no deep link".
//!
//! # Grammar
//!
//! ```text
//! flowdemo://tab/<name>     name ∈ {home, items, settings, search(=items alias)}
//! flowdemo://item/<id>      id = opaque string token
//! flowdemo://profile
//! ```
//!
//! Scheme and path segments are matched case-insensitively; the item id is
//! opaque and preserved verbatim. Any other scheme, a missing host segment, or
//! an unmatched path yields `None`.

use serde::{Deserialize, Serialize};

/// The fixed URI scheme recognized by the deep-link parser.
pub const SCHEME: &str = "flowdemo";

/// Identifies one of the tabs in the MAIN flow's tab container.
///
/// Tab identity is logical: the mapping to a concrete tab index belongs to the
/// tab host, not to the link. The `search` URI segment is an alias for
/// [`TabId::Items`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    /// The home tab (item catalog entry point).
    Home,
    /// The items tab (full item list).
    Items,
    /// The settings tab.
    Settings,
}

impl TabId {
    /// Resolves a tab name from a URI path segment.
    ///
    /// Matching is case-insensitive. `search` is accepted as an alias for the
    /// items tab. Unknown names yield `None`.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "home" => Some(Self::Home),
            "items" | "search" => Some(Self::Items),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }
}

/// An externally supplied navigation intent expressed as a structured URI.
///
/// Constructed exclusively by [`DeepLink::parse`]; the coordinator core never
/// sees raw URIs. Routing semantics (immediate delivery vs. the pending slot)
/// live in the flow coordinator, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeepLink {
    /// Select the given tab in the MAIN flow's tab container.
    Tab(TabId),
    /// Select the home tab and show the detail screen for the item with this id.
    ///
    /// The id is an opaque token; if no catalog item matches it, delivery is a
    /// logged no-op.
    Item(String),
    /// Select the home tab and present the profile modal.
    Profile,
}

impl DeepLink {
    /// Parses a deep-link URI into its variant.
    ///
    /// Returns `None` for anything that does not match the grammar: a foreign
    /// scheme, a missing host segment, an unknown tab name, a missing item id,
    /// or trailing path segments beyond the grammar's arity.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowkit::domain::{DeepLink, TabId};
    ///
    /// assert_eq!(DeepLink::parse("flowdemo://tab/home"), Some(DeepLink::Tab(TabId::Home)));
    /// assert_eq!(DeepLink::parse("flowdemo://item/swiftui"), Some(DeepLink::Item("swiftui".into())));
    /// assert_eq!(DeepLink::parse("flowdemo://profile"), Some(DeepLink::Profile));
    /// assert_eq!(DeepLink::parse("https://tab/home"), None);
    /// ```
    #[must_use]
    pub fn parse(uri: &str) -> Option<Self> {
        let (scheme, remainder) = uri.split_once("://")?;
        if !scheme.eq_ignore_ascii_case(SCHEME) {
            tracing::debug!(uri = %uri, "foreign scheme, not a deep link");
            return None;
        }

        let mut segments = remainder.split('/').filter(|s| !s.is_empty());
        let host = segments.next()?;

        let link = match host.to_ascii_lowercase().as_str() {
            "tab" => {
                let name = segments.next()?;
                let tab = TabId::from_segment(name);
                if tab.is_none() {
                    tracing::debug!(name = %name, "unknown tab name in deep link");
                }
                Self::Tab(tab?)
            }
            "item" => Self::Item(segments.next()?.to_string()),
            "profile" => Self::Profile,
            _ => {
                tracing::debug!(host = %host, "unmatched deep link host");
                return None;
            }
        };

        // Grammar arity is exact; trailing segments invalidate the link.
        if segments.next().is_some() {
            tracing::debug!(uri = %uri, "trailing segments in deep link");
            return None;
        }

        Some(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_links_for_every_known_name() {
        assert_eq!(
            DeepLink::parse("flowdemo://tab/home"),
            Some(DeepLink::Tab(TabId::Home))
        );
        assert_eq!(
            DeepLink::parse("flowdemo://tab/items"),
            Some(DeepLink::Tab(TabId::Items))
        );
        assert_eq!(
            DeepLink::parse("flowdemo://tab/settings"),
            Some(DeepLink::Tab(TabId::Settings))
        );
    }

    #[test]
    fn search_is_an_alias_for_the_items_tab() {
        assert_eq!(
            DeepLink::parse("flowdemo://tab/search"),
            Some(DeepLink::Tab(TabId::Items))
        );
    }

    #[test]
    fn segment_matching_is_case_insensitive() {
        assert_eq!(
            DeepLink::parse("FLOWDEMO://TAB/Home"),
            Some(DeepLink::Tab(TabId::Home))
        );
        assert_eq!(DeepLink::parse("flowdemo://PROFILE"), Some(DeepLink::Profile));
    }

    #[test]
    fn item_id_is_preserved_verbatim() {
        assert_eq!(
            DeepLink::parse("flowdemo://item/SwiftUI-2024"),
            Some(DeepLink::Item("SwiftUI-2024".to_string()))
        );
    }

    #[test]
    fn foreign_scheme_is_not_a_link() {
        assert_eq!(DeepLink::parse("https://tab/home"), None);
        assert_eq!(DeepLink::parse("otherapp://profile"), None);
    }

    #[test]
    fn missing_host_or_required_segment_is_not_a_link() {
        assert_eq!(DeepLink::parse("flowdemo://"), None);
        assert_eq!(DeepLink::parse("flowdemo://tab"), None);
        assert_eq!(DeepLink::parse("flowdemo://item"), None);
        assert_eq!(DeepLink::parse("not a uri"), None);
    }

    #[test]
    fn unknown_tab_name_is_not_a_link() {
        assert_eq!(DeepLink::parse("flowdemo://tab/garage"), None);
    }

    #[test]
    fn trailing_segments_invalidate_the_link() {
        assert_eq!(DeepLink::parse("flowdemo://profile/extra"), None);
        assert_eq!(DeepLink::parse("flowdemo://tab/home/extra"), None);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(DeepLink::parse("flowdemo://profile/"), Some(DeepLink::Profile));
    }
}
