//! Screen coordinators.
//!
//! Structurally identical nodes of the coordinator tree: each owns the
//! navigation stack it is bound to (or represents a pushed/presented screen on
//! a parent's stack), creates its child coordinators on demand, and exposes a
//! narrow navigation interface (`show_detail`, `show_profile`, `dismiss_modal`)
//! consumed by the screen's state holder. All actual navigation goes through
//! the owned [`NavStack`] primitives.
//!
//! Ownership is a strict tree: Home and Items each create their *own* detail
//! coordinator — the instances are never shared — and a parent dropping a child
//! deallocates it.

use crate::domain::{Item, SCHEME};
use crate::nav::{NavStack, Screen};

/// Coordinator for the LOGIN flow's single stack.
#[derive(Debug)]
pub struct LoginCoordinator {
    nav: NavStack,
}

impl Default for LoginCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginCoordinator {
    /// Creates the coordinator with its stack rooted at the login screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nav: NavStack::new("login", Screen::Login),
        }
    }

    /// The navigation stack this coordinator is bound to.
    #[must_use]
    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    /// Mutable access for the host's transition-completion routing.
    pub fn nav_mut(&mut self) -> &mut NavStack {
        &mut self.nav
    }
}

/// Child coordinator for a pushed detail screen.
///
/// Owns no stack of its own — the screen lives on the parent's stack — and has
/// zero children. Created fresh by whichever tab navigates to the item.
#[derive(Debug, Clone)]
pub struct DetailCoordinator {
    item: Item,
}

impl DetailCoordinator {
    /// Creates the coordinator for one catalog item.
    #[must_use]
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    /// The item this detail screen renders.
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Deep-link URI for this item, handed to the share surface.
    #[must_use]
    pub fn share_payload(&self) -> String {
        format!("{SCHEME}://item/{}", self.item.id)
    }
}

/// Child coordinator for the modally presented profile screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileCoordinator;

/// Coordinator for the home tab.
#[derive(Debug)]
pub struct HomeCoordinator {
    nav: NavStack,
    catalog: Vec<Item>,
    detail: Option<DetailCoordinator>,
    profile: Option<ProfileCoordinator>,
}

impl HomeCoordinator {
    /// Creates the coordinator with its stack rooted at the home screen.
    #[must_use]
    pub fn new(catalog: Vec<Item>) -> Self {
        Self {
            nav: NavStack::new("home", Screen::Home),
            catalog,
            detail: None,
            profile: None,
        }
    }

    /// The navigation stack this coordinator is bound to.
    #[must_use]
    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    /// Mutable access for the host's transition-completion routing.
    pub fn nav_mut(&mut self) -> &mut NavStack {
        &mut self.nav
    }

    /// The detail child, while one is showing.
    #[must_use]
    pub fn detail(&self) -> Option<&DetailCoordinator> {
        self.detail.as_ref()
    }

    /// The profile child, while the modal is up.
    #[must_use]
    pub fn profile(&self) -> Option<&ProfileCoordinator> {
        self.profile.as_ref()
    }

    /// Pushes the detail screen for an item, creating the child coordinator.
    pub fn show_detail(&mut self, item: Item) {
        self.detail = Some(DetailCoordinator::new(item.clone()));
        self.nav.safe_push(Screen::Detail { item_id: item.id });
    }

    /// Shows detail for the catalog item matching `id`, if any.
    ///
    /// Unknown ids are a logged no-op — deep links to missing items never
    /// surface an error.
    pub fn show_detail_for_id(&mut self, id: &str) {
        match self.catalog.iter().find(|item| item.id == id).cloned() {
            Some(item) => self.show_detail(item),
            None => tracing::debug!(item_id = %id, "no catalog item for deep link"),
        }
    }

    /// Presents the profile modal, creating the child coordinator.
    pub fn show_profile(&mut self) {
        self.profile = Some(ProfileCoordinator);
        self.nav.safe_present(Screen::Profile);
    }

    /// Dismisses the presented modal and releases its child coordinator.
    pub fn dismiss_modal(&mut self) {
        self.profile = None;
        self.nav.safe_dismiss(None);
    }

    /// Shares the currently shown detail item, if there is one.
    pub fn share_current_item(&mut self) {
        if let Some(detail) = &self.detail {
            let payload = detail.share_payload();
            self.nav.share(&payload);
        } else {
            tracing::debug!("no detail showing, nothing to share");
        }
    }
}

/// Coordinator for the items tab.
///
/// Same shape as home, minus the profile modal. Its detail coordinator is its
/// own instance, never shared with home's.
#[derive(Debug)]
pub struct ItemsCoordinator {
    nav: NavStack,
    catalog: Vec<Item>,
    detail: Option<DetailCoordinator>,
}

impl ItemsCoordinator {
    /// Creates the coordinator with its stack rooted at the items screen.
    #[must_use]
    pub fn new(catalog: Vec<Item>) -> Self {
        Self {
            nav: NavStack::new("items", Screen::Items),
            catalog,
            detail: None,
        }
    }

    /// The navigation stack this coordinator is bound to.
    #[must_use]
    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    /// Mutable access for the host's transition-completion routing.
    pub fn nav_mut(&mut self) -> &mut NavStack {
        &mut self.nav
    }

    /// The detail child, while one is showing.
    #[must_use]
    pub fn detail(&self) -> Option<&DetailCoordinator> {
        self.detail.as_ref()
    }

    /// Pushes the detail screen for an item, creating the child coordinator.
    pub fn show_detail(&mut self, item: Item) {
        self.detail = Some(DetailCoordinator::new(item.clone()));
        self.nav.safe_push(Screen::Detail { item_id: item.id });
    }

    /// Shows detail for the catalog item matching `id`, if any.
    pub fn show_detail_for_id(&mut self, id: &str) {
        match self.catalog.iter().find(|item| item.id == id).cloned() {
            Some(item) => self.show_detail(item),
            None => tracing::debug!(item_id = %id, "no catalog item for deep link"),
        }
    }
}

/// Coordinator for the settings tab.
///
/// Owns its stack and nothing else; the settings screen's state holder talks
/// to the feature-toggle capability directly through the registry.
#[derive(Debug)]
pub struct SettingsCoordinator {
    nav: NavStack,
}

impl Default for SettingsCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsCoordinator {
    /// Creates the coordinator with its stack rooted at the settings screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nav: NavStack::new("settings", Screen::Settings),
        }
    }

    /// The navigation stack this coordinator is bound to.
    #[must_use]
    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    /// Mutable access for the host's transition-completion routing.
    pub fn nav_mut(&mut self) -> &mut NavStack {
        &mut self.nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::ScreenKind;

    fn catalog() -> Vec<Item> {
        vec![
            Item::new("swiftui", "Declarative UI"),
            Item::new("combine", "Reactive Streams"),
        ]
    }

    #[test]
    fn show_detail_pushes_and_creates_the_child() {
        let mut home = HomeCoordinator::new(catalog());
        home.show_detail_for_id("swiftui");

        assert_eq!(home.nav().top().kind(), ScreenKind::Detail);
        assert_eq!(home.detail().map(|d| d.item().id.as_str()), Some("swiftui"));
    }

    #[test]
    fn unknown_item_id_leaves_the_stack_unchanged() {
        let mut home = HomeCoordinator::new(catalog());
        home.show_detail_for_id("missing");

        assert_eq!(home.nav().depth(), 1);
        assert!(home.detail().is_none());
    }

    #[test]
    fn home_and_items_detail_children_are_distinct_instances() {
        let mut home = HomeCoordinator::new(catalog());
        let mut items = ItemsCoordinator::new(catalog());

        home.show_detail_for_id("swiftui");
        items.show_detail_for_id("swiftui");

        let home_detail = home.detail().expect("home detail");
        let items_detail = items.detail().expect("items detail");
        assert!(!std::ptr::eq(home_detail, items_detail));
    }

    #[test]
    fn dismiss_modal_releases_the_profile_child() {
        let mut home = HomeCoordinator::new(catalog());
        home.show_profile();
        home.nav_mut().transition_completed();
        assert!(home.profile().is_some());

        home.dismiss_modal();
        home.nav_mut().transition_completed();

        assert!(home.profile().is_none());
        assert!(home.nav().presented().is_none());
    }

    #[test]
    fn share_payload_round_trips_through_the_deep_link_grammar() {
        let detail = DetailCoordinator::new(Item::new("swiftui", "Declarative UI"));
        let payload = detail.share_payload();

        use crate::domain::DeepLink;
        assert_eq!(DeepLink::parse(&payload), Some(DeepLink::Item("swiftui".into())));
    }
}
