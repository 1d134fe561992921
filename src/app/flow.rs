//! The root flow coordinator.
//!
//! A two-state machine over [`Flow`] that owns the child coordinator subtree
//! for the currently active flow, drives session activation/teardown through
//! the registry on every transition, and routes deep links — immediately when
//! the MAIN subtree is up, through the pending slot while LOGIN is active.
//!
//! # Ownership
//!
//! The coordinator holds exactly one "current subtree" slot. Transitioning
//! clears the old slot first (dropping every owning reference, so the previous
//! flow's coordinators deallocate deterministically) and only then constructs
//! the new subtree — a slot is never mutated in place, and no coordinator
//! instance outlives its flow's activation window.
//!
//! # Deep-link timing
//!
//! A link arriving during LOGIN overwrites the pending slot (newest wins, no
//! queueing). On LOGIN→MAIN the pending link is *staged*, not delivered: the
//! freshly installed subtree still has to settle, and delivery happens exactly
//! once when the host reports readiness via [`FlowCoordinator::subtree_ready`].
//! Delivering on an explicit readiness signal rather than a fixed timer keeps
//! the handoff deterministic under slow layout.

use serde::{Deserialize, Serialize};

use crate::capabilities::NetworkClient as _;
use crate::domain::{DeepLink, Item, TabId};
use crate::nav::{NavStack, Screen};
use crate::registry::Registry;
use crate::session::{Flow, Session, SessionFactory};

use super::screens::{HomeCoordinator, ItemsCoordinator, LoginCoordinator, SettingsCoordinator};
use super::tabs::TabHost;

/// Addresses one navigation stack in the coordinator tree.
///
/// Used by the host to route transition-completion notifications to the node
/// whose animation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackId {
    Login,
    Home,
    Items,
    Settings,
}

/// The MAIN flow's subtree: tab container plus one coordinator per tab.
#[derive(Debug)]
pub struct MainCoordinator {
    tabs: TabHost,
    home: HomeCoordinator,
    items: ItemsCoordinator,
    settings: SettingsCoordinator,
}

impl MainCoordinator {
    fn new(catalog: Vec<Item>) -> Self {
        Self {
            tabs: TabHost::new(),
            home: HomeCoordinator::new(catalog.clone()),
            items: ItemsCoordinator::new(catalog),
            settings: SettingsCoordinator::new(),
        }
    }

    /// The tab container.
    #[must_use]
    pub fn tabs(&self) -> &TabHost {
        &self.tabs
    }

    /// Mutable tab container (programmatic selection).
    pub fn tabs_mut(&mut self) -> &mut TabHost {
        &mut self.tabs
    }

    /// The home tab's coordinator.
    #[must_use]
    pub fn home(&self) -> &HomeCoordinator {
        &self.home
    }

    /// Mutable home coordinator.
    pub fn home_mut(&mut self) -> &mut HomeCoordinator {
        &mut self.home
    }

    /// The items tab's coordinator.
    #[must_use]
    pub fn items(&self) -> &ItemsCoordinator {
        &self.items
    }

    /// Mutable items coordinator.
    pub fn items_mut(&mut self) -> &mut ItemsCoordinator {
        &mut self.items
    }

    /// The settings tab's coordinator.
    #[must_use]
    pub fn settings(&self) -> &SettingsCoordinator {
        &self.settings
    }

    fn stack_mut(&mut self, stack: StackId) -> Option<&mut NavStack> {
        match stack {
            StackId::Login => None,
            StackId::Home => Some(self.home.nav_mut()),
            StackId::Items => Some(self.items.nav_mut()),
            StackId::Settings => Some(self.settings.nav_mut()),
        }
    }
}

/// The single owning slot for the active flow's subtree.
#[derive(Debug)]
enum FlowSubtree {
    Login(LoginCoordinator),
    Main(MainCoordinator),
}

/// Root coordinator: flow state machine, session lifecycle, deep-link routing.
///
/// Constructed by the composition root with the registry and session factory
/// moved in — the registry is threaded through here rather than reached via any
/// ambient global — and driven by host events (see [`crate::app::handle_event`]).
pub struct FlowCoordinator {
    registry: Registry,
    factory: Box<dyn SessionFactory>,
    flow: Flow,
    session: Option<Box<dyn Session>>,
    subtree: Option<FlowSubtree>,
    pending_deep_link: Option<DeepLink>,
    staged_deep_link: Option<DeepLink>,
}

impl std::fmt::Debug for FlowCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowCoordinator")
            .field("flow", &self.flow)
            .field("subtree", &self.subtree)
            .field("pending_deep_link", &self.pending_deep_link)
            .field("staged_deep_link", &self.staged_deep_link)
            .finish_non_exhaustive()
    }
}

impl FlowCoordinator {
    /// Creates the coordinator without starting it.
    ///
    /// `start_flow` is the flow the coordinator boots into when
    /// [`start`](Self::start) is called; nothing is activated until then.
    #[must_use]
    pub fn new(registry: Registry, factory: Box<dyn SessionFactory>, start_flow: Flow) -> Self {
        Self {
            registry,
            factory,
            flow: start_flow,
            session: None,
            subtree: None,
            pending_deep_link: None,
            staged_deep_link: None,
        }
    }

    /// Activates the session for the starting flow and builds its subtree.
    ///
    /// Calling `start` on an already-started coordinator is a logged no-op.
    pub fn start(&mut self) {
        if self.subtree.is_some() {
            tracing::warn!("coordinator already started");
            return;
        }

        tracing::debug!(flow = ?self.flow, "starting flow coordinator");
        self.activate_session();
        self.build_subtree();
    }

    /// The currently active flow.
    #[must_use]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// The capability registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable registry access (test setup and composition-root fallbacks).
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The LOGIN subtree, while that flow is active.
    #[must_use]
    pub fn login_coordinator(&self) -> Option<&LoginCoordinator> {
        match &self.subtree {
            Some(FlowSubtree::Login(login)) => Some(login),
            _ => None,
        }
    }

    /// The MAIN subtree, while that flow is active.
    #[must_use]
    pub fn main_coordinator(&self) -> Option<&MainCoordinator> {
        match &self.subtree {
            Some(FlowSubtree::Main(main)) => Some(main),
            _ => None,
        }
    }

    /// Mutable MAIN subtree access (screen state holders and tests).
    pub fn main_coordinator_mut(&mut self) -> Option<&mut MainCoordinator> {
        match &mut self.subtree {
            Some(FlowSubtree::Main(main)) => Some(main),
            _ => None,
        }
    }

    /// The deep link held while LOGIN is active, if any.
    #[must_use]
    pub fn pending_deep_link(&self) -> Option<&DeepLink> {
        self.pending_deep_link.as_ref()
    }

    /// The deep link staged for delivery on the next readiness signal, if any.
    #[must_use]
    pub fn staged_deep_link(&self) -> Option<&DeepLink> {
        self.staged_deep_link.as_ref()
    }

    /// Login-success transition: LOGIN → MAIN.
    ///
    /// Tears down the login session, clears the subtree slot (the login
    /// coordinators deallocate here), activates the MAIN session, builds the
    /// tab subtree, and stages any pending deep link for delivery on the next
    /// readiness signal.
    pub fn transition_to_main(&mut self) {
        if self.flow == Flow::Main {
            tracing::warn!("already in main flow, transition ignored");
            return;
        }

        tracing::debug!("transitioning to main flow");
        self.teardown_session();
        self.subtree = None;

        self.flow = Flow::Main;
        self.activate_session();
        self.build_subtree();

        if let Some(link) = self.pending_deep_link.take() {
            tracing::debug!(link = ?link, "staging pending deep link for subtree readiness");
            self.staged_deep_link = Some(link);
        }
    }

    /// Logout transition: MAIN → LOGIN.
    ///
    /// Tears down the MAIN session (resetting session-scoped capabilities
    /// first) and subtree, then activates the login session and builds its
    /// stack. A staged-but-undelivered deep link is dropped: its target flow
    /// is gone.
    pub fn transition_to_login(&mut self) {
        if self.flow == Flow::Login {
            tracing::warn!("already in login flow, transition ignored");
            return;
        }

        tracing::debug!("transitioning to login flow");
        if let Some(link) = self.staged_deep_link.take() {
            tracing::debug!(link = ?link, "dropping staged deep link on logout");
        }

        self.teardown_session();
        self.subtree = None;

        self.flow = Flow::Login;
        self.activate_session();
        self.build_subtree();
    }

    /// Routes a deep link.
    ///
    /// While LOGIN is active the link overwrites the pending slot — the newest
    /// link wins, an earlier undelivered one is dropped. While MAIN is active
    /// delivery is immediate.
    pub fn handle_deep_link(&mut self, link: DeepLink) {
        match self.flow {
            Flow::Login => {
                if let Some(previous) = &self.pending_deep_link {
                    tracing::debug!(dropped = ?previous, "overwriting pending deep link");
                }
                tracing::debug!(link = ?link, "holding deep link until login completes");
                self.pending_deep_link = Some(link);
            }
            Flow::Main => self.deliver(link),
        }
    }

    /// Host notification that the freshly installed subtree has settled.
    ///
    /// Delivers the staged deep link exactly once; readiness signals with
    /// nothing staged are ignored.
    pub fn subtree_ready(&mut self) {
        match self.staged_deep_link.take() {
            Some(link) => {
                tracing::debug!(link = ?link, "subtree ready, delivering staged deep link");
                self.deliver(link);
            }
            None => tracing::debug!("subtree ready, nothing staged"),
        }
    }

    /// Host notification that a stack's transition animation finished.
    ///
    /// Routed to the addressed stack's guard, which drains its pending queue.
    /// A stack that is not part of the current flow is a logged no-op.
    pub fn transition_completed(&mut self, stack: StackId) {
        let nav = match (&mut self.subtree, stack) {
            (Some(FlowSubtree::Login(login)), StackId::Login) => Some(login.nav_mut()),
            (Some(FlowSubtree::Main(main)), stack) => main.stack_mut(stack),
            _ => None,
        };

        match nav {
            Some(nav) => nav.transition_completed(),
            None => {
                tracing::warn!(stack = ?stack, flow = ?self.flow, "completion for absent stack ignored");
            }
        }
    }

    /// A serializable snapshot of the coordinator tree, for host inspection.
    #[must_use]
    pub fn snapshot(&self) -> FlowSnapshot {
        let mut stacks = Vec::new();
        let mut selected_tab = None;

        match &self.subtree {
            Some(FlowSubtree::Login(login)) => {
                stacks.push(StackSnapshot::of(StackId::Login, login.nav()));
            }
            Some(FlowSubtree::Main(main)) => {
                selected_tab = Some(main.tabs().selected_tab());
                stacks.push(StackSnapshot::of(StackId::Home, main.home().nav()));
                stacks.push(StackSnapshot::of(StackId::Items, main.items().nav()));
                stacks.push(StackSnapshot::of(StackId::Settings, main.settings().nav()));
            }
            None => {}
        }

        FlowSnapshot {
            flow: self.flow,
            selected_tab,
            pending_deep_link: self.pending_deep_link.clone(),
            staged_deep_link: self.staged_deep_link.clone(),
            stacks,
        }
    }

    fn deliver(&mut self, link: DeepLink) {
        let Some(main) = self.main_coordinator_mut() else {
            tracing::warn!(link = ?link, "no main subtree installed, deep link dropped");
            return;
        };

        match link {
            DeepLink::Tab(tab) => main.tabs_mut().select_tab(tab),
            DeepLink::Item(id) => {
                main.tabs_mut().select_tab(TabId::Home);
                main.home_mut().show_detail_for_id(&id);
            }
            DeepLink::Profile => {
                main.tabs_mut().select_tab(TabId::Home);
                main.home_mut().show_profile();
            }
        }
    }

    fn activate_session(&mut self) {
        let session = self.factory.make_session(self.flow);
        session.activate(&mut self.registry);
        self.session = Some(session);
    }

    fn teardown_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.teardown(&mut self.registry);
        }
    }

    fn build_subtree(&mut self) {
        let subtree = match self.flow {
            Flow::Login => FlowSubtree::Login(LoginCoordinator::new()),
            Flow::Main => {
                let catalog = self.registry.network().fetch_catalog().unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "catalog fetch failed, main subtree starts empty");
                    Vec::new()
                });
                FlowSubtree::Main(MainCoordinator::new(catalog))
            }
        };
        self.subtree = Some(subtree);
    }
}

/// Serializable view of one navigation stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSnapshot {
    pub id: StackId,
    pub screens: Vec<Screen>,
    pub presented: Option<Screen>,
}

impl StackSnapshot {
    fn of(id: StackId, nav: &NavStack) -> Self {
        Self {
            id,
            screens: nav.screens().to_vec(),
            presented: nav.presented().cloned(),
        }
    }
}

/// Serializable view of the whole coordinator tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub flow: Flow,
    pub selected_tab: Option<TabId>,
    pub pending_deep_link: Option<DeepLink>,
    pub staged_deep_link: Option<DeepLink>,
    pub stacks: Vec<StackSnapshot>,
}
