//! Flowkit: the navigation/flow-coordination core of a demo mobile application.
//!
//! Flowkit implements the one subsystem of the demo app with genuine
//! engineering weight:
//! - A hierarchical coordinator tree managing screen transitions
//! - A session-scoped dependency registry bound to top-level flow changes
//! - Deep-link routing that interoperates safely with in-flight transitions
//!   and flow changes
//!
//! Rendering, per-screen presentation logic, string tables, and persistence or
//! network implementations are external collaborators consumed through narrow
//! capability interfaces.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shim (main.rs)                                │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ HostEvent
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Flow state machine
//! │  - Event handling                                   │  ← Coordinator tree
//! │  - Deep-link routing                                │  ← Tab host
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Nav Layer     │   │ Registry      │   │ Session Layer │
//! │ (nav/)        │   │ (registry/)   │   │ (session/)    │
//! │ - Guarded     │   │ - Keyed slots │   │ - Activation  │
//! │   stacks      │   │ - Fallbacks   │   │ - Teardown    │
//! │ - FIFO queue  │   │ - Fail-fast   │   │ - Factory     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Capabilities & Domain Layers                       │
//! │  - Capability traits (capabilities/)                │
//! │  - Deep links, items, errors (domain/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Flow coordinator, screen coordinators, host-event handling
//! - [`nav`]: Guarded navigation stacks with the pending-action queue
//! - [`registry`]: Session-scoped capability registry
//! - [`session`]: Session lifecycle and the session factory
//! - [`capabilities`]: Capability trait seams and default implementations
//! - [`domain`]: Deep links, catalog items, error types
//! - [`observability`]: Tracing subscriber setup
//!
//! # Concurrency model
//!
//! Single-threaded cooperative: all registry, session, and coordinator
//! operations execute on one logical UI-affinity context. The only suspension
//! points are waiting for the host's transition-completion notification
//! (before a pending queue drains) and waiting for the host's subtree-ready
//! notification (before a staged deep link delivers); both resume on the same
//! logical thread. Capability instances are `Rc` trait objects with interior
//! mutability — no locks, no `Send` bounds.
//!
//! # Bootstrap
//!
//! ```rust
//! use flowkit::app::{handle_event, HostEvent};
//! use flowkit::{initialize, Config};
//!
//! let config = Config::default();
//! let mut coordinator = initialize(&config);
//!
//! // The host replays events as they happen:
//! handle_event(&mut coordinator, &HostEvent::DeepLink("flowdemo://item/swiftui".into()))?;
//! handle_event(&mut coordinator, &HostEvent::LoginSucceeded)?;
//! handle_event(&mut coordinator, &HostEvent::SubtreeReady)?;
//! # Ok::<(), flowkit::FlowkitError>(())
//! ```

pub mod app;
pub mod capabilities;
pub mod domain;
pub mod nav;
pub mod observability;
pub mod registry;
pub mod session;

pub use app::{handle_event, FlowCoordinator, HostEvent};
pub use domain::{DeepLink, FlowkitError, Item, Result, TabId};
pub use nav::{NavStack, Screen, ScreenKind};
pub use registry::{CapabilityInstance, CapabilityKey, Registry};
pub use session::{DefaultSessionFactory, Flow, Session, SessionFactory};

use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use capabilities::{TracingLogger, TracingToast};

/// Host configuration for the coordinator core.
///
/// Parsed from a TOML file by the shim, or built in code by embedding hosts.
/// Every field has a default, so a missing or partial file is fine.
///
/// # Example
///
/// ```toml
/// start_flow = "login"
/// trace_level = "debug"
///
/// [[catalog]]
/// id = "swiftui"
/// title = "Declarative UI"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flow the coordinator boots into. Default: `login`.
    pub start_flow: Flow,

    /// Tracing level for the subscriber (`trace`, `debug`, `info`, `warn`,
    /// `error`). Overridden by `RUST_LOG`. Default: `"info"` at init time.
    pub trace_level: Option<String>,

    /// Item catalog served by the stub network capability.
    ///
    /// Deep links of the form `flowdemo://item/<id>` resolve against these
    /// ids. Default: the demo catalog.
    pub catalog: Vec<Item>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_flow: Flow::Login,
            trace_level: None,
            catalog: default_catalog(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as the
    /// config schema.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Applies simple key/value overrides on top of this config.
    ///
    /// Recognized keys: `start_flow` (`login`/`main`) and `trace_level`.
    /// Unrecognized keys and unparseable values are ignored with a debug log,
    /// leaving the existing value in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use flowkit::{Config, Flow};
    ///
    /// let mut overrides = BTreeMap::new();
    /// overrides.insert("start_flow".to_string(), "main".to_string());
    ///
    /// let config = Config::default().with_overrides(&overrides);
    /// assert_eq!(config.start_flow, Flow::Main);
    /// ```
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (key, value) in overrides {
            match key.as_str() {
                "start_flow" => match value.to_ascii_lowercase().as_str() {
                    "login" => self.start_flow = Flow::Login,
                    "main" => self.start_flow = Flow::Main,
                    other => {
                        tracing::debug!(value = %other, "unknown start_flow override ignored");
                    }
                },
                "trace_level" => self.trace_level = Some(value.clone()),
                other => tracing::debug!(key = %other, "unknown config override ignored"),
            }
        }
        self
    }
}

/// The demo catalog served when configuration supplies none.
#[must_use]
pub fn default_catalog() -> Vec<Item> {
    vec![
        Item::new("swiftui", "Declarative UI"),
        Item::new("combine", "Reactive Streams"),
        Item::new("concurrency", "Structured Concurrency"),
    ]
}

/// Bootstraps the coordinator core for a host.
///
/// Builds the registry (with composition-root fallbacks for the logging and
/// toast sinks, so degraded mode has somewhere to land), the default session
/// factory, and a started [`FlowCoordinator`] — the starting flow's session is
/// active and its subtree installed when this returns.
///
/// # Example
///
/// ```rust
/// use flowkit::{initialize, Config, Flow};
///
/// let coordinator = initialize(&Config::default());
/// assert_eq!(coordinator.flow(), Flow::Login);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> FlowCoordinator {
    tracing::debug!(start_flow = ?config.start_flow, "initializing coordinator core");

    let mut registry = Registry::new();
    registry.register_fallback(CapabilityInstance::Logger(Rc::new(TracingLogger)));
    registry.register_fallback(CapabilityInstance::Toast(Rc::new(TracingToast)));

    let factory = Box::new(DefaultSessionFactory::new(config.catalog.clone()));
    let mut coordinator = FlowCoordinator::new(registry, factory, config.start_flow);
    coordinator.start();
    coordinator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_boots_into_login() {
        let coordinator = initialize(&Config::default());
        assert_eq!(coordinator.flow(), Flow::Login);
        assert!(coordinator.login_coordinator().is_some());
    }

    #[test]
    fn overrides_change_the_start_flow() {
        let mut overrides = BTreeMap::new();
        overrides.insert("start_flow".to_string(), "main".to_string());
        overrides.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::default().with_overrides(&overrides);
        assert_eq!(config.start_flow, Flow::Main);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_override_values_fall_back_to_existing() {
        let mut overrides = BTreeMap::new();
        overrides.insert("start_flow".to_string(), "sideways".to_string());

        let config = Config::default().with_overrides(&overrides);
        assert_eq!(config.start_flow, Flow::Login);
    }

    #[test]
    fn config_parses_from_toml() {
        let text = r#"
            start_flow = "main"

            [[catalog]]
            id = "swiftui"
            title = "Declarative UI"
        "#;

        let config: Config = toml::from_str(text).expect("valid config");
        assert_eq!(config.start_flow, Flow::Main);
        assert_eq!(config.catalog.len(), 1);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("flowkit.toml");
        std::fs::write(&path, "start_flow = \"main\"\ncatalog = []\n").expect("write config");

        let config = Config::from_file(&path).expect("load config");
        assert_eq!(config.start_flow, Flow::Main);
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, FlowkitError::Io(_)));
    }
}
