//! Host-event dispatch.
//!
//! This module implements the single entry point through which hosts drive the
//! coordinator: [`handle_event`] pattern-matches the event type and calls the
//! corresponding [`FlowCoordinator`] operation. It is the seam the binary shim
//! and the integration tests share.
//!
//! # Control flow
//!
//! 1. Events arrive from the host (screens, URL-open handler, platform)
//! 2. `handle_event` pattern-matches the event type
//! 3. Coordinator state mutates (flow transitions, navigation, routing)
//!
//! No event produces user-facing error UI from this core: malformed deep links
//! are dropped, redundant transitions and spurious notifications are logged
//! no-ops.

use crate::domain::{DeepLink, Result};

use super::events::HostEvent;
use super::flow::FlowCoordinator;

/// Processes one host event against the coordinator tree.
///
/// # Errors
///
/// Currently every event path resolves to a logged no-op or a state change;
/// the `Result` return is the seam's contract, kept so capability-backed
/// event paths can fail without changing every caller.
///
/// # Examples
///
/// ```
/// use flowkit::app::{handle_event, HostEvent};
/// use flowkit::{initialize, Config};
///
/// let mut coordinator = initialize(&Config::default());
/// handle_event(&mut coordinator, &HostEvent::LoginSucceeded)?;
/// handle_event(&mut coordinator, &HostEvent::SubtreeReady)?;
/// # Ok::<(), flowkit::FlowkitError>(())
/// ```
pub fn handle_event(coordinator: &mut FlowCoordinator, event: &HostEvent) -> Result<()> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        HostEvent::LoginSucceeded => {
            coordinator.transition_to_main();
            Ok(())
        }
        HostEvent::LoggedOut => {
            coordinator.transition_to_login();
            Ok(())
        }
        HostEvent::DeepLink(uri) => {
            match DeepLink::parse(uri) {
                Some(link) => coordinator.handle_deep_link(link),
                None => tracing::debug!(uri = %uri, "malformed deep link dropped"),
            }
            Ok(())
        }
        HostEvent::TransitionCompleted(stack) => {
            coordinator.transition_completed(*stack);
            Ok(())
        }
        HostEvent::SubtreeReady => {
            coordinator.subtree_ready();
            Ok(())
        }
    }
}
