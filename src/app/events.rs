//! Host events driving the coordinator tree.
//!
//! Everything the outside world tells the core arrives as a [`HostEvent`]:
//! flow-transition triggers from screens, raw deep-link URIs from the URL-open
//! handler, and the platform's transition/readiness notifications. Events are
//! processed sequentially on the single logical UI thread by
//! [`handle_event`](super::handle_event).

use serde::{Deserialize, Serialize};

use super::flow::StackId;

/// An event delivered by the host to the coordinator core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostEvent {
    /// The login screen reported a successful authentication.
    LoginSucceeded,

    /// The user logged out (from settings or profile).
    LoggedOut,

    /// A deep-link URI arrived from the platform's URL-open handler.
    ///
    /// Carried raw: parsing happens in the handler, and a malformed URI is
    /// silently dropped rather than surfaced as an error.
    DeepLink(String),

    /// The platform reports that the addressed stack's transition animation
    /// finished. Drains that stack's pending-action queue.
    TransitionCompleted(StackId),

    /// The platform reports that a freshly installed root subtree has
    /// settled. Triggers delivery of a staged deep link, if any.
    SubtreeReady,
}
