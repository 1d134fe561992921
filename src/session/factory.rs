//! Session construction.
//!
//! The factory is the seam the composition root uses to decide which
//! registrations back each flow. It is a pure mapping: no side effects, no
//! memoization, a fresh session value per call.

use crate::domain::Item;

use super::sessions::{LoginSession, MainSession, Session};
use super::Flow;

/// Pure mapping from a flow to a fresh session instance.
///
/// Chosen once at startup by the composition root and handed to the flow
/// coordinator, which calls it on every flow transition.
pub trait SessionFactory {
    /// Returns a fresh session for the given flow.
    ///
    /// Implementations must be pure: same flow in, behaviorally equivalent
    /// (but not memoized) session out.
    fn make_session(&self, flow: Flow) -> Box<dyn Session>;
}

/// Default factory producing [`LoginSession`] and [`MainSession`].
#[derive(Debug, Clone)]
pub struct DefaultSessionFactory {
    catalog: Vec<Item>,
}

impl DefaultSessionFactory {
    /// Creates a factory whose sessions serve the given catalog through the
    /// network capability.
    #[must_use]
    pub fn new(catalog: Vec<Item>) -> Self {
        Self { catalog }
    }
}

impl SessionFactory for DefaultSessionFactory {
    fn make_session(&self, flow: Flow) -> Box<dyn Session> {
        match flow {
            Flow::Login => Box::new(LoginSession::new(self.catalog.clone())),
            Flow::Main => Box::new(MainSession::new(self.catalog.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_maps_each_flow_to_its_session() {
        let factory = DefaultSessionFactory::new(vec![]);

        assert_eq!(factory.make_session(Flow::Login).flow(), Flow::Login);
        assert_eq!(factory.make_session(Flow::Main).flow(), Flow::Main);
    }

    #[test]
    fn factory_returns_a_fresh_session_each_call() {
        let factory = DefaultSessionFactory::new(vec![]);

        let first = factory.make_session(Flow::Main);
        let second = factory.make_session(Flow::Main);
        assert!(!std::ptr::eq(first.as_ref(), second.as_ref()));
    }
}
