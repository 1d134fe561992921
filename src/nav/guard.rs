//! Guarded navigation stack with a pending-action queue.
//!
//! [`NavStack`] provides navigation primitives that are safe to call from
//! anywhere, without the caller reasoning about whether a transition animation
//! is currently in flight. Each stack is a two-state machine:
//!
//! ```text
//! Idle ── any animated navigation call ──▶ Transitioning
//! Transitioning ── host reports completion ──▶ Idle (queue drains, may
//!                                              immediately re-enter Transitioning)
//! ```
//!
//! While transitioning, commands append to a FIFO pending queue instead of
//! mutating the stack. When the host delivers the platform's
//! transition-finished notification via [`NavStack::transition_completed`],
//! the queue snapshot drains in submission order, each command re-evaluated
//! against the then-current state — so a queued push may still be suppressed
//! by the duplicate check at drain time, and the first animated command in the
//! drain re-enters Transitioning, re-queueing whatever follows it.
//!
//! # Navigation races are not errors
//!
//! A command issued mid-transition is deferred, not failed. Redundant commands
//! (duplicate push of the same screen kind, re-presenting with a modal up,
//! dismissing with nothing presented) are logged no-ops — nothing here is
//! surfaced to the caller as a failure.

use std::collections::VecDeque;

use super::screen::Screen;

/// Completion callback for a dismiss, run once the dismissal (or its
/// short-circuit when nothing is presented) has happened.
pub type DismissCompletion = Box<dyn FnOnce()>;

/// A deferred navigation operation awaiting the end of the current transition.
pub enum NavCommand {
    Push(Screen),
    Pop,
    PopToRoot,
    Present(Screen),
    Dismiss { completion: Option<DismissCompletion> },
}

impl std::fmt::Debug for NavCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push(screen) => write!(f, "Push({screen:?})"),
            Self::Pop => write!(f, "Pop"),
            Self::PopToRoot => write!(f, "PopToRoot"),
            Self::Present(screen) => write!(f, "Present({screen:?})"),
            Self::Dismiss { completion } => {
                write!(f, "Dismiss {{ completion: {} }}", completion.is_some())
            }
        }
    }
}

/// One navigation context: a stack of screens, at most one presented modal,
/// and the pending-action queue guarding against in-flight transitions.
///
/// Every coordinator node that owns a navigation stack owns one of these and
/// delegates all actual navigation to it.
///
/// # Examples
///
/// ```
/// use flowkit::nav::{NavStack, Screen};
///
/// let mut nav = NavStack::new("home", Screen::Home);
/// nav.safe_push(Screen::Detail { item_id: "swiftui".into() });
/// assert!(nav.is_transitioning());
///
/// nav.transition_completed();
/// assert_eq!(nav.depth(), 2);
/// ```
#[derive(Debug)]
pub struct NavStack {
    /// Stack name for diagnostics (e.g. `"home"`).
    name: &'static str,
    stack: Vec<Screen>,
    presented: Option<Screen>,
    transitioning: bool,
    pending: VecDeque<NavCommand>,
    last_share: Option<String>,
}

impl NavStack {
    /// Creates a stack rooted at `root`. Installing the root does not animate.
    #[must_use]
    pub fn new(name: &'static str, root: Screen) -> Self {
        Self {
            name,
            stack: vec![root],
            presented: None,
            transitioning: false,
            pending: VecDeque::new(),
            last_share: None,
        }
    }

    /// True while a push/pop/present/dismiss animation is mid-flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Current stack depth (root included).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The screen on top of the stack.
    ///
    /// The stack always holds at least its root, so this never fails.
    #[must_use]
    pub fn top(&self) -> &Screen {
        self.stack
            .last()
            .unwrap_or_else(|| unreachable!("stack {:?} lost its root", self.name))
    }

    /// The screens on the stack, root first.
    #[must_use]
    pub fn screens(&self) -> &[Screen] {
        &self.stack
    }

    /// The currently presented modal, if any.
    #[must_use]
    pub fn presented(&self) -> Option<&Screen> {
        self.presented.as_ref()
    }

    /// Number of commands waiting for the current transition to settle.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Content handed to the most recent share surface, if any.
    #[must_use]
    pub fn last_share(&self) -> Option<&str> {
        self.last_share.as_deref()
    }

    /// Pushes a screen, unless a screen of the same kind is already on top.
    ///
    /// Deferred while transitioning. The duplicate check compares
    /// [`ScreenKind`](super::screen::ScreenKind) tags — logical identity, not
    /// payload equality — and is re-applied if the push runs later from the
    /// queue.
    pub fn safe_push(&mut self, screen: Screen) {
        if self.transitioning {
            self.enqueue(NavCommand::Push(screen));
            return;
        }

        if self.top().kind() == screen.kind() {
            tracing::debug!(
                stack = self.name,
                screen = ?screen.kind(),
                "duplicate push suppressed"
            );
            return;
        }

        tracing::debug!(stack = self.name, screen = ?screen, depth = self.stack.len() + 1, "push");
        self.stack.push(screen);
        self.begin_transition();
    }

    /// Pops the top screen. Deferred while transitioning; no-op at the root.
    pub fn safe_pop(&mut self) {
        if self.transitioning {
            self.enqueue(NavCommand::Pop);
            return;
        }

        if self.stack.len() <= 1 {
            tracing::debug!(stack = self.name, "pop at root ignored");
            return;
        }

        let popped = self.stack.pop();
        tracing::debug!(stack = self.name, popped = ?popped, "pop");
        self.begin_transition();
    }

    /// Pops every screen above the root. Deferred while transitioning; no-op
    /// when already at the root.
    pub fn safe_pop_to_root(&mut self) {
        if self.transitioning {
            self.enqueue(NavCommand::PopToRoot);
            return;
        }

        if self.stack.len() <= 1 {
            tracing::debug!(stack = self.name, "pop-to-root at root ignored");
            return;
        }

        tracing::debug!(stack = self.name, popped = self.stack.len() - 1, "pop to root");
        self.stack.truncate(1);
        self.begin_transition();
    }

    /// Presents a modal, unless one is already presented on this stack.
    ///
    /// Deferred while transitioning; the already-presented check is re-applied
    /// if the command runs later from the queue.
    pub fn safe_present(&mut self, screen: Screen) {
        if self.transitioning {
            self.enqueue(NavCommand::Present(screen));
            return;
        }

        if self.presented.is_some() {
            tracing::debug!(stack = self.name, screen = ?screen.kind(), "already presenting");
            return;
        }

        tracing::debug!(stack = self.name, screen = ?screen, "present");
        self.presented = Some(screen);
        self.begin_transition();
    }

    /// Dismisses the presented modal, then runs `completion`.
    ///
    /// If nothing is presented, the completion runs immediately and no
    /// transition starts. Deferred while transitioning, completion included.
    pub fn safe_dismiss(&mut self, completion: Option<DismissCompletion>) {
        if self.transitioning {
            self.enqueue(NavCommand::Dismiss { completion });
            return;
        }

        let Some(dismissed) = self.presented.take() else {
            tracing::debug!(stack = self.name, "nothing presented to dismiss");
            if let Some(completion) = completion {
                completion();
            }
            return;
        };

        tracing::debug!(stack = self.name, dismissed = ?dismissed, "dismiss");
        self.begin_transition();
        if let Some(completion) = completion {
            completion();
        }
    }

    /// Presents the system share surface for `content`.
    ///
    /// Platform affordance, not navigation: it does not touch the stack, the
    /// modal slot, or the transition state. The content is recorded so hosts
    /// and tests can observe what was shared.
    pub fn share(&mut self, content: &str) {
        tracing::debug!(stack = self.name, content = %content, "share surface presented");
        self.last_share = Some(content.to_string());
    }

    /// Platform notification that the in-flight transition finished.
    ///
    /// Moves the stack back to Idle and drains the pending queue snapshot in
    /// FIFO order. Each drained command goes back through its `safe_*` entry
    /// point, so suppression rules apply against the state at drain time, and
    /// the first command that animates re-enters Transitioning — anything
    /// behind it waits for the next completion.
    pub fn transition_completed(&mut self) {
        if !self.transitioning {
            tracing::debug!(stack = self.name, "spurious transition completion ignored");
            return;
        }

        self.transitioning = false;

        if self.pending.is_empty() {
            return;
        }

        let drained = std::mem::take(&mut self.pending);
        tracing::debug!(stack = self.name, drained = drained.len(), "draining pending queue");
        for command in drained {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Push(screen) => self.safe_push(screen),
            NavCommand::Pop => self.safe_pop(),
            NavCommand::PopToRoot => self.safe_pop_to_root(),
            NavCommand::Present(screen) => self.safe_present(screen),
            NavCommand::Dismiss { completion } => self.safe_dismiss(completion),
        }
    }

    fn enqueue(&mut self, command: NavCommand) {
        tracing::debug!(
            stack = self.name,
            command = ?command,
            queue_len = self.pending.len() + 1,
            "transition in flight, deferring"
        );
        self.pending.push_back(command);
    }

    fn begin_transition(&mut self) {
        self.transitioning = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn settled(nav: &mut NavStack) {
        // Settle every in-flight animation, including ones started by drains.
        while nav.is_transitioning() {
            nav.transition_completed();
        }
    }

    #[test]
    fn push_enters_transitioning_until_completion() {
        let mut nav = NavStack::new("home", Screen::Home);

        nav.safe_push(Screen::Profile);
        assert!(nav.is_transitioning());
        assert_eq!(nav.depth(), 2);

        nav.transition_completed();
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn commands_issued_mid_transition_run_in_fifo_order() {
        let mut nav = NavStack::new("home", Screen::Home);
        nav.safe_push(Screen::Items);

        nav.safe_push(Screen::Detail {
            item_id: "a".to_string(),
        });
        nav.safe_push(Screen::Profile);
        assert_eq!(nav.pending_len(), 2);
        assert_eq!(nav.depth(), 2);

        // First completion drains the queue; the Detail push animates, which
        // re-queues the Profile push for the next completion.
        nav.transition_completed();
        assert_eq!(
            nav.top(),
            &Screen::Detail {
                item_id: "a".to_string()
            }
        );
        assert_eq!(nav.pending_len(), 1);

        nav.transition_completed();
        assert_eq!(nav.top(), &Screen::Profile);
        assert_eq!(nav.pending_len(), 0);

        settled(&mut nav);
        assert_eq!(nav.depth(), 4);
    }

    #[test]
    fn duplicate_push_of_same_kind_is_suppressed() {
        let mut nav = NavStack::new("home", Screen::Home);
        nav.safe_push(Screen::Detail {
            item_id: "a".to_string(),
        });
        settled(&mut nav);
        assert_eq!(nav.depth(), 2);

        nav.safe_push(Screen::Detail {
            item_id: "b".to_string(),
        });
        assert_eq!(nav.depth(), 2);
        assert!(!nav.is_transitioning());
        assert_eq!(
            nav.top(),
            &Screen::Detail {
                item_id: "a".to_string()
            }
        );
    }

    #[test]
    fn duplicate_check_is_reapplied_at_drain_time() {
        let mut nav = NavStack::new("home", Screen::Home);
        nav.safe_push(Screen::Detail {
            item_id: "a".to_string(),
        });

        // Queued while the first Detail push animates; by drain time a Detail
        // screen is on top, so this must be suppressed.
        nav.safe_push(Screen::Detail {
            item_id: "b".to_string(),
        });
        assert_eq!(nav.pending_len(), 1);

        settled(&mut nav);
        assert_eq!(nav.depth(), 2);
        assert_eq!(
            nav.top(),
            &Screen::Detail {
                item_id: "a".to_string()
            }
        );
    }

    #[test]
    fn pop_at_root_is_a_no_op() {
        let mut nav = NavStack::new("home", Screen::Home);

        nav.safe_pop();
        assert_eq!(nav.depth(), 1);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn pop_to_root_clears_everything_above_the_root() {
        let mut nav = NavStack::new("home", Screen::Home);
        nav.safe_push(Screen::Items);
        settled(&mut nav);
        nav.safe_push(Screen::Detail {
            item_id: "a".to_string(),
        });
        settled(&mut nav);
        assert_eq!(nav.depth(), 3);

        nav.safe_pop_to_root();
        settled(&mut nav);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.top(), &Screen::Home);
    }

    #[test]
    fn presenting_over_a_presented_modal_is_a_no_op() {
        let mut nav = NavStack::new("home", Screen::Home);
        nav.safe_present(Screen::Profile);
        settled(&mut nav);
        assert_eq!(nav.presented(), Some(&Screen::Profile));

        nav.safe_present(Screen::Detail {
            item_id: "a".to_string(),
        });
        assert_eq!(nav.presented(), Some(&Screen::Profile));
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn dismiss_with_nothing_presented_runs_completion_immediately() {
        let mut nav = NavStack::new("home", Screen::Home);
        let ran = Rc::new(Cell::new(false));

        let flag = Rc::clone(&ran);
        nav.safe_dismiss(Some(Box::new(move || flag.set(true))));

        assert!(ran.get());
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn deferred_dismiss_keeps_its_completion() {
        let mut nav = NavStack::new("home", Screen::Home);
        nav.safe_present(Screen::Profile);

        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        nav.safe_dismiss(Some(Box::new(move || flag.set(true))));
        assert!(!ran.get());

        settled(&mut nav);
        assert!(ran.get());
        assert!(nav.presented().is_none());
    }

    #[test]
    fn spurious_completion_is_ignored() {
        let mut nav = NavStack::new("home", Screen::Home);
        nav.transition_completed();
        assert!(!nav.is_transitioning());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn share_records_content_without_touching_navigation() {
        let mut nav = NavStack::new("home", Screen::Home);
        nav.share("flowdemo://item/swiftui");

        assert_eq!(nav.last_share(), Some("flowdemo://item/swiftui"));
        assert!(!nav.is_transitioning());
        assert_eq!(nav.depth(), 1);
    }
}
